//! Resolved build path - the resolver's output

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Which resolution rule produced a build path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildPathOrigin {
    /// No build source configured: `deploy_root/current_directory`
    Default,
    /// Absolute build source used verbatim
    Absolute,
    /// Relative build source joined beneath the current release
    Relative,
}

impl BuildPathOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Absolute => "absolute",
            Self::Relative => "relative",
        }
    }
}

impl fmt::Display for BuildPathOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Absolute directory in which a container build should run
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedBuildPath {
    path: PathBuf,
    origin: BuildPathOrigin,
}

impl ResolvedBuildPath {
    pub(crate) fn new(path: PathBuf, origin: BuildPathOrigin) -> Self {
        debug_assert!(path.has_root(), "resolved build path must be absolute");
        Self { path, origin }
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    pub fn origin(&self) -> BuildPathOrigin {
        self.origin
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl fmt::Display for ResolvedBuildPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl AsRef<Path> for ResolvedBuildPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl PartialEq<Path> for ResolvedBuildPath {
    fn eq(&self, other: &Path) -> bool {
        self.path == other
    }
}

impl PartialEq<&str> for ResolvedBuildPath {
    fn eq(&self, other: &&str) -> bool {
        self.path == Path::new(other)
    }
}
