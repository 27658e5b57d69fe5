//! Build source value object
//!
//! The user-supplied `build_dir` override, classified once after trimming.

use std::fmt;
use std::path::{Path, PathBuf};

/// Where the build should run, as configured by the user.
///
/// Classification looks only at the first character of the trimmed value:
/// a leading `/` means absolute, anything else is relative to the current
/// release directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BuildSource {
    /// Used verbatim; deploy root and current directory are ignored
    Absolute(PathBuf),
    /// Joined beneath `deploy_root/current_directory`
    Relative(PathBuf),
}

impl BuildSource {
    /// Parse a raw configuration value.
    ///
    /// Returns `None` when the value is empty after trimming, so a blank
    /// setting falls back to the default build path.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return None;
        }

        if trimmed.starts_with('/') {
            Some(Self::Absolute(PathBuf::from(trimmed)))
        } else {
            Some(Self::Relative(PathBuf::from(trimmed)))
        }
    }

    pub fn as_path(&self) -> &Path {
        match self {
            Self::Absolute(path) | Self::Relative(path) => path,
        }
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self, Self::Absolute(_))
    }
}

impl fmt::Display for BuildSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_path().display())
    }
}
