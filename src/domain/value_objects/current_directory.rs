//! Current directory name value object

use std::fmt;
use std::path::Path;

use crate::error::{BuildPathError, BuildPathResult};

/// Conventional name of the active release link under the deploy root
pub const DEFAULT_CURRENT_DIRECTORY: &str = "current";

/// Relative path naming the active release within a deploy root.
///
/// May span several segments (`releases/20240101`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrentDirectoryName(String);

impl CurrentDirectoryName {
    /// Create a new CurrentDirectoryName, trimming surrounding whitespace
    pub fn new(name: &str) -> BuildPathResult<Self> {
        let name = name.trim();

        if name.is_empty() {
            return Err(BuildPathError::CurrentDirectoryEmpty);
        }

        if name.starts_with('/') || Path::new(name).has_root() {
            return Err(BuildPathError::CurrentDirectoryAbsolute {
                name: name.to_string(),
            });
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl Default for CurrentDirectoryName {
    fn default() -> Self {
        Self(DEFAULT_CURRENT_DIRECTORY.to_string())
    }
}

impl fmt::Display for CurrentDirectoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for CurrentDirectoryName {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}
