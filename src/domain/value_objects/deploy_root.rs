//! Deploy root value object
//!
//! The top-level directory of a deployment tree. Always absolute.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{BuildPathError, BuildPathResult};

/// A validated, absolute deploy root.
///
/// A root is required rather than `Path::is_absolute` so that POSIX
/// deploy trees (`/srv/app`) validate the same way on every host OS.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeployRoot(PathBuf);

impl DeployRoot {
    /// Create a new DeployRoot after validation
    pub fn new<P: AsRef<Path>>(path: P) -> BuildPathResult<Self> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(BuildPathError::DeployRootEmpty);
        }

        if !path.has_root() {
            return Err(BuildPathError::DeployRootNotAbsolute {
                path: path.to_path_buf(),
            });
        }

        Ok(Self(path.to_path_buf()))
    }

    /// Get the inner path
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for DeployRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for DeployRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<&str> for DeployRoot {
    type Error = BuildPathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<PathBuf> for DeployRoot {
    type Error = BuildPathError;

    fn try_from(value: PathBuf) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_absolute() {
        let root = DeployRoot::new("/srv/app").unwrap();
        assert_eq!(root.as_path(), Path::new("/srv/app"));
    }

    #[test]
    fn accepts_trailing_separator() {
        let root = DeployRoot::new("/srv/app/").unwrap();
        assert_eq!(root.as_path().join("current"), Path::new("/srv/app/current"));
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            DeployRoot::new(""),
            Err(BuildPathError::DeployRootEmpty)
        ));
    }

    #[test]
    fn rejects_relative() {
        let result = DeployRoot::new("srv/app");
        assert!(matches!(
            result,
            Err(BuildPathError::DeployRootNotAbsolute { path }) if path == Path::new("srv/app")
        ));
    }

    #[test]
    fn try_from_str() {
        let root: DeployRoot = "/var/www".try_into().unwrap();
        assert_eq!(root.to_string(), "/var/www");
    }

    #[test]
    fn try_from_path_buf() {
        let root = DeployRoot::try_from(PathBuf::from("/srv/app")).unwrap();
        assert_eq!(root.as_path(), Path::new("/srv/app"));

        let result = DeployRoot::try_from(PathBuf::from("relative/app"));
        assert!(matches!(result, Err(BuildPathError::DeployRootNotAbsolute { .. })));
    }
}
