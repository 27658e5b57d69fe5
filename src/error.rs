//! Error types for dockerbuild
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for build path operations
pub type BuildPathResult<T> = Result<T, BuildPathError>;

/// Main error type for build path resolution and configuration
#[derive(Error, Debug)]
pub enum BuildPathError {
    /// Deploy root was given as an empty string
    #[error("deploy root is empty - set `deploy.deploy_to` to an absolute path")]
    DeployRootEmpty,

    /// Deploy root is relative; builds need an absolute working directory
    #[error("deploy root '{path}' is not absolute")]
    DeployRootNotAbsolute { path: PathBuf },

    /// No layer supplied a deploy root
    #[error("no deploy root configured - pass --deploy-to, set DOCKERBUILD_DEPLOY_TO, or add `deploy_to` under [deploy]")]
    MissingDeployRoot,

    /// Current directory name is empty after trimming
    #[error("current directory name is empty")]
    CurrentDirectoryEmpty,

    /// Current directory name must stay below the deploy root
    #[error("current directory name '{name}' must be a relative path")]
    CurrentDirectoryAbsolute { name: String },

    /// Explicitly requested configuration file does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_absolute() {
        let err = BuildPathError::DeployRootNotAbsolute {
            path: PathBuf::from("srv/app"),
        };
        assert_eq!(err.to_string(), "deploy root 'srv/app' is not absolute");
    }

    #[test]
    fn test_error_display_current_directory_absolute() {
        let err = BuildPathError::CurrentDirectoryAbsolute {
            name: "/current".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "current directory name '/current' must be a relative path"
        );
    }

    #[test]
    fn test_error_display_invalid_config() {
        let err = BuildPathError::InvalidConfig {
            file: PathBuf::from("dockerbuild.toml"),
            message: "expected `=`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config in dockerbuild.toml: expected `=`"
        );
    }
}
