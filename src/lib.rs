//! dockerbuild - build directory resolution for deploy pipelines
//!
//! A deploy framework runs a container image build once per deploy and needs
//! the absolute directory to run it in. This crate computes that directory
//! from the deploy root, the current release directory name, and an optional
//! `build_dir` override.
//!
//! ```
//! use std::path::Path;
//!
//! let resolved = dockerbuild::resolve_build_path(Path::new("/srv/app"), None, Some("src")).unwrap();
//! assert_eq!(resolved.as_path(), Path::new("/srv/app/current/src"));
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

// Re-exports for convenience
pub use config::{Config, ConfigOverrides, ConfigWarning, LoadedConfig, Verbosity};
pub use domain::ports::DeploySettings;
pub use domain::services::{resolve_build_path, PathResolver};
pub use domain::value_objects::{
    BuildPathOrigin, BuildSource, CurrentDirectoryName, DeployRoot, ResolvedBuildPath,
    DEFAULT_CURRENT_DIRECTORY,
};
pub use error::{BuildPathError, BuildPathResult};
