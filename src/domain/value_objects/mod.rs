//! Domain Value Objects
//!
//! Immutable value types constructed from configuration at invocation time.

mod build_source;
mod current_directory;
mod deploy_root;
mod resolved_build_path;

pub use build_source::BuildSource;
pub use current_directory::{CurrentDirectoryName, DEFAULT_CURRENT_DIRECTORY};
pub use deploy_root::DeployRoot;
pub use resolved_build_path::{BuildPathOrigin, ResolvedBuildPath};
