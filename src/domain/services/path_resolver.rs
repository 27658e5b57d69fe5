//! Build path resolver
//!
//! Maps a deploy root, the current release directory name and an optional
//! build source to the absolute directory a container build runs in:
//!
//! 1. no build source: `deploy_root/current_directory`
//! 2. absolute build source: the trimmed value, verbatim
//! 3. relative build source: `deploy_root/current_directory/build_source`
//!
//! A build source that is blank after trimming counts as absent.

use std::path::Path;

use crate::domain::ports::DeploySettings;
use crate::domain::value_objects::{
    BuildPathOrigin, BuildSource, CurrentDirectoryName, DeployRoot, ResolvedBuildPath,
};
use crate::error::{BuildPathError, BuildPathResult};

/// Stateless build path resolver
#[derive(Debug, Clone, Copy, Default)]
pub struct PathResolver;

impl PathResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve from validated inputs. Total: every call yields an absolute path.
    pub fn resolve(
        &self,
        deploy_root: &DeployRoot,
        current_directory: &CurrentDirectoryName,
        build_source: Option<&BuildSource>,
    ) -> ResolvedBuildPath {
        match build_source {
            None => ResolvedBuildPath::new(
                deploy_root.as_path().join(current_directory.as_path()),
                BuildPathOrigin::Default,
            ),
            Some(BuildSource::Absolute(path)) => {
                ResolvedBuildPath::new(path.clone(), BuildPathOrigin::Absolute)
            }
            Some(BuildSource::Relative(path)) => ResolvedBuildPath::new(
                deploy_root
                    .as_path()
                    .join(current_directory.as_path())
                    .join(path),
                BuildPathOrigin::Relative,
            ),
        }
    }

    /// Resolve from any settings source, validating preconditions first.
    pub fn resolve_settings<S: DeploySettings + ?Sized>(
        &self,
        settings: &S,
    ) -> BuildPathResult<ResolvedBuildPath> {
        let deploy_root = settings
            .deploy_to()
            .ok_or(BuildPathError::MissingDeployRoot)?;
        resolve_build_path(deploy_root, settings.current_directory(), settings.build_dir())
    }
}

/// Validate raw values and resolve the build path.
///
/// `current_directory` of `None` uses the conventional `"current"`.
pub fn resolve_build_path(
    deploy_root: &Path,
    current_directory: Option<&str>,
    build_source: Option<&str>,
) -> BuildPathResult<ResolvedBuildPath> {
    let deploy_root = DeployRoot::new(deploy_root)?;
    let current_directory = match current_directory {
        Some(name) => CurrentDirectoryName::new(name)?,
        None => CurrentDirectoryName::default(),
    };
    let build_source = build_source.and_then(BuildSource::parse);

    let resolved = PathResolver.resolve(&deploy_root, &current_directory, build_source.as_ref());
    tracing::debug!(
        deploy_root = %deploy_root,
        current_directory = %current_directory,
        origin = %resolved.origin(),
        path = %resolved,
        "resolved build path"
    );
    Ok(resolved)
}
