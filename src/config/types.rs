//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::ports::DeploySettings;
use crate::domain::value_objects::DEFAULT_CURRENT_DIRECTORY;
use crate::error::BuildPathResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Deploy tree configuration (`[deploy]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Root of the deployment tree on the target host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deploy_to: Option<PathBuf>,

    /// Name of the active release directory under `deploy_to`
    #[serde(default = "default_current_directory")]
    pub current_directory: String,

    /// Build directory override, absolute or relative to the current release
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_dir: Option<String>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            deploy_to: None,
            current_directory: default_current_directory(),
            build_dir: None,
        }
    }
}

fn default_current_directory() -> String {
    DEFAULT_CURRENT_DIRECTORY.to_string()
}

/// Output configuration (`[output]`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Diagnostic verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub const VALID_VALUES: &'static [&'static str] = &["quiet", "normal", "verbose", "debug"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Some(Self::Quiet),
            "normal" => Some(Self::Normal),
            "verbose" => Some(Self::Verbose),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }

    /// `tracing` level directive for this verbosity
    pub fn level_directive(&self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BuildPathResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BuildPathResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, project config, user config, or defaults
    pub fn load_layered(
        explicit: Option<&Path>,
        project_root: Option<&Path>,
    ) -> BuildPathResult<LoadedConfig> {
        loader::load_layered(explicit, project_root)
    }

    /// Apply environment variable overrides (DOCKERBUILD_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Apply command-line overrides, which take precedence over everything else
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(deploy_to) = &overrides.deploy_to {
            self.deploy.deploy_to = Some(deploy_to.clone());
        }
        if let Some(current_directory) = &overrides.current_directory {
            self.deploy.current_directory = current_directory.clone();
        }
        if let Some(build_dir) = &overrides.build_dir {
            self.deploy.build_dir = Some(build_dir.clone());
        }
        self
    }
}

impl DeploySettings for Config {
    fn deploy_to(&self) -> Option<&Path> {
        self.deploy.deploy_to.as_deref()
    }

    fn current_directory(&self) -> Option<&str> {
        Some(self.deploy.current_directory.as_str())
    }

    fn build_dir(&self) -> Option<&str> {
        self.deploy.build_dir.as_deref()
    }
}

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub deploy_to: Option<PathBuf>,
    pub current_directory: Option<String>,
    pub build_dir: Option<String>,
}
