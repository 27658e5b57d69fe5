//! Configuration module for dockerbuild
//!
//! Implements the configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DOCKERBUILD_*)
//! 3. Explicit `--config` file, else project config (./dockerbuild.toml)
//! 4. User config (~/.config/dockerbuild/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Only this layer reads files and the environment; the resolver receives
//! plain values through [`crate::domain::ports::DeploySettings`].

mod env_validator;
mod loader;
mod types;

pub use env_validator::{closest_match, levenshtein, EnvVarValidator};
pub use loader::{
    load_layered, user_config_path, with_env_overrides_from, ConfigWarning, LoadedConfig,
    ENV_BUILD_DIR, ENV_CURRENT_DIRECTORY, ENV_DEPLOY_TO, ENV_VERBOSITY, PROJECT_CONFIG_FILE,
};
pub use types::{Config, ConfigOverrides, DeployConfig, OutputConfig, Verbosity};
