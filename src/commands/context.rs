//! Shared command context: global flags and config loading

use std::path::PathBuf;

use anyhow::{Context, Result};
use dockerbuild::{logging, Config, ConfigOverrides, LoadedConfig};

use super::project_root::discover_project_root;
use crate::presentation::output::{render_warnings, OutputFormat};

/// Global flags shared by every command
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    pub json: bool,
    pub verbose: u8,
    pub config_path: Option<PathBuf>,
}

impl CommandContext {
    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_json_flag(self.json)
    }

    /// Load config through every layer, then start logging at the resulting verbosity.
    ///
    /// Config warnings are printed to stderr; they never fail the command.
    pub fn load_config(&self, overrides: &ConfigOverrides) -> Result<LoadedConfig> {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        let project_root = discover_project_root(&cwd);

        let LoadedConfig {
            config,
            source,
            warnings,
        } = Config::load_layered(self.config_path.as_deref(), Some(project_root.as_path()))?;
        let config = config.with_env_overrides().with_overrides(overrides);

        logging::init(self.verbose, config.output.verbosity);
        // Config is read before the subscriber exists, so replay where it came from.
        match source.as_deref() {
            Some(path) => tracing::debug!(
                path = %path.display(),
                warnings = warnings.len(),
                "using config file"
            ),
            None => tracing::debug!("no config file found, using defaults"),
        }
        tracing::info!(
            source = %source
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "defaults".to_string()),
            project_root = %project_root.display(),
            "configuration loaded"
        );

        render_warnings(&mut std::io::stderr(), &warnings)?;

        Ok(LoadedConfig {
            config,
            source,
            warnings,
        })
    }
}
