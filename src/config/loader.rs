//! Configuration loading and layering

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{BuildPathError, BuildPathResult};

use super::env_validator::{closest_match, EnvVarValidator};
use super::types::{Config, Verbosity};

/// Project-level config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "dockerbuild.toml";

pub const ENV_DEPLOY_TO: &str = "DOCKERBUILD_DEPLOY_TO";
pub const ENV_CURRENT_DIRECTORY: &str = "DOCKERBUILD_CURRENT_DIRECTORY";
pub const ENV_BUILD_DIR: &str = "DOCKERBUILD_BUILD_DIR";
pub const ENV_VERBOSITY: &str = "DOCKERBUILD_VERBOSITY";

const KNOWN_KEYS: &[&str] = &[
    "deploy",
    "deploy_to",
    "current_directory",
    "build_dir",
    "output",
    "verbosity",
];

/// Keys older releases accepted, mapped to their replacement.
/// They are reported but never honored.
const LEGACY_KEYS: &[(&str, &str)] = &[("build_from", "build_dir")];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line of the first occurrence, if found
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Configuration together with where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration was read from; `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BuildPathResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BuildPathError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit file, else project config, else user config, else defaults.
///
/// The first file found wins; layers are not merged. A file that exists but
/// fails to parse is an error rather than a silent fallback.
pub fn load_layered(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
) -> BuildPathResult<LoadedConfig> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(BuildPathError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        return load_from(path);
    }

    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for candidate in candidates {
        if candidate.is_file() {
            return load_from(&candidate);
        }
        tracing::trace!(path = %candidate.display(), "config file not present");
    }

    tracing::debug!("no config file found, using defaults");
    Ok(LoadedConfig::default())
}

fn load_from(path: &Path) -> BuildPathResult<LoadedConfig> {
    tracing::debug!(path = %path.display(), "loading config");
    let (config, warnings) = load_with_warnings(path)?;
    Ok(LoadedConfig {
        config,
        source: Some(path.to_path_buf()),
        warnings,
    })
}

/// User config location: `$XDG_CONFIG_HOME/dockerbuild/config.toml`,
/// else `~/.config/dockerbuild/config.toml` on every platform.
pub fn user_config_path() -> Option<PathBuf> {
    user_config_path_from(
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        dirs::home_dir(),
    )
}

pub(crate) fn user_config_path_from(
    xdg_config_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    xdg_config_home
        .filter(|dir| dir.is_absolute())
        .or_else(|| home.map(|h| h.join(".config")))
        .map(|dir| dir.join("dockerbuild").join("config.toml"))
}

/// Apply environment variable overrides (DOCKERBUILD_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |name| std::env::var(name).ok(), &mut std::io::stderr())
}

/// Apply overrides read through `lookup`, writing validation warnings to `writer`.
///
/// An empty `DOCKERBUILD_BUILD_DIR` is kept as-is: it resolves like an
/// absent build directory, which lets the environment switch off a
/// configured override.
pub fn with_env_overrides_from<F, W>(mut config: Config, lookup: F, writer: &mut W) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    if let Some(deploy_to) = lookup(ENV_DEPLOY_TO).filter(|v| !v.trim().is_empty()) {
        config.deploy.deploy_to = Some(PathBuf::from(deploy_to.trim()));
    }

    if let Some(current) = lookup(ENV_CURRENT_DIRECTORY).filter(|v| !v.trim().is_empty()) {
        config.deploy.current_directory = current;
    }

    if let Some(build_dir) = lookup(ENV_BUILD_DIR) {
        config.deploy.build_dir = Some(build_dir);
    }

    if let Some(verbosity) = lookup(ENV_VERBOSITY) {
        let validator = EnvVarValidator::new(ENV_VERBOSITY, Verbosity::VALID_VALUES);
        config.output.verbosity = validator.parse_with_writer(
            &verbosity,
            Verbosity::parse,
            config.output.verbosity,
            writer,
        );
    }

    config
}

/// Line of the first `needle = ...` assignment, else of a `[...needle]` table header
pub(crate) fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    let assigns = |line: &str| {
        line.strip_prefix(needle)
            .is_some_and(|rest| rest.trim_start().starts_with('='))
    };
    let header = |line: &str| {
        line.strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .is_some_and(|table| table.rsplit('.').next() == Some(needle))
    };

    let position = |matches: &dyn Fn(&str) -> bool| {
        content
            .lines()
            .position(|line| matches(line.trim()))
            .map(|i| i + 1)
    };
    position(&assigns).or_else(|| position(&header))
}

fn suggest_key(unknown: &str) -> Option<String> {
    if let Some((_, replacement)) = LEGACY_KEYS.iter().find(|(legacy, _)| *legacy == unknown) {
        return Some((*replacement).to_string());
    }
    closest_match(unknown, KNOWN_KEYS).map(str::to_string)
}
