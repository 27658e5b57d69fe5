//! Output Rendering
//!
//! Text output is minimal so host frameworks can capture stdout verbatim;
//! JSON output carries the inputs and the rule that produced the path.

use std::io::{self, Write};
use std::path::Path;

use dockerbuild::{BuildPathOrigin, Config, ConfigWarning, ResolvedBuildPath};
use serde::Serialize;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

#[derive(Serialize)]
struct ResolveReport<'a> {
    path: &'a Path,
    origin: BuildPathOrigin,
    deploy_to: Option<&'a Path>,
    current_directory: &'a str,
    build_dir: Option<&'a str>,
}

#[derive(Serialize)]
struct ConfigReport<'a> {
    source: Option<&'a Path>,
    config: &'a Config,
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Render a resolved build path
pub fn render_resolved<W: Write>(
    out: &mut W,
    format: OutputFormat,
    resolved: &ResolvedBuildPath,
    config: &Config,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", resolved),
        OutputFormat::Json => write_json(
            out,
            &ResolveReport {
                path: resolved.as_path(),
                origin: resolved.origin(),
                deploy_to: config.deploy.deploy_to.as_deref(),
                current_directory: &config.deploy.current_directory,
                build_dir: config.deploy.build_dir.as_deref(),
            },
        ),
    }
}

/// Render the effective configuration
pub fn render_config<W: Write>(
    out: &mut W,
    format: OutputFormat,
    config: &Config,
    source: Option<&Path>,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            match source {
                Some(path) => writeln!(out, "# loaded from {}", path.display())?,
                None => writeln!(out, "# built-in defaults")?,
            }
            let rendered = toml::to_string_pretty(config)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            write!(out, "{}", rendered)
        }
        OutputFormat::Json => write_json(out, &ConfigReport { source, config }),
    }
}

/// Render config warnings, one per line
pub fn render_warnings<W: Write>(out: &mut W, warnings: &[ConfigWarning]) -> io::Result<()> {
    for warning in warnings {
        writeln!(out, "Warning: {}", warning)?;
    }
    Ok(())
}
