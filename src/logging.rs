//! Diagnostic logging setup
//!
//! Diagnostics go to stderr through `tracing`, leaving stdout for the
//! resolved path so host frameworks can capture it directly.

use std::io::IsTerminal;

use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::Verbosity;

/// Filter directive for a `-v` count combined with the configured verbosity.
///
/// The louder of the two wins.
pub fn filter_directive(verbose: u8, configured: Verbosity) -> String {
    let from_flags = match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    };
    let configured_level = configured.level_directive();

    let level = match from_flags {
        Some(level) if rank(level) > rank(configured_level) => level,
        _ => configured_level,
    };
    format!("warn,dockerbuild={level}")
}

fn rank(level: &str) -> u8 {
    match level {
        "error" => 0,
        "warn" => 1,
        "info" => 2,
        "debug" => 3,
        _ => 4,
    }
}

/// Install the global subscriber. `RUST_LOG`, when set, replaces the computed filter.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbose: u8, configured: Verbosity) {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(filter_directive(verbose, configured)));

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_filter(env_filter),
        )
        .try_init();
}
