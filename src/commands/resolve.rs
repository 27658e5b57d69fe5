//! `resolve` command: print the build directory

use anyhow::Result;
use dockerbuild::{ConfigOverrides, PathResolver};

use super::CommandContext;
use crate::presentation::output::render_resolved;

/// Print the absolute directory the build should run in
pub fn cmd_resolve(ctx: &CommandContext, overrides: ConfigOverrides) -> Result<()> {
    let loaded = ctx.load_config(&overrides)?;
    let resolved = PathResolver::new().resolve_settings(&loaded.config)?;

    tracing::info!(origin = %resolved.origin(), path = %resolved, "build path resolved");
    render_resolved(
        &mut std::io::stdout().lock(),
        ctx.format(),
        &resolved,
        &loaded.config,
    )?;
    Ok(())
}
