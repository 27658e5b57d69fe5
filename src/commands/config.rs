//! `config` command: show the effective configuration

use anyhow::Result;
use dockerbuild::ConfigOverrides;

use super::CommandContext;
use crate::presentation::output::render_config;

/// Show the effective configuration after all overrides
pub fn cmd_config(ctx: &CommandContext, overrides: ConfigOverrides) -> Result<()> {
    let loaded = ctx.load_config(&overrides)?;
    render_config(
        &mut std::io::stdout().lock(),
        ctx.format(),
        &loaded.config,
        loaded.source.as_deref(),
    )?;
    Ok(())
}
