//! dockerbuild CLI
//!
//! Usage: dockerbuild <COMMAND>
//!
//! Commands:
//!   resolve  Print the absolute directory the build should run in
//!   config   Show the effective configuration

mod commands;
mod presentation;

use anyhow::Result;
use clap::Parser;

use commands::{cmd_config, cmd_resolve, CommandContext};
use presentation::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let ctx = CommandContext {
        json: cli.json,
        verbose: cli.verbose,
        config_path: cli.config,
    };

    match cli.command {
        Commands::Resolve { paths } => cmd_resolve(&ctx, paths.into()),
        Commands::Config { paths } => cmd_config(&ctx, paths.into()),
    }
}
