//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose, --config) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dockerbuild::ConfigOverrides;

/// dockerbuild - resolve the directory a container build runs in
#[derive(Parser, Debug)]
#[command(name = "dockerbuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: nearest dockerbuild.toml, then user config)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the absolute directory the build should run in
    Resolve {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Show the effective configuration after all overrides
    Config {
        #[command(flatten)]
        paths: PathArgs,
    },
}

/// Per-invocation overrides for the `[deploy]` settings
#[derive(Args, Debug, Clone, Default)]
pub struct PathArgs {
    /// Deploy root on the target host (absolute)
    #[arg(long, value_name = "PATH")]
    pub deploy_to: Option<PathBuf>,

    /// Active release directory under the deploy root [default: current]
    #[arg(long, value_name = "NAME")]
    pub current_directory: Option<String>,

    /// Build directory: absolute, or relative to the current release
    #[arg(long, value_name = "DIR", allow_hyphen_values = true)]
    pub build_dir: Option<String>,
}

impl From<PathArgs> for ConfigOverrides {
    fn from(args: PathArgs) -> Self {
        Self {
            deploy_to: args.deploy_to,
            current_directory: args.current_directory,
            build_dir: args.build_dir,
        }
    }
}
