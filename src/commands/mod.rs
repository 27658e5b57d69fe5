//! Command entry points

mod config;
mod context;
mod project_root;
mod resolve;

pub use config::cmd_config;
pub use context::CommandContext;
pub use resolve::cmd_resolve;
