//! Presentation Layer
//!
//! - `cli` - argument parsing (via clap)
//! - `output` - text/JSON rendering

pub mod cli;
pub mod output;
