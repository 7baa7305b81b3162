//! Command-line interface module.
//!
//! CLI structure and command handlers for the fabulist binary.

mod commands;
mod config;
mod tell;

pub use commands::{Cli, Commands, TellArgs};
pub use config::show_config;
pub use tell::run_tell;
