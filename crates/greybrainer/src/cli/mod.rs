//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the greybrainer binary.

mod analyze;
mod commands;
mod config_cmd;
mod render;
mod usage;

pub use analyze::run_analyze;
pub use commands::{Cli, Commands, ConfigCommands};
pub use config_cmd::show_config;
pub use usage::handle_usage;
