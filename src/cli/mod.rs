//! CLI command handling module
//!
//! Handles argument parsing and the config subcommands.

mod args;
mod config;
mod logging;

pub use args::{Args, Command, ConfigSubcommand};
pub use config::handle_config_command;
pub use logging::init_logging;
