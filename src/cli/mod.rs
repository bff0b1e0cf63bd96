//! CLI module for climate-api
//!
//! Provides the command-line interface:
//! - serve: load config, open the store, run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{load_config, run, run_command, serve};
pub use errors::{CliError, CliResult};
