//! CLI argument definitions using clap
//!
//! Commands:
//! - climate-api serve --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// climate-api - Read-only HTTP JSON API over a climate-observation dataset
#[derive(Parser, Debug)]
#[command(name = "climate-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the API server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./climate-api.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
