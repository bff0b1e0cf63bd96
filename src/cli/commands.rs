//! CLI command implementations

use std::fs;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, ServerConfig};
use crate::store::ClimateStore;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config } => serve(&config),
    }
}

/// Load configuration from file, falling back to defaults when absent
pub fn load_config(path: &Path) -> CliResult<ServerConfig> {
    if !path.exists() {
        return Ok(ServerConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    let config: ServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    Ok(config)
}

/// Start the API server
///
/// Startup sequence:
/// 1. Tracing init
/// 2. Configuration load
/// 3. Store open (read-only pool)
/// 4. HTTP server bind and serve
pub fn serve(config_path: &Path) -> CliResult<()> {
    init_tracing();

    let config = load_config(config_path)?;

    let store = ClimateStore::open(&config.database_path, config.read_pool_size)
        .map_err(|e| CliError::boot_failed(e.to_string()))?;
    info!(
        database = %config.database_path.display(),
        pool_size = config.read_pool_size,
        "opened observation store"
    );

    let server = HttpServer::new(config, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
