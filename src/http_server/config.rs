//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including bind address, CORS settings,
//! and the location of the observation database.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Server configuration, loadable from a JSON file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 5000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (empty = permissive, for development)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Path to the read-only observation database
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Number of pooled read connections
    #[serde(default = "default_read_pool_size")]
    pub read_pool_size: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_database_path() -> PathBuf {
    PathBuf::from("./hawaii.sqlite")
}

fn default_read_pool_size() -> usize {
    4
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            database_path: default_database_path(),
            read_pool_size: default_read_pool_size(),
        }
    }
}

impl ServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.read_pool_size, 4);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: ServerConfig =
            serde_json::from_str(r#"{"database_path": "/data/climate.sqlite"}"#).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/data/climate.sqlite"));
        assert_eq!(config.port, 5000);
    }
}
