//! # HTTP Server
//!
//! Axum server wiring the climate routes with CORS and request tracing.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::store::ClimateStore;

use super::climate_routes::{climate_routes, ClimateState};
use super::config::ServerConfig;

/// HTTP server for the climate API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new server over an opened store
    pub fn new(config: ServerConfig, store: ClimateStore) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the router with CORS and tracing layers
    fn build_router(config: &ServerConfig, store: ClimateStore) -> Router {
        let state = Arc::new(ClimateState::new(store));

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        climate_routes(state)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        info!(%addr, "starting climate API server");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> ClimateStore {
        let path = dir.path().join("climate.sqlite");
        Connection::open(&path)
            .unwrap()
            .execute_batch(
                "CREATE TABLE measurement (station TEXT, date TEXT, prcp FLOAT, tobs FLOAT);
                 CREATE TABLE station (station TEXT, name TEXT, latitude FLOAT, longitude FLOAT, elevation FLOAT);",
            )
            .unwrap();
        ClimateStore::open(&path, 1).unwrap()
    }

    #[test]
    fn test_server_creation() {
        let dir = TempDir::new().unwrap();
        let server = HttpServer::new(ServerConfig::default(), test_store(&dir));
        assert_eq!(server.socket_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let dir = TempDir::new().unwrap();
        let server = HttpServer::new(ServerConfig::with_port(8080), test_store(&dir));
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds() {
        let dir = TempDir::new().unwrap();
        let server = HttpServer::new(ServerConfig::default(), test_store(&dir));
        let _router = server.router();
        // If we get here, router construction succeeded
    }
}
