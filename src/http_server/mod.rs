//! # Climate API HTTP Server Module
//!
//! Axum-based HTTP surface for the read-only climate routes.
//!
//! # Endpoints
//!
//! - `/` - route listing (plain text)
//! - `/api/v1.0/precipitation` - all date/precipitation pairs
//! - `/api/v1.0/stations` - all station metadata
//! - `/api/v1.0/tobs` - temperatures for the most-active station
//! - `/api/v1.0/{start}` - temperature stats from a date
//! - `/api/v1.0/{start}/{end}` - temperature stats in a date range

pub mod climate_routes;
pub mod config;
pub mod errors;
pub mod server;

pub use config::ServerConfig;
pub use server::HttpServer;
