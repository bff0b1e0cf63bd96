//! climate-api - Read-only HTTP JSON API over a fixed climate-observation dataset

pub mod cli;
pub mod http_server;
pub mod store;
