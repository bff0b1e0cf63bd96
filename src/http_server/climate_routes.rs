//! Climate API Routes
//!
//! The six read-only GET endpoints over the observation dataset.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tokio::task;

use crate::store::{ClimateStore, StationRecord, StoreResult, TemperatureStats, TobsRecord};

use super::errors::{ApiError, ApiResult};

/// Fixed cutoff for the temperature-observations route. Hardcoded upstream;
/// intentionally not derived from the dataset's most recent date.
pub const TOBS_CUTOFF_DATE: &str = "2016-08-23";

// ==================
// Shared State
// ==================

/// Climate state shared across handlers
pub struct ClimateState {
    pub store: ClimateStore,
}

impl ClimateState {
    pub fn new(store: ClimateStore) -> Self {
        Self { store }
    }
}

// ==================
// Response Types
// ==================

/// Min/max/avg temperature stats.
///
/// The `_date` key suffix is misleading but is part of the published
/// contract; the values are temperatures. All fields are null when no rows
/// match the range.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub min_date: Option<f64>,
    pub max_date: Option<f64>,
    pub avg_date: Option<f64>,
}

impl From<TemperatureStats> for StatsResponse {
    fn from(stats: TemperatureStats) -> Self {
        Self {
            min_date: stats.min,
            max_date: stats.max,
            avg_date: stats.avg,
        }
    }
}

// ==================
// Climate Routes
// ==================

/// Create the climate API routes
pub fn climate_routes(state: Arc<ClimateState>) -> Router {
    Router::new()
        .route("/", get(list_routes_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/:start", get(stats_from_handler))
        .route("/api/v1.0/:start/:end", get(stats_range_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Run a blocking store call off the async executor.
async fn run_query<T, F>(f: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> StoreResult<T> + Send + 'static,
{
    task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(ApiError::from)
}

// ==================
// Handlers
// ==================

/// Static listing of the available API paths
async fn list_routes_handler() -> &'static str {
    "Available Routes:\n\
     /api/v1.0/precipitation\n\
     /api/v1.0/stations\n\
     /api/v1.0/tobs\n\
     /api/v1.0/<start>\n\
     /api/v1.0/<start>/<end>\n"
}

/// Every (date, prcp) pair as a single-key object.
///
/// Duplicate dates across stations each keep their own entry; merging them
/// would change the published row count.
async fn precipitation_handler(
    State(state): State<Arc<ClimateState>>,
) -> ApiResult<Json<Vec<Value>>> {
    let store = state.store.clone();
    let records = run_query(move || store.precipitation()).await?;

    let entries = records
        .into_iter()
        .map(|record| {
            let mut entry = Map::with_capacity(1);
            entry.insert(record.date, record.prcp.map_or(Value::Null, Value::from));
            Value::Object(entry)
        })
        .collect();

    Ok(Json(entries))
}

/// Every station metadata row
async fn stations_handler(
    State(state): State<Arc<ClimateState>>,
) -> ApiResult<Json<Vec<StationRecord>>> {
    let store = state.store.clone();
    let records = run_query(move || store.stations()).await?;
    Ok(Json(records))
}

/// Temperatures for the most-active station after the fixed cutoff.
///
/// An empty measurement table has no most-active station; that case returns
/// an empty array rather than an error.
async fn tobs_handler(
    State(state): State<Arc<ClimateState>>,
) -> ApiResult<Json<Vec<TobsRecord>>> {
    let store = state.store.clone();
    let records = run_query(move || {
        let Some(most_active) = store.most_active_station()? else {
            return Ok(Vec::new());
        };
        store.temperature_observations(&most_active.station, TOBS_CUTOFF_DATE)
    })
    .await?;

    Ok(Json(records))
}

/// Temperature stats with one lower bound.
///
/// `start` is passed through as a raw string and compared lexically against
/// the TEXT date column; no validation is performed.
async fn stats_from_handler(
    State(state): State<Arc<ClimateState>>,
    Path(start): Path<String>,
) -> ApiResult<Json<StatsResponse>> {
    let store = state.store.clone();
    let stats = run_query(move || store.temperature_stats_from(&start)).await?;
    Ok(Json(stats.into()))
}

/// Temperature stats bounded on both sides
async fn stats_range_handler(
    State(state): State<Arc<ClimateState>>,
    Path((start, end)): Path<(String, String)>,
) -> ApiResult<Json<StatsResponse>> {
    let store = state.store.clone();
    let stats = run_query(move || store.temperature_stats_range(&start, &end)).await?;
    Ok(Json(stats.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_response_key_names() {
        let stats = TemperatureStats {
            min: Some(58.0),
            max: Some(87.0),
            avg: Some(73.5),
        };

        let json = serde_json::to_value(StatsResponse::from(stats)).unwrap();
        assert_eq!(json["min_date"], 58.0);
        assert_eq!(json["max_date"], 87.0);
        assert_eq!(json["avg_date"], 73.5);
    }

    #[test]
    fn test_stats_response_null_fields() {
        let stats = TemperatureStats {
            min: None,
            max: None,
            avg: None,
        };

        let json = serde_json::to_value(StatsResponse::from(stats)).unwrap();
        assert!(json["min_date"].is_null());
        assert!(json["max_date"].is_null());
        assert!(json["avg_date"].is_null());
    }

    #[tokio::test]
    async fn test_route_listing_names_every_path() {
        let listing = list_routes_handler().await;
        for path in [
            "/api/v1.0/precipitation",
            "/api/v1.0/stations",
            "/api/v1.0/tobs",
            "/api/v1.0/<start>",
            "/api/v1.0/<start>/<end>",
        ] {
            assert!(listing.contains(path));
        }
    }
}
