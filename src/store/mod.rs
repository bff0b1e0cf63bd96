//! # Climate Store
//!
//! Read-only SQLite access for the climate-observation dataset.
//!
//! The dataset is populated externally and never written by this service, so
//! the layer holds a pool of read-only connections and exposes the canned
//! query shapes as typed-record methods on [`ClimateStore`].

pub mod climate;
pub mod error;
pub mod pool;
pub mod records;

pub use climate::ClimateStore;
pub use error::{StoreError, StoreResult};
pub use pool::ReadPool;
pub use records::{
    PrecipitationRecord, StationActivity, StationRecord, TemperatureStats, TobsRecord,
};
