//! Canned queries over the observation dataset.
//!
//! Five query shapes: two full scans, a grouped count, a filtered range scan,
//! and the min/max/avg aggregate with one or two date bounds. Dates are TEXT
//! columns, so every bound is a lexical string comparison.

use std::path::Path;
use std::sync::Arc;

use rusqlite::params;
use tracing::debug;

use super::error::StoreResult;
use super::pool::ReadPool;
use super::records::{
    PrecipitationRecord, StationActivity, StationRecord, TemperatureStats, TobsRecord,
};

/// Handle over the read pool exposing the canned climate queries.
///
/// Cheap to clone; each route handler receives its own handle rather than
/// going through a process-wide singleton.
#[derive(Clone)]
pub struct ClimateStore {
    pool: Arc<ReadPool>,
}

impl ClimateStore {
    /// Open the dataset at `path` with `pool_size` read connections.
    pub fn open(path: &Path, pool_size: usize) -> StoreResult<Self> {
        Ok(Self {
            pool: Arc::new(ReadPool::open(path, pool_size)?),
        })
    }

    /// Every (date, prcp) pair in the measurement table, in store order.
    pub fn precipitation(&self) -> StoreResult<Vec<PrecipitationRecord>> {
        let conn = self.pool.connection()?;
        let mut stmt = conn.prepare("SELECT date, prcp FROM measurement")?;
        let rows = stmt.query_map([], |row| {
            Ok(PrecipitationRecord {
                date: row.get(0)?,
                prcp: row.get(1)?,
            })
        })?;

        let records = rows.collect::<Result<Vec<_>, _>>()?;
        debug!(rows = records.len(), "precipitation scan");
        Ok(records)
    }

    /// Every station metadata row.
    pub fn stations(&self) -> StoreResult<Vec<StationRecord>> {
        let conn = self.pool.connection()?;
        let mut stmt = conn
            .prepare("SELECT station, name, latitude, longitude, elevation FROM station")?;
        let rows = stmt.query_map([], |row| {
            Ok(StationRecord {
                station: row.get(0)?,
                name: row.get(1)?,
                latitude: row.get(2)?,
                longitude: row.get(3)?,
                elevation: row.get(4)?,
            })
        })?;

        let records = rows.collect::<Result<Vec<_>, _>>()?;
        debug!(rows = records.len(), "station scan");
        Ok(records)
    }

    /// The station with the highest observation count, or `None` on an empty
    /// table.
    ///
    /// Ties between equal counts fall to whichever row SQLite yields first;
    /// the upstream contract leaves that order unspecified.
    pub fn most_active_station(&self) -> StoreResult<Option<StationActivity>> {
        let conn = self.pool.connection()?;
        let mut stmt = conn.prepare(
            "SELECT station, COUNT(station) AS observation_count \
             FROM measurement GROUP BY station ORDER BY observation_count DESC",
        )?;
        let mut rows = stmt.query_map([], |row| {
            Ok(StationActivity {
                station: row.get(0)?,
                observation_count: row.get(1)?,
            })
        })?;

        rows.next().transpose().map_err(Into::into)
    }

    /// (date, tobs) pairs for one station with date strictly after `cutoff`.
    pub fn temperature_observations(
        &self,
        station: &str,
        cutoff: &str,
    ) -> StoreResult<Vec<TobsRecord>> {
        let conn = self.pool.connection()?;
        let mut stmt = conn
            .prepare("SELECT date, tobs FROM measurement WHERE station = ?1 AND date > ?2")?;
        let rows = stmt.query_map(params![station, cutoff], |row| {
            Ok(TobsRecord {
                date: row.get(0)?,
                tobs: row.get(1)?,
            })
        })?;

        let records = rows.collect::<Result<Vec<_>, _>>()?;
        debug!(station, cutoff, rows = records.len(), "tobs scan");
        Ok(records)
    }

    /// Min/max/avg temperature over dates strictly after `start`.
    pub fn temperature_stats_from(&self, start: &str) -> StoreResult<TemperatureStats> {
        let conn = self.pool.connection()?;
        conn.query_row(
            "SELECT MIN(tobs), MAX(tobs), AVG(tobs) FROM measurement WHERE date > ?1",
            params![start],
            Self::stats_row,
        )
        .map_err(Into::into)
    }

    /// Same aggregate with an added `date < end` bound.
    pub fn temperature_stats_range(&self, start: &str, end: &str) -> StoreResult<TemperatureStats> {
        let conn = self.pool.connection()?;
        conn.query_row(
            "SELECT MIN(tobs), MAX(tobs), AVG(tobs) FROM measurement \
             WHERE date > ?1 AND date < ?2",
            params![start, end],
            Self::stats_row,
        )
        .map_err(Into::into)
    }

    // The aggregate always yields exactly one row; over an empty set every
    // column is NULL, which maps onto the Option fields.
    fn stats_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<TemperatureStats> {
        Ok(TemperatureStats {
            min: row.get(0)?,
            max: row.get(1)?,
            avg: row.get(2)?,
        })
    }
}
