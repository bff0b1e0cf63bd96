//! Typed row records for the two tables and the canned aggregates.

use serde::Serialize;

/// One (date, precipitation) measurement row.
///
/// Precipitation is nullable in the source data; dates are opaque
/// `YYYY-MM-DD` strings compared lexically, never parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecipitationRecord {
    pub date: String,
    pub prcp: Option<f64>,
}

/// Static metadata for one observation site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationRecord {
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// One (date, temperature) measurement row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TobsRecord {
    pub date: String,
    pub tobs: f64,
}

/// Observation count for one station.
#[derive(Debug, Clone, PartialEq)]
pub struct StationActivity {
    pub station: String,
    pub observation_count: i64,
}

/// Min/max/avg temperature over a filtered date range.
///
/// All fields are `None` when no rows match the filter; the aggregate query
/// still yields exactly one row in that case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_record_serializes_five_fields() {
        let record = StationRecord {
            station: "USC00519281".to_string(),
            name: "WAIHEE 837.5, HI US".to_string(),
            latitude: 21.45167,
            longitude: -157.84889,
            elevation: 32.9,
        };

        let json = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 5);
        assert_eq!(object["station"], "USC00519281");
        assert_eq!(object["elevation"], 32.9);
    }

    #[test]
    fn test_tobs_record_serialization() {
        let record = TobsRecord {
            date: "2017-01-05".to_string(),
            tobs: 58.0,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2017-01-05");
        assert_eq!(json["tobs"], 58.0);
    }
}
