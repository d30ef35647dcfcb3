use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

use super::filter::FilterCriteria;
use super::model::{OptionalColumns, Trip, TripTable};

const START_TIME: &str = "Start Time";
const START_STATION: &str = "Start Station";
const END_STATION: &str = "End Station";
const TRIP_DURATION: &str = "Trip Duration";
const USER_TYPE: &str = "User Type";
const GENDER: &str = "Gender";
const BIRTH_YEAR: &str = "Birth Year";

const REQUIRED_COLUMNS: [&str; 4] = [START_TIME, START_STATION, END_STATION, TRIP_DURATION];

/// Accepted layouts for the `Start Time` column, tried in order.
const TIMESTAMP_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {source_name}: {cause}")]
    Csv {
        source_name: String,
        #[source]
        cause: csv::Error,
    },
    #[error("{source_name} has no '{column}' column")]
    MissingColumn {
        source_name: String,
        column: &'static str,
    },
    #[error("{source_name} row {row}: cannot parse start time '{value}'")]
    Timestamp {
        source_name: String,
        row: usize,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the city's CSV from `data_dir` and keep the rows passing `criteria`.
pub fn load_trips(data_dir: &Path, criteria: &FilterCriteria) -> Result<TripTable, LoadError> {
    let path = data_dir.join(criteria.city.file_name());
    let source_name = path.display().to_string();
    log::debug!("loading {} from {source_name}", criteria.city);

    let file = std::fs::File::open(&path).map_err(|e| LoadError::Csv {
        source_name: source_name.clone(),
        cause: e.into(),
    })?;
    let (columns, trips) = read_trips(file, &source_name)?;
    let total = trips.len();
    let trips = criteria.apply(trips);
    log::info!(
        "{}: kept {} of {total} trips (month={}, day={})",
        criteria.city,
        trips.len(),
        criteria.month,
        criteria.day
    );

    Ok(TripTable {
        city: criteria.city,
        columns,
        trips,
    })
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// One row as it appears on disk. Columns not listed here (such as the
/// unnamed index column in some exports) are ignored. Blank cells come
/// through as `None`, including in the required columns.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "Start Station", default)]
    start_station: Option<String>,
    #[serde(rename = "End Station", default)]
    end_station: Option<String>,
    #[serde(rename = "Trip Duration", default)]
    trip_duration: Option<f64>,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    /// Exports write this as a float, e.g. `1989.0`.
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Parse every row of a trip CSV. `source_name` only labels errors.
pub fn read_trips<R: Read>(
    input: R,
    source_name: &str,
) -> Result<(OptionalColumns, Vec<Trip>), LoadError> {
    let csv_err = |cause: csv::Error| LoadError::Csv {
        source_name: source_name.to_string(),
        cause,
    };

    let mut reader = csv::Reader::from_reader(input);
    let headers = reader.headers().map_err(csv_err)?.clone();
    let has = |name: &str| headers.iter().any(|h| h == name);

    if let Some(column) = REQUIRED_COLUMNS.into_iter().find(|c| !has(*c)) {
        return Err(LoadError::MissingColumn {
            source_name: source_name.to_string(),
            column,
        });
    }
    let columns = OptionalColumns {
        user_type: has(USER_TYPE),
        gender: has(GENDER),
        birth_year: has(BIRTH_YEAR),
    };

    let mut trips = Vec::new();
    for (row_no, result) in reader.deserialize::<RawTrip>().enumerate() {
        let raw = result.map_err(csv_err)?;
        let start_time =
            parse_timestamp(&raw.start_time).ok_or_else(|| LoadError::Timestamp {
                source_name: source_name.to_string(),
                row: row_no + 1,
                value: raw.start_time.clone(),
            })?;

        trips.push(Trip {
            start_time,
            start_station: raw.start_station,
            end_station: raw.end_station,
            duration_secs: raw.trip_duration,
            user_type: raw.user_type,
            gender: raw.gender,
            birth_year: raw.birth_year.map(|y| y as i32),
        });
    }

    log::debug!("{source_name}: parsed {} rows, columns {columns:?}", trips.len());
    Ok((columns, trips))
}

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}
