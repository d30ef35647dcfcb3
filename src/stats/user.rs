use super::{Frequent, Tally};
use crate::data::model::{Trip, TripTable};

/// Label used for blank cells in a distribution.
pub const UNKNOWN: &str = "Unknown";

/// Result of one user sub-report.
#[derive(Debug, Clone, PartialEq)]
pub enum SubReport<T> {
    /// The city's file has no such column.
    Unavailable,
    /// The column exists but every filtered row left it blank.
    NoValues,
    Ready(T),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BirthYears {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: Frequent<i32>,
}

/// Value counts, most frequent first, blanks counted as [`UNKNOWN`].
pub type Distribution = Vec<(String, usize)>;

#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub user_types: SubReport<Distribution>,
    pub genders: SubReport<Distribution>,
    pub birth_years: SubReport<BirthYears>,
}

/// Each sub-report is computed on its own; a missing column only affects
/// the sub-report backed by it.
pub fn user_stats(table: &TripTable) -> UserStats {
    let trips = &table.trips;
    UserStats {
        user_types: if table.columns.user_type {
            distribution(trips, |t| t.user_type.as_deref())
        } else {
            SubReport::Unavailable
        },
        genders: if table.columns.gender {
            distribution(trips, |t| t.gender.as_deref())
        } else {
            SubReport::Unavailable
        },
        birth_years: if table.columns.birth_year {
            birth_years(trips)
        } else {
            SubReport::Unavailable
        },
    }
}

fn distribution<'a>(
    trips: &'a [Trip],
    field: impl Fn(&'a Trip) -> Option<&'a str>,
) -> SubReport<Distribution> {
    let tally: Tally<Option<&str>> = trips.iter().map(field).collect();
    if tally.is_empty() {
        return SubReport::NoValues;
    }
    SubReport::Ready(
        tally
            .ranked()
            .into_iter()
            .map(|(value, n)| (value.unwrap_or(UNKNOWN).to_string(), n))
            .collect(),
    )
}

fn birth_years(trips: &[Trip]) -> SubReport<BirthYears> {
    let years: Vec<i32> = trips.iter().filter_map(|t| t.birth_year).collect();
    let (Some(&earliest), Some(&latest)) = (years.iter().min(), years.iter().max()) else {
        return SubReport::NoValues;
    };
    let tally: Tally<i32> = years.iter().copied().collect();
    match tally.most_common() {
        Some(most_common) => SubReport::Ready(BirthYears {
            earliest,
            latest,
            most_common,
        }),
        None => SubReport::NoValues,
    }
}
