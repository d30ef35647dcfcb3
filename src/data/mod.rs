/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  chicago.csv / new_york_city.csv / washington.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<Trip> + present optional columns
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  month / weekday predicates → TripTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ TripTable │  rows in file order, consumed by the reporters
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
