use std::fmt;

use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};

// ---------------------------------------------------------------------------
// Calendar enumerations
// ---------------------------------------------------------------------------

/// Months in calendar order. Prefix resolution walks this array front to back.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Weekdays in the order they are offered at the prompt.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English weekday name, e.g. `Tuesday`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Three-letter abbreviation, e.g. `Tue`.
pub fn weekday_abbrev(day: Weekday) -> &'static str {
    &weekday_name(day)[..3]
}

// ---------------------------------------------------------------------------
// City – which CSV file backs a session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Canonical lower-case identifier accepted at the prompt.
    pub fn key(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Name of the backing CSV file inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Look up a city by its canonical key (already lower-cased).
    pub fn from_key(key: &str) -> Option<City> {
        City::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            City::Chicago => write!(f, "Chicago"),
            City::NewYorkCity => write!(f, "New York City"),
            City::Washington => write!(f, "Washington"),
        }
    }
}

// ---------------------------------------------------------------------------
// Trip – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single bikeshare trip. Optional fields are `None` either because the
/// cell was blank or because the city's file has no such column; see
/// [`OptionalColumns`] to tell the two apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    /// Trip length in seconds.
    pub duration_secs: Option<f64>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl Trip {
    pub fn month(&self) -> Month {
        MONTHS[self.start_time.month0() as usize]
    }

    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }

    /// Start hour, 0–23.
    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_blank(v: &Option<String>) -> &str {
            v.as_deref().unwrap_or("")
        }
        writeln!(f, "{:<20}{}", "Start Time", self.start_time)?;
        writeln!(f, "{:<20}{}", "Start Station", or_blank(&self.start_station))?;
        writeln!(f, "{:<20}{}", "End Station", or_blank(&self.end_station))?;
        match self.duration_secs {
            Some(secs) => writeln!(f, "{:<20}{secs}", "Trip Duration")?,
            None => writeln!(f, "{:<20}", "Trip Duration")?,
        }
        writeln!(f, "{:<20}{}", "User Type", or_blank(&self.user_type))?;
        if let Some(g) = &self.gender {
            writeln!(f, "{:<20}{g}", "Gender")?;
        }
        if let Some(y) = self.birth_year {
            writeln!(f, "{:<20}{y}", "Birth Year")?;
        }
        writeln!(f, "{:<20}{}", "Month", self.month().name())?;
        write!(f, "{:<20}{}", "Day Of Week", weekday_name(self.weekday()))
    }
}

// ---------------------------------------------------------------------------
// TripTable – the filtered rows for one session iteration
// ---------------------------------------------------------------------------

/// Which optional columns the source file declared in its header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionalColumns {
    pub user_type: bool,
    pub gender: bool,
    pub birth_year: bool,
}

/// Trips matching the active filters, in file order.
#[derive(Debug, Clone)]
pub struct TripTable {
    pub city: City,
    pub columns: OptionalColumns,
    pub trips: Vec<Trip>,
}

impl TripTable {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}
