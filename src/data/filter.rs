use std::fmt;

use chrono::{Month, Weekday};

use super::model::{weekday_abbrev, City, Trip, MONTHS, WEEKDAYS};

// ---------------------------------------------------------------------------
// Filter criteria
// ---------------------------------------------------------------------------

/// Either no constraint or a single accepted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }
}

impl fmt::Display for Choice<Month> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => write!(f, "all"),
            Choice::Only(m) => write!(f, "{}", m.name()),
        }
    }
}

impl fmt::Display for Choice<Weekday> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => write!(f, "all"),
            Choice::Only(d) => write!(f, "{}", weekday_abbrev(*d)),
        }
    }
}

/// City plus the month and weekday restrictions chosen for one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    pub city: City,
    pub month: Choice<Month>,
    pub day: Choice<Weekday>,
}

impl FilterCriteria {
    #[cfg(test)]
    pub fn unfiltered(city: City) -> Self {
        FilterCriteria {
            city,
            month: Choice::All,
            day: Choice::All,
        }
    }

    pub fn matches(&self, trip: &Trip) -> bool {
        self.month.accepts(&trip.month()) && self.day.accepts(&trip.weekday())
    }

    /// Keep only the trips passing both filters, preserving file order.
    pub fn apply(&self, trips: Vec<Trip>) -> Vec<Trip> {
        trips.into_iter().filter(|t| self.matches(t)).collect()
    }
}

// ---------------------------------------------------------------------------
// Prompt answer parsing
// ---------------------------------------------------------------------------

/// Outcome of interpreting a city answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CityAnswer {
    City(City),
    /// The user typed "or washington" from the prompt text.
    OxfordComma,
    Invalid,
}

pub fn parse_city(input: &str) -> CityAnswer {
    let answer = input.trim().to_lowercase();
    if let Some(city) = City::from_key(&answer) {
        return CityAnswer::City(city);
    }
    match answer.as_str() {
        "nyc" | "ny" | "new york" => CityAnswer::City(City::NewYorkCity),
        "or washington" => CityAnswer::OxfordComma,
        _ => CityAnswer::Invalid,
    }
}

/// Which of the month/day questions to ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterScope {
    Neither,
    Month,
    Day,
    Both,
}

impl FilterScope {
    pub fn includes_month(self) -> bool {
        matches!(self, FilterScope::Month | FilterScope::Both)
    }

    pub fn includes_day(self) -> bool {
        matches!(self, FilterScope::Day | FilterScope::Both)
    }
}

pub fn parse_scope(input: &str) -> Option<FilterScope> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(FilterScope::Neither),
        "month" => Some(FilterScope::Month),
        "day" => Some(FilterScope::Day),
        "both" => Some(FilterScope::Both),
        _ => None,
    }
}

/// Resolve a month answer. Blank means no filter; otherwise the first month
/// in calendar order whose name starts with the answer wins, so "j" is
/// January and "ju" is June.
pub fn parse_month(input: &str) -> Option<Choice<Month>> {
    let prefix = input.trim().to_lowercase();
    if prefix.is_empty() {
        return Some(Choice::All);
    }
    MONTHS
        .into_iter()
        .find(|m| m.name().to_lowercase().starts_with(&prefix))
        .map(Choice::Only)
}

/// Resolve a three-letter weekday answer. Blank means no filter.
pub fn parse_day(input: &str) -> Option<Choice<Weekday>> {
    let answer = input.trim();
    if answer.is_empty() {
        return Some(Choice::All);
    }
    WEEKDAYS
        .into_iter()
        .find(|d| weekday_abbrev(*d).eq_ignore_ascii_case(answer))
        .map(Choice::Only)
}

/// Case-insensitive yes/no. Anything else is `None`.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}
