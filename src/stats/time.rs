use chrono::{Month, Weekday};

use super::{Frequent, Tally};
use crate::data::model::Trip;

/// Most frequent month, weekday and start hour.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    pub month: Frequent<Month>,
    pub day: Frequent<Weekday>,
    pub hour: Frequent<u32>,
}

/// `None` when there are no trips.
pub fn time_stats(trips: &[Trip]) -> Option<TimeStats> {
    let months: Tally<Month> = trips.iter().map(Trip::month).collect();
    let days: Tally<Weekday> = trips.iter().map(Trip::weekday).collect();
    let hours: Tally<u32> = trips.iter().map(Trip::hour).collect();

    Some(TimeStats {
        month: months.most_common()?,
        day: days.most_common()?,
        hour: hours.most_common()?,
    })
}

/// Render an hour of the day on a 12-hour clock: 0 → "12 AM", 13 → "1 PM".
pub fn format_hour(hour: u32) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let h = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{h} {suffix}")
}
