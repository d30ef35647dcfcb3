use crate::data::model::Trip;

#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    /// Trips with a recorded duration; blank cells are not counted.
    pub trips: usize,
    /// Sum of all recorded trip durations, in seconds.
    pub total_secs: f64,
    /// `None` when there is no duration to average.
    pub mean_secs: Option<f64>,
}

pub fn duration_stats(trips: &[Trip]) -> DurationStats {
    let (counted, total_secs) = trips
        .iter()
        .filter_map(|t| t.duration_secs)
        .fold((0usize, 0.0f64), |(n, sum), secs| (n + 1, sum + secs));
    let mean_secs = (counted > 0).then(|| total_secs / counted as f64);
    DurationStats {
        trips: counted,
        total_secs,
        mean_secs,
    }
}

/// Human-readable breakdown, e.g. `1 day, 2 hours, 3 minutes, 4 seconds`.
/// Leading zero units are omitted; fractional seconds are rounded.
pub fn humanize_secs(secs: f64) -> String {
    let mut rest = secs.max(0.0).round() as u64;
    let units = [("day", 86_400), ("hour", 3_600), ("minute", 60), ("second", 1)];

    let mut parts = Vec::new();
    for (name, size) in units {
        let n = rest / size;
        rest %= size;
        if n == 0 && parts.is_empty() && size != 1 {
            continue;
        }
        let plural = if n == 1 { "" } else { "s" };
        parts.push(format!("{n} {name}{plural}"));
    }
    parts.join(", ")
}
