use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::data::model::{weekday_name, Trip, TripTable};
use crate::state::ReportOptions;
use crate::stats::duration::{duration_stats, humanize_secs};
use crate::stats::station::station_stats;
use crate::stats::time::{format_hour, time_stats};
use crate::stats::user::{user_stats, Distribution, SubReport};

use super::prompt::SEPARATOR;

const NO_DATA: &str = "No data for this filter.";

// ---------------------------------------------------------------------------
// Reporters – compute a stats struct, print it in fixed-width columns
// ---------------------------------------------------------------------------

/// Most frequent month, weekday and start hour.
pub fn time_report<W: Write>(
    out: &mut W,
    trips: &[Trip],
    options: ReportOptions,
) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    let started = Instant::now();

    match time_stats(trips) {
        Some(stats) => {
            writeln!(
                out,
                "{:<30} {:<20} Count: {}",
                "Most Frequent Month:",
                stats.month.value.name(),
                stats.month.count
            )?;
            writeln!(
                out,
                "{:<30} {:<20} Count: {}",
                "Most Frequent Day:",
                weekday_name(stats.day.value),
                stats.day.count
            )?;
            writeln!(
                out,
                "{:<30} {:<20} Count: {}",
                "Most Frequent Hour:",
                format_hour(stats.hour.value),
                stats.hour.count
            )?;
        }
        None => writeln!(out, "{NO_DATA}")?,
    }

    finish(out, "time", started.elapsed(), options)
}

/// Most popular start station, end station and start/end combination.
pub fn station_report<W: Write>(
    out: &mut W,
    trips: &[Trip],
    options: ReportOptions,
) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    let started = Instant::now();

    match station_stats(trips) {
        Some(stats) => {
            writeln!(
                out,
                "{:<30} {:<35} Count: {}",
                "Most Popular Start Station:", stats.start.value, stats.start.count
            )?;
            writeln!(
                out,
                "{:<30} {:<35} Count: {}",
                "Most Popular End Station:", stats.end.value, stats.end.count
            )?;
            match &stats.trip {
                Some(trip) => {
                    let (from, to) = &trip.value;
                    writeln!(
                        out,
                        "{:<30} | {:^31} | Count: {}",
                        "Most Popular Trip:", from, trip.count
                    )?;
                    writeln!(out, "{:<30} | {:^31} |", "", to)?;
                }
                None => writeln!(out, "{:<30} {}", "Most Popular Trip:", NO_DATA)?,
            }
        }
        None => writeln!(out, "{NO_DATA}")?,
    }

    finish(out, "station", started.elapsed(), options)
}

/// Total and mean trip duration.
pub fn duration_report<W: Write>(
    out: &mut W,
    trips: &[Trip],
    options: ReportOptions,
) -> io::Result<()> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    let started = Instant::now();

    let stats = duration_stats(trips);
    match stats.mean_secs {
        Some(mean) => {
            writeln!(out, "{:<30} {}", "Trips Counted:", stats.trips)?;
            writeln!(
                out,
                "{:<30} {:.1} seconds ({})",
                "Total Travel Time:",
                stats.total_secs,
                humanize_secs(stats.total_secs)
            )?;
            writeln!(
                out,
                "{:<30} {:.1} seconds ({})",
                "Average Travel Time:",
                mean,
                humanize_secs(mean)
            )?;
        }
        None => writeln!(out, "{NO_DATA}")?,
    }

    finish(out, "duration", started.elapsed(), options)
}

/// User type, gender and birth year breakdowns; each prints on its own
/// even when another is unavailable for the city.
pub fn user_report<W: Write>(
    out: &mut W,
    table: &TripTable,
    options: ReportOptions,
) -> io::Result<()> {
    writeln!(out, "\nCalculating User Stats...\n")?;
    let started = Instant::now();
    let stats = user_stats(table);

    writeln!(out, "User distribution:")?;
    write_distribution(out, &stats.user_types, "user type")?;

    writeln!(out, "\nGender distribution:")?;
    write_distribution(out, &stats.genders, "gender")?;

    writeln!(out, "\nBirth year statistics:")?;
    match &stats.birth_years {
        SubReport::Ready(years) => {
            writeln!(out, "{:<30} {}", "Earliest Birth Year:", years.earliest)?;
            writeln!(out, "{:<30} {}", "Most Recent Birth Year:", years.latest)?;
            writeln!(
                out,
                "{:<30} {:<15} Count: {}",
                "Most Common Birth Year:", years.most_common.value, years.most_common.count
            )?;
        }
        SubReport::NoValues => writeln!(out, "No birth year values recorded for this filter.")?,
        SubReport::Unavailable => writeln!(out, "No birth year data is available for this city.")?,
    }

    finish(out, "user", started.elapsed(), options)
}

fn write_distribution<W: Write>(
    out: &mut W,
    report: &SubReport<Distribution>,
    what: &str,
) -> io::Result<()> {
    match report {
        SubReport::Ready(rows) => {
            for (label, n) in rows {
                writeln!(out, "{:<30} {n}", format!("{label}:"))?;
            }
            Ok(())
        }
        SubReport::NoValues => writeln!(out, "No {what} values recorded for this filter."),
        SubReport::Unavailable => writeln!(out, "No {what} data is available for this city."),
    }
}

fn finish<W: Write>(
    out: &mut W,
    name: &str,
    elapsed: Duration,
    options: ReportOptions,
) -> io::Result<()> {
    log::debug!("{name} report took {elapsed:?}");
    if options.show_timings {
        writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    }
    writeln!(out, "{SEPARATOR}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_trips;
    use crate::data::model::City;
    use pretty_assertions::assert_eq;

    // Two Mondays and two Tuesdays, 8 AM twice and 5 PM twice, so every
    // time statistic is a tie resolved by first appearance.
    const TIED: &str = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-03-06 08:00:00,60,Lake Shore,Canal St,Customer
2017-03-07 17:00:00,120,Canal St,Lake Shore,Subscriber
2017-04-04 17:00:00,180,Canal St,Lake Shore,Subscriber
2017-04-03 08:00:00,240,Lake Shore,Canal St,
";

    fn tied_table() -> TripTable {
        let (columns, trips) = read_trips(TIED.as_bytes(), "tied.csv").unwrap();
        TripTable {
            city: City::Washington,
            columns,
            trips,
        }
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn time_report_resolves_ties_by_first_row() {
        let t = tied_table();
        let out = render(|o| time_report(o, &t.trips, ReportOptions::default()));
        let line = |label: &str, value: &str| format!("{label:<30} {value:<20} Count: 2");
        assert!(out.contains(&line("Most Frequent Month:", "March")));
        assert!(out.contains(&line("Most Frequent Day:", "Monday")));
        assert!(out.contains(&line("Most Frequent Hour:", "8 AM")));
        assert!(!out.contains("This took"));
        assert!(out.ends_with(&format!("{SEPARATOR}\n")));
    }

    #[test]
    fn station_report_resolves_ties_by_first_row() {
        let t = tied_table();
        let out = render(|o| station_report(o, &t.trips, ReportOptions::default()));
        let line = |label: &str, value: &str| format!("{label:<30} {value:<35} Count: 2");
        assert!(out.contains(&line("Most Popular Start Station:", "Lake Shore")));
        assert!(out.contains(&line("Most Popular End Station:", "Canal St")));
        assert!(out.contains(&format!("| {:^31} | Count: 2", "Lake Shore")));
        assert!(out.contains(&format!("| {:^31} |\n", "Canal St")));
    }

    #[test]
    fn duration_report_prints_total_and_mean() {
        let t = tied_table();
        let out = render(|o| duration_report(o, &t.trips, ReportOptions::default()));
        assert!(out.contains(&format!(
            "{:<30} 600.0 seconds (10 minutes, 0 seconds)",
            "Total Travel Time:"
        )));
        assert!(out.contains(&format!(
            "{:<30} 150.0 seconds (2 minutes, 30 seconds)",
            "Average Travel Time:"
        )));
    }

    #[test]
    fn blank_cells_are_skipped_by_station_and_duration_reports() {
        let csv = "Start Time,Trip Duration,Start Station,End Station\n\
                   2017-03-06 08:00:00,,,Canal St\n\
                   2017-03-06 09:00:00,,,Canal St\n\
                   2017-03-06 10:00:00,90,Lake Shore,Clark St\n\
                   2017-03-06 11:00:00,30,Lake Shore,Canal St\n";
        let (_, trips) = read_trips(csv.as_bytes(), "gaps.csv").unwrap();

        let out = render(|o| station_report(o, &trips, ReportOptions::default()));
        assert!(out.contains(&format!(
            "{:<30} {:<35} Count: 2",
            "Most Popular Start Station:", "Lake Shore"
        )));
        assert!(out.contains(&format!("| {:^31} | Count: 1", "Lake Shore")));

        let out = render(|o| duration_report(o, &trips, ReportOptions::default()));
        assert!(out.contains(&format!("{:<30} 2\n", "Trips Counted:")));
        assert!(out.contains(&format!(
            "{:<30} 60.0 seconds (1 minute, 0 seconds)",
            "Average Travel Time:"
        )));
    }

    #[test]
    fn duration_report_on_empty_input_says_no_data() {
        let out = render(|o| duration_report(o, &[], ReportOptions::default()));
        assert!(out.contains(NO_DATA));
        assert!(!out.contains("NaN"));
    }

    #[test]
    fn user_report_marks_missing_columns_per_section() {
        let t = tied_table();
        let out = render(|o| user_report(o, &t, ReportOptions::default()));
        let expected = format!(
            "User distribution:\n\
             {:<30} 2\n\
             {:<30} 1\n\
             {:<30} 1\n\
             \nGender distribution:\n\
             No gender data is available for this city.\n\
             \nBirth year statistics:\n\
             No birth year data is available for this city.\n",
            "Subscriber:", "Customer:", "Unknown:"
        );
        assert!(out.contains(&expected), "{out}");
    }

    #[test]
    fn timings_only_when_enabled() {
        let t = tied_table();
        let on = ReportOptions { show_timings: true };
        let out = render(|o| time_report(o, &t.trips, on));
        assert!(out.contains("\nThis took "));
        assert_eq!(out.matches(" seconds.").count(), 1);
    }
}
