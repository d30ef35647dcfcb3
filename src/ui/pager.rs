use std::io::{BufRead, Write};

use crate::data::model::Trip;

use super::console::{Console, ConsoleError};

pub const PAGE_SIZE: usize = 5;

/// A run of up to [`PAGE_SIZE`] consecutive trips. `first` and `last` are
/// 0-based, inclusive row positions in the filtered table.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    pub first: usize,
    pub last: usize,
    pub rows: &'a [Trip],
}

/// Pages over `trips` in file order. Each call starts from row 0 and each
/// page is only sliced when the iterator is advanced.
pub fn pages(trips: &[Trip]) -> impl Iterator<Item = Page<'_>> {
    trips
        .chunks(PAGE_SIZE)
        .enumerate()
        .map(|(i, rows)| Page {
            first: i * PAGE_SIZE,
            last: i * PAGE_SIZE + rows.len() - 1,
            rows,
        })
}

/// Offer the raw rows, then print them a page at a time for as long as the
/// user keeps answering yes.
pub fn show_raw_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    trips: &[Trip],
) -> Result<(), ConsoleError> {
    let answer = console.ask("Would you like to display the raw data for this filter? (Y/N): ")?;
    if !answer.trim().eq_ignore_ascii_case("y") {
        console.say("Not showing raw data.\n")?;
        return Ok(());
    }

    for page in pages(trips) {
        console.say(format!(
            "Lines {} to {} of {}:",
            page.first,
            page.last,
            trips.len()
        ))?;
        for trip in page.rows {
            console.say(trip)?;
            console.say("")?;
        }
        if !console.ask_yes_no("Would you like to display the next five trips? (Y/N): ")? {
            console.say("Cancelling print.\n")?;
            return Ok(());
        }
    }

    console.say("No more trips to display.\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn numbered(n: usize) -> Vec<Trip> {
        (0..n)
            .map(|i| Trip {
                start_time: NaiveDate::from_ymd_opt(2017, 1, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
                start_station: Some(format!("Station {i}")),
                end_station: Some("Depot".into()),
                duration_secs: Some(1.0),
                user_type: None,
                gender: None,
                birth_year: None,
            })
            .collect()
    }

    fn run(trips: &[Trip], input: &str) -> String {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        show_raw_data(&mut console, trips).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn twelve_rows_make_three_pages() {
        let trips = numbered(12);
        let bounds: Vec<(usize, usize, usize)> = pages(&trips)
            .map(|p| (p.first, p.last, p.rows.len()))
            .collect();
        assert_eq!(bounds, vec![(0, 4, 5), (5, 9, 5), (10, 11, 2)]);
        assert_eq!(pages(&trips).next().map(|p| p.first), Some(0));
    }

    #[test]
    fn paging_through_everything() {
        let out = run(&numbered(12), "y\ny\ny\ny\n");
        assert!(out.contains("Lines 0 to 4 of 12:"));
        assert!(out.contains("Lines 5 to 9 of 12:"));
        assert!(out.contains("Lines 10 to 11 of 12:"));
        assert!(out.contains("Station 11"));
        assert!(out.contains("No more trips to display."));
    }

    #[test]
    fn declining_after_first_page() {
        let out = run(&numbered(12), "y\nn\n");
        assert!(out.contains("Station 4"));
        assert!(!out.contains("Station 5"));
        assert!(!out.contains("Lines 5 to 9"));
        assert!(out.contains("Cancelling print."));
    }

    #[test]
    fn declining_immediately_shows_no_rows() {
        let out = run(&numbered(12), "n\n");
        assert!(!out.contains("Lines"));
        assert!(!out.contains("Station"));
        assert!(out.contains("Not showing raw data."));
    }

    #[test]
    fn invalid_answer_between_pages_is_reasked() {
        let out = run(&numbered(7), "y\nsure\ny\ny\n");
        assert_eq!(out.matches("Invalid input. Please enter Y or N.").count(), 1);
        assert!(out.contains("Lines 5 to 6 of 7:"));
    }
}
