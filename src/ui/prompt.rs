use std::io::{BufRead, Write};

use crate::data::filter::{
    parse_city, parse_day, parse_month, parse_scope, CityAnswer, Choice, FilterCriteria,
};
use crate::state::{ReportOptions, SessionState};

use super::console::{Console, ConsoleError};

pub const SEPARATOR: &str = "----------------------------------------";

const CITY_PROMPT: &str =
    "Where would you like to see data from?\nChoose from Chicago, New York, or Washington: ";
const SCOPE_PROMPT: &str = "How would you like to filter the data?\n\
                            Choose from Month, Day, Both, or leave blank for no filter: ";
const MONTH_PROMPT: &str = "Would you like to filter data\n\
                            Jan, Feb, Mar, Apr, May, Jun, Jul, Aug, Sep, Oct, Nov, Dec, \
                            or leave blank for no filter: ";
const DAY_PROMPT: &str = "Please select a day to filter by from the following:\n\
                          Mon, Tue, Wed, Thu, Fri, Sat, Sun, or leave blank for no filter: ";

// ---------------------------------------------------------------------------
// Filter collection
// ---------------------------------------------------------------------------

/// Ask for the runtime-log toggle, city, filter scope and the month/day
/// values that scope calls for. Invalid answers are re-asked indefinitely;
/// the only way out besides valid input is the console closing.
pub fn collect_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<SessionState, ConsoleError> {
    console.say("Hello! Let's explore some US bikeshare data!")?;

    let show_timings = console.ask_yes_no("Would you like to enable runtime logs? (Y/N): ")?;
    console.say(if show_timings {
        "Runtime logs enabled.\n"
    } else {
        "Runtime logs disabled.\n"
    })?;

    let city = loop {
        match parse_city(&console.ask(CITY_PROMPT)?) {
            CityAnswer::City(city) => break city,
            CityAnswer::OxfordComma => {
                console.say("Don't get smart with me. You know what an Oxford Comma is.")?
            }
            CityAnswer::Invalid => {}
        }
        console.say("Invalid Input. Please choose from: Chicago, New York, or Washington.")?;
    };

    let scope = loop {
        if let Some(scope) = parse_scope(&console.ask(SCOPE_PROMPT)?) {
            break scope;
        }
        console.say(
            "Invalid Input. Choose from Month, Day, Both, or leave blank for no filter.",
        )?;
    };

    let mut month = Choice::All;
    if scope.includes_month() {
        month = loop {
            if let Some(month) = parse_month(&console.ask(MONTH_PROMPT)?) {
                break month;
            }
            console.say(
                "Invalid Input. Please select from the following: Jan, Feb, Mar, Apr, May, \
                 Jun, Jul, Aug, Sep, Oct, Nov, Dec, or leave blank for no filter.",
            )?;
        };
    }

    let mut day = Choice::All;
    if scope.includes_day() {
        day = loop {
            if let Some(day) = parse_day(&console.ask(DAY_PROMPT)?) {
                break day;
            }
            console.say(
                "Invalid Input. Please select from the following: \
                 Mon, Tue, Wed, Thu, Fri, Sat, Sun, or leave blank for no filter.",
            )?;
        };
    }

    console.say(SEPARATOR)?;
    let criteria = FilterCriteria { city, month, day };
    log::info!("filters: city={city}, month={month}, day={day}, timings={show_timings}");

    Ok(SessionState {
        criteria,
        options: ReportOptions { show_timings },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::City;
    use chrono::{Month, Weekday};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn run(input: &str) -> (Result<SessionState, ConsoleError>, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = collect_filters(&mut console);
        let output = String::from_utf8(console.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn no_filters() {
        let (state, out) = run("n\nchicago\n\n");
        let state = state.unwrap();
        assert_eq!(state.criteria, FilterCriteria::unfiltered(City::Chicago));
        assert!(!state.options.show_timings);
        assert!(out.contains("Runtime logs disabled."));
        assert!(!out.contains("Would you like to filter data"));
        assert!(out.ends_with(&format!("{SEPARATOR}\n")));
    }

    #[test]
    fn both_filters_with_retries() {
        let input = "maybe\nY\nboston\nNYC\nweekly\nboth\nsmarch\nju\ntuesday\ntue\n";
        let (state, out) = run(input);
        let state = state.unwrap();
        assert_eq!(
            state.criteria,
            FilterCriteria {
                city: City::NewYorkCity,
                month: Choice::Only(Month::June),
                day: Choice::Only(Weekday::Tue),
            }
        );
        assert!(state.options.show_timings);
        assert_eq!(out.matches("Invalid input. Please enter Y or N.").count(), 1);
        assert_eq!(out.matches("Invalid Input. Please choose from").count(), 1);
        assert_eq!(out.matches("Invalid Input. Choose from Month").count(), 1);
        assert_eq!(out.matches("following: Jan, Feb").count(), 1);
        assert_eq!(out.matches("following: Mon, Tue").count(), 1);
    }

    #[test]
    fn month_scope_skips_day_question() {
        let (state, out) = run("n\nwashington\nmonth\n\n");
        let state = state.unwrap();
        assert_eq!(state.criteria.month, Choice::All);
        assert_eq!(state.criteria.day, Choice::All);
        assert!(!out.contains("Please select a day"));
    }

    #[test]
    fn oxford_comma_gets_its_own_message() {
        let (state, out) = run("n\nor washington\nwashington\nday\nsat\n");
        let state = state.unwrap();
        assert_eq!(state.criteria.city, City::Washington);
        assert_eq!(state.criteria.day, Choice::Only(Weekday::Sat));
        assert!(out.contains("You know what an Oxford Comma is."));
    }

    #[test]
    fn closed_input_escapes_the_loop() {
        let (state, _) = run("n\ntoronto\n");
        assert!(matches!(state, Err(ConsoleError::Closed)));
    }
}
