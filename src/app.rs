use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;

use crate::data::loader::load_trips;
use crate::ui::console::{Console, ConsoleError};
use crate::ui::{pager, prompt, report};

/// Printed when the session ends on Ctrl-C or closed input.
pub const FAREWELL: &str = "\n\nKeyboard Interrupt detected. Exiting program.";

// ---------------------------------------------------------------------------
// Session loop
// ---------------------------------------------------------------------------

pub struct BikeshareApp<R, W> {
    console: Console<R, W>,
    /// Directory holding the three city CSV files.
    data_dir: PathBuf,
}

impl<R: BufRead, W: Write> BikeshareApp<R, W> {
    pub fn new(console: Console<R, W>, data_dir: PathBuf) -> Self {
        Self { console, data_dir }
    }

    /// Run sessions until the user declines to restart or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        match self.session_loop() {
            Ok(()) => Ok(()),
            Err(ConsoleError::Closed) => {
                log::debug!("input closed, ending session");
                self.console
                    .say(FAREWELL)
                    .context("writing farewell message")
            }
            Err(e) => Err(e).context("console I/O failed"),
        }
    }

    fn session_loop(&mut self) -> Result<(), ConsoleError> {
        loop {
            self.run_once()?;
            let restart = self.console.ask("\nWould you like to restart? (Y/N).\n")?;
            if !restart.trim().eq_ignore_ascii_case("y") {
                return Ok(());
            }
        }
    }

    /// One pass: filters → load → reports → raw data.
    fn run_once(&mut self) -> Result<(), ConsoleError> {
        let state = prompt::collect_filters(&mut self.console)?;

        let table = match load_trips(&self.data_dir, &state.criteria) {
            Ok(table) => table,
            Err(e) => {
                log::error!("load failed: {e}");
                return self
                    .console
                    .say(format!("Could not load data for {}: {e}", state.criteria.city));
            }
        };

        log::debug!("{} trips left for {}", table.len(), table.city);
        if table.is_empty() {
            return self.console.say("There is no data to display for this filter.");
        }

        let out = self.console.out();
        report::time_report(out, &table.trips, state.options)?;
        report::station_report(out, &table.trips, state.options)?;
        report::duration_report(out, &table.trips, state.options)?;
        report::user_report(out, &table, state.options)?;

        pager::show_raw_data(&mut self.console, &table.trips)
    }

    #[cfg(test)]
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}
