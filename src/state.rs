use crate::data::filter::FilterCriteria;

// ---------------------------------------------------------------------------
// Per-iteration session state
// ---------------------------------------------------------------------------

/// Settings that change how reports are printed, passed to every reporter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Print how long each report took ("runtime logs" at the prompt).
    pub show_timings: bool,
}

/// Everything the user chose at the prompts for one pass of the session
/// loop. Built fresh each pass and never modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub criteria: FilterCriteria,
    pub options: ReportOptions,
}
