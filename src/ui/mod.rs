//! Console front end: prompts, report rendering and the raw-data pager.

pub mod console;
pub mod pager;
pub mod prompt;
pub mod report;
