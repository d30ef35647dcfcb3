use std::fmt::Display;
use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::data::filter::parse_yes_no;

#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Input reached end-of-file; treated like an interrupt by the session.
    #[error("input closed")]
    Closed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

// ---------------------------------------------------------------------------
// Console – line-oriented prompt/print over any reader and writer
// ---------------------------------------------------------------------------

/// Wraps the session's input and output so the prompt loops can be driven
/// from stdin/stdout or from in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Print `prompt` (no newline) and read one answer line, without its
    /// line terminator. Bytes that are not UTF-8 become U+FFFD, so such an
    /// answer fails validation like any other typo.
    pub fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }
        let answer = String::from_utf8_lossy(&line)
            .trim_end_matches(&['\n', '\r'][..])
            .to_string();
        log::trace!("answer {answer:?} to {prompt:?}");
        Ok(answer)
    }

    /// Ask until the answer is a plain `y` or `n`.
    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, ConsoleError> {
        loop {
            let answer = self.ask(prompt)?;
            match parse_yes_no(&answer) {
                Some(yes) => return Ok(yes),
                None => self.say("Invalid input. Please enter Y or N.")?,
            }
        }
    }

    pub fn say(&mut self, line: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Direct access for the report renderers.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
