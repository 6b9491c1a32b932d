//! # Console
//!
//! The only place that talks to a human. Generic over the reader and writer
//! so command flows can be driven from tests with in-memory buffers.

use std::io::{BufRead, Write};

use dunn_core::Money;

use crate::error::CliError;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes text exactly as given.
    pub fn print(&mut self, text: &str) -> Result<(), CliError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints `question` and reads one trimmed line. `None` on end of input.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>, CliError> {
        self.print(question)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Only "Y" or "y" counts as yes. Anything else, including no answer, is no.
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool, CliError> {
        Ok(matches!(self.ask(question)?.as_deref(), Some("Y" | "y")))
    }

    /// Reads a dollar amount such as `3.00`.
    pub fn ask_money(&mut self, question: &str) -> Result<Money, CliError> {
        let answer = self.ask(question)?.ok_or_else(|| CliError::InvalidInput {
            reason: "no amount entered".to_string(),
        })?;
        Ok(answer.parse::<Money>()?)
    }

    /// Reads a delivery rating. Any integer is accepted; `None` when the
    /// customer just ends input.
    pub fn ask_rating(&mut self, question: &str) -> Result<Option<i64>, CliError> {
        match self.ask(question)? {
            None => Ok(None),
            Some(answer) if answer.is_empty() => Ok(None),
            Some(answer) => answer
                .parse()
                .map(Some)
                .map_err(|_| CliError::InvalidInput {
                    reason: format!("rating must be a whole number, got '{answer}'"),
                }),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
