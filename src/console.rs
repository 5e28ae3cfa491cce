//! Line-oriented terminal I/O
//!
//! [`Console`] is generic over its reader and writer so the same session code
//! runs against stdin/stdout or against in-memory buffers.

use crate::error::{TodoError, TodoResult};
use std::io::{BufRead, Write};

const PAUSE_PROMPT: &str = "\nPress Enter to continue...";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of output
    pub fn say(&mut self, line: &str) -> TodoResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Show `label` and read the user's reply
    ///
    /// The line terminator is stripped; other whitespace is left for the
    /// caller to interpret.
    ///
    /// # Errors
    /// `EndOfInput` when the input stream is exhausted, `Io` on read/write failure.
    pub fn prompt(&mut self, label: &str) -> TodoResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TodoError::EndOfInput);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Block until the user acknowledges with Enter; the reply is discarded.
    pub fn pause(&mut self) -> TodoResult<()> {
        self.prompt(PAUSE_PROMPT).map(|_| ())
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
