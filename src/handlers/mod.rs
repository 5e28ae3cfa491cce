//! List operations for the to-do CLI
//!
//! Each operation lives in its own file. They all share one shape: run a
//! fallible body, then hand the outcome to [`TodoApp::finish`], which prints
//! the status line and pauses on every path.

mod add;
mod delete;
mod view;

use crate::TodoApp;
use crate::error::{TodoError, TodoResult};
use crate::formatting;
use std::io::{BufRead, Write};
use tracing::debug;

impl<R: BufRead, W: Write> TodoApp<R, W> {
    /// Report an operation's outcome, then pause for acknowledgment.
    ///
    /// `Ok(message)` is printed as-is and a recoverable error is rendered with
    /// [`formatting::format_error`]. Stream errors skip the pause and propagate.
    pub(crate) fn finish(&mut self, outcome: TodoResult<String>) -> TodoResult<()> {
        match outcome {
            Ok(message) => self.console.say(&message)?,
            Err(e) if e.is_recoverable() => {
                debug!(error = %e, "Operation rejected input");
                self.console.say(&formatting::format_error(&e))?;
            }
            Err(e) => return Err(e),
        }
        self.console.pause()
    }
}
