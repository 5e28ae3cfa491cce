//! Add handler for the to-do CLI

use crate::TodoApp;
use crate::error::TodoResult;
use crate::formatting;
use crate::validation;
use std::io::{BufRead, Write};
use tracing::debug;

impl<R: BufRead, W: Write> TodoApp<R, W> {
    /// Prompt for a description and append it to the end of the list.
    /// Blank input is rejected and leaves the store unchanged.
    pub fn handle_add(&mut self) -> TodoResult<()> {
        self.console.say(formatting::ADD_HEADER)?;
        let outcome = self.add_task();
        self.finish(outcome)
    }

    fn add_task(&mut self) -> TodoResult<String> {
        let line = self.console.prompt(formatting::ADD_PROMPT)?;
        let task = validation::parse_task_text(&line)?;

        let message = formatting::format_added(&task);
        self.store.add(task);
        debug!(tasks = self.store.len(), "Task added");
        Ok(message)
    }
}
