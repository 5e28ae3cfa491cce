//! Delete handler for the to-do CLI

use crate::TodoApp;
use crate::error::{StoreAction, TodoError, TodoResult};
use crate::formatting;
use crate::validation;
use std::io::{BufRead, Write};
use tracing::debug;

impl<R: BufRead, W: Write> TodoApp<R, W> {
    /// Show the numbered list, ask which task to remove and remove it.
    ///
    /// With an empty store nothing is listed and no number is asked for.
    /// A removal renumbers every task after the removed one.
    pub fn handle_delete(&mut self) -> TodoResult<()> {
        self.console.say(formatting::DELETE_HEADER)?;
        let outcome = self.delete_task();
        self.finish(outcome)
    }

    fn delete_task(&mut self) -> TodoResult<String> {
        if self.store.is_empty() {
            return Err(TodoError::EmptyStore(StoreAction::Delete));
        }

        self.console.say(&formatting::format_task_list(&self.store))?;
        let line = self.console.prompt(formatting::DELETE_PROMPT)?;
        let position = validation::parse_task_number(&line, self.store.len())?;

        let removed = self
            .store
            .remove(position)
            .ok_or_else(|| TodoError::TaskNotFound(position.to_string()))?;
        debug!(position, tasks = self.store.len(), "Task deleted");
        Ok(formatting::format_deleted(&removed))
    }
}
