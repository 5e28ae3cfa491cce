//! View handler for the to-do CLI

use crate::TodoApp;
use crate::error::{StoreAction, TodoError, TodoResult};
use crate::formatting;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> TodoApp<R, W> {
    /// Print every task with its 1-based position.
    pub fn handle_view(&mut self) -> TodoResult<()> {
        self.console.say(formatting::VIEW_HEADER)?;
        let outcome = self.view_tasks();
        self.finish(outcome)
    }

    fn view_tasks(&self) -> TodoResult<String> {
        if self.store.is_empty() {
            return Err(TodoError::EmptyStore(StoreAction::View));
        }
        Ok(formatting::format_task_list(&self.store))
    }
}
