//! To-Do CLI Library
//!
//! An interactive, menu-driven to-do list. A session prints a banner, then
//! repeatedly shows a menu and dispatches to one of the list operations
//! (add, view, delete) until the user quits. Tasks live in memory for the
//! duration of one run.
//!
//! # Architecture
//!
//! - **Session Layer**: `TodoApp` - owns the store and console, runs the menu loop
//! - **Operation Layer**: `handlers` - add / view / delete, each with its own
//!   prompt, validation, report and pause
//! - **Domain Layer**: `todo` module - `Task` and `TaskStore`
//!
//! # Example
//!
//! ```no_run
//! use todo_cli::TodoApp;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let stdin = std::io::stdin();
//!     let mut app = TodoApp::new(stdin.lock(), std::io::stdout());
//!     app.run()
//! }
//! ```

pub mod console;
pub mod error;
pub mod formatting;
mod handlers;
pub mod menu;
mod todo;
pub mod validation;

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::console::Console;
use crate::menu::MenuChoice;

// Re-export commonly used types
pub use error::{StoreAction, TodoError, TodoResult};
pub use todo::{Task, TaskStore};

/// Where the menu loop stands after one iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Exiting,
}

/// An interactive to-do session
///
/// Owns the task store for the whole run and hands it to one operation at a
/// time. Input and output are injected so sessions can be scripted.
pub struct TodoApp<R, W> {
    pub(crate) store: TaskStore,
    pub(crate) console: Console<R, W>,
}

impl<R: BufRead, W: Write> TodoApp<R, W> {
    /// Create a session with an empty task store
    pub fn new(input: R, output: W) -> Self {
        Self::with_store(TaskStore::new(), input, output)
    }

    /// Create a session that starts from an existing store
    pub fn with_store(store: TaskStore, input: R, output: W) -> Self {
        Self {
            store,
            console: Console::new(input, output),
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn output(&self) -> &W {
        self.console.output()
    }

    pub fn into_parts(self) -> (TaskStore, W) {
        (self.store, self.console.into_output())
    }

    /// Run the session until the user quits or input runs out
    ///
    /// # Returns
    /// `Ok(())` on Quit and on end of input; an error only if the terminal
    /// itself fails.
    pub fn run(&mut self) -> Result<()> {
        info!("Starting to-do session");
        self.console
            .say(&formatting::format_banner())
            .context("Failed to print banner")?;

        loop {
            match self.step() {
                Ok(LoopState::Running) => continue,
                Ok(LoopState::Exiting) => break,
                Err(TodoError::EndOfInput) => {
                    info!("Input closed, ending session");
                    break;
                }
                Err(e) => return Err(e).context("To-do session failed"),
            }
        }

        info!(tasks = self.store.len(), "To-do session finished");
        Ok(())
    }

    /// Show the menu once, read a choice and carry it out
    pub fn step(&mut self) -> TodoResult<LoopState> {
        self.console.say(&formatting::format_menu())?;
        let line = self.console.prompt(formatting::MENU_PROMPT)?;

        let choice = match menu::resolve(&line) {
            Ok(choice) => choice,
            Err(e) => {
                debug!(input = %line, error = %e, "Rejected menu selection");
                self.console.say(&formatting::format_invalid_selection(&e))?;
                self.console.pause()?;
                return Ok(LoopState::Running);
            }
        };

        debug!(?choice, "Dispatching menu choice");
        match choice {
            MenuChoice::AddTask => self.handle_add()?,
            MenuChoice::ViewTasks => self.handle_view()?,
            MenuChoice::DeleteTask => self.handle_delete()?,
            MenuChoice::Quit => {
                self.console.say(formatting::FAREWELL)?;
                return Ok(LoopState::Exiting);
            }
        }
        Ok(LoopState::Running)
    }
}
