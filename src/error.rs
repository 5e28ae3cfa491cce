//! Error taxonomy for the to-do CLI
//!
//! Every validation failure is a variant of [`TodoError`]. Validation errors are
//! recoverable: the operation that raised one renders it and carries on. Only
//! [`TodoError::Io`] and [`TodoError::EndOfInput`] end the session.

use std::fmt;
use std::io;
use thiserror::Error;

/// Which operation found the store empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    View,
    Delete,
}

impl fmt::Display for StoreAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreAction::View => f.write_str("view"),
            StoreAction::Delete => f.write_str("delete"),
        }
    }
}

/// How a recoverable error is presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Info,
}

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("'{0}' is not a whole number.")]
    NotANumber(String),

    #[error("Menu option does not exist.")]
    MenuOptionOutOfRange,

    #[error("Task cannot be empty.")]
    EmptyTask,

    #[error("There are no tasks to {0}.")]
    EmptyStore(StoreAction),

    #[error("You must enter a task number.")]
    MissingNumber,

    #[error("Task #{0} does not exist.")]
    TaskNotFound(String),

    #[error("Failed to access the terminal: {0}")]
    Io(#[from] io::Error),

    #[error("Input stream closed")]
    EndOfInput,
}

pub type TodoResult<T> = Result<T, TodoError>;

impl TodoError {
    /// True for validation failures that are reported and then recovered from.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, TodoError::Io(_) | TodoError::EndOfInput)
    }

    pub fn severity(&self) -> Severity {
        match self {
            TodoError::EmptyStore(_) => Severity::Info,
            _ => Severity::Warning,
        }
    }
}
