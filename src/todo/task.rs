use crate::error::{TodoError, TodoResult};
use std::fmt;

/// A single task description
///
/// Always trimmed and never empty. The only way to build one is [`Task::new`],
/// so every `Task` in a [`TaskStore`](super::TaskStore) satisfies this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task(String);

impl Task {
    /// Trim `text` and wrap it, rejecting empty or all-whitespace input.
    pub fn new(text: &str) -> TodoResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TodoError::EmptyTask);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Task {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
