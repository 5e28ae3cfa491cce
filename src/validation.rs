//! Validation helpers for user input
//!
//! Turns raw lines read from the console into typed values: task
//! descriptions and 1-based task numbers.

use crate::error::{TodoError, TodoResult};
use crate::todo::Task;
use std::num::IntErrorKind;

/// Parse an integer literal
///
/// # Arguments
/// * `text` - Already-trimmed input
///
/// # Returns
/// `Ok(Some(n))` for a literal that fits in `i64`, `Ok(None)` for a valid
/// literal too large to represent, `Err(NotANumber)` for anything else
/// (including empty input).
pub fn parse_integer(text: &str) -> TodoResult<Option<i64>> {
    match text.parse::<i64>() {
        Ok(n) => Ok(Some(n)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(None)
        }
        Err(_) => Err(TodoError::NotANumber(text.to_string())),
    }
}

/// Validate a task description entered by the user
pub fn parse_task_text(input: &str) -> TodoResult<Task> {
    Task::new(input)
}

/// Parse and validate a task number entered by the user
///
/// # Arguments
/// * `input` - Raw input line
/// * `store_len` - Number of tasks currently in the store
///
/// # Returns
/// The 1-based position, guaranteed to be within `1..=store_len`
pub fn parse_task_number(input: &str, store_len: usize) -> TodoResult<usize> {
    let text = input.trim();
    if text.is_empty() {
        return Err(TodoError::MissingNumber);
    }

    match parse_integer(text)? {
        Some(number) => usize::try_from(number)
            .ok()
            .filter(|position| (1..=store_len).contains(position))
            .ok_or_else(|| TodoError::TaskNotFound(number.to_string())),
        None => Err(TodoError::TaskNotFound(text.to_string())),
    }
}
