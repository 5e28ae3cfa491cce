//! Formatting helpers for the to-do CLI
//!
//! Everything the user reads is built here: the banner, the menu, task
//! listings and the status lines printed after each operation.

use crate::error::{Severity, TodoError};
use crate::menu::MenuChoice;
use crate::todo::{Task, TaskStore};

const RULE_WIDTH: usize = 50;

const SUCCESS_MARK: &str = "✅";
const WARNING_MARK: &str = "⚠️ ";
const INFO_MARK: &str = "ℹ️ ";

pub const MENU_PROMPT: &str = "Enter choice (1-4): ";
pub const ADD_PROMPT: &str = "Enter task description: ";
pub const DELETE_PROMPT: &str = "Enter the number of the task to delete: ";

pub const ADD_HEADER: &str = "\n➕ Add a Task";
pub const VIEW_HEADER: &str = "\n👀 View Tasks";
pub const DELETE_HEADER: &str = "\n🗑️  Delete a Task";
pub const FAREWELL: &str = "\n👋 Thanks for using the To-Do CLI. Goodbye!";

/// Welcome banner printed once at startup
pub fn format_banner() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\n📝  Welcome to the To-Do CLI\n{rule}")
}

/// Main menu, one numbered line per [`MenuChoice`]
pub fn format_menu() -> String {
    let mut result = String::from("\nPlease choose an option:");
    for choice in MenuChoice::ALL {
        result.push_str(&format!("\n{}) {}", choice.number(), choice.label()));
    }
    result
}

/// Numbered listing of every task, `"<position>. <task>"` per line
pub fn format_task_list(store: &TaskStore) -> String {
    store
        .numbered()
        .map(|(position, task)| format!("{}. {}", position, task))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_added(task: &Task) -> String {
    format!("{} Task added: '{}'", SUCCESS_MARK, task)
}

pub fn format_deleted(task: &Task) -> String {
    format!("{} Deleted task: '{}'", SUCCESS_MARK, task)
}

/// Status line for a menu input that could not be resolved
pub fn format_invalid_selection(err: &TodoError) -> String {
    format!("{} Invalid selection: {}", WARNING_MARK, err)
}

/// Status line for a recoverable error raised inside an operation
pub fn format_error(err: &TodoError) -> String {
    if err.severity() == Severity::Info {
        return format!("{} {}", INFO_MARK, err);
    }
    match err {
        TodoError::NotANumber(_) => format!(
            "{} Invalid input: please enter a whole number (e.g., 1, 2, 3).",
            WARNING_MARK
        ),
        TodoError::EmptyTask | TodoError::MissingNumber => {
            format!("{} Invalid input: {}", WARNING_MARK, err)
        }
        _ => format!("{} {}", WARNING_MARK, err),
    }
}
