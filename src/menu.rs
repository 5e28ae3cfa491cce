//! Main menu choices and the resolver that reads them from input

use crate::error::{TodoError, TodoResult};
use crate::validation;
use std::str::FromStr;

/// An option on the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTask,
    ViewTasks,
    DeleteTask,
    Quit,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::AddTask,
        MenuChoice::ViewTasks,
        MenuChoice::DeleteTask,
        MenuChoice::Quit,
    ];

    /// The number the user types to pick this choice
    pub fn number(self) -> i64 {
        match self {
            MenuChoice::AddTask => 1,
            MenuChoice::ViewTasks => 2,
            MenuChoice::DeleteTask => 3,
            MenuChoice::Quit => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddTask => "Add task",
            MenuChoice::ViewTasks => "View tasks",
            MenuChoice::DeleteTask => "Delete task",
            MenuChoice::Quit => "Quit",
        }
    }
}

impl TryFrom<i64> for MenuChoice {
    type Error = TodoError;

    fn try_from(number: i64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
            .ok_or(TodoError::MenuOptionOutOfRange)
    }
}

impl FromStr for MenuChoice {
    type Err = TodoError;

    /// Resolve a raw menu line. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match validation::parse_integer(s.trim())? {
            Some(number) => MenuChoice::try_from(number),
            None => Err(TodoError::MenuOptionOutOfRange),
        }
    }
}

/// Resolve one line of menu input into a [`MenuChoice`]
pub fn resolve(input: &str) -> TodoResult<MenuChoice> {
    input.parse()
}
