use crate::todo::task::Task;

/// The ordered list of tasks for one run
///
/// Tasks are kept in insertion order. Users address them by 1-based position,
/// which is derived from the current index, so removing a task renumbers every
/// task after it. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create a new empty TaskStore
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task to the end of the list
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Remove the task at a 1-based position
    ///
    /// # Returns
    /// The removed task, or `None` if `position` is outside `1..=len`
    pub fn remove(&mut self, position: usize) -> Option<Task> {
        if !self.contains_position(position) {
            return None;
        }
        Some(self.tasks.remove(position - 1))
    }

    /// Get the task at a 1-based position
    pub fn get(&self, position: usize) -> Option<&Task> {
        position.checked_sub(1).and_then(|index| self.tasks.get(index))
    }

    pub fn contains_position(&self, position: usize) -> bool {
        (1..=self.tasks.len()).contains(&position)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Iterate over `(position, task)` pairs, positions starting at 1
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Task)> {
        self.tasks.iter().enumerate().map(|(i, task)| (i + 1, task))
    }
}

impl FromIterator<Task> for TaskStore {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}
