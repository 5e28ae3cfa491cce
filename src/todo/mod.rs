//! To-do domain models
//!
//! - `task`: a single validated task description
//! - `task_store`: the ordered, in-memory list of tasks for one run

mod task;
mod task_store;

// Re-export all public types
pub use task::Task;
pub use task_store::TaskStore;
