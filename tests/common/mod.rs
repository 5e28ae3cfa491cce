//! Common test utilities for integration tests

#![allow(dead_code)]

use std::io::Cursor;
use todo_cli::{Task, TaskStore, TodoApp};

pub type TestApp = TodoApp<Cursor<Vec<u8>>, Vec<u8>>;

/// Build a store from task titles
pub fn store_of(titles: &[&str]) -> TaskStore {
    titles.iter().map(|t| Task::new(t).unwrap()).collect()
}

/// Titles currently in the store, in order
pub fn titles(store: &TaskStore) -> Vec<String> {
    store.iter().map(|t| t.as_str().to_string()).collect()
}

/// Create a test app that reads `lines` (one input line each) and starts from `store`
pub fn get_test_app(store: TaskStore, lines: &[&str]) -> TestApp {
    let mut input = lines.join("\n");
    if !lines.is_empty() {
        input.push('\n');
    }
    TodoApp::with_store(store, Cursor::new(input.into_bytes()), Vec::new())
}

/// Everything the app has printed so far
pub fn printed(app: &TestApp) -> String {
    String::from_utf8(app.output().clone()).unwrap()
}

/// Run a full session over `lines` from an empty store
pub fn run_session(lines: &[&str]) -> (TaskStore, String) {
    let mut app = get_test_app(TaskStore::new(), lines);
    app.run().unwrap();
    let (store, output) = app.into_parts();
    (store, String::from_utf8(output).unwrap())
}
