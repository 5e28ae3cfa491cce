//! Add operation tests
mod common;

use common::*;
use todo_cli::TaskStore;

#[test]
fn test_add_appends_trimmed_text() {
    let mut app = get_test_app(TaskStore::new(), &["   Buy milk  ", ""]);
    app.handle_add().unwrap();

    assert_eq!(titles(app.store()), vec!["Buy milk"]);
    let out = printed(&app);
    assert!(out.contains("➕ Add a Task"));
    assert!(out.contains("Enter task description: "));
    assert!(out.contains("✅ Task added: 'Buy milk'"));
}

#[test]
fn test_add_multiple_tasks_keeps_order() {
    let mut app = get_test_app(TaskStore::new(), &["one", "", "two", "", "three", ""]);
    for _ in 0..3 {
        app.handle_add().unwrap();
    }
    assert_eq!(app.store().len(), 3);
    assert_eq!(titles(app.store()), vec!["one", "two", "three"]);
}

#[test]
fn test_add_whitespace_only_is_rejected() {
    let mut app = get_test_app(store_of(&["existing"]), &["   ", ""]);
    app.handle_add().unwrap();

    assert_eq!(titles(app.store()), vec!["existing"]);
    let out = printed(&app);
    assert!(out.contains("⚠️  Invalid input: Task cannot be empty."));
    assert!(!out.contains("Task added"));
}

#[test]
fn test_add_empty_line_is_rejected() {
    let mut app = get_test_app(TaskStore::new(), &["", ""]);
    app.handle_add().unwrap();
    assert!(app.store().is_empty());
}

#[test]
fn test_add_allows_duplicates() {
    let mut app = get_test_app(store_of(&["Buy milk"]), &["Buy milk", ""]);
    app.handle_add().unwrap();
    assert_eq!(titles(app.store()), vec!["Buy milk", "Buy milk"]);
}

#[test]
fn test_add_always_pauses() {
    for input in ["task", "  "] {
        let mut app = get_test_app(TaskStore::new(), &[input, ""]);
        app.handle_add().unwrap();
        assert!(
            printed(&app).ends_with("Press Enter to continue..."),
            "no pause after {:?}",
            input
        );
    }
}
