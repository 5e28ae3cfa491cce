//! Delete operation tests
mod common;

use common::*;
use todo_cli::TaskStore;

#[test]
fn test_delete_middle_task() {
    let mut app = get_test_app(store_of(&["A", "B", "C"]), &["2", ""]);
    app.handle_delete().unwrap();

    assert_eq!(titles(app.store()), vec!["A", "C"]);
    let out = printed(&app);
    assert!(out.contains("🗑️  Delete a Task"));
    assert!(out.contains("1. A\n2. B\n3. C\n"));
    assert!(out.contains("Enter the number of the task to delete: "));
    assert!(out.contains("✅ Deleted task: 'B'"));
}

#[test]
fn test_delete_shifts_later_positions() {
    let mut app = get_test_app(store_of(&["A", "B", "C", "D"]), &["1", "", "2", ""]);
    app.handle_delete().unwrap();
    assert_eq!(titles(app.store()), vec!["B", "C", "D"]);

    // "C" is now at position 2
    app.handle_delete().unwrap();
    assert_eq!(titles(app.store()), vec!["B", "D"]);
    assert!(printed(&app).contains("✅ Deleted task: 'C'"));
}

#[test]
fn test_delete_empty_store() {
    let mut app = get_test_app(TaskStore::new(), &[""]);
    app.handle_delete().unwrap();

    assert!(app.store().is_empty());
    let out = printed(&app);
    assert!(out.contains("ℹ️  There are no tasks to delete."));
    assert!(!out.contains("Enter the number of the task to delete"));
    assert!(out.ends_with("Press Enter to continue..."));
}

#[test]
fn test_delete_missing_number() {
    let mut app = get_test_app(store_of(&["A"]), &["  ", ""]);
    app.handle_delete().unwrap();

    assert_eq!(titles(app.store()), vec!["A"]);
    assert!(printed(&app).contains("⚠️  Invalid input: You must enter a task number."));
}

#[test]
fn test_delete_non_integer() {
    let mut app = get_test_app(store_of(&["A"]), &["first", ""]);
    app.handle_delete().unwrap();

    assert_eq!(titles(app.store()), vec!["A"]);
    assert!(
        printed(&app).contains("⚠️  Invalid input: please enter a whole number (e.g., 1, 2, 3).")
    );
}

#[test]
fn test_delete_out_of_range() {
    for (input, message) in [
        ("0", "⚠️  Task #0 does not exist."),
        ("4", "⚠️  Task #4 does not exist."),
        ("-1", "⚠️  Task #-1 does not exist."),
    ] {
        let mut app = get_test_app(store_of(&["A", "B", "C"]), &[input, ""]);
        app.handle_delete().unwrap();

        assert_eq!(app.store().len(), 3, "store changed for {:?}", input);
        assert!(printed(&app).contains(message), "missing {:?}", message);
    }
}

#[test]
fn test_delete_always_pauses() {
    for input in ["1", "", "x", "9"] {
        let mut app = get_test_app(store_of(&["A"]), &[input, ""]);
        app.handle_delete().unwrap();
        assert!(
            printed(&app).ends_with("Press Enter to continue..."),
            "no pause after {:?}",
            input
        );
    }
}
