mod common;

use std::fs;

use common::{march_april_tracker, setup_data_file};
use expense_tracker::{
    errors::ExpenseError,
    ledger::{Expense, ExpenseTracker},
};

#[test]
fn save_then_load_reproduces_records_in_order() {
    let (_guard, path) = setup_data_file();
    let original = march_april_tracker();
    original.save(&path).expect("save");

    let mut restored = ExpenseTracker::new();
    restored.load(&path).expect("load");
    assert_eq!(restored.expenses(), original.expenses());
}

#[test]
fn load_replaces_in_memory_state() {
    let (_guard, path) = setup_data_file();
    march_april_tracker().save(&path).unwrap();

    let mut tracker = ExpenseTracker::new();
    tracker
        .add("Stale", 1.0, Some("2020-01-01"), None)
        .unwrap();
    tracker.load(&path).unwrap();
    assert_eq!(tracker.len(), 3);
    assert!(tracker.list(None).iter().all(|e| e.category() != "Stale"));
}

#[test]
fn missing_file_starts_empty() {
    let (_guard, path) = setup_data_file();
    let mut tracker = march_april_tracker();
    tracker.load(&path).expect("missing file is not an error");
    assert!(tracker.is_empty());
}

#[test]
fn corrupt_file_fails_and_keeps_state() {
    let (_guard, path) = setup_data_file();
    fs::write(&path, "[{\"category\": \"Food\", \"amount\": ").unwrap();

    let mut tracker = march_april_tracker();
    let err = tracker.load(&path).expect_err("corrupt file must fail");
    assert!(matches!(err, ExpenseError::CorruptState { .. }));
    assert_eq!(tracker.len(), 3, "failed load must not touch the store");
}

#[test]
fn record_without_date_is_corrupt() {
    let (_guard, path) = setup_data_file();
    fs::write(&path, r#"[{"category": "Food", "amount": 4.5}]"#).unwrap();
    let err = ExpenseTracker::new().load(&path).unwrap_err();
    assert!(err.to_string().contains("date"), "unexpected message: {err}");
}

#[test]
fn files_written_by_hand_load_with_note_defaults() {
    let (_guard, path) = setup_data_file();
    let json = r#"[
  {"category": "Rent", "amount": 950, "date": "2024-03-01"},
  {"category": "Food", "amount": 12.25, "date": "2024-03-02", "note": null},
  {"category": "Fuel", "amount": 40, "date": "2024-03-03", "note": "full tank", "extra": true}
]"#;
    fs::write(&path, json).unwrap();

    let mut tracker = ExpenseTracker::new();
    tracker.load(&path).unwrap();
    assert_eq!(
        tracker.expenses(),
        &[
            Expense::new("Rent", 950.0, "2024-03-01", ""),
            Expense::new("Food", 12.25, "2024-03-02", ""),
            Expense::new("Fuel", 40.0, "2024-03-03", "full tank"),
        ]
    );
}

#[test]
fn save_overwrites_previous_content() {
    let (_guard, path) = setup_data_file();
    march_april_tracker().save(&path).unwrap();
    ExpenseTracker::new().save(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn failed_save_preserves_original_file() {
    let (_guard, path) = setup_data_file();
    let tracker = march_april_tracker();
    tracker.save(&path).unwrap();
    let original = fs::read_to_string(&path).unwrap();

    // A directory squatting on the staging file name makes the write fail.
    let tmp = path.with_extension("json.tmp");
    fs::create_dir_all(&tmp).unwrap();

    let err = ExpenseTracker::new().save(&path).unwrap_err();
    assert!(matches!(err, ExpenseError::Persistence { .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}
