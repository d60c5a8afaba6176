#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc};

use chrono::NaiveDate;
use expense_tracker::{ledger::ExpenseTracker, time::FixedClock};
use tempfile::TempDir;

/// Creates an isolated directory and the data file path inside it.
/// Keep the returned guard alive for the duration of the test.
pub fn setup_data_file() -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("expenses.json");
    (temp, path)
}

pub fn tracker_on(year: i32, month: u32, day: u32) -> ExpenseTracker {
    let today = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
    ExpenseTracker::with_clock(Arc::new(FixedClock(today)))
}

/// The three-entry March/April ledger used across suites.
pub fn march_april_tracker() -> ExpenseTracker {
    let mut tracker = tracker_on(2024, 4, 15);
    tracker
        .add("Groceries", 42.50, Some("2024-03-05"), Some(""))
        .expect("add groceries");
    tracker
        .add("Transport", 15.00, Some("2024-03-20"), Some("bus pass"))
        .expect("add transport");
    tracker
        .add("Groceries", 10.00, Some("2024-04-01"), Some(""))
        .expect("add april groceries");
    tracker
}

pub fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}
