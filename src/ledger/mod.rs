//! Expense records and the in-memory store that aggregates them.

pub mod expense;
pub mod tracker;

pub use expense::{Expense, MONTH_PREFIX_LEN};
pub use tracker::ExpenseTracker;
