use std::{fmt, path::Path, sync::Arc};

use tracing::{debug, info};

use crate::{
    errors::{ExpenseError, Result},
    storage,
    time::{Clock, SystemClock},
};

use super::expense::Expense;

/// In-memory record store: an append-only, insertion-ordered list of expenses.
pub struct ExpenseTracker {
    expenses: Vec<Expense>,
    clock: Arc<dyn Clock>,
}

impl ExpenseTracker {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            expenses: Vec::new(),
            clock,
        }
    }

    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        let mut tracker = Self::new();
        tracker.expenses = expenses;
        tracker
    }

    /// Appends an expense.
    ///
    /// A missing or blank `date` falls back to today's local date and a missing note
    /// becomes an empty string. Category and date text are stored as given; only a
    /// non-finite amount is refused.
    pub fn add(
        &mut self,
        category: impl Into<String>,
        amount: f64,
        date: Option<&str>,
        note: Option<&str>,
    ) -> Result<&Expense> {
        if !amount.is_finite() {
            return Err(ExpenseError::Validation(format!(
                "amount must be a finite number, got {amount}"
            )));
        }
        let date = match date {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => self.clock.today_string(),
        };
        let expense = Expense::new(category, amount, date, note.unwrap_or_default());
        debug!(
            category = expense.category(),
            amount = expense.amount(),
            date = expense.date(),
            "expense added"
        );
        self.expenses.push(expense);
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// All expenses when `month` is `None` or empty, otherwise those in `month`.
    pub fn list(&self, month: Option<&str>) -> Vec<&Expense> {
        match month {
            None | Some("") => self.expenses.iter().collect(),
            Some(month) => self
                .expenses
                .iter()
                .filter(|expense| expense.in_month(month))
                .collect(),
        }
    }

    pub fn monthly_total(&self, month: &str) -> f64 {
        sum_amounts(self.in_month(month))
    }

    /// Sum for one month and one category. Category comparison is exact and case-sensitive.
    pub fn category_total(&self, month: &str, category: &str) -> f64 {
        sum_amounts(
            self.in_month(month)
                .filter(|expense| expense.category() == category),
        )
    }

    /// Writes every expense to `path`, replacing its previous content.
    pub fn save(&self, path: &Path) -> Result<()> {
        storage::save_expenses_to_path(&self.expenses, path)?;
        info!(path = %path.display(), count = self.expenses.len(), "expenses saved");
        Ok(())
    }

    /// Replaces the in-memory list with the content of `path`.
    ///
    /// A missing file yields an empty list. On error the current list is left untouched.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        self.expenses = storage::load_expenses_from_path(path)?.unwrap_or_default();
        info!(path = %path.display(), count = self.expenses.len(), "expenses loaded");
        Ok(())
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    fn in_month<'a>(&'a self, month: &'a str) -> impl Iterator<Item = &'a Expense> + 'a {
        self.expenses
            .iter()
            .filter(move |expense| expense.in_month(month))
    }
}

// Folding from +0.0 keeps an empty selection printing as `0.00` rather than `-0.00`.
fn sum_amounts<'a>(expenses: impl Iterator<Item = &'a Expense>) -> f64 {
    expenses.fold(0.0, |total, expense| total + expense.amount())
}

impl Default for ExpenseTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ExpenseTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpenseTracker")
            .field("expenses", &self.expenses)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;
    use chrono::NaiveDate;

    fn tracker_on(year: i32, month: u32, day: u32) -> ExpenseTracker {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        ExpenseTracker::with_clock(Arc::new(FixedClock(date)))
    }

    fn sample() -> ExpenseTracker {
        let mut tracker = tracker_on(2024, 5, 1);
        tracker
            .add("Groceries", 42.50, Some("2024-03-05"), None)
            .unwrap();
        tracker
            .add("Transport", 15.00, Some("2024-03-20"), Some("bus pass"))
            .unwrap();
        tracker
            .add("Groceries", 10.00, Some("2024-04-01"), Some(""))
            .unwrap();
        tracker
    }

    #[test]
    fn list_without_filter_keeps_insertion_order() {
        let tracker = sample();
        let categories: Vec<&str> = tracker.list(None).iter().map(|e| e.category()).collect();
        assert_eq!(categories, vec!["Groceries", "Transport", "Groceries"]);
    }

    #[test]
    fn monthly_and_category_totals() {
        let tracker = sample();
        assert!((tracker.monthly_total("2024-03") - 57.50).abs() < 1e-9);
        assert!((tracker.category_total("2024-03", "Groceries") - 42.50).abs() < 1e-9);
        assert_eq!(tracker.category_total("2024-03", "groceries"), 0.0);
        assert_eq!(tracker.category_total("2024-03", "Groceries "), 0.0);
        assert_eq!(tracker.monthly_total("2023-12"), 0.0);
        assert_eq!(format!("{:.2}", tracker.monthly_total("2023-12")), "0.00");
    }

    #[test]
    fn list_by_month_returns_only_matches() {
        let tracker = sample();
        let april = tracker.list(Some("2024-04"));
        assert_eq!(april.len(), 1);
        assert_eq!(april[0], &Expense::new("Groceries", 10.0, "2024-04-01", ""));
        assert!(tracker.list(Some("2024")).is_empty());
    }

    #[test]
    fn empty_month_lists_everything() {
        let tracker = sample();
        assert_eq!(tracker.list(Some("")).len(), 3);
    }

    #[test]
    fn short_and_multibyte_dates_are_listed_by_their_prefix() {
        let mut tracker = tracker_on(2024, 7, 9);
        tracker.add("Misc", 5.0, Some("2024"), None).unwrap();
        tracker.add("Misc", 2.0, Some("2024-0é-01"), None).unwrap();
        assert_eq!(tracker.list(Some("2024")).len(), 1);
        assert_eq!(tracker.list(Some("2024-0é")).len(), 1);
        assert_eq!(tracker.monthly_total("2024"), 5.0);
        assert_eq!(tracker.category_total("2024-0é", "Misc"), 2.0);
    }

    #[test]
    fn missing_date_uses_clock_and_missing_note_is_empty() {
        let mut tracker = tracker_on(2024, 7, 9);
        let added = tracker.add("Coffee", 3.2, None, None).unwrap().clone();
        assert_eq!(added.date(), "2024-07-09");
        assert_eq!(added.note(), "");

        let blank = tracker.add("Coffee", 3.2, Some(""), None).unwrap();
        assert_eq!(blank.date(), "2024-07-09");
    }

    #[test]
    fn malformed_dates_are_stored_verbatim() {
        let mut tracker = tracker_on(2024, 7, 9);
        tracker.add("Misc", 1.0, Some("yesterday"), None).unwrap();
        assert_eq!(tracker.list(None)[0].date(), "yesterday");
        assert!(tracker.list(Some("2024-07")).is_empty());
    }

    #[test]
    fn non_finite_amount_is_rejected() {
        let mut tracker = tracker_on(2024, 7, 9);
        let err = tracker.add("Misc", f64::NAN, None, None).unwrap_err();
        assert!(matches!(err, ExpenseError::Validation(_)));
        assert!(tracker.add("Misc", f64::INFINITY, None, None).is_err());
        assert!(tracker.is_empty());
    }

    #[test]
    fn duplicates_and_negative_amounts_are_kept() {
        let mut tracker = tracker_on(2024, 7, 9);
        tracker.add("Refund", -5.0, Some("2024-07-01"), None).unwrap();
        tracker.add("Refund", -5.0, Some("2024-07-01"), None).unwrap();
        assert_eq!(tracker.len(), 2);
        assert_eq!(tracker.monthly_total("2024-07"), -10.0);
    }
}
