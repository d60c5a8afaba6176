use chrono::{Local, NaiveDate};

/// Format used for stored expense dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Clock abstracts access to the current date so defaulted entries stay deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns today's calendar date in the local time zone.
    fn today(&self) -> NaiveDate;

    /// Returns today's date rendered as `YYYY-MM-DD`.
    fn today_string(&self) -> String {
        self.today().format(DATE_FORMAT).to_string()
    }
}

/// Real-time clock backed by the system local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
