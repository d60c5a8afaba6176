use serde::{Deserialize, Deserializer, Serialize};

/// Number of leading date characters compared by month filters (`YYYY-MM`).
pub const MONTH_PREFIX_LEN: usize = 7;

/// A single recorded expense. Fields are fixed once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    category: String,
    amount: f64,
    date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    note: String,
}

impl Expense {
    pub fn new(
        category: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            amount,
            date: date.into(),
            note: note.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// The first seven characters of the date, or the whole date when it is shorter.
    pub fn month(&self) -> &str {
        match self.date.char_indices().nth(MONTH_PREFIX_LEN) {
            Some((end, _)) => &self.date[..end],
            None => &self.date,
        }
    }

    /// Lexical month-prefix match against [`Expense::month`].
    pub fn in_month(&self, month: &str) -> bool {
        self.month() == month
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
