use crate::errors::ExpenseError;

/// Operations reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    List,
    MonthlyTotal,
    CategoryTotal,
    SaveAndExit,
}

impl Operation {
    /// Maps a menu choice (`1`–`5`, surrounding whitespace ignored) to an operation.
    pub fn from_choice(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Operation::Add),
            "2" => Some(Operation::List),
            "3" => Some(Operation::MonthlyTotal),
            "4" => Some(Operation::CategoryTotal),
            "5" => Some(Operation::SaveAndExit),
            _ => None,
        }
    }

    pub fn fields(self) -> &'static [Field] {
        match self {
            Operation::Add => ADD_FIELDS,
            Operation::List => LIST_FIELDS,
            Operation::MonthlyTotal => MONTHLY_TOTAL_FIELDS,
            Operation::CategoryTotal => CATEGORY_TOTAL_FIELDS,
            Operation::SaveAndExit => &[],
        }
    }
}

/// How a prompted line is turned into a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Kept exactly as typed.
    Text,
    /// Parsed as a finite number.
    Amount,
    /// Trimmed; blank means "not given".
    Optional,
    /// Trimmed; blank is rejected.
    Required,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub prompt: &'static str,
    pub kind: FieldKind,
}

const MONTH_PROMPT: &str = "Enter month (YYYY-MM): ";
const CATEGORY_PROMPT: &str = "Enter category: ";

const ADD_FIELDS: &[Field] = &[
    Field {
        name: "category",
        prompt: CATEGORY_PROMPT,
        kind: FieldKind::Text,
    },
    Field {
        name: "amount",
        prompt: "Enter amount: ",
        kind: FieldKind::Amount,
    },
    Field {
        name: "date",
        prompt: "Enter date (YYYY-MM-DD, or leave blank for today): ",
        kind: FieldKind::Optional,
    },
    Field {
        name: "note",
        prompt: "Optional note: ",
        kind: FieldKind::Text,
    },
];

const LIST_FIELDS: &[Field] = &[Field {
    name: "month",
    prompt: "Enter month to view (YYYY-MM, or leave blank for all): ",
    kind: FieldKind::Optional,
}];

const MONTHLY_TOTAL_FIELDS: &[Field] = &[Field {
    name: "month",
    prompt: MONTH_PROMPT,
    kind: FieldKind::Required,
}];

const CATEGORY_TOTAL_FIELDS: &[Field] = &[
    Field {
        name: "month",
        prompt: MONTH_PROMPT,
        kind: FieldKind::Required,
    },
    Field {
        name: "category",
        prompt: CATEGORY_PROMPT,
        kind: FieldKind::Required,
    },
];

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Amount(f64),
    Blank,
}

impl FieldValue {
    fn into_text(self) -> Option<String> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl Field {
    pub fn parse(&self, input: &str) -> Result<FieldValue, ExpenseError> {
        match self.kind {
            FieldKind::Text => Ok(FieldValue::Text(input.to_string())),
            FieldKind::Amount => {
                let trimmed = input.trim();
                match trimmed.parse::<f64>() {
                    Ok(amount) if amount.is_finite() => Ok(FieldValue::Amount(amount)),
                    _ => Err(ExpenseError::Validation(format!(
                        "`{trimmed}` is not a valid amount"
                    ))),
                }
            }
            FieldKind::Optional => {
                let trimmed = input.trim();
                if trimmed.is_empty() {
                    Ok(FieldValue::Blank)
                } else {
                    Ok(FieldValue::Text(trimmed.to_string()))
                }
            }
            FieldKind::Required => {
                let trimmed = input.trim();
                if trimmed.is_empty() {
                    Err(ExpenseError::Validation(format!("{} is required", self.name)))
                } else {
                    Ok(FieldValue::Text(trimmed.to_string()))
                }
            }
        }
    }
}

/// Fully collected input for one operation, ready to run against the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Add {
        category: String,
        amount: f64,
        date: Option<String>,
        note: String,
    },
    List {
        month: Option<String>,
    },
    MonthlyTotal {
        month: String,
    },
    CategoryTotal {
        month: String,
        category: String,
    },
    SaveAndExit,
}

/// Values gathered so far for the selected operation.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCollection {
    operation: Operation,
    values: Vec<FieldValue>,
}

impl FieldCollection {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            values: Vec::new(),
        }
    }

    /// The field still to be prompted for, if any.
    pub fn next_field(&self) -> Option<&'static Field> {
        self.operation.fields().get(self.values.len())
    }

    /// Parses `input` for the pending field. On error nothing is recorded and the
    /// same field stays pending.
    pub fn accept(&mut self, input: &str) -> Result<(), ExpenseError> {
        let Some(field) = self.next_field() else {
            return Ok(());
        };
        let value = field.parse(input)?;
        self.values.push(value);
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.next_field().is_none()
    }

    pub fn into_request(self) -> Result<Request, ExpenseError> {
        let operation = self.operation;
        let mut values = self.values.into_iter();
        let mut next = move || {
            values
                .next()
                .ok_or_else(|| ExpenseError::Validation(format!("{operation:?} is missing input")))
        };
        let request = match operation {
            Operation::Add => {
                let category = text(next()?)?;
                let amount = match next()? {
                    FieldValue::Amount(amount) => amount,
                    other => return Err(unexpected(other)),
                };
                let date = next()?.into_text();
                let note = text(next()?)?;
                Request::Add {
                    category,
                    amount,
                    date,
                    note,
                }
            }
            Operation::List => Request::List {
                month: next()?.into_text(),
            },
            Operation::MonthlyTotal => Request::MonthlyTotal {
                month: text(next()?)?,
            },
            Operation::CategoryTotal => Request::CategoryTotal {
                month: text(next()?)?,
                category: text(next()?)?,
            },
            Operation::SaveAndExit => Request::SaveAndExit,
        };
        Ok(request)
    }
}

fn text(value: FieldValue) -> Result<String, ExpenseError> {
    match value {
        FieldValue::Text(text) => Ok(text),
        other => Err(unexpected(other)),
    }
}

fn unexpected(value: FieldValue) -> ExpenseError {
    ExpenseError::Validation(format!("unexpected field value {value:?}"))
}

/// Shell loop states.
///
/// `AwaitingMenuChoice → CollectingFields → Executing → AwaitingMenuChoice`, ending in
/// `Finished` once the store has been saved.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ShellState {
    #[default]
    AwaitingMenuChoice,
    CollectingFields(FieldCollection),
    Executing(Request),
    Finished,
}

impl ShellState {
    /// State that follows a menu choice. Unknown choices return `Ok(None)`.
    pub fn after_choice(input: &str) -> Result<Option<Self>, ExpenseError> {
        match Operation::from_choice(input) {
            Some(operation) => Self::after_fields(FieldCollection::new(operation)).map(Some),
            None => Ok(None),
        }
    }

    /// Moves to `Executing` once every field has a value.
    pub fn after_fields(collection: FieldCollection) -> Result<Self, ExpenseError> {
        if collection.is_complete() {
            Ok(ShellState::Executing(collection.into_request()?))
        } else {
            Ok(ShellState::CollectingFields(collection))
        }
    }
}
