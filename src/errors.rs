use std::{io, path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// Error type for the record store, its storage backend and configuration.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Corrupt expense file `{}`: {source}", path.display())]
    CorruptState {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Persistence error for `{}`: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, ExpenseError>;

impl ExpenseError {
    pub(crate) fn persistence(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ExpenseError::Persistence {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        ExpenseError::CorruptState {
            path: path.into(),
            source,
        }
    }
}

/// User-facing shell error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] ExpenseError),
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("Line editor failed: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}
