use std::{fs, io, path::Path};

use tracing::debug;

use crate::{
    errors::{ExpenseError, Result},
    ledger::Expense,
    utils::persistence::write_staged,
};

/// Writes the expenses as pretty-printed JSON, staging through a temporary file
/// so a failed write leaves the previous content in place.
pub fn save_expenses_to_path(expenses: &[Expense], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(expenses).map_err(|err| {
        ExpenseError::persistence(path, io::Error::new(io::ErrorKind::InvalidData, err))
    })?;
    write_staged(path, &json)?;
    debug!(path = %path.display(), bytes = json.len(), "expense file written");
    Ok(())
}

/// Reads expenses from `path`.
///
/// Returns `Ok(None)` when the file does not exist. Unparsable content, or a record
/// missing a required field, is reported as [`ExpenseError::CorruptState`].
pub fn load_expenses_from_path(path: &Path) -> Result<Option<Vec<Expense>>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no expense file, starting empty");
            return Ok(None);
        }
        Err(err) => return Err(ExpenseError::persistence(path, err)),
    };
    let expenses: Vec<Expense> =
        serde_json::from_str(&data).map_err(|err| ExpenseError::corrupt(path, err))?;
    Ok(Some(expenses))
}
