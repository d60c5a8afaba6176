use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::{ExpenseError, Result};

const TMP_SUFFIX: &str = "tmp";

/// Creates `dir` and its parents. An empty path (current directory) is a no-op.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|err| ExpenseError::persistence(dir, err))
}

/// Staging path next to `path`: `expenses.json` becomes `expenses.json.tmp`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|err| ExpenseError::persistence(path, err))?;
    file.write_all(data.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|err| ExpenseError::persistence(path, err))
}

/// Writes `data` to the staging file, then renames it over `path`.
///
/// A failure before the rename leaves any existing file at `path` untouched.
pub fn write_staged(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    write_atomic(&tmp, data)?;
    fs::rename(&tmp, path).map_err(|err| ExpenseError::persistence(path, err))
}
