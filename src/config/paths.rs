use dirs::home_dir;
use std::path::{Path, PathBuf};

const DEFAULT_DIR_NAME: &str = ".expense_tracker";
const CONFIG_FILE: &str = "config.json";
const DATA_FILE: &str = "expenses.json";

/// Returns the application-specific data directory, defaulting to `~/.expense_tracker`.
pub fn app_data_dir() -> PathBuf {
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Default location of the expense data file inside `base`.
pub fn data_file_in(base: &Path) -> PathBuf {
    base.join(DATA_FILE)
}
