pub mod paths;

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use crate::{
    errors::{ExpenseError, Result},
    utils::persistence::write_staged,
};

/// User preferences read from `config.json` in the application directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Expense data file. Relative paths are resolved against the application directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    pub currency_symbol: String,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            currency_symbol: "$".into(),
            color: true,
        }
    }
}

impl Config {
    pub fn data_path(&self, base: &Path) -> PathBuf {
        match &self.data_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => base.join(path),
            None => paths::data_file_in(base),
        }
    }
}

/// Loads and stores [`Config`] under an application directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        let path = paths::config_file_in(&base);
        Self { base, path }
    }

    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path).map_err(|err| {
            ExpenseError::Config(format!("cannot read `{}`: {err}", self.path.display()))
        })?;
        serde_json::from_str(&data).map_err(|err| {
            ExpenseError::Config(format!("cannot parse `{}`: {err}", self.path.display()))
        })
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ExpenseError::Config(err.to_string()))?;
        write_staged(&self.path, &json)
    }

    /// Loads the configuration, writing the defaults out first when no file exists yet.
    ///
    /// Failing to write the defaults is logged and otherwise ignored.
    pub fn load_or_init(&self) -> Result<Config> {
        if self.path.exists() {
            return self.load();
        }
        let config = Config::default();
        match self.save(&config) {
            Ok(()) => info!(path = %self.path.display(), "default configuration written"),
            Err(err) => warn!(%err, "could not write default configuration"),
        }
        Ok(config)
    }

    /// Data file path for `config`, resolved against this manager's directory.
    pub fn data_path(&self, config: &Config) -> PathBuf {
        config.data_path(&self.base)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
