use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::core::utils::{write_atomic, PathResolver};
use crate::errors::{ExpenseError, Result};

/// User preferences persisted next to the expense data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    /// ISO 4217 code used when formatting amounts.
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
        }
    }
}

impl Config {
    /// Updates a single setting by key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key.to_ascii_lowercase().as_str() {
            "currency" => {
                let code = value.trim().to_ascii_uppercase();
                if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(ExpenseError::Config(format!(
                        "`{value}` is not a three-letter currency code"
                    )));
                }
                self.currency = code;
            }
            "locale" => {
                let tag = value.trim();
                if tag.is_empty() {
                    return Err(ExpenseError::Config("locale must not be empty".into()));
                }
                self.locale = tag.to_string();
            }
            other => {
                return Err(ExpenseError::Config(format!(
                    "unknown setting `{other}` (expected currency or locale)"
                )))
            }
        }
        Ok(())
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// The config directory is created by the first `save`.
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: PathResolver::config_file_in(&base),
        }
    }

    /// Reads the stored configuration, or defaults when none exists yet.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            ExpenseError::Config(format!("{}: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
