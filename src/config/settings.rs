//! User settings for the expense ledger
//!
//! Manages display preferences and the database location override, persisted
//! as `config.json` in the data directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Format used when filling in today's date (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Prefix printed before amounts; empty by default
    #[serde(default)]
    pub currency_symbol: String,

    /// Database file; falls back to `ledger.db` in the data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            currency_symbol: String::new(),
            database_path: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, writing the defaults first if the file
    /// doesn't exist yet
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LedgerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            LedgerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            LedgerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Resolve which database file to open
    ///
    /// An explicit override wins, then `database_path`, then the default
    /// location under the data directory.
    pub fn database_file(&self, paths: &LedgerPaths, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.database_path.clone())
            .unwrap_or_else(|| paths.default_database_file())
    }
}
