//! Path management for the expense ledger
//!
//! Resolves the platform data directory via the `directories` crate:
//!
//! - Linux: `$XDG_DATA_HOME/expense-ledger` or `~/.local/share/expense-ledger`
//! - macOS: `~/Library/Application Support/expense-ledger`
//! - Windows: `%APPDATA%\expense-ledger\data`

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::LedgerError;

/// Manages all paths used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve the platform data directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let dirs = ProjectDirs::from("", "", "expense-ledger").ok_or_else(|| {
            LedgerError::Config("Could not determine a home directory".into())
        })?;

        Ok(Self {
            base_dir: dirs.data_dir().to_path_buf(),
        })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default database location (used when no override is configured)
    pub fn default_database_file(&self) -> PathBuf {
        self.base_dir.join("ledger.db")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create data directory: {}", e)))
    }
}
