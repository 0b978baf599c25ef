//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The database could not be opened or its schema could not be ensured
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A statement against an already-open database failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// An amount could not be parsed as a decimal number
    #[error("Invalid amount: {0}")]
    InvalidNumericInput(String),

    /// A positional index outside the current expense list
    #[error("Invalid expense index {index}: ledger has {len} expense(s)")]
    IndexOutOfRange { index: i64, len: usize },

    /// Balance requested before any income was set
    #[error("No income added. Please add your income first.")]
    MissingIncome,

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl LedgerError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether the caller can report this and let the user try again
    ///
    /// Only storage failures are treated as fatal.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::StorageUnavailable(_) | Self::Storage(_))
    }
}

// Implement From traits for common error types

impl From<rusqlite::Error> for LedgerError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
