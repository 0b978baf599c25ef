//! Schema creation
//!
//! The on-disk layout is one table. It is created if absent and never
//! migrated.

use rusqlite::Connection;

use crate::error::LedgerError;

/// DDL for the expense table
pub const CREATE_EXPENSES_SQL: &str = "CREATE TABLE IF NOT EXISTS expenses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT,
    description TEXT,
    amount REAL
)";

/// Create the expense table if it does not exist yet
pub fn ensure_schema(conn: &Connection) -> Result<(), LedgerError> {
    conn.execute_batch(CREATE_EXPENSES_SQL)
        .map_err(|e| LedgerError::StorageUnavailable(format!("Failed to create schema: {}", e)))
}
