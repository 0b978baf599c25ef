//! Expense table repository
//!
//! Thin wrapper over the SQLite connection. It knows nothing about the
//! in-memory list; keeping the two in step is the ledger's job.

use std::path::Path;

use rusqlite::{params, Connection, ToSql};
use tracing::debug;

use crate::error::LedgerError;
use crate::models::{Expense, ExpenseField, ExpenseId, Money, NewExpense};

use super::schema::ensure_schema;

/// Repository for the `expenses` table
pub struct ExpenseTable {
    conn: Connection,
}

impl ExpenseTable {
    /// Open (or create) the database file and ensure the schema exists
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                LedgerError::StorageUnavailable(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let conn = Connection::open(path).map_err(|e| {
            LedgerError::StorageUnavailable(format!("Failed to open {}: {}", path.display(), e))
        })?;
        ensure_schema(&conn)?;

        debug!(path = %path.display(), "opened expense database");

        Ok(Self { conn })
    }

    /// Open a private in-memory database (useful for testing)
    pub fn open_in_memory() -> Result<Self, LedgerError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| LedgerError::StorageUnavailable(e.to_string()))?;
        ensure_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Read every row in storage order
    pub fn load_all(&self) -> Result<Vec<Expense>, LedgerError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, date, description, amount FROM expenses ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, Option<f64>>(3)?,
            ))
        })?;

        let mut expenses = Vec::new();
        for row in rows {
            let (id, date, description, amount) = row?;
            let amount = Money::from_f64(amount.unwrap_or(0.0)).ok_or_else(|| {
                LedgerError::Storage(format!("Row {} has an amount out of range", id))
            })?;

            expenses.push(Expense {
                id: ExpenseId::from_row_id(id),
                date: date.unwrap_or_default(),
                description: description.unwrap_or_default(),
                amount,
            });
        }

        debug!(count = expenses.len(), "loaded expenses");
        Ok(expenses)
    }

    /// Insert a row and return the id the database assigned
    pub fn insert(&self, expense: &NewExpense) -> Result<ExpenseId, LedgerError> {
        self.conn.execute(
            "INSERT INTO expenses (date, description, amount) VALUES (?1, ?2, ?3)",
            params![expense.date, expense.description, expense.amount.to_f64()],
        )?;

        let id = ExpenseId::from_row_id(self.conn.last_insert_rowid());
        debug!(%id, "inserted expense row");
        Ok(id)
    }

    /// Set one column of a single row
    ///
    /// Returns `NotFound` if no row has the given id.
    pub fn update_field(
        &self,
        id: ExpenseId,
        field: ExpenseField,
        value: &dyn ToSql,
    ) -> Result<(), LedgerError> {
        let sql = format!("UPDATE expenses SET {} = ?1 WHERE id = ?2", field.column());
        let changed = self.conn.execute(&sql, params![value, id.row_id()])?;

        if changed == 0 {
            return Err(LedgerError::expense_not_found(id.to_string()));
        }

        debug!(%id, %field, "updated expense row");
        Ok(())
    }

    /// Delete the given rows in one transaction and return how many went away
    pub fn delete_ids(&mut self, ids: &[ExpenseId]) -> Result<usize, LedgerError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let tx = self.conn.transaction()?;
        let mut removed = 0;
        {
            let mut stmt = tx.prepare("DELETE FROM expenses WHERE id = ?1")?;
            for id in ids {
                removed += stmt.execute(params![id.row_id()])?;
            }
        }
        tx.commit()?;

        debug!(count = removed, "deleted expense rows");
        Ok(removed)
    }
}
