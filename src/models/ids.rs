//! Strongly-typed surrogate key for stored expenses
//!
//! The database assigns these with `AUTOINCREMENT`; wrapping the raw `i64`
//! keeps row ids from being confused with list positions.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Wrap a row id returned by the database
    pub const fn from_row_id(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying row id
    pub const fn row_id(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
