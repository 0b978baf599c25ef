//! Reports module for the expense ledger
//!
//! Read-only aggregates over the ledger's in-memory expenses and income.
//! Nothing here touches the database.

pub mod summary;

pub use summary::{balance, list, total, Balance, ExpenseTotal};
