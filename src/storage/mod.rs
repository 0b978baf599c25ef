//! Storage layer for the expense ledger
//!
//! A single SQLite table holds the expense rows. Every statement runs in
//! autocommit mode, so each call is durable once it returns.

pub mod expenses;
pub mod schema;

pub use expenses::ExpenseTable;
pub use schema::ensure_schema;
