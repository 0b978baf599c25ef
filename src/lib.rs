//! Expense Ledger - personal expense tracking backed by SQLite
//!
//! Records dated expenses and a single income figure, keeps the expenses in
//! a local database, and reports the total spent and the balance left.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory and settings
//! - `error`: Custom error types
//! - `models`: Expenses, income and money amounts
//! - `storage`: The SQLite expense table
//! - `services`: The ledger, keeping the in-memory list and the table in step
//! - `reports`: Totals and balance over the in-memory list
//! - `display`: Terminal formatting
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_ledger::models::{Money, NewExpense};
//! use expense_ledger::services::Ledger;
//!
//! let mut ledger = Ledger::open("ledger.db")?;
//! ledger.add(NewExpense::new("2024-01-01", "rent", Money::from_cents(50000)))?;
//! ledger.set_income(Money::from_cents(200000));
//! println!("{}", ledger.final_balance()?.remaining);
//! # Ok::<(), expense_ledger::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
