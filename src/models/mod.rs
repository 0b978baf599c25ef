//! Core data models for the expense ledger
//!
//! This module contains the data structures that represent the ledger
//! domain: expense records, the income figure and money amounts.

pub mod expense;
pub mod ids;
pub mod income;
pub mod money;

pub use expense::{Expense, ExpenseField, ExpenseMatch, NewExpense};
pub use ids::ExpenseId;
pub use income::Income;
pub use money::{Money, MoneyParseError, MAX_CENTS};
