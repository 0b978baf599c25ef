//! Display formatting for terminal output
//!
//! Turns ledger data into the text the command line and the interactive
//! menu print.

pub mod expense;
pub mod summary;

pub use expense::{format_expense_details, format_expense_list, format_expense_row};
pub use summary::{format_balance, format_total};
