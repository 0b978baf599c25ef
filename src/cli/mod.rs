//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger service.

pub mod expense;
pub mod shell;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use shell::Shell;

use std::fmt::Write;

use crate::config::settings::Settings;

/// Today's date rendered with the configured date format
///
/// An unusable format string falls back to `YYYY-MM-DD`.
pub fn today(settings: &Settings) -> String {
    let date = chrono::Local::now().date_naive();

    let mut rendered = String::new();
    if write!(rendered, "{}", date.format(&settings.date_format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    rendered
}
