//! Expense display formatting
//!
//! The list is numbered from 1; those numbers are what `update` takes.

use crate::models::Expense;

/// Format a single expense as a numbered list row
pub fn format_expense_row(position: usize, expense: &Expense, symbol: &str) -> String {
    format!(
        "{:>4}  {:10}  {:30}  {:>12}",
        position,
        truncate(&expense.date, 10),
        truncate(&expense.description, 30),
        expense.amount.format_with_symbol(symbol)
    )
}

/// Format the whole list, or a notice when it is empty
pub fn format_expense_list<'a>(
    expenses: impl IntoIterator<Item = &'a Expense>,
    symbol: &str,
) -> String {
    let mut rows = expenses.into_iter().peekable();
    if rows.peek().is_none() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:10}  {:30}  {:>12}\n",
        "#", "Date", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(62));
    output.push('\n');

    for (i, expense) in rows.enumerate() {
        output.push_str(&format_expense_row(i + 1, expense, symbol));
        output.push('\n');
    }

    output
}

/// Format one expense on labelled lines, headed by its list number
pub fn format_expense_details(position: usize, expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Number:      {}\n", position));
    output.push_str(&format!("Date:        {}\n", expense.date));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!("Amount:      {}\n", expense.amount.format_with_symbol(symbol)));

    output
}

/// Pad or cut `s` to exactly `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
