//! Total and balance formatting

use crate::reports::{Balance, ExpenseTotal};

pub fn format_total(total: &ExpenseTotal, symbol: &str) -> String {
    match total {
        ExpenseTotal::Empty => "No expenses to calculate.\n".to_string(),
        ExpenseTotal::Sum(amount) => {
            format!("Total expenses: {}\n", amount.format_with_symbol(symbol))
        }
    }
}

pub fn format_balance(balance: &Balance, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Total Income:   {:>12}\n",
        balance.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Expenses: {:>12}\n",
        balance.expenses.amount().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Final Balance:  {:>12}\n",
        balance.remaining.format_with_symbol(symbol)
    ));

    output
}
