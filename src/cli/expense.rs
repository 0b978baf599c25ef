//! Expense CLI commands
//!
//! One-shot commands against the ledger. Income is never stored, so
//! `balance` takes the income figure as an argument.

use clap::{ArgGroup, Subcommand};

use crate::config::settings::Settings;
use crate::display::{format_balance, format_expense_details, format_expense_list, format_total};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseField, ExpenseMatch, NewExpense};
use crate::reports;
use crate::services::ledger::{parse_amount, Ledger};

use super::today;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// What the money was spent on
        description: String,
        /// Expense date; defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List all expenses in the order they were added
    #[command(alias = "ls")]
    List,

    /// Delete every expense matching a date, description or amount
    #[command(group(ArgGroup::new("target").required(true)))]
    Delete {
        /// Delete expenses with this date
        #[arg(long, group = "target")]
        date: Option<String>,
        /// Delete expenses with this exact description
        #[arg(long, group = "target")]
        description: Option<String>,
        /// Delete expenses with this amount
        #[arg(long, group = "target", allow_hyphen_values = true)]
        amount: Option<String>,
    },

    /// Change one field of an expense
    Update {
        /// Position in `list` output (starting at 1)
        #[arg(allow_negative_numbers = true)]
        number: i64,
        /// Field to change: date, description or amount
        field: ExpenseField,
        /// New value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Show the sum of all expenses
    Total,

    /// Show income minus total expenses
    Balance {
        /// Income to compare against
        #[arg(short, long, allow_hyphen_values = true)]
        income: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            description,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = date.unwrap_or_else(|| today(settings));
            let position = ledger.len() + 1;

            let expense = ledger.add(NewExpense::new(date, description, amount))?;

            println!("Expense added successfully.");
            print!("{}", format_expense_details(position, expense, symbol));
        }

        ExpenseCommands::List => {
            print!("{}", format_expense_list(reports::list(ledger.expenses()), symbol));
        }

        ExpenseCommands::Delete {
            date,
            description,
            amount,
        } => {
            let matcher = match (date, description, amount) {
                (Some(date), _, _) => ExpenseMatch::Date(date),
                (_, Some(description), _) => ExpenseMatch::Description(description),
                (_, _, Some(amount)) => ExpenseMatch::Amount(parse_amount(&amount)?),
                (None, None, None) => {
                    return Err(LedgerError::Validation(
                        "Specify one of --date, --description or --amount".into(),
                    ))
                }
            };

            let removed = ledger.delete_where(&matcher)?;
            if removed == 0 {
                println!("No expenses matched {}.", matcher);
            } else {
                println!("Deleted {} expense(s) with {}.", removed, matcher);
            }
        }

        ExpenseCommands::Update {
            number,
            field,
            value,
        } => {
            let expense = ledger
                .update_field_at(number.saturating_sub(1), field, &value)
                .map_err(|e| match e {
                    LedgerError::IndexOutOfRange { len, .. } => LedgerError::Validation(format!(
                        "No expense number {}: ledger has {} expense(s)",
                        number, len
                    )),
                    other => other,
                })?;

            // Only a number of at least 1 gets this far
            let position = usize::try_from(number).unwrap_or_default();

            println!("Expense {} updated successfully.", field);
            print!("{}", format_expense_details(position, expense, symbol));
        }

        ExpenseCommands::Total => {
            print!("{}", format_total(&ledger.total_expenses()?, symbol));
        }

        ExpenseCommands::Balance { income } => {
            let income = parse_amount(&income)?;
            ledger.set_income(income);

            let balance = ledger.final_balance()?;
            print!("{}", format_balance(&balance, symbol));
        }
    }

    Ok(())
}
