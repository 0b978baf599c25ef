//! Interactive menu
//!
//! A numbered menu loop over a single ledger. Income set here lasts for the
//! session only. Recoverable errors are printed and the menu is shown again;
//! storage failures end the session.

use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::display::{format_balance, format_expense_list, format_total};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseField, NewExpense};
use crate::reports;
use crate::services::ledger::{parse_amount, Ledger};

use super::today;

const MENU: &str = "
Welcome to the finance expenses management!
1. Add Expense
2. View Expenses
3. Delete Expense
4. Update Expense
5. Total Expenses
6. Add Income
7. Show Final Balance
8. Exit";

/// Menu session reading from `input` and writing to `output`
pub struct Shell<'a, R, W> {
    ledger: &'a mut Ledger,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(ledger: &'a mut Ledger, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            ledger,
            settings,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> LedgerResult<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Enter your choice (1-8): ")? else {
                return Ok(());
            };

            let result = match choice.as_str() {
                "1" => self.add_expense(),
                "2" => self.view_expenses(),
                "3" => self.delete_expenses(),
                "4" => self.update_expense(),
                "5" => self.total_expenses(),
                "6" => self.add_income(),
                "7" => self.final_balance(),
                "8" => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Ok(())
                }
            };

            match result {
                Ok(()) => {}
                Err(Interrupt::EndOfInput) => return Ok(()),
                Err(Interrupt::Failed(err)) if err.is_recoverable() => {
                    writeln!(self.output, "{}", err)?;
                }
                Err(Interrupt::Failed(err)) => return Err(err),
            }
        }
    }

    /// Print `message` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask(&mut self, message: &str) -> Step<String> {
        self.prompt(message)?.ok_or(Interrupt::EndOfInput)
    }

    fn add_expense(&mut self) -> Step<()> {
        let date = self.ask("Enter the date (YYYY-MM-DD) [today]: ")?;
        let date = if date.is_empty() {
            today(self.settings)
        } else {
            date
        };
        let description = self.ask("Enter the description: ")?;
        let amount = parse_amount(&self.ask("Enter the amount: ")?)?;

        self.ledger.add(NewExpense::new(date, description, amount))?;
        writeln!(self.output, "Expense added successfully.")?;
        Ok(())
    }

    fn view_expenses(&mut self) -> Step<()> {
        let listing = format_expense_list(
            reports::list(self.ledger.expenses()),
            &self.settings.currency_symbol,
        );
        write!(self.output, "{}", listing)?;
        Ok(())
    }

    fn delete_expenses(&mut self) -> Step<()> {
        writeln!(self.output, "How would you like to delete an expense?")?;
        writeln!(self.output, "1. By Date")?;
        writeln!(self.output, "2. By Description")?;
        writeln!(self.output, "3. By Amount")?;

        let (removed, field) = match self.ask("Enter your choice (1-3): ")?.as_str() {
            "1" => {
                let date = self.ask("Enter the date of the expense to delete (YYYY-MM-DD): ")?;
                (self.ledger.delete_by_date(&date)?, ExpenseField::Date)
            }
            "2" => {
                let text = self.ask("Enter the description of the expense to delete: ")?;
                (self.ledger.delete_by_description(&text)?, ExpenseField::Description)
            }
            "3" => {
                let amount = self.ask("Enter the amount of the expense to delete: ")?;
                (self.ledger.delete_by_amount_str(&amount)?, ExpenseField::Amount)
            }
            _ => {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                return Ok(());
            }
        };

        writeln!(
            self.output,
            "Deleted {} expense(s) with the specified {}.",
            removed, field
        )?;
        Ok(())
    }

    fn update_expense(&mut self) -> Step<()> {
        let number = self.ask("Enter the expense index to update: ")?;
        let Ok(number) = number.parse::<i64>() else {
            writeln!(self.output, "Invalid input. Please enter a valid index.")?;
            return Ok(());
        };
        // Reject a bad position before asking for the new value
        let id = match self.ledger.id_at(number.saturating_sub(1)) {
            Ok(id) => id,
            Err(LedgerError::IndexOutOfRange { .. }) => {
                writeln!(self.output, "Invalid expense index.")?;
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        writeln!(self.output, "What would you like to update?")?;
        writeln!(self.output, "1. Date")?;
        writeln!(self.output, "2. Description")?;
        writeln!(self.output, "3. Amount")?;

        let field = match self.ask("Enter your choice (1-3): ")?.as_str() {
            "1" => ExpenseField::Date,
            "2" => ExpenseField::Description,
            "3" => ExpenseField::Amount,
            _ => {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                return Ok(());
            }
        };

        let value = self.ask(&format!("Enter the new {}: ", field))?;
        self.ledger.update_field(id, field, &value)?;
        writeln!(self.output, "Expense {} updated successfully.", field)?;
        Ok(())
    }

    fn total_expenses(&mut self) -> Step<()> {
        let total = format_total(&self.ledger.total_expenses()?, &self.settings.currency_symbol);
        write!(self.output, "{}", total)?;
        Ok(())
    }

    fn add_income(&mut self) -> Step<()> {
        let amount = parse_amount(&self.ask("Enter your income amount: ")?)?;
        self.ledger.set_income(amount);
        writeln!(self.output, "Income added successfully.")?;
        Ok(())
    }

    fn final_balance(&mut self) -> Step<()> {
        let balance = self.ledger.final_balance()?;
        write!(
            self.output,
            "{}",
            format_balance(&balance, &self.settings.currency_symbol)
        )?;
        Ok(())
    }
}

/// Why a menu action stopped early
enum Interrupt {
    EndOfInput,
    Failed(LedgerError),
}

impl From<LedgerError> for Interrupt {
    fn from(err: LedgerError) -> Self {
        Self::Failed(err)
    }
}

impl From<std::io::Error> for Interrupt {
    fn from(err: std::io::Error) -> Self {
        Self::Failed(err.into())
    }
}

type Step<T> = Result<T, Interrupt>;
