//! Totals and balance
//!
//! Pure functions over the current expense list and income figure.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, Income, Money};

/// Sum of all expense amounts
///
/// An empty ledger is not an error; it reports as `Empty` with a zero amount
/// so callers can tell "no expenses" apart from expenses that net to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseTotal {
    Empty,
    Sum(Money),
}

impl ExpenseTotal {
    pub fn amount(&self) -> Money {
        match self {
            Self::Empty => Money::zero(),
            Self::Sum(amount) => *amount,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Income minus total expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
    pub income: Money,
    pub expenses: ExpenseTotal,
    pub remaining: Money,
}

/// Every expense in insertion order
pub fn list(expenses: &[Expense]) -> impl Iterator<Item = &Expense> {
    expenses.iter()
}

/// Sum of every amount; fails if the sum leaves the representable range
pub fn total(expenses: &[Expense]) -> LedgerResult<ExpenseTotal> {
    if expenses.is_empty() {
        return Ok(ExpenseTotal::Empty);
    }

    let sum = expenses
        .iter()
        .try_fold(Money::zero(), |acc, e| acc.checked_add(e.amount))
        .ok_or_else(|| out_of_range("total of expenses"))?;
    Ok(ExpenseTotal::Sum(sum))
}

/// Income minus total expenses; fails with `MissingIncome` if no income is set
pub fn balance(income: Option<&Income>, expenses: &[Expense]) -> LedgerResult<Balance> {
    let income = income.ok_or(LedgerError::MissingIncome)?;
    let expenses = total(expenses)?;
    let remaining = income
        .amount
        .checked_sub(expenses.amount())
        .ok_or_else(|| out_of_range("final balance"))?;

    Ok(Balance {
        income: income.amount,
        expenses,
        remaining,
    })
}

fn out_of_range(what: &str) -> LedgerError {
    LedgerError::InvalidNumericInput(format!("{} is out of range", what))
}
