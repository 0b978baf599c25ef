//! Expense model
//!
//! An expense is a dated, described amount. The date is kept as the text the
//! user typed; nothing in the ledger interprets it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ExpenseId;
use super::money::Money;

/// A stored expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Surrogate key assigned by the database
    pub id: ExpenseId,

    /// Calendar date as entered (conventionally YYYY-MM-DD)
    pub date: String,

    pub description: String,

    pub amount: Money,
}

/// An expense that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub date: String,
    pub description: String,
    pub amount: Money,
}

impl NewExpense {
    pub fn new(date: impl Into<String>, description: impl Into<String>, amount: Money) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount,
        }
    }

    /// Attach the id the database assigned
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            date: self.date,
            description: self.description,
            amount: self.amount,
        }
    }
}

/// An editable field of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseField {
    Date,
    Description,
    Amount,
}

impl ExpenseField {
    /// Column name in the `expenses` table
    pub fn column(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Description => "description",
            Self::Amount => "amount",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "date" | "d" => Some(Self::Date),
            "description" | "desc" => Some(Self::Description),
            "amount" | "amt" | "a" => Some(Self::Amount),
            _ => None,
        }
    }
}

impl fmt::Display for ExpenseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for ExpenseField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!("Invalid field: '{}'. Valid fields: date, description, amount", s)
        })
    }
}

/// Selects every expense whose field equals the given value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseMatch {
    Date(String),
    Description(String),
    Amount(Money),
}

impl ExpenseMatch {
    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            Self::Date(date) => expense.date == *date,
            Self::Description(text) => expense.description == *text,
            Self::Amount(amount) => expense.amount == *amount,
        }
    }
}

impl fmt::Display for ExpenseMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "date = {}", date),
            Self::Description(text) => write!(f, "description = {}", text),
            Self::Amount(amount) => write!(f, "amount = {}", amount),
        }
    }
}
