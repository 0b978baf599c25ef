//! Ledger service
//!
//! Owns the database handle, the in-memory expense list and the income
//! figure. Every mutating call writes storage first and only then touches
//! the list, so a failed statement leaves both sides as they were.
//!
//! The list is loaded once when the ledger is opened and never re-read.

use std::path::Path;

use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Expense, ExpenseField, ExpenseId, ExpenseMatch, Income, Money, NewExpense, MAX_CENTS,
};
use crate::reports::{self, Balance, ExpenseTotal};
use crate::storage::ExpenseTable;

/// The expense ledger
pub struct Ledger {
    table: ExpenseTable,
    expenses: Vec<Expense>,
    income: Option<Income>,
}

impl Ledger {
    /// Open the database at `path`, creating the table if needed, and load
    /// every stored expense
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the file cannot be opened or the
    /// schema cannot be created.
    pub fn open(path: impl AsRef<Path>) -> LedgerResult<Self> {
        Self::from_table(ExpenseTable::open(path)?)
    }

    /// Open a ledger backed by a private in-memory database
    pub fn open_in_memory() -> LedgerResult<Self> {
        Self::from_table(ExpenseTable::open_in_memory()?)
    }

    fn from_table(table: ExpenseTable) -> LedgerResult<Self> {
        let expenses = table.load_all()?;
        info!(count = expenses.len(), "ledger loaded");

        Ok(Self {
            table,
            expenses,
            income: None,
        })
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Resolve a 0-based list position to the expense's stored id
    pub fn id_at(&self, index: i64) -> LedgerResult<ExpenseId> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.expenses.get(i))
            .map(|e| e.id)
            .ok_or(LedgerError::IndexOutOfRange {
                index,
                len: self.expenses.len(),
            })
    }

    /// Store a new expense and append it to the list
    ///
    /// # Errors
    ///
    /// Returns `InvalidNumericInput` if the amount is beyond [`MAX_CENTS`].
    pub fn add(&mut self, expense: NewExpense) -> LedgerResult<&Expense> {
        if !expense.amount.in_range() {
            return Err(LedgerError::InvalidNumericInput(format!(
                "{} is beyond the largest amount {}",
                expense.amount,
                Money::from_cents(MAX_CENTS)
            )));
        }

        let id = self.table.insert(&expense)?;
        self.expenses.push(expense.into_expense(id));
        info!(%id, "expense added");

        let index = self.expenses.len() - 1;
        Ok(&self.expenses[index])
    }

    /// Remove every expense the matcher selects; returns how many were removed
    pub fn delete_where(&mut self, matcher: &ExpenseMatch) -> LedgerResult<usize> {
        let ids: Vec<ExpenseId> = self
            .expenses
            .iter()
            .filter(|e| matcher.matches(e))
            .map(|e| e.id)
            .collect();

        if ids.is_empty() {
            return Ok(0);
        }

        self.table.delete_ids(&ids)?;
        self.expenses.retain(|e| !matcher.matches(e));
        info!(count = ids.len(), filter = %matcher, "expenses deleted");

        Ok(ids.len())
    }

    pub fn delete_by_date(&mut self, date: &str) -> LedgerResult<usize> {
        self.delete_where(&ExpenseMatch::Date(date.to_string()))
    }

    pub fn delete_by_description(&mut self, description: &str) -> LedgerResult<usize> {
        self.delete_where(&ExpenseMatch::Description(description.to_string()))
    }

    /// Amounts compare exactly in cents
    pub fn delete_by_amount(&mut self, amount: Money) -> LedgerResult<usize> {
        self.delete_where(&ExpenseMatch::Amount(amount))
    }

    /// Parse `amount` and delete by it; bad input removes nothing
    pub fn delete_by_amount_str(&mut self, amount: &str) -> LedgerResult<usize> {
        let amount = parse_amount(amount)?;
        self.delete_by_amount(amount)
    }

    /// Change one field of the expense with the given id
    ///
    /// Amount values are parsed as decimals; date and description are stored
    /// as given. Storage is addressed by id, so an identical twin of the
    /// expense is never touched.
    pub fn update_field(
        &mut self,
        id: ExpenseId,
        field: ExpenseField,
        value: &str,
    ) -> LedgerResult<&Expense> {
        let position = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| LedgerError::expense_not_found(id.to_string()))?;

        match field {
            ExpenseField::Amount => {
                let amount = parse_amount(value)?;
                self.table.update_field(id, field, &amount.to_f64())?;
                self.expenses[position].amount = amount;
            }
            ExpenseField::Date => {
                self.table.update_field(id, field, &value)?;
                self.expenses[position].date = value.to_string();
            }
            ExpenseField::Description => {
                self.table.update_field(id, field, &value)?;
                self.expenses[position].description = value.to_string();
            }
        }

        info!(%id, %field, "expense updated");
        Ok(&self.expenses[position])
    }

    /// Change one field of the expense at a 0-based list position
    pub fn update_field_at(
        &mut self,
        index: i64,
        field: ExpenseField,
        value: &str,
    ) -> LedgerResult<&Expense> {
        let id = self.id_at(index)?;
        self.update_field(id, field, value)
    }

    /// Sum of all amounts; `Empty` when there are no expenses
    pub fn total_expenses(&self) -> LedgerResult<ExpenseTotal> {
        reports::total(&self.expenses)
    }

    /// Replace the income figure
    pub fn set_income(&mut self, amount: Money) -> Income {
        let income = Income::new(amount);
        self.income = Some(income);
        info!(%amount, "income set");
        income
    }

    pub fn income(&self) -> Option<&Income> {
        self.income.as_ref()
    }

    /// Income minus total expenses
    ///
    /// # Errors
    ///
    /// Returns `MissingIncome` if no income has been set.
    pub fn final_balance(&self) -> LedgerResult<Balance> {
        reports::balance(self.income.as_ref(), &self.expenses)
    }
}

/// Parse user-entered amount text
pub fn parse_amount(input: &str) -> LedgerResult<Money> {
    Money::parse(input).map_err(|e| LedgerError::InvalidNumericInput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn expense(date: &str, description: &str, cents: i64) -> NewExpense {
        NewExpense::new(date, description, Money::from_cents(cents))
    }

    fn stored(ledger: &Ledger) -> Vec<Expense> {
        ledger.table.load_all().unwrap()
    }

    fn assert_in_sync(ledger: &Ledger) {
        assert_eq!(ledger.expenses(), stored(ledger).as_slice());
    }

    #[test]
    fn test_add_then_reopen_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.db");

        {
            let mut ledger = Ledger::open(&path).unwrap();
            ledger.add(expense("2024-03-05", "groceries", 15050)).unwrap();
        }

        let ledger = Ledger::open(&path).unwrap();
        assert_eq!(ledger.len(), 1);
        let loaded = &ledger.expenses()[0];
        assert_eq!(loaded.date, "2024-03-05");
        assert_eq!(loaded.description, "groceries");
        assert_eq!(loaded.amount, Money::from_cents(15050));
    }

    #[test]
    fn test_reopen_keeps_insertion_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.db");

        {
            let mut ledger = Ledger::open(&path).unwrap();
            ledger.add(expense("2024-02-01", "second date first", 100)).unwrap();
            ledger.add(expense("2024-01-01", "first date second", 200)).unwrap();
        }

        let ledger = Ledger::open(&path).unwrap();
        let descriptions: Vec<_> = ledger.expenses().iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["second date first", "first date second"]);
    }

    #[test]
    fn test_add_appends_to_list_and_storage() {
        let mut ledger = Ledger::open_in_memory().unwrap();

        let added = ledger.add(expense("2024-01-01", "rent", 50000)).unwrap().clone();

        assert_eq!(ledger.expenses(), [added].as_slice());
        assert_in_sync(&ledger);
    }

    #[test]
    fn test_total_sums_every_amount() {
        let mut ledger = Ledger::open_in_memory().unwrap();
        for cents in [1999, 1, 25000, -500] {
            ledger.add(expense("2024-01-01", "x", cents)).unwrap();
        }

        assert_eq!(
            ledger.total_expenses().unwrap(),
            ExpenseTotal::Sum(Money::from_cents(26500))
        );
    }

    #[test]
    fn test_total_empty_ledger() {
        let ledger = Ledger::open_in_memory().unwrap();

        let total = ledger.total_expenses().unwrap();
        assert!(total.is_empty());
        assert_eq!(total.amount(), Money::zero());
    }

    #[test]
    fn test_delete_by_description_removes_all_matches() {
        let mut ledger = Ledger::open_in_memory().unwrap();
        ledger.add(expense("2024-01-01", "coffee", 350)).unwrap();
        ledger.add(expense("2024-01-02", "lunch", 1200)).unwrap();
        ledger.add(expense("2024-01-03", "coffee", 420)).unwrap();

        let removed = ledger.delete_by_description("coffee").unwrap();

        assert_eq!(removed, 2);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.expenses()[0].description, "lunch");
        assert_in_sync(&ledger);
    }

    #[test]
    fn test_delete_by_amount_removes_identical_records() {
        let mut ledger = Ledger::open_in_memory().unwrap();
        ledger.add(expense("2024-01-01", "bus", 275)).unwrap();
        ledger.add(expense("2024-01-01", "bus", 275)).unwrap();
        ledger.add(expense("2024-01-01", "bus", 276)).unwrap();

        let removed = ledger.delete_by_amount_str("2.75").unwrap();

        assert_eq!(removed, 2);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.expenses()[0].amount, Money::from_cents(276));
        assert_in_sync(&ledger);
    }

    #[test]
    fn test_delete_by_amount_matches_values_with_float_drift() {
        let mut ledger = Ledger::open_in_memory().unwrap();
        // 0.1 + 0.2 stored as REAL would not compare equal to 0.3
        ledger.add(expense("2024-01-01", "candy", 30)).unwrap();

        assert_eq!(ledger.delete_by_amount(Money::parse("0.3").unwrap()).unwrap(), 1);
        assert!(ledger.is_empty());
        assert_in_sync(&ledger);
    }

    #[test]
    fn test_delete_by_amount_rejects_malformed_input() {
        let mut ledger = Ledger::open_in_memory().unwrap();
        ledger.add(expense("2024-01-01", "bus", 275)).unwrap();

        let err = ledger.delete_by_amount_str("two dollars").unwrap_err();

        assert!(matches!(err, LedgerError::InvalidNumericInput(_)));
        assert_eq!(ledger.len(), 1);
        assert_in_sync(&ledger);
    }

    #[test]
    fn test_delete_without_match_is_noop() {
        let mut ledger = Ledger::open_in_memory().unwrap();
        ledger.add(expense("2024-01-01", "rent", 50000)).unwrap();

        assert_eq!(ledger.delete_by_date("2023-12-31").unwrap(), 0);
        assert_eq!(ledger.len(), 1);
        assert_in_sync(&ledger);
    }

    #[test]
    fn test_update_each_field() {
        let mut ledger = Ledger::open_in_memory().unwrap();
        ledger.add(expense("2024-01-01", "rent", 50000)).unwrap();

        ledger.update_field_at(0, ExpenseField::Date, "2024-02-01").unwrap();
        ledger.update_field_at(0, ExpenseField::Description, "February rent").unwrap();
        let updated = ledger.update_field_at(0, ExpenseField::Amount, "525.25").unwrap();

        assert_eq!(updated.date, "2024-02-01");
        assert_eq!(updated.description, "February rent");
        assert_eq!(updated.amount, Money::from_cents(52525));
        assert_in_sync(&ledger);
    }

    #[test]
    fn test_update_out_of_range_leaves_ledger_unchanged() {
        let mut ledger = Ledger::open_in_memory().unwrap();
        ledger.add(expense("2024-01-01", "rent", 50000)).unwrap();
        ledger.add(expense("2024-01-02", "power", 8000)).unwrap();
        let before = ledger.expenses().to_vec();

        for index in [2, -1, i64::MAX, i64::MIN] {
            let err = ledger
                .update_field_at(index, ExpenseField::Description, "changed")
                .unwrap_err();
            assert!(
                matches!(err, LedgerError::IndexOutOfRange { index: i, len: 2 } if i == index),
                "unexpected error for {}: {:?}",
                index,
                err
            );
        }

        assert_eq!(ledger.expenses(), before.as_slice());
        assert_in_sync(&ledger);
    }

    #[test]
    fn test_update_amount_rejects_malformed_input() {
        let mut ledger = Ledger::open_in_memory().unwrap();
        ledger.add(expense("2024-01-01", "rent", 50000)).unwrap();

        let err = ledger
            .update_field_at(0, ExpenseField::Amount, "lots")
            .unwrap_err();

        assert!(matches!(err, LedgerError::InvalidNumericInput(_)));
        assert_eq!(ledger.expenses()[0].amount, Money::from_cents(50000));
        assert_in_sync(&ledger);
    }

    #[test]
    fn test_update_leaves_identical_twin_alone() {
        let mut ledger = Ledger::open_in_memory().unwrap();
        ledger.add(expense("2024-01-01", "rent", 50000)).unwrap();
        ledger.add(expense("2024-01-01", "rent", 50000)).unwrap();

        ledger.update_field_at(1, ExpenseField::Description, "deposit").unwrap();

        let rows = stored(&ledger);
        assert_eq!(rows[0].description, "rent");
        assert_eq!(rows[1].description, "deposit");
        assert_in_sync(&ledger);
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut ledger = Ledger::open_in_memory().unwrap();

        let err = ledger
            .update_field(ExpenseId::from_row_id(12), ExpenseField::Date, "2024-01-01")
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn test_balance() {
        let mut ledger = Ledger::open_in_memory().unwrap();
        ledger.add(expense("2024-01-01", "a", 20000)).unwrap();
        ledger.add(expense("2024-01-02", "b", 15050)).unwrap();

        assert!(matches!(ledger.final_balance(), Err(LedgerError::MissingIncome)));

        ledger.set_income(Money::parse("1000.00").unwrap());
        let balance = ledger.final_balance().unwrap();
        assert_eq!(balance.remaining, Money::from_cents(64950));
        assert_eq!(balance.remaining.to_string(), "649.50");
    }

    #[test]
    fn test_set_income_replaces_previous() {
        let mut ledger = Ledger::open_in_memory().unwrap();

        ledger.set_income(Money::from_cents(100));
        ledger.set_income(Money::from_cents(250));

        assert_eq!(ledger.income().map(|i| i.amount), Some(Money::from_cents(250)));
    }

    #[test]
    fn test_income_is_not_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.db");

        {
            let mut ledger = Ledger::open(&path).unwrap();
            ledger.set_income(Money::from_cents(200000));
        }

        let ledger = Ledger::open(&path).unwrap();
        assert!(ledger.income().is_none());
    }

    #[test]
    fn test_rent_scenario() {
        let mut ledger = Ledger::open_in_memory().unwrap();
        ledger.add(expense("2024-01-01", "rent", 50000)).unwrap();
        ledger.set_income(Money::from_cents(200000));

        assert_eq!(ledger.final_balance().unwrap().remaining, Money::from_cents(150000));

        ledger.delete_by_date("2024-01-01").unwrap();

        assert!(ledger.is_empty());
        assert_eq!(ledger.total_expenses().unwrap().amount(), Money::zero());
        assert_eq!(ledger.final_balance().unwrap().remaining, Money::from_cents(200000));
        assert_in_sync(&ledger);
    }

    #[test]
    fn test_largest_amounts_round_trip_and_total() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.db");
        let largest = parse_amount("9999999999999.99").unwrap();

        {
            let mut ledger = Ledger::open(&path).unwrap();
            ledger.add(NewExpense::new("2024-01-01", "big", largest)).unwrap();
            ledger.add(NewExpense::new("2024-01-02", "big", largest)).unwrap();
            let err = ledger
                .add(expense("2024-01-03", "too big", MAX_CENTS + 1))
                .unwrap_err();
            assert!(matches!(err, LedgerError::InvalidNumericInput(_)));
        }

        let mut ledger = Ledger::open(&path).unwrap();
        assert_eq!(ledger.expenses()[0].amount, largest);
        assert_eq!(ledger.expenses()[1].amount, largest);
        assert_eq!(
            ledger.total_expenses().unwrap().amount(),
            Money::from_cents(2 * MAX_CENTS)
        );

        ledger.set_income(parse_amount("-9999999999999.99").unwrap());
        assert_eq!(
            ledger.final_balance().unwrap().remaining,
            Money::from_cents(-3 * MAX_CENTS)
        );
    }

    #[test]
    fn test_amount_beyond_range_is_rejected() {
        let mut ledger = Ledger::open_in_memory().unwrap();

        for input in ["90000000000000000", "123456789012345.67", "10000000000000"] {
            let err = parse_amount(input).unwrap_err();
            assert!(matches!(err, LedgerError::InvalidNumericInput(_)), "{}", input);
        }

        ledger.add(expense("2024-01-01", "rent", 50000)).unwrap();
        let err = ledger
            .update_field_at(0, ExpenseField::Amount, "123456789012345.67")
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidNumericInput(_)));
        assert_eq!(ledger.expenses()[0].amount, Money::from_cents(50000));
        assert_in_sync(&ledger);
    }

    #[test]
    fn test_id_at() {
        let mut ledger = Ledger::open_in_memory().unwrap();
        let id = ledger.add(expense("2024-01-01", "rent", 50000)).unwrap().id;

        assert_eq!(ledger.id_at(0).unwrap(), id);
        assert!(matches!(
            ledger.id_at(1),
            Err(LedgerError::IndexOutOfRange { index: 1, len: 1 })
        ));
    }

    #[test]
    fn test_open_failure_is_storage_unavailable() {
        let temp_dir = TempDir::new().unwrap();

        let result = Ledger::open(temp_dir.path());

        assert!(matches!(result, Err(LedgerError::StorageUnavailable(_))));
    }
}
