//! Business logic helpers for expenses paid by the owner.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::LedgerError;
use crate::ledger::{Book, Change, Expense};

use super::{require_positive_amount, require_text, ServiceResult};

/// Provides validated CRUD helpers for expense records.
pub struct ExpenseService;

impl ExpenseService {
    /// Records a new expense and returns its identifier.
    pub fn add(book: &mut Book, date: NaiveDate, amount: f64, purpose: &str) -> ServiceResult<Uuid> {
        let purpose = require_text(purpose, "purpose")?;
        let amount = require_positive_amount(amount)?;
        Ok(book.add_expense(Expense::new(date, amount, purpose)))
    }

    /// Replaces every mutable field of the expense identified by `id`.
    pub fn update(
        book: &mut Book,
        id: Uuid,
        date: NaiveDate,
        amount: f64,
        purpose: &str,
    ) -> ServiceResult<()> {
        let purpose = require_text(purpose, "purpose")?;
        let amount = require_positive_amount(amount)?;
        let expense = book
            .expense_mut(id)
            .ok_or_else(|| LedgerError::NotFound(format!("expense {id}")))?;
        expense.date = date;
        expense.amount = amount;
        expense.purpose = purpose;
        book.touch(Change::Expenses);
        Ok(())
    }

    /// Removes the expense identified by `id`, returning the removed record.
    pub fn remove(book: &mut Book, id: Uuid) -> ServiceResult<Expense> {
        book.remove_expense(id)
            .ok_or_else(|| LedgerError::NotFound(format!("expense {id}")))
    }

    pub fn list(book: &Book) -> &[Expense] {
        book.expenses()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, day).unwrap()
    }

    #[test]
    fn blank_purpose_is_rejected() {
        let mut book = Book::new();
        let err = ExpenseService::add(&mut book, date(1), 50.0, "  ")
            .expect_err("blank purpose must fail");
        assert!(matches!(err, LedgerError::Validation(_)));
        assert!(book.expenses().is_empty());
    }

    #[test]
    fn remove_returns_the_deleted_record() {
        let mut book = Book::new();
        let id = ExpenseService::add(&mut book, date(1), 80.0, "groceries").unwrap();
        let removed = ExpenseService::remove(&mut book, id).expect("remove");
        assert_eq!(removed.purpose, "groceries");
        assert!(book.expense(id).is_none());
    }
}
