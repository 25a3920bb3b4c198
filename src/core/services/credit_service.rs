//! Business logic helpers for credits received by the owner.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::LedgerError;
use crate::ledger::{Book, Change, Credit};

use super::{require_positive_amount, require_text, ServiceResult};

/// Provides validated CRUD helpers for credit records.
pub struct CreditService;

impl CreditService {
    /// Records a new credit and returns its identifier.
    pub fn add(book: &mut Book, date: NaiveDate, amount: f64, from: &str) -> ServiceResult<Uuid> {
        let from = require_text(from, "from")?;
        let amount = require_positive_amount(amount)?;
        Ok(book.add_credit(Credit::new(date, amount, from)))
    }

    /// Replaces every mutable field of the credit identified by `id`.
    pub fn update(
        book: &mut Book,
        id: Uuid,
        date: NaiveDate,
        amount: f64,
        from: &str,
    ) -> ServiceResult<()> {
        let from = require_text(from, "from")?;
        let amount = require_positive_amount(amount)?;
        let credit = book
            .credit_mut(id)
            .ok_or_else(|| LedgerError::NotFound(format!("credit {id}")))?;
        credit.date = date;
        credit.amount = amount;
        credit.from = from;
        book.touch(Change::Credits);
        Ok(())
    }

    /// Removes the credit identified by `id`, returning the removed record.
    pub fn remove(book: &mut Book, id: Uuid) -> ServiceResult<Credit> {
        book.remove_credit(id)
            .ok_or_else(|| LedgerError::NotFound(format!("credit {id}")))
    }

    pub fn list(book: &Book) -> &[Credit] {
        book.credits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, day).unwrap()
    }

    #[test]
    fn add_validates_before_mutating() {
        let mut book = Book::new();
        let err = CreditService::add(&mut book, date(1), -10.0, "Salary")
            .expect_err("negative amount must fail");
        assert!(matches!(err, LedgerError::Validation(_)));
        assert_eq!(book.revision(), 0, "failed add must not touch the book");

        let id = CreditService::add(&mut book, date(1), 500.0, " Salary ").expect("valid add");
        assert_eq!(book.credit(id).unwrap().from, "Salary");
    }

    #[test]
    fn update_replaces_all_mutable_fields() {
        let mut book = Book::new();
        let id = CreditService::add(&mut book, date(1), 500.0, "Salary").unwrap();
        CreditService::update(&mut book, id, date(2), 650.0, "Bonus").expect("update");
        let credit = book.credit(id).unwrap();
        assert_eq!(credit.date, date(2));
        assert_eq!(credit.amount, 650.0);
        assert_eq!(credit.from, "Bonus");
    }

    #[test]
    fn update_unknown_id_reports_not_found() {
        let mut book = Book::new();
        let err = CreditService::update(&mut book, Uuid::new_v4(), date(1), 10.0, "x")
            .expect_err("unknown id must fail");
        assert!(matches!(err, LedgerError::NotFound(_)));
    }
}
