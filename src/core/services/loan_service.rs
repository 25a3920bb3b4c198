//! Business logic helpers for udhaar entries.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::LedgerError;
use crate::ledger::{balance, filter, Book, Change, LoanFilter, LoanKind, LoanTransaction, PersonKey};

use super::{require_positive_amount, require_text, ServiceResult};

/// Provides validated CRUD helpers for udhaar entries.
pub struct LoanService;

impl LoanService {
    /// Records a new entry and returns its identifier.
    pub fn add(
        book: &mut Book,
        date: NaiveDate,
        kind: LoanKind,
        person: &str,
        amount: f64,
        purpose: &str,
    ) -> ServiceResult<Uuid> {
        let person = require_text(person, "person")?;
        let purpose = require_text(purpose, "purpose")?;
        let amount = require_positive_amount(amount)?;
        Ok(book.add_loan(LoanTransaction::new(date, kind, person, amount, purpose)))
    }

    /// Replaces every mutable field of the entry identified by `id`,
    /// refolding the person key from the display name.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        book: &mut Book,
        id: Uuid,
        date: NaiveDate,
        kind: LoanKind,
        person: &str,
        amount: f64,
        purpose: &str,
    ) -> ServiceResult<()> {
        let person = require_text(person, "person")?;
        let purpose = require_text(purpose, "purpose")?;
        let amount = require_positive_amount(amount)?;
        let loan = book
            .loan_mut(id)
            .ok_or_else(|| LedgerError::NotFound(format!("udhaar entry {id}")))?;
        loan.date = date;
        loan.kind = kind;
        loan.amount = amount;
        loan.purpose = purpose;
        loan.set_person(person);
        book.touch(Change::Loans);
        Ok(())
    }

    /// Removes the entry identified by `id`, returning the removed record.
    pub fn remove(book: &mut Book, id: Uuid) -> ServiceResult<LoanTransaction> {
        book.remove_loan(id)
            .ok_or_else(|| LedgerError::NotFound(format!("udhaar entry {id}")))
    }

    pub fn list(book: &Book) -> &[LoanTransaction] {
        book.loans()
    }

    /// Matching entries for display, newest first.
    pub fn filtered<'a>(book: &'a Book, loan_filter: &LoanFilter) -> Vec<&'a LoanTransaction> {
        filter::filter_loans(book.loans(), loan_filter)
    }

    /// Distinct people seen in the udhaar history, for filter dropdowns.
    /// Display names follow the balance engine's most-recent-entry rule.
    pub fn people(book: &Book) -> Vec<(PersonKey, String)> {
        balance::person_balances(book.loans())
            .into_iter()
            .map(|(key, person)| (key, person.display_name))
            .collect()
    }
}
