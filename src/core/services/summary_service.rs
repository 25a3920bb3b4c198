use std::collections::BTreeMap;

use crate::ledger::{balance, Book, CashSummary, LoanTotals, PersonBalance, PersonKey};

/// Read-only facade over the balance engine for whole-book summaries.
pub struct SummaryService;

impl SummaryService {
    /// Credits against expenses.
    pub fn cash(book: &Book) -> CashSummary {
        balance::cash_summary(book.credits(), book.expenses())
    }

    /// Four-bucket udhaar totals across every person.
    pub fn loans(book: &Book) -> LoanTotals {
        balance::loan_totals(book.loans())
    }

    /// Per-person positions keyed by the case-folded name.
    pub fn people(book: &Book) -> BTreeMap<PersonKey, PersonBalance> {
        balance::person_balances(book.loans())
    }
}
