//! Pure derivation of aggregate and per-person balances.
//!
//! Everything here folds slices into totals; nothing reads storage or holds
//! state, so retroactive edits and deletes are handled by simply re-running
//! the derivation over the current collections.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Credit, Expense, LoanKind, LoanTransaction, PersonKey};

/// Running totals for credits against expenses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CashSummary {
    pub total_credits: f64,
    pub total_expenses: f64,
    pub balance: f64,
}

/// Four-bucket udhaar totals across every person combined.
///
/// `total_given` and `total_taken` are raw sums of those kinds, not netted
/// against repayments; `net` applies the full formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanTotals {
    pub total_given: f64,
    pub total_taken: f64,
    pub total_received_back: f64,
    pub total_paid_back: f64,
    pub net: f64,
}

impl LoanTotals {
    fn apply(&mut self, kind: LoanKind, amount: f64) {
        match kind {
            LoanKind::Given => self.total_given += amount,
            LoanKind::Taken => self.total_taken += amount,
            LoanKind::ReceivedBack => self.total_received_back += amount,
            LoanKind::PaidBack => self.total_paid_back += amount,
        }
    }

    fn finish(mut self) -> Self {
        self.net = (self.total_given - self.total_received_back)
            - (self.total_taken - self.total_paid_back);
        self
    }
}

/// Derived position for a single person.
///
/// Positive `net` means the person owes the ledger owner, negative means the
/// owner owes the person, zero means settled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonBalance {
    pub display_name: String,
    pub total_given: f64,
    pub total_taken: f64,
    pub total_received_back: f64,
    pub total_paid_back: f64,
    pub net: f64,
}

struct Grouped {
    display_name: String,
    totals: LoanTotals,
    latest: (NaiveDate, DateTime<Utc>),
}

/// Sums credits against expenses.
pub fn cash_summary(credits: &[Credit], expenses: &[Expense]) -> CashSummary {
    let total_credits: f64 = credits.iter().map(|credit| credit.amount).sum();
    let total_expenses: f64 = expenses.iter().map(|expense| expense.amount).sum();
    CashSummary {
        total_credits,
        total_expenses,
        balance: total_credits - total_expenses,
    }
}

/// Applies the four-bucket formula across every person combined.
pub fn loan_totals(loans: &[LoanTransaction]) -> LoanTotals {
    fold_totals(loans.iter())
}

/// Net position for a single person's entries.
pub fn net_for(loans: &[LoanTransaction], key: &PersonKey) -> f64 {
    fold_totals(loans.iter().filter(|loan| &loan.person == key)).net
}

/// Groups entries by person key and derives each person's position.
///
/// Order-independent: the result is a pure sum over each group, so callers
/// never need to replay chronologically. The display name shown for a group
/// is the one on the entry with the greatest `(date, timestamp)`, so the
/// label stays deterministic when casing varies across a person's history.
pub fn person_balances(loans: &[LoanTransaction]) -> BTreeMap<PersonKey, PersonBalance> {
    let mut groups: BTreeMap<PersonKey, Grouped> = BTreeMap::new();
    for loan in loans {
        let entry = groups.entry(loan.person.clone()).or_insert_with(|| Grouped {
            display_name: loan.person_display.clone(),
            totals: LoanTotals::default(),
            latest: (loan.date, loan.timestamp),
        });
        if (loan.date, loan.timestamp) >= entry.latest {
            entry.latest = (loan.date, loan.timestamp);
            entry.display_name = loan.person_display.clone();
        }
        entry.totals.apply(loan.kind, loan.amount);
    }
    groups
        .into_iter()
        .map(|(key, group)| {
            let totals = group.totals.finish();
            let balance = PersonBalance {
                display_name: group.display_name,
                total_given: totals.total_given,
                total_taken: totals.total_taken,
                total_received_back: totals.total_received_back,
                total_paid_back: totals.total_paid_back,
                net: totals.net,
            };
            (key, balance)
        })
        .collect()
}

fn fold_totals<'a>(loans: impl Iterator<Item = &'a LoanTransaction>) -> LoanTotals {
    let mut totals = LoanTotals::default();
    for loan in loans {
        totals.apply(loan.kind, loan.amount);
    }
    totals.finish()
}
