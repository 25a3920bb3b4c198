//! Stateless display filters over the record collections.
//!
//! All functions return borrowed subsequences sorted newest-date-first;
//! records sharing a date keep their input order (stable sort).

use chrono::NaiveDate;

use super::{Credit, Expense, LoanKind, LoanTransaction, PersonKey};

/// Inclusive calendar-day bounds; an open side means no bound there.
///
/// `end` matches any record dated anywhere within that calendar day, so a
/// range ending on `2024-01-15` includes records dated exactly `2024-01-15`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

/// Display filter over the udhaar history; `None` selects everything.
#[derive(Debug, Clone, Default)]
pub struct LoanFilter {
    pub range: DateRange,
    pub person: Option<PersonKey>,
    pub kind: Option<LoanKind>,
}

impl LoanFilter {
    fn matches(&self, loan: &LoanTransaction) -> bool {
        self.range.contains(loan.date)
            && self.person.as_ref().map_or(true, |person| &loan.person == person)
            && self.kind.map_or(true, |kind| loan.kind == kind)
    }
}

pub fn filter_credits<'a>(credits: &'a [Credit], range: &DateRange) -> Vec<&'a Credit> {
    let mut matching: Vec<&Credit> = credits
        .iter()
        .filter(|credit| range.contains(credit.date))
        .collect();
    matching.sort_by(|a, b| b.date.cmp(&a.date));
    matching
}

pub fn filter_expenses<'a>(expenses: &'a [Expense], range: &DateRange) -> Vec<&'a Expense> {
    let mut matching: Vec<&Expense> = expenses
        .iter()
        .filter(|expense| range.contains(expense.date))
        .collect();
    matching.sort_by(|a, b| b.date.cmp(&a.date));
    matching
}

pub fn filter_loans<'a>(loans: &'a [LoanTransaction], filter: &LoanFilter) -> Vec<&'a LoanTransaction> {
    let mut matching: Vec<&LoanTransaction> =
        loans.iter().filter(|loan| filter.matches(loan)).collect();
    matching.sort_by(|a, b| b.date.cmp(&a.date));
    matching
}
