use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Case-folded canonical form of a person's name.
///
/// This is the join key between udhaar entries and contacts: two entries with
/// equal keys refer to the same real-world person no matter how the display
/// casing varies between them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PersonKey(String);

impl PersonKey {
    /// Folds a display name into its canonical key form.
    pub fn fold(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Direction of an udhaar entry relative to the ledger owner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LoanKind {
    /// Money lent out; the person owes the owner.
    Given,
    /// Money borrowed; the owner owes the person.
    Taken,
    /// Collection on an earlier `Given`.
    ReceivedBack,
    /// Repayment of an earlier `Taken`.
    PaidBack,
}

impl LoanKind {
    /// Human-facing label for history rows.
    pub fn label(self) -> &'static str {
        match self {
            LoanKind::Given => "Money Lent",
            LoanKind::Taken => "Money Borrowed",
            LoanKind::ReceivedBack => "Received Back",
            LoanKind::PaidBack => "Paid Back",
        }
    }
}

/// A peer-to-peer loan entry ("udhaar").
///
/// The person link is the derived `PersonKey` join, never a contact id; an
/// entry can exist for a key that has no contact record yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoanTransaction {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: LoanKind,
    #[serde(rename = "personKey")]
    pub person: PersonKey,
    #[serde(rename = "personDisplay")]
    pub person_display: String,
    pub amount: f64,
    pub purpose: String,
    pub timestamp: DateTime<Utc>,
}

impl LoanTransaction {
    /// Creates a new entry, folding the person key from the display name.
    pub fn new(
        date: NaiveDate,
        kind: LoanKind,
        person_display: impl Into<String>,
        amount: f64,
        purpose: impl Into<String>,
    ) -> Self {
        let display = person_display.into();
        Self {
            id: Uuid::new_v4(),
            date,
            kind,
            person: PersonKey::fold(&display),
            person_display: display,
            amount,
            purpose: purpose.into(),
            timestamp: Utc::now(),
        }
    }

    /// Rebinds the entry to a person, refolding the key from the display name.
    pub fn set_person(&mut self, display: impl Into<String>) {
        let display = display.into();
        self.person = PersonKey::fold(&display);
        self.person_display = display;
    }
}
