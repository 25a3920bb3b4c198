use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Money spent by the ledger owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub date: NaiveDate,
    pub purpose: String,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

impl Expense {
    /// Creates a new expense entry with a fresh identifier.
    pub fn new(date: NaiveDate, amount: f64, purpose: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            purpose: purpose.into(),
            amount,
            timestamp: Utc::now(),
        }
    }
}
