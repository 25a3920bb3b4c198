use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Money received by the ledger owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credit {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: f64,
    pub from: String,
    pub timestamp: DateTime<Utc>,
}

impl Credit {
    /// Creates a new credit entry with a fresh identifier.
    pub fn new(date: NaiveDate, amount: f64, from: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            from: from.into(),
            timestamp: Utc::now(),
        }
    }
}
