use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::loan::PersonKey;

/// A saved person the owner exchanges udhaar with.
///
/// Identity is the `id`; the name may be rewritten by a rename, which also
/// rekeys the historical udhaar entries that matched the old name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Creates a new contact with a fresh identifier.
    pub fn new(name: impl Into<String>, phone: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            phone,
            created_at: Utc::now(),
        }
    }

    /// The case-folded key this contact's udhaar entries group under.
    pub fn key(&self) -> PersonKey {
        PersonKey::fold(&self.name)
    }
}
