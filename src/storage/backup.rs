//! Whole-ledger export and import documents.
//!
//! Field names match the on-disk backup format exactly; `contacts` is
//! optional so documents from the pre-contacts format still import.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;
use crate::ledger::{Book, Contact, Credit, Expense, LoanTransaction};

pub const EXPORT_VERSION: &str = "2.0";

/// A full backup of the four collections plus export metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupDocument {
    pub credits: Vec<Credit>,
    pub expenses: Vec<Expense>,
    pub udhaar: Vec<LoanTransaction>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(rename = "exportDate", default = "Utc::now")]
    pub export_date: DateTime<Utc>,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    EXPORT_VERSION.to_string()
}

/// Snapshots the book into an export document stamped with the current time.
pub fn export_document(book: &Book) -> BackupDocument {
    BackupDocument {
        credits: book.credits().to_vec(),
        expenses: book.expenses().to_vec(),
        udhaar: book.loans().to_vec(),
        contacts: book.contacts().to_vec(),
        export_date: Utc::now(),
        version: EXPORT_VERSION.to_string(),
    }
}

pub fn to_json(document: &BackupDocument) -> Result<String, LedgerError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Parses a backup document.
///
/// Malformed JSON or a document missing any of the `credits`, `expenses`,
/// or `udhaar` arrays is rejected wholesale; the caller's collections are
/// never touched on failure.
pub fn import_document(json: &str) -> Result<BackupDocument, LedgerError> {
    serde_json::from_str(json).map_err(|error| LedgerError::ImportFormat(error.to_string()))
}

/// Dated default file name for an export download.
pub fn suggested_file_name(date: NaiveDate) -> String {
    format!("hisaab-backup-{}.json", date.format("%Y-%m-%d"))
}
