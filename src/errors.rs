use thiserror::Error;

/// Error type that captures common ledger failures.
///
/// Every variant is recoverable at the caller; all state is memory-resident
/// and re-derivable from the persisted collections.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Duplicate name: {0}")]
    DuplicateName(String),
    #[error("Invalid backup format: {0}")]
    ImportFormat(String),
    #[error("Storage error: {0}")]
    Storage(String),
}
