pub mod backup;
pub mod json_backend;

use crate::errors::LedgerError;
use crate::ledger::Book;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends holding the four record slots.
pub trait StorageBackend: Send + Sync {
    /// Loads all four slots into a book. An absent or unreadable slot yields
    /// an empty collection, never an error.
    fn load_book(&self) -> Result<Book>;

    /// Persists all four slots.
    fn save_book(&self, book: &Book) -> Result<()>;

    /// Removes every persisted slot.
    fn clear(&self) -> Result<()>;
}

pub use backup::{export_document, import_document, BackupDocument, EXPORT_VERSION};
pub use json_backend::JsonStorage;
