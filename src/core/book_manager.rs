use crate::errors::LedgerError;
use crate::ledger::Book;
use crate::storage::{backup, BackupDocument, StorageBackend};

/// Facade that coordinates the in-memory book with the persistence boundary.
pub struct BookManager {
    pub book: Book,
    storage: Box<dyn StorageBackend>,
}

impl BookManager {
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        Self {
            book: Book::new(),
            storage,
        }
    }

    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    /// Restores the four collections; absent or corrupt slots load as empty.
    pub fn load(&mut self) -> Result<(), LedgerError> {
        self.book = self.storage.load_book()?;
        tracing::info!(
            credits = self.book.credits().len(),
            expenses = self.book.expenses().len(),
            udhaar = self.book.loans().len(),
            contacts = self.book.contacts().len(),
            "book restored"
        );
        Ok(())
    }

    /// Persists the four collections.
    pub fn save(&self) -> Result<(), LedgerError> {
        self.storage.save_book(&self.book)
    }

    /// Snapshots the current book into an export document.
    pub fn export_backup(&self) -> BackupDocument {
        backup::export_document(&self.book)
    }

    /// Parses and applies a backup document, then persists.
    ///
    /// On any parse failure the current book is untouched.
    pub fn import_backup(&mut self, json: &str) -> Result<(), LedgerError> {
        let document = backup::import_document(json)?;
        self.book.replace_all(
            document.credits,
            document.expenses,
            document.udhaar,
            document.contacts,
        );
        self.save()
    }

    /// Empties every collection and removes the persisted slots.
    pub fn clear_all(&mut self) -> Result<(), LedgerError> {
        self.book
            .replace_all(Vec::new(), Vec::new(), Vec::new(), Vec::new());
        self.storage.clear()
    }
}
