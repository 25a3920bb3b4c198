use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::core::utils::{ensure_dir, PathResolver};
use crate::ledger::Book;

use super::{Result, StorageBackend};

const TMP_SUFFIX: &str = "tmp";

/// Stable slot identifiers; one serialized array per slot.
pub const CREDITS_SLOT: &str = "credits";
pub const EXPENSES_SLOT: &str = "expenses";
pub const UDHAAR_SLOT: &str = "udhaar";
pub const CONTACTS_SLOT: &str = "contacts";

const SLOTS: [&str; 4] = [CREDITS_SLOT, EXPENSES_SLOT, UDHAAR_SLOT, CONTACTS_SLOT];

/// File-per-slot JSON persistence under the application data directory.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = PathResolver::resolve_base(root);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn slot_path(&self, slot: &str) -> PathBuf {
        PathResolver::slot_file_in(&self.root, slot)
    }

    fn load_slot<T: DeserializeOwned>(&self, slot: &str) -> Vec<T> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Vec::new();
        }
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(error) => {
                tracing::warn!(slot, %error, "unreadable slot treated as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(records) => records,
            Err(error) => {
                tracing::warn!(slot, %error, "corrupt slot treated as empty");
                Vec::new()
            }
        }
    }

    fn save_slot<T: Serialize>(&self, slot: &str, records: &[T]) -> Result<()> {
        let path = self.slot_path(slot);
        let json = serde_json::to_string_pretty(records)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl StorageBackend for JsonStorage {
    fn load_book(&self) -> Result<Book> {
        Ok(Book::from_parts(
            self.load_slot(CREDITS_SLOT),
            self.load_slot(EXPENSES_SLOT),
            self.load_slot(UDHAAR_SLOT),
            self.load_slot(CONTACTS_SLOT),
        ))
    }

    fn save_book(&self, book: &Book) -> Result<()> {
        self.save_slot(CREDITS_SLOT, book.credits())?;
        self.save_slot(EXPENSES_SLOT, book.expenses())?;
        self.save_slot(UDHAAR_SLOT, book.loans())?;
        self.save_slot(CONTACTS_SLOT, book.contacts())?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        for slot in SLOTS {
            let path = self.slot_path(slot);
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
