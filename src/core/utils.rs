use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::LedgerError;

const APP_DIR_NAME: &str = "hisaab";

/// Resolves the on-disk locations the crate reads and writes.
pub struct PathResolver;

impl PathResolver {
    /// Base application directory, overridable for tests and embedders.
    pub fn resolve_base(root: Option<PathBuf>) -> PathBuf {
        root.unwrap_or_else(Self::base_dir)
    }

    pub fn base_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
    }

    /// File backing a named record slot.
    pub fn slot_file_in(base: &Path, slot: &str) -> PathBuf {
        base.join(format!("{slot}.json"))
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        base.join("config.json")
    }
}

pub fn ensure_dir(path: &Path) -> Result<(), LedgerError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
