//! Atomic whole-file replacement
//!
//! A failed rewrite must never corrupt previously persisted state, so
//! whole-file saves write a sibling temp file and rename it over the
//! target. Rename is atomic on the same filesystem.

use crate::error::LedgerError;
use std::fs;
use std::path::Path;

/// Write `content` to `path` via temp file and rename
pub(crate) fn atomic_write(path: &Path, content: &str) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| LedgerError::write(path, e))?;
        }
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| LedgerError::write(&temp_path, e))?;
    fs::rename(&temp_path, path).map_err(|e| LedgerError::write(path, e))?;
    Ok(())
}
