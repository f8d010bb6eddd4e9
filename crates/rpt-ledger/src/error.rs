//! Error types for ledger persistence

use std::path::PathBuf;

/// Errors reading or writing a ledger file
///
/// Malformed rows are not represented here: the codec skips them with a
/// warning and keeps going. Only the file-level failures surface.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// IO error reading a ledger
    #[error("io error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error writing a ledger
    #[error("io error writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LedgerError {
    /// Create a read error for a path
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a write error for a path
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
