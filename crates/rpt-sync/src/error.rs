//! Error types for remote sync

use std::path::PathBuf;

/// Errors while pushing to a sync target
///
/// All of these are non-fatal by contract: the adapter catches them and
/// surfaces a warning while local state stays authoritative.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// IO error reading the local file or writing a mirror
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Remote transport failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Remote rejected the configured credential
    #[error("authentication failed: {0}")]
    Auth(String),
}

impl SyncError {
    /// Create an IO error for a path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
