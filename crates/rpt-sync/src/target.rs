//! Sync target interface

use crate::error::SyncError;
use std::path::Path;

/// One file to replicate to the remote store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncFile {
    /// Name under which the remote stores the file
    pub remote_name: String,
    /// Full file content
    pub content: String,
    /// Commit/update message for targets that record one
    pub message: String,
}

impl SyncFile {
    /// Create a sync file from in-memory content
    #[inline]
    #[must_use]
    pub fn new(
        remote_name: impl Into<String>,
        content: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            remote_name: remote_name.into(),
            content: content.into(),
            message: message.into(),
        }
    }

    /// Read a local file into a sync file, keeping its file name
    ///
    /// # Errors
    /// Fails when the local file cannot be read.
    pub fn from_path(path: &Path, message: impl Into<String>) -> Result<Self, SyncError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SyncError::io_error(path, e))?;
        let remote_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        Ok(Self::new(remote_name, content, message))
    }
}

/// Narrow interface to the remote store client
///
/// The hosted-repository client is an external collaborator; in-tree
/// code only ever talks through this trait.
pub trait SyncTarget: Send + Sync + std::fmt::Debug {
    /// Push one file
    ///
    /// # Errors
    /// Any transport or auth failure. Callers treat these as warnings.
    fn push(&self, file: &SyncFile) -> Result<(), SyncError>;

    /// Target name (for diagnostics)
    fn name(&self) -> &'static str;
}
