//! Local directory mirror target

use crate::error::SyncError;
use crate::target::{SyncFile, SyncTarget};
use std::path::PathBuf;

/// Sync target that copies files into a local mirror directory
///
/// Used by tests and local deployments; remote-store clients implement
/// [`SyncTarget`] themselves.
#[derive(Debug, Clone)]
pub struct DirectoryMirror {
    dir: PathBuf,
}

impl DirectoryMirror {
    /// Create a mirror writing into the given directory
    #[inline]
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SyncTarget for DirectoryMirror {
    fn push(&self, file: &SyncFile) -> Result<(), SyncError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| SyncError::io_error(&self.dir, e))?;
        let path = self.dir.join(&file.remote_name);
        std::fs::write(&path, &file.content).map_err(|e| SyncError::io_error(&path, e))?;
        tracing::debug!(path = %path.display(), message = %file.message, "mirrored file");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "directory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_writes_into_mirror_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = DirectoryMirror::new(dir.path().join("mirror"));

        let file = SyncFile::new("progress.tsv", "A\tUMBUMBULU\t\n", "mark complete");
        mirror.push(&file).unwrap();

        let copied = std::fs::read_to_string(dir.path().join("mirror/progress.tsv")).unwrap();
        assert_eq!(copied, "A\tUMBUMBULU\t\n");
    }

    #[test]
    fn push_overwrites_previous_copy() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = DirectoryMirror::new(dir.path());

        mirror.push(&SyncFile::new("f.tsv", "one", "m1")).unwrap();
        mirror.push(&SyncFile::new("f.tsv", "two", "m2")).unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.path().join("f.tsv")).unwrap(),
            "two"
        );
    }
}
