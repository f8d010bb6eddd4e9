//! The assignment override ledger
//!
//! Persists reassignments as `Suburb\tAssigned` rows. The file is an
//! ordered sequence; loading builds the last-write-wins [`OverrideSet`]
//! and saving rewrites the whole file atomically (one row per suburb).

use crate::atomic::atomic_write;
use crate::codec;
use crate::error::LedgerError;
use rpt_roster::{EditorName, OverrideSet, SuburbName};
use std::path::{Path, PathBuf};

/// The persisted reassignment ledger
#[derive(Debug, Clone)]
pub struct OverrideLedger {
    path: PathBuf,
}

impl OverrideLedger {
    /// Create a ledger at the given path
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the override set; a missing file is an empty set
    ///
    /// Duplicate suburbs on disk collapse last-write-wins.
    pub fn load(&self) -> Result<OverrideSet, LedgerError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(OverrideSet::new())
            }
            Err(e) => return Err(LedgerError::read(&self.path, e)),
        };
        Ok(OverrideSet::from_rows(codec::parse_overrides(&content)))
    }

    /// Rewrite the whole file from a set
    pub fn save(&self, overrides: &OverrideSet) -> Result<(), LedgerError> {
        atomic_write(&self.path, &codec::encode_overrides(overrides.iter()))?;
        tracing::info!(overrides = overrides.len(), "override ledger rewritten");
        Ok(())
    }

    /// Load, upsert one reassignment, save; returns the updated set
    ///
    /// A second reassignment of the same suburb overwrites the first;
    /// the file never accumulates duplicate rows for a suburb.
    pub fn record(
        &self,
        suburb: SuburbName,
        assigned: EditorName,
    ) -> Result<OverrideSet, LedgerError> {
        let mut overrides = self.load()?;
        overrides.set(suburb, assigned);
        self.save(&overrides)?;
        Ok(overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(s: &str) -> EditorName {
        EditorName::new(s).unwrap()
    }

    fn suburb(s: &str) -> SuburbName {
        SuburbName::new(s).unwrap()
    }

    fn temp_ledger() -> (tempfile::TempDir, OverrideLedger) {
        let dir = tempfile::tempdir().unwrap();
        let ledger = OverrideLedger::new(dir.path().join("assignments.tsv"));
        (dir, ledger)
    }

    #[test]
    fn missing_file_loads_empty() {
        let (_dir, ledger) = temp_ledger();
        assert!(ledger.load().unwrap().is_empty());
    }

    #[test]
    fn record_then_load_round_trips() {
        let (_dir, ledger) = temp_ledger();
        ledger.record(suburb("Umbumbulu"), editor("editorB")).unwrap();

        let set = ledger.load().unwrap();
        assert_eq!(set.get(&suburb("Umbumbulu")), Some(&editor("editorB")));
    }

    #[test]
    fn second_record_overwrites_not_appends() {
        let (_dir, ledger) = temp_ledger();
        ledger.record(suburb("Umbumbulu"), editor("editorB")).unwrap();
        ledger.record(suburb("Umbumbulu"), editor("editorC")).unwrap();

        let set = ledger.load().unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(&suburb("Umbumbulu")), Some(&editor("editorC")));

        // One data row on disk, after the header
        let content = std::fs::read_to_string(ledger.path()).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn duplicate_rows_on_disk_collapse_last_wins() {
        let (_dir, ledger) = temp_ledger();
        std::fs::write(
            ledger.path(),
            "Suburb\tAssigned\nUmbumbulu\teditorA\nUmbumbulu\teditorB\n",
        )
        .unwrap();

        let set = ledger.load().unwrap();
        assert_eq!(set.get(&suburb("Umbumbulu")), Some(&editor("editorB")));
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let (_dir, ledger) = temp_ledger();
        std::fs::write(
            ledger.path(),
            "Umbumbulu\teditorA\nRowWithoutEditor\n# comment\nInwabi\teditorB\n",
        )
        .unwrap();

        let set = ledger.load().unwrap();
        assert_eq!(set.len(), 2);
    }
}
