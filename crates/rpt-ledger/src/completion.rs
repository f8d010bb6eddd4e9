//! Completion state: the editor → completed-suburbs mapping and its ledger
//!
//! The persisted form is a flat sequence of (editor, suburb, timestamp)
//! rows; the in-memory [`CompletionMap`] collapses duplicates into sets.
//! A suburb may legitimately appear under several editors at once; the
//! reconciler's documented tie-break decides who owns it for display.

use crate::atomic::atomic_write;
use crate::codec;
use crate::contract::SaveContract;
use crate::error::LedgerError;
use chrono::{DateTime, Utc};
use rpt_roster::{EditorName, SuburbName};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::{Path, PathBuf};

/// One persisted completion row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRow {
    pub editor: EditorName,
    pub suburb: SuburbName,
    /// When the pair was first written; informational only
    pub completed_at: Option<DateTime<Utc>>,
}

impl CompletionRow {
    /// Create a row stamped with the current time
    #[must_use]
    pub fn now(editor: EditorName, suburb: SuburbName) -> Self {
        Self {
            editor,
            suburb,
            completed_at: Some(Utc::now()),
        }
    }
}

/// Editor → set of completed suburb names
///
/// Backed by sorted maps, so iteration order is lexicographic editor
/// order, the documented stable order the reconciler's tie-break relies
/// on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionMap {
    inner: BTreeMap<EditorName, BTreeSet<SuburbName>>,
}

impl CompletionMap {
    /// Empty mapping
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a row sequence into the mapping, collapsing duplicates
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = CompletionRow>) -> Self {
        let mut map = Self::new();
        for row in rows {
            map.insert(row.editor, row.suburb);
        }
        map
    }

    /// Mark one suburb complete for an editor
    pub fn insert(&mut self, editor: EditorName, suburb: SuburbName) {
        self.inner.entry(editor).or_default().insert(suburb);
    }

    /// Replace an editor's entire set; an empty set removes the editor
    pub fn replace(&mut self, editor: EditorName, suburbs: BTreeSet<SuburbName>) {
        if suburbs.is_empty() {
            self.inner.remove(&editor);
        } else {
            self.inner.insert(editor, suburbs);
        }
    }

    /// The completed set for an editor, empty if unknown
    #[must_use]
    pub fn completed_by(&self, editor: &EditorName) -> BTreeSet<SuburbName> {
        self.inner.get(editor).cloned().unwrap_or_default()
    }

    /// Whether the pair is present
    #[inline]
    #[must_use]
    pub fn contains(&self, editor: &EditorName, suburb: &SuburbName) -> bool {
        self.inner.get(editor).is_some_and(|s| s.contains(suburb))
    }

    /// Iterate editors and their sets in lexicographic editor order
    pub fn iter(&self) -> impl Iterator<Item = (&EditorName, &BTreeSet<SuburbName>)> {
        self.inner.iter()
    }

    /// Editors present in the mapping, sorted
    #[must_use]
    pub fn editors(&self) -> Vec<EditorName> {
        self.inner.keys().cloned().collect()
    }

    /// Number of editors with at least one completion
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether no completions exist
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// The persisted completion ledger
///
/// One interaction is one load → mutate-one-editor → save cycle. No lock
/// coordinates concurrent writers; under [`SaveContract::WholeReplace`]
/// two simultaneous savers race last-writer-wins, a known limitation of
/// the design.
#[derive(Debug, Clone)]
pub struct CompletionLedger {
    path: PathBuf,
    contract: SaveContract,
}

impl CompletionLedger {
    /// Create a ledger at the given path with the default contract
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contract: SaveContract::default(),
        }
    }

    /// With an explicit save contract
    #[inline]
    #[must_use]
    pub fn with_contract(mut self, contract: SaveContract) -> Self {
        self.contract = contract;
        self
    }

    /// The backing file
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The active contract
    #[inline]
    #[must_use]
    pub fn contract(&self) -> SaveContract {
        self.contract
    }

    /// Load the completion mapping; a missing file is an empty mapping
    pub fn load(&self) -> Result<CompletionMap, LedgerError> {
        Ok(CompletionMap::from_rows(self.load_rows()?))
    }

    /// Persist an editor's selected set under the active contract
    ///
    /// Repeated identical saves are idempotent under both contracts: no
    /// duplicate rows accumulate.
    pub fn save(
        &self,
        editor: &EditorName,
        selected: &BTreeSet<SuburbName>,
    ) -> Result<(), LedgerError> {
        match self.contract {
            SaveContract::WholeReplace => self.save_whole_replace(editor, selected),
            SaveContract::AppendOnly => self.save_append_only(editor, selected),
        }
    }

    fn load_rows(&self) -> Result<Vec<CompletionRow>, LedgerError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(LedgerError::read(&self.path, e)),
        };
        Ok(codec::parse_completion(&content))
    }

    /// Read-full, replace this editor's rows, write-full (atomically)
    fn save_whole_replace(
        &self,
        editor: &EditorName,
        selected: &BTreeSet<SuburbName>,
    ) -> Result<(), LedgerError> {
        let mut rows = self.load_rows()?;
        // Keep other editors' rows (and their timestamps) untouched
        rows.retain(|row| &row.editor != editor);
        for suburb in selected {
            rows.push(CompletionRow::now(editor.clone(), suburb.clone()));
        }
        atomic_write(&self.path, &codec::encode_completion(&rows))?;
        tracing::info!(
            editor = %editor,
            completed = selected.len(),
            "completion ledger rewritten"
        );
        Ok(())
    }

    /// Append pairs not yet on disk; never touch existing bytes
    fn save_append_only(
        &self,
        editor: &EditorName,
        selected: &BTreeSet<SuburbName>,
    ) -> Result<(), LedgerError> {
        let existing = self.load_rows()?;
        let on_disk: BTreeSet<(&EditorName, &SuburbName)> = existing
            .iter()
            .map(|row| (&row.editor, &row.suburb))
            .collect();
        let new_rows: Vec<CompletionRow> = selected
            .iter()
            .filter(|suburb| !on_disk.contains(&(editor, suburb)))
            .map(|suburb| CompletionRow::now(editor.clone(), suburb.clone()))
            .collect();
        if new_rows.is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| LedgerError::write(&self.path, e))?;
            }
        }
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LedgerError::write(&self.path, e))?;
        let started_empty = file
            .metadata()
            .map(|m| m.len() == 0)
            .unwrap_or(true);
        let mut chunk = String::new();
        if started_empty {
            chunk.push_str(codec::COMPLETION_HEADER);
            chunk.push('\n');
        }
        for row in &new_rows {
            chunk.push_str(&codec::encode_completion_row(row));
            chunk.push('\n');
        }
        file.write_all(chunk.as_bytes())
            .map_err(|e| LedgerError::write(&self.path, e))?;
        tracing::info!(editor = %editor, appended = new_rows.len(), "completion ledger appended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn editor(s: &str) -> EditorName {
        EditorName::new(s).unwrap()
    }

    fn suburb(s: &str) -> SuburbName {
        SuburbName::new(s).unwrap()
    }

    fn set(names: &[&str]) -> BTreeSet<SuburbName> {
        names.iter().map(|n| suburb(n)).collect()
    }

    fn temp_ledger(contract: SaveContract) -> (tempfile::TempDir, CompletionLedger) {
        let dir = tempfile::tempdir().unwrap();
        let ledger = CompletionLedger::new(dir.path().join("progress.tsv")).with_contract(contract);
        (dir, ledger)
    }

    #[test]
    fn missing_file_loads_empty() {
        let (_dir, ledger) = temp_ledger(SaveContract::WholeReplace);
        assert!(ledger.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, ledger) = temp_ledger(SaveContract::WholeReplace);
        let selected = set(&["Umbumbulu", "Inwabi"]);
        ledger.save(&editor("A"), &selected).unwrap();

        let map = ledger.load().unwrap();
        assert_eq!(map.completed_by(&editor("A")), selected);
    }

    #[test]
    fn whole_replace_supports_retraction() {
        let (_dir, ledger) = temp_ledger(SaveContract::WholeReplace);
        ledger
            .save(&editor("A"), &set(&["Umbumbulu", "Inwabi"]))
            .unwrap();
        ledger.save(&editor("A"), &set(&["Inwabi"])).unwrap();

        let map = ledger.load().unwrap();
        assert_eq!(map.completed_by(&editor("A")), set(&["Inwabi"]));
    }

    #[test]
    fn whole_replace_keeps_other_editors_rows() {
        let (_dir, ledger) = temp_ledger(SaveContract::WholeReplace);
        ledger.save(&editor("A"), &set(&["Umbumbulu"])).unwrap();
        ledger.save(&editor("B"), &set(&["Inwabi"])).unwrap();
        ledger.save(&editor("A"), &set(&[])).unwrap();

        let map = ledger.load().unwrap();
        assert!(map.completed_by(&editor("A")).is_empty());
        assert_eq!(map.completed_by(&editor("B")), set(&["Inwabi"]));
    }

    #[test]
    fn append_only_never_retracts() {
        let (_dir, ledger) = temp_ledger(SaveContract::AppendOnly);
        ledger
            .save(&editor("A"), &set(&["Umbumbulu", "Inwabi"]))
            .unwrap();
        // Removing Umbumbulu from the selection has no effect on disk
        ledger.save(&editor("A"), &set(&["Inwabi"])).unwrap();

        let map = ledger.load().unwrap();
        assert_eq!(map.completed_by(&editor("A")), set(&["Umbumbulu", "Inwabi"]));
    }

    #[test]
    fn append_only_is_idempotent() {
        let (_dir, ledger) = temp_ledger(SaveContract::AppendOnly);
        let selected = set(&["Umbumbulu"]);
        ledger.save(&editor("A"), &selected).unwrap();
        ledger.save(&editor("A"), &selected).unwrap();
        ledger.save(&editor("A"), &selected).unwrap();

        let content = std::fs::read_to_string(ledger.path()).unwrap();
        let pair_lines = content
            .lines()
            .filter(|l| l.starts_with("A\tUMBUMBULU"))
            .count();
        assert_eq!(pair_lines, 1);
    }

    #[test]
    fn whole_replace_is_idempotent() {
        let (_dir, ledger) = temp_ledger(SaveContract::WholeReplace);
        let selected = set(&["Umbumbulu"]);
        ledger.save(&editor("A"), &selected).unwrap();
        let first = ledger.load().unwrap();
        ledger.save(&editor("A"), &selected).unwrap();
        assert_eq!(first, ledger.load().unwrap());
    }

    #[test]
    fn duplicate_pairs_across_editors_coexist() {
        let (_dir, ledger) = temp_ledger(SaveContract::WholeReplace);
        ledger.save(&editor("A"), &set(&["Umbumbulu"])).unwrap();
        ledger.save(&editor("B"), &set(&["Umbumbulu"])).unwrap();

        let map = ledger.load().unwrap();
        assert!(map.contains(&editor("A"), &suburb("Umbumbulu")));
        assert!(map.contains(&editor("B"), &suburb("Umbumbulu")));
    }

    #[test]
    fn map_replace_swaps_set_and_empty_removes() {
        let mut map = CompletionMap::new();
        map.insert(editor("A"), suburb("Umbumbulu"));
        map.replace(editor("A"), set(&["Inwabi"]));
        assert_eq!(map.completed_by(&editor("A")), set(&["Inwabi"]));

        map.replace(editor("A"), BTreeSet::new());
        assert!(map.is_empty());
    }

    #[test]
    fn map_iterates_in_sorted_editor_order() {
        let map = CompletionMap::from_rows(vec![
            CompletionRow::now(editor("Sipho"), suburb("S1")),
            CompletionRow::now(editor("Anele"), suburb("S2")),
        ]);
        let editors: Vec<&str> = map.iter().map(|(e, _)| e.as_str()).collect();
        assert_eq!(editors, vec!["Anele", "Sipho"]);
    }
}
