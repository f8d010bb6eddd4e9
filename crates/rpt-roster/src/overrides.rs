//! Assignment overrides
//!
//! A persisted reassignment of a suburb's responsible editor, taking
//! precedence over the roster's original `Assigned` value. At most one
//! override exists per suburb: a later entry for the same suburb replaces
//! the earlier one.

use crate::name::{EditorName, SuburbName};
use indexmap::IndexMap;

/// One reassignment row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentOverride {
    pub suburb: SuburbName,
    pub assigned: EditorName,
}

impl AssignmentOverride {
    /// Create an override row
    #[inline]
    #[must_use]
    pub fn new(suburb: SuburbName, assigned: EditorName) -> Self {
        Self { suburb, assigned }
    }
}

/// The override layer: suburb → reassigned editor
///
/// Built from an ordered sequence of rows; when the persisted file carries
/// duplicate suburbs the last row wins. Insertion order of first
/// appearance is preserved for stable re-serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideSet {
    entries: IndexMap<SuburbName, EditorName>,
}

impl OverrideSet {
    /// Empty override set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from ordered rows, last write per suburb wins
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = AssignmentOverride>) -> Self {
        let mut set = Self::new();
        for row in rows {
            set.set(row.suburb, row.assigned);
        }
        set
    }

    /// Insert or replace the override for a suburb
    pub fn set(&mut self, suburb: SuburbName, assigned: EditorName) {
        self.entries.insert(suburb, assigned);
    }

    /// Look up the override for a suburb
    #[inline]
    #[must_use]
    pub fn get(&self, suburb: &SuburbName) -> Option<&EditorName> {
        self.entries.get(suburb)
    }

    /// Number of overridden suburbs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any overrides exist
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate overrides in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = (&SuburbName, &EditorName)> {
        self.entries.iter()
    }
}

impl FromIterator<AssignmentOverride> for OverrideSet {
    fn from_iter<I: IntoIterator<Item = AssignmentOverride>>(iter: I) -> Self {
        Self::from_rows(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suburb(s: &str) -> SuburbName {
        SuburbName::new(s).unwrap()
    }

    fn editor(s: &str) -> EditorName {
        EditorName::new(s).unwrap()
    }

    #[test]
    fn last_write_wins_on_duplicate_rows() {
        let set = OverrideSet::from_rows(vec![
            AssignmentOverride::new(suburb("Umbumbulu"), editor("editorA")),
            AssignmentOverride::new(suburb("UMBUMBULU"), editor("editorB")),
        ]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(&suburb("umbumbulu")), Some(&editor("editorB")));
    }

    #[test]
    fn second_reassignment_overwrites_not_appends() {
        let mut set = OverrideSet::new();
        set.set(suburb("Inwabi"), editor("editorB"));
        set.set(suburb("Inwabi"), editor("editorC"));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(&suburb("Inwabi")), Some(&editor("editorC")));
    }

    #[test]
    fn missing_suburb_is_none() {
        let set = OverrideSet::new();
        assert!(set.get(&suburb("Emalangeni")).is_none());
        assert!(set.is_empty());
    }
}
