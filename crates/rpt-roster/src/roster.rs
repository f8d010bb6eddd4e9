//! Roster records and the in-memory roster
//!
//! A [`Roster`] is the loaded suburb set in source order, keyed by
//! normalized suburb name. It is immutable once built; the override layer
//! produces a *new* roster rather than mutating in place.

use crate::geometry::{BoundingBox, Geometry};
use crate::name::{EditorName, SuburbName};
use crate::overrides::OverrideSet;
use indexmap::IndexMap;

/// One roster row: a named polygon and its responsible editor
#[derive(Debug, Clone, PartialEq)]
pub struct SuburbRecord {
    /// Normalized identity key
    pub name: SuburbName,
    /// Boundary geometry, WGS84
    pub geometry: Geometry,
    /// Originally assigned editor, if any
    pub assigned: Option<EditorName>,
}

impl SuburbRecord {
    /// Create a record
    #[inline]
    #[must_use]
    pub fn new(name: SuburbName, geometry: Geometry, assigned: Option<EditorName>) -> Self {
        Self {
            name,
            geometry,
            assigned,
        }
    }
}

/// The loaded suburb roster, in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    records: IndexMap<SuburbName, SuburbRecord>,
}

impl Roster {
    /// Build from records; a duplicate suburb name replaces the earlier
    /// record but keeps its original position
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = SuburbRecord>) -> Self {
        let mut map = IndexMap::new();
        for record in records {
            if map.insert(record.name.clone(), record).is_some() {
                tracing::warn!("duplicate suburb in roster source, keeping last");
            }
        }
        Self { records: map }
    }

    /// Iterate records in roster order
    pub fn records(&self) -> impl Iterator<Item = &SuburbRecord> {
        self.records.values()
    }

    /// Look up a record by suburb name
    #[inline]
    #[must_use]
    pub fn get(&self, name: &SuburbName) -> Option<&SuburbRecord> {
        self.records.get(name)
    }

    /// Number of suburbs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the roster is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted, de-duplicated list of assigned editors
    #[must_use]
    pub fn editors(&self) -> Vec<EditorName> {
        let mut editors: Vec<EditorName> = self
            .records
            .values()
            .filter_map(|r| r.assigned.clone())
            .collect();
        editors.sort();
        editors.dedup();
        editors
    }

    /// Sorted suburb names assigned to an editor
    #[must_use]
    pub fn assigned_to(&self, editor: &EditorName) -> Vec<SuburbName> {
        let mut names: Vec<SuburbName> = self
            .records
            .values()
            .filter(|r| r.assigned.as_ref() == Some(editor))
            .map(|r| r.name.clone())
            .collect();
        names.sort();
        names
    }

    /// Apply the override layer, producing a new roster
    ///
    /// Records with an override get the overridden editor; all others keep
    /// their original assignment (including records with no assignment at
    /// all; an absent original is not an error).
    #[must_use]
    pub fn with_overrides(&self, overrides: &OverrideSet) -> Self {
        let records = self.records.values().map(|record| {
            let assigned = overrides
                .get(&record.name)
                .cloned()
                .or_else(|| record.assigned.clone());
            SuburbRecord::new(record.name.clone(), record.geometry.clone(), assigned)
        });
        Self::from_records(records)
    }

    /// Bounding box over every suburb, for initial map positioning
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.records
            .values()
            .filter_map(|r| r.geometry.bounding_box())
            .reduce(BoundingBox::merged)
    }
}
