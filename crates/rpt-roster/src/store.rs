//! The cached roster store
//!
//! Loads the roster once and serves it from cache until [`RosterStore::invalidate`]
//! is called: the single cache-clear entry point, triggered by a confirmed
//! reassignment. Required attribute columns are validated at load; a source
//! missing them is a fatal configuration error.

use crate::error::RosterError;
use crate::name::{EditorName, SuburbName};
use crate::roster::{Roster, SuburbRecord};
use crate::source::{RawFeature, RosterSource};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Attribute column mapping
///
/// Source data disagrees on the name column (`NAME` vs `SUBURB`) across its
/// history, so the mapping is configuration rather than behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterColumns {
    /// Column holding the suburb name
    pub name: String,
    /// Column holding the assigned editor
    pub assigned: String,
}

impl RosterColumns {
    /// Create a mapping
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, assigned: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assigned: assigned.into(),
        }
    }

    /// With a different name column
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// With a different assigned column
    #[inline]
    #[must_use]
    pub fn with_assigned(mut self, assigned: impl Into<String>) -> Self {
        self.assigned = assigned.into();
        self
    }
}

impl Default for RosterColumns {
    fn default() -> Self {
        Self::new("NAME", "Assigned")
    }
}

/// Load-once roster store with explicit invalidation
///
/// The cache is guarded by a lock so the store is shareable, but there is
/// no cross-process coordination; one process, one roster snapshot.
#[derive(Debug)]
pub struct RosterStore {
    source: Box<dyn RosterSource>,
    columns: RosterColumns,
    cache: RwLock<Option<Arc<Roster>>>,
}

impl RosterStore {
    /// Create a store over a source with default columns
    #[must_use]
    pub fn new(source: impl RosterSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            columns: RosterColumns::default(),
            cache: RwLock::new(None),
        }
    }

    /// With a column mapping
    #[must_use]
    pub fn with_columns(mut self, columns: RosterColumns) -> Self {
        self.columns = columns;
        self
    }

    /// The configured column mapping
    #[inline]
    #[must_use]
    pub fn columns(&self) -> &RosterColumns {
        &self.columns
    }

    /// Load the roster, serving from cache when possible
    ///
    /// # Errors
    /// - [`RosterError::MissingColumns`] when a required column appears
    ///   nowhere in the source (fatal configuration error)
    /// - source IO/parse errors, passed through
    pub fn load(&self) -> Result<Arc<Roster>, RosterError> {
        if let Some(cached) = self.cache.read().clone() {
            return Ok(cached);
        }

        let features = self.source.read()?;
        self.validate_columns(&features)?;
        let roster = Arc::new(self.build(features));
        tracing::info!(
            source = self.source.name(),
            suburbs = roster.len(),
            "roster loaded"
        );

        *self.cache.write() = Some(roster.clone());
        Ok(roster)
    }

    /// Drop the cached roster; the next `load` re-reads the source
    pub fn invalidate(&self) {
        tracing::debug!("roster cache invalidated");
        *self.cache.write() = None;
    }

    /// Table-level column check: a required column must appear in at least
    /// one feature. Per-row gaps are handled row by row instead.
    fn validate_columns(&self, features: &[RawFeature]) -> Result<(), RosterError> {
        if features.is_empty() {
            return Ok(());
        }
        let mut missing = Vec::new();
        for column in [&self.columns.name, &self.columns.assigned] {
            if !features.iter().any(|f| f.attributes.contains_key(column)) {
                missing.push(column.clone());
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(RosterError::missing_columns(missing))
        }
    }

    fn build(&self, features: Vec<RawFeature>) -> Roster {
        let records = features.into_iter().filter_map(|feature| {
            let Some(name) = feature
                .attributes
                .get(&self.columns.name)
                .and_then(|raw| SuburbName::new(raw).ok())
            else {
                tracing::warn!(column = %self.columns.name, "skipping feature without a suburb name");
                return None;
            };
            let assigned = feature
                .attributes
                .get(&self.columns.assigned)
                .and_then(|raw| EditorName::new(raw).ok());
            Some(SuburbRecord::new(name, feature.geometry, assigned))
        });
        Roster::from_records(records)
    }
}
