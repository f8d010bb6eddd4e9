//! RPT Roster
//!
//! The suburb/editor roster: who is responsible for which polygon.
//!
//! # Core Concepts
//!
//! - [`SuburbName`] / [`EditorName`]: normalized identity newtypes
//! - [`SuburbRecord`]: one roster row (name, geometry, assigned editor)
//! - [`RosterSource`]: narrow interface to the geometry+attribute reader
//! - [`RosterStore`]: load-once cached roster with explicit invalidation
//! - [`OverrideSet`]: persisted reassignments layered over the roster
//!
//! Suburb identity is case-insensitive: names are trimmed and upper-cased
//! at the [`SuburbName`] boundary, so every comparison in the system sees
//! the normalized form.

mod error;
mod geometry;
mod name;
mod overrides;
mod roster;
mod source;
mod store;

pub use error::RosterError;
pub use geometry::{BoundingBox, Coord, Geometry, Polygon};
pub use name::{EditorName, NameError, SuburbName};
pub use overrides::{AssignmentOverride, OverrideSet};
pub use roster::{Roster, SuburbRecord};
pub use source::{
    GeoJsonSource, MemorySource, RawFeature, RosterSource, SourceCrs,
};
pub use store::{RosterColumns, RosterStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
