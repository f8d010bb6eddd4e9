//! RPT Core
//!
//! The dashboard state model behind the suburb road-editing progress
//! tracker: reconciliation of completion state against the roster,
//! summary statistics, configuration, and the [`Tracker`] facade the UI
//! surface talks to.
//!
//! # Core Concepts
//!
//! - [`Reconciler`]: derives per-suburb status from the completion map
//! - [`EditorPalette`]: stable color per editor for map rendering
//! - [`TrackerConfig`]: TOML-backed deployment configuration
//! - [`Tracker`]: owns the stores and the sync adapter; one method per
//!   user-facing operation
//!
//! One user action is one load → mutate → save → reload cycle; nothing
//! here is long-lived except the cached roster, which only a confirmed
//! reassignment invalidates.

mod config;
mod error;
mod palette;
mod reconcile;
mod tracker;

pub use config::{LedgerSection, RosterSection, SyncSection, TrackerConfig};
pub use error::{ConfigError, TrackerError, TrackerResult};
pub use palette::EditorPalette;
pub use reconcile::{
    EditorSummary, OverallProgress, Reconciler, StatusRow, SuburbStatus,
};
pub use tracker::{SaveReceipt, Tracker};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
