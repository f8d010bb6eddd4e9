//! RPT Sync
//!
//! Best-effort replication of the persisted tracker files to a remote
//! store. The local write is always authoritative: by the time a push
//! happens the data is already safe on disk, so every failure here
//! degrades to a warning, never an error the caller must handle.
//!
//! # Core Concepts
//!
//! - [`SyncFile`]: one file to replicate (name, content, commit message)
//! - [`SyncTarget`]: narrow interface to the remote store client
//! - [`DirectoryMirror`]: in-tree target copying into a local directory
//! - [`SyncAdapter`]: wraps an optional target; unconfigured is a notice,
//!   failure is a warning, and [`SyncAdapter::push_best_effort`] never
//!   returns `Err`

mod adapter;
mod error;
mod mirror;
mod target;

pub use adapter::{SyncAdapter, SyncOutcome};
pub use error::SyncError;
pub use mirror::DirectoryMirror;
pub use target::{SyncFile, SyncTarget};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
