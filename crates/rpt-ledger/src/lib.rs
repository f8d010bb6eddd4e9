//! RPT Ledger
//!
//! The persisted record of who has completed what, plus the assignment
//! override file. Both are small tab-separated tables rewritten (or, under
//! the append-only contract, extended) on every save.
//!
//! # Core Concepts
//!
//! - [`CompletionMap`]: in-memory editor → completed-suburb-set mapping
//! - [`CompletionLedger`]: load/save of the completion file under an
//!   explicit [`SaveContract`]
//! - [`OverrideLedger`]: load/save of the reassignment file
//!
//! # Persistence contracts
//!
//! Two incompatible contracts exist in the system's lineage; they are
//! modeled as explicit deployment modes, never mixed:
//!
//! - [`SaveContract::WholeReplace`] (default): a save replaces the
//!   editor's entire persisted set, so removing a suburb from the
//!   selection *retracts* its completion.
//! - [`SaveContract::AppendOnly`]: a save appends pairs not yet on disk
//!   and never touches existing bytes; retraction is deliberately a no-op.

mod atomic;
mod codec;
mod completion;
mod contract;
mod error;
mod overrides;

pub use completion::{CompletionLedger, CompletionMap, CompletionRow};
pub use contract::SaveContract;
pub use error::LedgerError;
pub use overrides::OverrideLedger;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
