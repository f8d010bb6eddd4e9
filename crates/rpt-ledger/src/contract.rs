//! Persistence contract selection

use serde::{Deserialize, Serialize};

/// How a save is written to the completion file
///
/// Exactly one contract is active per deployment; they have different
/// retraction semantics and are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveContract {
    /// Reload the full mapping, replace this editor's entire set, rewrite
    /// the whole file. A suburb absent from the saved selection is
    /// retracted. Concurrent savers race last-writer-wins.
    #[default]
    WholeReplace,

    /// Append only the (editor, suburb) pairs not already on disk;
    /// existing bytes are never rewritten. Retraction is deliberately a
    /// no-op: once a suburb is marked complete it stays complete.
    AppendOnly,
}

impl SaveContract {
    /// Contract name (for diagnostics and config display)
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::WholeReplace => "whole_replace",
            Self::AppendOnly => "append_only",
        }
    }

    /// Whether a save can un-mark a previously completed suburb
    #[inline]
    #[must_use]
    pub fn supports_retraction(&self) -> bool {
        matches!(self, Self::WholeReplace)
    }
}

impl std::fmt::Display for SaveContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
