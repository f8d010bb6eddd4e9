//! The best-effort sync adapter
//!
//! Wraps an optional [`SyncTarget`]. The adapter's one operation,
//! [`SyncAdapter::push_best_effort`], is infallible by contract: the
//! caller gets a [`SyncOutcome`] to display, never an `Err` to unwrap.

use crate::error::SyncError;
use crate::target::{SyncFile, SyncTarget};

/// What happened to a best-effort push
#[derive(Debug)]
pub enum SyncOutcome {
    /// Target accepted the file
    Pushed,
    /// No target configured; local persistence stands alone
    Disabled,
    /// Push failed; local persistence is still authoritative
    Failed(SyncError),
}

impl SyncOutcome {
    /// Whether the remote accepted the file
    #[inline]
    #[must_use]
    pub fn is_pushed(&self) -> bool {
        matches!(self, Self::Pushed)
    }

    /// Human-readable notice for the UI, if any
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::Pushed => None,
            Self::Disabled => Some("remote sync not configured; changes saved locally only".to_string()),
            Self::Failed(e) => Some(format!("remote sync failed ({e}); local state is authoritative")),
        }
    }
}

/// Best-effort push adapter over an optional target
#[derive(Debug, Default)]
pub struct SyncAdapter {
    target: Option<Box<dyn SyncTarget>>,
}

impl SyncAdapter {
    /// Adapter with a configured target
    #[must_use]
    pub fn new(target: impl SyncTarget + 'static) -> Self {
        Self {
            target: Some(Box::new(target)),
        }
    }

    /// Adapter with no target; every push is a no-op notice
    #[inline]
    #[must_use]
    pub fn disabled() -> Self {
        Self { target: None }
    }

    /// Whether a target is configured
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.target.is_some()
    }

    /// Push a file, degrading every failure to a warning
    pub fn push_best_effort(&self, file: &SyncFile) -> SyncOutcome {
        let Some(target) = &self.target else {
            tracing::info!(file = %file.remote_name, "sync disabled, keeping local only");
            return SyncOutcome::Disabled;
        };
        match target.push(file) {
            Ok(()) => {
                tracing::info!(
                    target = target.name(),
                    file = %file.remote_name,
                    "pushed to remote"
                );
                SyncOutcome::Pushed
            }
            Err(e) => {
                tracing::warn!(
                    target = target.name(),
                    file = %file.remote_name,
                    error = %e,
                    "push failed, local state is authoritative"
                );
                SyncOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mirror::DirectoryMirror;

    #[derive(Debug)]
    struct FailingTarget;

    impl SyncTarget for FailingTarget {
        fn push(&self, _file: &SyncFile) -> Result<(), SyncError> {
            Err(SyncError::Transport("connection refused".to_string()))
        }
        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn disabled_adapter_is_a_notice_not_an_error() {
        let adapter = SyncAdapter::disabled();
        let outcome = adapter.push_best_effort(&SyncFile::new("f", "c", "m"));
        assert!(matches!(outcome, SyncOutcome::Disabled));
        assert!(outcome.notice().unwrap().contains("not configured"));
    }

    #[test]
    fn failure_degrades_to_warning() {
        let adapter = SyncAdapter::new(FailingTarget);
        let outcome = adapter.push_best_effort(&SyncFile::new("f", "c", "m"));
        assert!(matches!(outcome, SyncOutcome::Failed(_)));
        assert!(outcome.notice().unwrap().contains("authoritative"));
    }

    #[test]
    fn successful_push_has_no_notice() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = SyncAdapter::new(DirectoryMirror::new(dir.path()));
        let outcome = adapter.push_best_effort(&SyncFile::new("f.tsv", "content", "m"));
        assert!(outcome.is_pushed());
        assert!(outcome.notice().is_none());
    }
}
