//! The tracker facade
//!
//! Owns the roster store, both ledgers, and the sync adapter. One method
//! per user-facing operation; each follows the same shape the dashboard
//! does: read the persisted state fresh, apply the change, persist,
//! then best-effort push.

use crate::config::TrackerConfig;
use crate::error::TrackerResult;
use crate::palette::EditorPalette;
use crate::reconcile::{EditorSummary, OverallProgress, Reconciler, StatusRow, SuburbStatus};
use rpt_ledger::{CompletionLedger, CompletionMap, OverrideLedger};
use rpt_roster::{EditorName, GeoJsonSource, Roster, RosterStore, SuburbName};
use rpt_sync::{DirectoryMirror, SyncAdapter, SyncFile, SyncOutcome, SyncTarget};
use std::collections::BTreeSet;
use std::path::Path;

/// Result of a completion save
#[derive(Debug)]
pub struct SaveReceipt {
    /// The editor's persisted set after the save, re-read from disk
    pub persisted: BTreeSet<SuburbName>,
    /// What happened on the remote side
    pub sync: SyncOutcome,
}

/// The dashboard state model, one instance per deployment
#[derive(Debug)]
pub struct Tracker {
    roster: RosterStore,
    completion: CompletionLedger,
    overrides: OverrideLedger,
    sync: SyncAdapter,
}

impl Tracker {
    /// Assemble a tracker from its parts
    #[must_use]
    pub fn new(
        roster: RosterStore,
        completion: CompletionLedger,
        overrides: OverrideLedger,
        sync: SyncAdapter,
    ) -> Self {
        Self {
            roster,
            completion,
            overrides,
            sync,
        }
    }

    /// Wire a tracker from deployment configuration
    ///
    /// The in-tree sync target is the directory mirror; deployments with
    /// a hosted remote swap in their client via [`Tracker::with_sync_target`].
    #[must_use]
    pub fn from_config(config: &TrackerConfig) -> Self {
        let roster = RosterStore::new(GeoJsonSource::new(&config.roster.path))
            .with_columns(config.roster.columns.clone());
        let completion =
            CompletionLedger::new(&config.ledger.completion).with_contract(config.ledger.contract);
        let overrides = OverrideLedger::new(&config.ledger.overrides);
        let sync = match &config.sync.mirror_dir {
            Some(dir) => SyncAdapter::new(DirectoryMirror::new(dir)),
            None => {
                if config.sync.is_configured() {
                    tracing::info!("remote repository configured; attach a client with with_sync_target");
                }
                SyncAdapter::disabled()
            }
        };
        Self::new(roster, completion, overrides, sync)
    }

    /// Replace the sync target (e.g. a hosted-repository client)
    #[must_use]
    pub fn with_sync_target(mut self, target: impl SyncTarget + 'static) -> Self {
        self.sync = SyncAdapter::new(target);
        self
    }

    /// The roster with the current override layer applied
    ///
    /// The base roster comes from cache; overrides are re-read on every
    /// interaction so another session's reassignment shows up here.
    pub fn effective_roster(&self) -> TrackerResult<Roster> {
        let base = self.roster.load()?;
        let overrides = self.overrides.load()?;
        Ok(base.with_overrides(&overrides))
    }

    /// Sorted distinct editors, post-override
    pub fn editors(&self) -> TrackerResult<Vec<EditorName>> {
        Ok(self.effective_roster()?.editors())
    }

    /// Sorted suburbs assigned to an editor, post-override
    pub fn suburbs_for(&self, editor: &EditorName) -> TrackerResult<Vec<SuburbName>> {
        Ok(self.effective_roster()?.assigned_to(editor))
    }

    /// The editor's persisted completed set
    pub fn completed_for(&self, editor: &EditorName) -> TrackerResult<BTreeSet<SuburbName>> {
        Ok(self.completion.load()?.completed_by(editor))
    }

    /// Persist an editor's completed selection, then best-effort push
    ///
    /// Under the whole-replace contract the selection *is* the editor's
    /// new set (missing suburbs are retracted); under append-only it can
    /// only grow the set. The receipt carries what actually stuck.
    pub fn mark_completed(
        &self,
        editor: &EditorName,
        selected: &BTreeSet<SuburbName>,
    ) -> TrackerResult<SaveReceipt> {
        self.completion.save(editor, selected)?;
        let persisted = self.completion.load()?.completed_by(editor);
        let sync = self.push_file(
            self.completion.path(),
            format!("progress: {editor} marked {} suburbs", selected.len()),
        );
        Ok(SaveReceipt { persisted, sync })
    }

    /// Reassign a suburb to another editor
    ///
    /// Records the override (overwriting any previous one for the same
    /// suburb), drops the roster cache so the next read sees the new
    /// assignment, then best-effort pushes the override file.
    pub fn reassign(
        &self,
        suburb: SuburbName,
        editor: EditorName,
    ) -> TrackerResult<SyncOutcome> {
        let message = format!("reassign {suburb} to {editor}");
        self.overrides.record(suburb, editor)?;
        self.roster.invalidate();
        Ok(self.push_file(self.overrides.path(), message))
    }

    /// Per-suburb status rows in roster order
    pub fn status_table(&self) -> TrackerResult<Vec<StatusRow>> {
        let roster = self.effective_roster()?;
        let completion = self.completion.load()?;
        Ok(Reconciler::new(&roster, &completion).status_table())
    }

    /// Status of one suburb
    pub fn status(&self, suburb: &SuburbName) -> TrackerResult<SuburbStatus> {
        let roster = self.effective_roster()?;
        let completion = self.completion.load()?;
        Ok(Reconciler::new(&roster, &completion).status(suburb))
    }

    /// Per-editor progress summary
    pub fn summary(&self) -> TrackerResult<Vec<EditorSummary>> {
        let roster = self.effective_roster()?;
        let completion = self.completion.load()?;
        Ok(Reconciler::new(&roster, &completion).summary())
    }

    /// Whole-roster progress
    pub fn overall(&self) -> TrackerResult<OverallProgress> {
        let roster = self.effective_roster()?;
        let completion = self.completion.load()?;
        Ok(Reconciler::new(&roster, &completion).overall())
    }

    /// Stable color assignment for the current editor list
    pub fn palette(&self) -> TrackerResult<EditorPalette> {
        Ok(EditorPalette::new(&self.editors()?))
    }

    fn push_file(&self, path: &Path, message: String) -> SyncOutcome {
        if !self.sync.is_enabled() {
            tracing::info!(file = %path.display(), "sync disabled, keeping local only");
            return SyncOutcome::Disabled;
        }
        match SyncFile::from_path(path, message) {
            Ok(file) => self.sync.push_best_effort(&file),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read file for sync");
                SyncOutcome::Failed(e)
            }
        }
    }
}
