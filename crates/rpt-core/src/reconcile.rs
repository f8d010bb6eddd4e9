//! Reconciliation of completion state against the roster
//!
//! Status is derived from the completion map alone, independent of the
//! roster's `Assigned` field: an editor may complete a suburb assigned to
//! someone else, and the suburb still shows Complete under that editor.
//!
//! # Tie-break
//!
//! A suburb can appear under several editors in the persisted log. The
//! owning editor for display is the first match in lexicographic editor
//! order (the completion map's iteration order). This is a deliberate,
//! documented policy: the order is stable across runs and platforms.

use rpt_ledger::CompletionMap;
use rpt_roster::{EditorName, Roster, SuburbName};
use serde::Serialize;

/// Display status of one suburb
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SuburbStatus {
    /// Some editor marked it complete
    Complete {
        /// The owning editor per the documented tie-break
        by: EditorName,
    },
    /// Nobody has marked it complete
    NotStarted,
}

impl SuburbStatus {
    /// Whether the suburb is complete
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }
}

/// One row of the per-suburb status table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusRow {
    pub name: SuburbName,
    pub assigned: Option<EditorName>,
    pub status: SuburbStatus,
}

/// Per-editor progress summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorSummary {
    pub editor: EditorName,
    pub completed: usize,
    pub total: usize,
    /// Percent complete, one decimal; 0 when nothing is assigned
    pub percent: f64,
}

/// Whole-roster progress
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
}

/// Percent with one-decimal rounding; zero denominator yields 0.0
fn percent(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (completed as f64 / total as f64 * 1000.0).round() / 10.0
}

/// Joins the roster against the completion map
#[derive(Debug, Clone, Copy)]
pub struct Reconciler<'a> {
    roster: &'a Roster,
    completion: &'a CompletionMap,
}

impl<'a> Reconciler<'a> {
    /// Create a reconciler over a roster snapshot and completion map
    #[inline]
    #[must_use]
    pub fn new(roster: &'a Roster, completion: &'a CompletionMap) -> Self {
        Self { roster, completion }
    }

    /// Status of one suburb
    ///
    /// Complete iff any editor's set contains it; the owner is the first
    /// match in lexicographic editor order.
    #[must_use]
    pub fn status(&self, suburb: &SuburbName) -> SuburbStatus {
        for (editor, suburbs) in self.completion.iter() {
            if suburbs.contains(suburb) {
                return SuburbStatus::Complete {
                    by: editor.clone(),
                };
            }
        }
        SuburbStatus::NotStarted
    }

    /// Per-suburb status rows in roster order
    #[must_use]
    pub fn status_table(&self) -> Vec<StatusRow> {
        self.roster
            .records()
            .map(|record| StatusRow {
                name: record.name.clone(),
                assigned: record.assigned.clone(),
                status: self.status(&record.name),
            })
            .collect()
    }

    /// Per-editor summaries, one row per assigned editor, sorted
    ///
    /// An editor's `completed` counts only suburbs *assigned* to them that
    /// they themselves marked complete; work they did on someone else's
    /// suburb shows in the status table but not in their summary.
    #[must_use]
    pub fn summary(&self) -> Vec<EditorSummary> {
        self.roster
            .editors()
            .into_iter()
            .map(|editor| {
                let assigned = self.roster.assigned_to(&editor);
                let done = self.completion.completed_by(&editor);
                let completed = assigned.iter().filter(|s| done.contains(s)).count();
                let total = assigned.len();
                EditorSummary {
                    percent: percent(completed, total),
                    editor,
                    completed,
                    total,
                }
            })
            .collect()
    }

    /// Whole-roster progress
    #[must_use]
    pub fn overall(&self) -> OverallProgress {
        let total = self.roster.len();
        let completed = self
            .roster
            .records()
            .filter(|record| self.status(&record.name).is_complete())
            .count();
        OverallProgress {
            completed,
            total,
            percent: percent(completed, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpt_ledger::CompletionRow;
    use rpt_roster::{Coord, Geometry, Polygon, SuburbRecord};

    fn editor(s: &str) -> EditorName {
        EditorName::new(s).unwrap()
    }

    fn suburb(s: &str) -> SuburbName {
        SuburbName::new(s).unwrap()
    }

    fn geom() -> Geometry {
        Geometry::Polygon(Polygon::new(vec![
            Coord::new(30.0, -29.9),
            Coord::new(30.1, -29.9),
            Coord::new(30.1, -29.8),
            Coord::new(30.0, -29.9),
        ]))
    }

    fn roster(entries: &[(&str, Option<&str>)]) -> Roster {
        Roster::from_records(entries.iter().map(|(name, assigned)| {
            SuburbRecord::new(
                suburb(name),
                geom(),
                assigned.map(|a| editor(a)),
            )
        }))
    }

    fn completions(pairs: &[(&str, &str)]) -> CompletionMap {
        CompletionMap::from_rows(
            pairs
                .iter()
                .map(|(e, s)| CompletionRow::now(editor(e), suburb(s))),
        )
    }

    #[test]
    fn status_complete_iff_some_editor_contains_it() {
        let roster = roster(&[("Umbumbulu", Some("A")), ("Inwabi", Some("B"))]);
        let map = completions(&[("A", "Umbumbulu")]);
        let reconciler = Reconciler::new(&roster, &map);

        assert_eq!(
            reconciler.status(&suburb("Umbumbulu")),
            SuburbStatus::Complete { by: editor("A") }
        );
        assert_eq!(reconciler.status(&suburb("Inwabi")), SuburbStatus::NotStarted);
    }

    #[test]
    fn tie_break_is_lowest_editor_name() {
        let roster = roster(&[("Umbumbulu", Some("A"))]);
        // Both Zanele and Bheki completed the same suburb
        let map = completions(&[("Zanele", "Umbumbulu"), ("Bheki", "Umbumbulu")]);
        let reconciler = Reconciler::new(&roster, &map);

        assert_eq!(
            reconciler.status(&suburb("Umbumbulu")),
            SuburbStatus::Complete {
                by: editor("Bheki")
            }
        );
    }

    #[test]
    fn completion_is_independent_of_assignment() {
        // B completes a suburb assigned to A
        let roster = roster(&[("Umbumbulu", Some("A"))]);
        let map = completions(&[("B", "Umbumbulu")]);
        let reconciler = Reconciler::new(&roster, &map);

        assert_eq!(
            reconciler.status(&suburb("Umbumbulu")),
            SuburbStatus::Complete { by: editor("B") }
        );
        // But A's summary does not count it: B did the work
        let summary = reconciler.summary();
        assert_eq!(summary[0].editor, editor("A"));
        assert_eq!(summary[0].completed, 0);
    }

    #[test]
    fn summary_percent_rounds_to_one_decimal() {
        let roster = roster(&[
            ("S1", Some("A")),
            ("S2", Some("A")),
            ("S3", Some("A")),
        ]);
        let map = completions(&[("A", "S1")]);
        let reconciler = Reconciler::new(&roster, &map);

        let summary = reconciler.summary();
        assert_eq!(summary[0].percent, 33.3);
    }

    #[test]
    fn editor_with_nothing_assigned_yields_zero_percent() {
        // C completed something but has no assignments in the roster
        let roster = roster(&[("S1", Some("A"))]);
        let map = completions(&[("A", "S1")]);
        let reconciler = Reconciler::new(&roster, &map);

        assert_eq!(percent(0, 0), 0.0);
        // No division error anywhere in the summary path
        let summary = reconciler.summary();
        assert_eq!(summary.len(), 1);
    }

    #[test]
    fn overall_progress_counts_any_completion() {
        let roster = roster(&[("Umbumbulu", Some("A")), ("Inwabi", Some("B"))]);

        let empty = CompletionMap::new();
        let reconciler = Reconciler::new(&roster, &empty);
        assert_eq!(
            reconciler.overall(),
            OverallProgress {
                completed: 0,
                total: 2,
                percent: 0.0
            }
        );

        let map = completions(&[("A", "Umbumbulu")]);
        let reconciler = Reconciler::new(&roster, &map);
        assert_eq!(
            reconciler.overall(),
            OverallProgress {
                completed: 1,
                total: 2,
                percent: 50.0
            }
        );
    }

    #[test]
    fn status_table_in_roster_order() {
        let roster = roster(&[("Zwelibomvu", Some("A")), ("Adams Mission", Some("B"))]);
        let map = completions(&[("B", "Adams Mission")]);
        let table = Reconciler::new(&roster, &map).status_table();

        assert_eq!(table.len(), 2);
        assert_eq!(table[0].name, suburb("Zwelibomvu"));
        assert!(!table[0].status.is_complete());
        assert!(table[1].status.is_complete());
    }

    #[test]
    fn empty_roster_overall_is_zero() {
        let roster = Roster::default();
        let map = CompletionMap::new();
        let overall = Reconciler::new(&roster, &map).overall();
        assert_eq!(overall.total, 0);
        assert_eq!(overall.percent, 0.0);
    }
}
