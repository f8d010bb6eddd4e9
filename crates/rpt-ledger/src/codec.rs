//! Line codec for the tab-separated ledger files
//!
//! Tab is the delimiter throughout: suburb names in the source data carry
//! commas and apostrophes, tabs keep the codec a plain split. Blank lines
//! and `#` comments are ignored; header rows are always written and
//! skipped case-insensitively on read. A row missing a required field is
//! skipped with a warning, never fatal.

use crate::completion::CompletionRow;
use chrono::{DateTime, Utc};
use rpt_roster::{AssignmentOverride, EditorName, SuburbName};

pub(crate) const COMPLETION_HEADER: &str = "Editor\tSuburb\tCompletedAt";
pub(crate) const OVERRIDE_HEADER: &str = "Suburb\tAssigned";

/// Split a content line into fields, or `None` for blanks/comments
fn fields(line: &str) -> Option<Vec<&str>> {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    if trimmed.trim().is_empty() || trimmed.starts_with('#') {
        return None;
    }
    Some(trimmed.split('\t').collect())
}

/// Parse the completion ledger body into rows
pub(crate) fn parse_completion(content: &str) -> Vec<CompletionRow> {
    let mut rows = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let Some(fields) = fields(line) else { continue };
        if fields[0].eq_ignore_ascii_case("editor") {
            continue; // header
        }
        let (Some(editor), Some(suburb)) = (
            fields.first().and_then(|f| EditorName::new(f).ok()),
            fields.get(1).and_then(|f| SuburbName::new(f).ok()),
        ) else {
            tracing::warn!(line = number + 1, "skipping malformed completion row");
            continue;
        };
        let completed_at = fields
            .get(2)
            .and_then(|f| DateTime::parse_from_rfc3339(f).ok())
            .map(|dt| dt.with_timezone(&Utc));
        rows.push(CompletionRow {
            editor,
            suburb,
            completed_at,
        });
    }
    rows
}

/// Encode completion rows, header first, sorted by (editor, suburb)
pub(crate) fn encode_completion(rows: &[CompletionRow]) -> String {
    let mut sorted: Vec<&CompletionRow> = rows.iter().collect();
    sorted.sort_by(|a, b| (&a.editor, &a.suburb).cmp(&(&b.editor, &b.suburb)));

    let mut out = String::from(COMPLETION_HEADER);
    out.push('\n');
    for row in sorted {
        out.push_str(&encode_completion_row(row));
        out.push('\n');
    }
    out
}

/// Encode a single completion row (no trailing newline)
pub(crate) fn encode_completion_row(row: &CompletionRow) -> String {
    match &row.completed_at {
        Some(at) => format!("{}\t{}\t{}", row.editor, row.suburb, at.to_rfc3339()),
        None => format!("{}\t{}\t", row.editor, row.suburb),
    }
}

/// Parse the override ledger body into ordered rows
pub(crate) fn parse_overrides(content: &str) -> Vec<AssignmentOverride> {
    let mut rows = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let Some(fields) = fields(line) else { continue };
        if fields[0].eq_ignore_ascii_case("suburb") {
            continue; // header, when present
        }
        let (Some(suburb), Some(assigned)) = (
            fields.first().and_then(|f| SuburbName::new(f).ok()),
            fields.get(1).and_then(|f| EditorName::new(f).ok()),
        ) else {
            tracing::warn!(line = number + 1, "skipping malformed override row");
            continue;
        };
        rows.push(AssignmentOverride::new(suburb, assigned));
    }
    rows
}

/// Encode override rows in the given order, header first
pub(crate) fn encode_overrides<'a>(
    rows: impl Iterator<Item = (&'a SuburbName, &'a EditorName)>,
) -> String {
    let mut out = String::from(OVERRIDE_HEADER);
    out.push('\n');
    for (suburb, assigned) in rows {
        out.push_str(suburb.as_str());
        out.push('\t');
        out.push_str(assigned.as_str());
        out.push('\n');
    }
    out
}
