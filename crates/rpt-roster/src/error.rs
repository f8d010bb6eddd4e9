//! Error types for roster loading and validation

use std::path::PathBuf;

/// Errors while reading or validating the roster
///
/// Everything here is fatal to the interaction: a roster that cannot be
/// read or is missing required attribute columns stops the application.
/// Malformed individual rows are *not* errors; sources skip them with a
/// warning and continue.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Required attribute columns absent from the source
    #[error("missing required columns: {}", columns.join(", "))]
    MissingColumns {
        /// The full missing set, sorted
        columns: Vec<String>,
    },

    /// IO error reading the roster source
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source document could not be parsed
    #[error("invalid roster source {path}: {message}")]
    Invalid { path: PathBuf, message: String },
}

impl RosterError {
    /// Create a missing-columns error; sorts for stable display
    #[must_use]
    pub fn missing_columns(mut columns: Vec<String>) -> Self {
        columns.sort();
        Self::MissingColumns { columns }
    }

    /// Create an IO error for a path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid-source error for a path
    pub fn invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Invalid {
            path: path.into(),
            message: message.into(),
        }
    }
}
