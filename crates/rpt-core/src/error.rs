//! Error rollup for the tracker facade

use std::path::PathBuf;

/// Errors loading deployment configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or shape error
    #[error("invalid config {path}: {message}")]
    Invalid { path: PathBuf, message: String },
}

impl ConfigError {
    /// Create an IO error for a path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid-config error for a path
    pub fn invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Invalid {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Combined tracker error
///
/// Sync failures are deliberately absent: the adapter degrades them to
/// warnings, so they can never surface here.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("roster error: {0}")]
    Roster(#[from] rpt_roster::RosterError),

    #[error("ledger error: {0}")]
    Ledger(#[from] rpt_ledger::LedgerError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_error_converts() {
        let err: TrackerError =
            rpt_roster::RosterError::missing_columns(vec!["NAME".to_string()]).into();
        assert!(matches!(err, TrackerError::Roster(_)));
        assert!(err.to_string().contains("missing required columns"));
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::invalid("rpt.toml", "missing roster section");
        assert!(err.to_string().contains("rpt.toml"));
    }
}
