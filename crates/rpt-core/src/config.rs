//! Deployment configuration
//!
//! One TOML file describes a deployment: where the roster and ledgers
//! live, which columns the roster uses, which save contract is active,
//! and whether sync is configured.
//!
//! ```toml
//! [roster]
//! path = "data/suburbs.geojson"
//! columns = { name = "NAME", assigned = "Assigned" }
//!
//! [ledger]
//! completion = "state/progress.tsv"
//! overrides = "state/assignments.tsv"
//! contract = "whole_replace"
//!
//! [sync]
//! mirror_dir = "/srv/rpt-mirror"
//! ```

use crate::error::ConfigError;
use rpt_ledger::SaveContract;
use rpt_roster::RosterColumns;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Roster source settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterSection {
    /// GeoJSON roster file
    pub path: PathBuf,
    /// Attribute column mapping
    pub columns: RosterColumns,
}

impl Default for RosterSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/suburbs.geojson"),
            columns: RosterColumns::default(),
        }
    }
}

/// Ledger file settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerSection {
    /// Completion ledger file
    pub completion: PathBuf,
    /// Assignment override file
    pub overrides: PathBuf,
    /// Active persistence contract
    pub contract: SaveContract,
}

impl Default for LedgerSection {
    fn default() -> Self {
        Self {
            completion: PathBuf::from("state/progress.tsv"),
            overrides: PathBuf::from("state/assignments.tsv"),
            contract: SaveContract::default(),
        }
    }
}

/// Remote sync settings; everything optional, absence disables sync
///
/// `repository`/`token` identify the hosted remote for external clients;
/// the in-tree wiring only uses `mirror_dir`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncSection {
    /// Local mirror directory target
    pub mirror_dir: Option<PathBuf>,
    /// Remote repository/location identifier
    pub repository: Option<String>,
    /// Access credential for the remote
    pub token: Option<String>,
}

impl SyncSection {
    /// Whether any target is configured
    #[inline]
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.mirror_dir.is_some() || (self.repository.is_some() && self.token.is_some())
    }
}

/// Full deployment configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub roster: RosterSection,
    pub ledger: LedgerSection,
    pub sync: SyncSection,
}

impl TrackerConfig {
    /// Parse a TOML document
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] on syntax or shape errors.
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::invalid(origin, e.to_string()))
    }

    /// Load from a file
    ///
    /// # Errors
    /// Fails when the file is unreadable or not valid configuration;
    /// both are fatal to the interaction.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        Self::from_toml(&content, path)
    }

    /// With a different roster path
    #[inline]
    #[must_use]
    pub fn with_roster_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.roster.path = path.into();
        self
    }

    /// With a different save contract
    #[inline]
    #[must_use]
    pub fn with_contract(mut self, contract: SaveContract) -> Self {
        self.ledger.contract = contract;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = TrackerConfig::default();
        assert_eq!(config.roster.columns.name, "NAME");
        assert_eq!(config.ledger.contract, SaveContract::WholeReplace);
        assert!(!config.sync.is_configured());
    }

    #[test]
    fn parses_full_document() {
        let content = r#"
            [roster]
            path = "suburbs.geojson"
            columns = { name = "SUBURB", assigned = "Assigned" }

            [ledger]
            completion = "progress.tsv"
            overrides = "assignments.tsv"
            contract = "append_only"

            [sync]
            mirror_dir = "/tmp/mirror"
        "#;
        let config = TrackerConfig::from_toml(content, Path::new("rpt.toml")).unwrap();
        assert_eq!(config.roster.columns.name, "SUBURB");
        assert_eq!(config.ledger.contract, SaveContract::AppendOnly);
        assert!(config.sync.is_configured());
    }

    #[test]
    fn partial_document_fills_defaults() {
        let config =
            TrackerConfig::from_toml("[roster]\npath = \"x.geojson\"\n", Path::new("rpt.toml"))
                .unwrap();
        assert_eq!(config.roster.path, PathBuf::from("x.geojson"));
        assert_eq!(config.ledger.completion, PathBuf::from("state/progress.tsv"));
    }

    #[test]
    fn malformed_document_is_invalid() {
        let err = TrackerConfig::from_toml("[roster", Path::new("rpt.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn credentials_without_token_do_not_configure_sync() {
        let config = TrackerConfig::from_toml(
            "[sync]\nrepository = \"example/progress\"\n",
            Path::new("rpt.toml"),
        )
        .unwrap();
        assert!(!config.sync.is_configured());
    }
}
