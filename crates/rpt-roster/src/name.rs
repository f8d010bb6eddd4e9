//! Identity newtypes for suburbs and editors
//!
//! Provides [`SuburbName`] and [`EditorName`]. Suburb identity is
//! case-insensitive across every version of the source data, so the
//! newtype normalizes (trim + uppercase) at construction. Editor names
//! keep their case and are compared exactly.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Errors constructing identity names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// Name was empty (or whitespace only)
    #[error("name is empty")]
    Empty,
}

/// Normalized suburb name, the identity key of the whole system
///
/// Construction trims surrounding whitespace and upper-cases, so
/// `"Umbumbulu "` and `"UMBUMBULU"` are the same suburb.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuburbName(String);

impl SuburbName {
    /// Create a normalized suburb name
    ///
    /// # Errors
    /// Returns [`NameError::Empty`] if the input is empty after trimming.
    pub fn new(name: impl AsRef<str>) -> Result<Self, NameError> {
        let normalized = name.as_ref().trim().to_uppercase();
        if normalized.is_empty() {
            return Err(NameError::Empty);
        }
        Ok(Self(normalized))
    }

    /// The normalized name as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SuburbName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SuburbName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Editor name: trimmed, case preserved, compared exactly
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditorName(String);

impl EditorName {
    /// Create an editor name
    ///
    /// # Errors
    /// Returns [`NameError::Empty`] if the input is empty after trimming.
    pub fn new(name: impl AsRef<str>) -> Result<Self, NameError> {
        let trimmed = name.as_ref().trim().to_string();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }
        Ok(Self(trimmed))
    }

    /// The editor name as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EditorName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EditorName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suburb_name_normalizes() {
        let name = SuburbName::new("  Umbumbulu ").unwrap();
        assert_eq!(name.as_str(), "UMBUMBULU");
    }

    #[test]
    fn suburb_names_case_insensitive() {
        let a = SuburbName::new("Inwabi").unwrap();
        let b = SuburbName::new("INWABI").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn suburb_name_empty_rejected() {
        assert_eq!(SuburbName::new("   "), Err(NameError::Empty));
        assert_eq!(SuburbName::new(""), Err(NameError::Empty));
    }

    #[test]
    fn editor_name_preserves_case() {
        let editor = EditorName::new(" Thandi ").unwrap();
        assert_eq!(editor.as_str(), "Thandi");
        assert_ne!(editor, EditorName::new("thandi").unwrap());
    }

    #[test]
    fn names_order_lexicographically() {
        let mut editors = vec![
            EditorName::new("Sipho").unwrap(),
            EditorName::new("Anele").unwrap(),
            EditorName::new("Thandi").unwrap(),
        ];
        editors.sort();
        assert_eq!(editors[0].as_str(), "Anele");
        assert_eq!(editors[2].as_str(), "Thandi");
    }

    #[test]
    fn from_str_round_trip() {
        let name: SuburbName = "adams mission".parse().unwrap();
        assert_eq!(name.to_string(), "ADAMS MISSION");
    }
}
