//! Identifier newtypes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Player identifier - newtype for type safety.
///
/// Holds the identifier exactly as supplied upstream. Use
/// [`PlayerId::normalized`] when comparing players across records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new PlayerId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the player ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case- and whitespace-insensitive form used for set lookups and
    /// same-player checks.
    #[must_use]
    pub fn normalized(&self) -> String {
        normalize_name(&self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Trim, lowercase, and collapse inner whitespace.
///
/// Shared by player identifiers, team names and the rebounder exception set
/// so that `"Nikola  Jokic "` and `"nikola jokic"` compare equal.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_id_display_round_trips_raw_value() {
        let id = PlayerId::from("Bam Adebayo");
        assert_eq!(id.to_string(), "Bam Adebayo");
        assert_eq!(id.as_str(), "Bam Adebayo");
    }

    #[test]
    fn normalized_ignores_case_and_spacing() {
        let a = PlayerId::from("  Nikola   Jokic ");
        let b = PlayerId::from("nikola jokic");
        assert_ne!(a, b);
        assert_eq!(a.normalized(), b.normalized());
    }

    #[test]
    fn normalize_name_empty_input() {
        assert_eq!(normalize_name("   "), "");
    }
}
