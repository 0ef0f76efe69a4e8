//! Player archetype inference.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::stat::StatType;

/// Stylistic role used to bias scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Guard,
    Wing,
    Big,
}

impl Archetype {
    /// Infer the archetype from an explicit position when available,
    /// otherwise from the statistic being evaluated.
    #[must_use]
    pub fn classify(position: Option<&str>, stat: &StatType) -> Self {
        match position.map(str::trim).filter(|p| !p.is_empty()) {
            Some(position) => Self::from_position(position),
            None if stat.is_rebound_type() => Self::Big,
            None if stat.is_assist_type() => Self::Guard,
            None => Self::Wing,
        }
    }

    fn from_position(position: &str) -> Self {
        let position = position.to_uppercase().replace(['/', ' ', '_'], "-");
        match position.as_str() {
            "C" | "PF" | "F" | "FC" | "CF" | "C-F" | "F-C" | "PF-C" | "C-PF" | "CENTER"
            | "FORWARD" | "POWER-FORWARD" => Self::Big,
            "PG" | "SG" | "G" | "PG-SG" | "SG-PG" | "GUARD" | "POINT-GUARD"
            | "SHOOTING-GUARD" => Self::Guard,
            _ => Self::Wing,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Guard => "Guard",
            Self::Wing => "Wing",
            Self::Big => "Big",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_takes_precedence_over_stat() {
        let rebounds = StatType::from("rebounds");
        assert_eq!(Archetype::classify(Some("PG"), &rebounds), Archetype::Guard);
        assert_eq!(Archetype::classify(Some("c"), &rebounds), Archetype::Big);
        assert_eq!(Archetype::classify(Some("SF"), &rebounds), Archetype::Wing);
        assert_eq!(Archetype::classify(Some("F/C"), &rebounds), Archetype::Big);
    }

    #[test]
    fn stat_fallback_without_position() {
        assert_eq!(
            Archetype::classify(None, &StatType::from("points_rebounds")),
            Archetype::Big
        );
        assert_eq!(
            Archetype::classify(None, &StatType::from("assists")),
            Archetype::Guard
        );
        assert_eq!(
            Archetype::classify(None, &StatType::from("points")),
            Archetype::Wing
        );
    }

    #[test]
    fn rebounds_win_over_assists() {
        assert_eq!(
            Archetype::classify(None, &StatType::from("rebounds+assists")),
            Archetype::Big
        );
    }

    #[test]
    fn blank_position_falls_back() {
        assert_eq!(
            Archetype::classify(Some("  "), &StatType::from("assists")),
            Archetype::Guard
        );
    }
}
