//! Evaluation output records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::archetype::Archetype;
use super::id::{normalize_name, PlayerId};
use super::line::LineStructure;
use super::proposition::{MarketType, Side};
use super::stat::StatType;
use super::veto::Veto;

/// Recommendation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Standalone recommendation.
    Bet,
    /// Only usable as one leg of a combination.
    Lean,
    Reject,
}

impl Decision {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bet => "bet",
            Self::Lean => "lean",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Playing-time confidence bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinutesTier {
    Locked,
    Medium,
    Risky,
}

impl MinutesTier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Locked => "locked",
            Self::Medium => "medium",
            Self::Risky => "risky",
        }
    }
}

impl fmt::Display for MinutesTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five SES components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubScoreKind {
    MedianGap,
    LineStructure,
    Minutes,
    MarketType,
    Environment,
}

impl SubScoreKind {
    pub const ALL: [Self; 5] = [
        Self::MedianGap,
        Self::LineStructure,
        Self::Minutes,
        Self::MarketType,
        Self::Environment,
    ];

    /// Maximum points this component can contribute. Caps sum to 100.
    #[must_use]
    pub const fn cap(self) -> f64 {
        match self {
            Self::MedianGap => 40.0,
            Self::LineStructure => 20.0,
            Self::Minutes => 15.0,
            Self::MarketType => 15.0,
            Self::Environment => 10.0,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MedianGap => "median gap",
            Self::LineStructure => "line structure",
            Self::Minutes => "minutes certainty",
            Self::MarketType => "market type",
            Self::Environment => "environment",
        }
    }
}

/// Per-component SES points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub median_gap: f64,
    pub line_structure: f64,
    pub minutes: f64,
    pub market_type: f64,
    pub environment: f64,
}

impl SubScores {
    #[must_use]
    pub const fn get(&self, kind: SubScoreKind) -> f64 {
        match kind {
            SubScoreKind::MedianGap => self.median_gap,
            SubScoreKind::LineStructure => self.line_structure,
            SubScoreKind::Minutes => self.minutes,
            SubScoreKind::MarketType => self.market_type,
            SubScoreKind::Environment => self.environment,
        }
    }

    /// Sum of all components.
    #[must_use]
    pub fn total(&self) -> f64 {
        SubScoreKind::ALL.iter().map(|k| self.get(*k)).sum()
    }

    /// Component with the lowest share of its cap. Earlier components win
    /// ties.
    #[must_use]
    pub fn weakest(&self) -> SubScoreKind {
        SubScoreKind::ALL
            .into_iter()
            .min_by(|a, b| {
                let share_a = self.get(*a) / a.cap();
                let share_b = self.get(*b) / b.cap();
                share_a.total_cmp(&share_b)
            })
            .unwrap_or(SubScoreKind::MedianGap)
    }
}

/// Persistence key: one record per player, statistic and slate date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EvaluationKey {
    pub player: String,
    pub stat: String,
    pub date: Option<NaiveDate>,
}

impl EvaluationKey {
    #[must_use]
    pub fn new(player: &PlayerId, stat: &StatType, date: Option<NaiveDate>) -> Self {
        Self {
            player: player.normalized(),
            stat: stat.canonical(),
            date,
        }
    }
}

impl fmt::Display for EvaluationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date {
            Some(date) => write!(f, "{}/{}/{}", self.player, self.stat, date),
            None => write!(f, "{}/{}", self.player, self.stat),
        }
    }
}

/// Outcome of evaluating one proposition. Built once by the evaluator and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub player: PlayerId,
    pub stat: StatType,
    pub line: f64,
    pub side: Side,
    pub team: Option<String>,
    pub opponent: Option<String>,
    pub sport: Option<String>,
    pub market_type: MarketType,
    pub date: Option<NaiveDate>,
    pub line_structure: LineStructure,
    pub archetype: Archetype,
    pub minutes_tier: MinutesTier,
    /// `line - median`, when a median was available.
    pub median_gap: Option<f64>,
    pub subscores: SubScores,
    pub composite: f64,
    pub decision: Decision,
    pub veto: Option<Veto>,
    pub justification: String,
}

impl EvaluationResult {
    #[must_use]
    pub fn is_vetoed(&self) -> bool {
        self.veto.is_some()
    }

    #[must_use]
    pub fn key(&self) -> EvaluationKey {
        EvaluationKey::new(&self.player, &self.stat, self.date)
    }

    /// Normalized team name, if known.
    #[must_use]
    pub fn team_key(&self) -> Option<String> {
        self.team
            .as_deref()
            .map(normalize_name)
            .filter(|t| !t.is_empty())
    }

    /// Short display label, e.g. `Jalen Brunson points over 26.5`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {} {} {}", self.player, self.stat, self.side, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_sum_to_one_hundred() {
        let total: f64 = SubScoreKind::ALL.iter().map(|k| k.cap()).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn total_sums_components() {
        let scores = SubScores {
            median_gap: 40.0,
            line_structure: 12.0,
            minutes: 15.0,
            market_type: 15.0,
            environment: 5.0,
        };
        assert_eq!(scores.total(), 87.0);
    }

    #[test]
    fn weakest_uses_share_of_cap() {
        // 12/40 = 0.30 beats 4/10 = 0.40 even though 4 < 12.
        let scores = SubScores {
            median_gap: 12.0,
            line_structure: 20.0,
            minutes: 15.0,
            market_type: 15.0,
            environment: 4.0,
        };
        assert_eq!(scores.weakest(), SubScoreKind::MedianGap);
    }

    #[test]
    fn key_normalizes_player_and_stat() {
        let a = EvaluationKey::new(
            &PlayerId::from("Nikola  Jokic"),
            &StatType::from("pts+rebs"),
            None,
        );
        let b = EvaluationKey::new(
            &PlayerId::from("nikola jokic"),
            &StatType::from("points_rebounds"),
            None,
        );
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "nikola jokic/points+rebounds");
    }
}
