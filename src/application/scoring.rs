//! Signal Evaluation Score (SES).
//!
//! Five capped components summed into a 0 to 100 composite:
//!
//! | component        | cap |
//! |------------------|-----|
//! | median gap       | 40  |
//! | line structure   | 20  |
//! | minutes          | 15  |
//! | market type      | 15  |
//! | environment      | 10  |

use serde::{Deserialize, Serialize};

use super::environment::{EnvironmentScorer, PaceConfig, TempoConfig};
use crate::domain::line::LINE_EPSILON;
use crate::domain::{
    Archetype, LineStructure, MarketType, MinutesTier, Proposition, Side, SubScores,
};

/// Median-gap score when no median is known.
pub const UNKNOWN_MEDIAN_SCORE: f64 = 15.0;

const MAX_COMPOSITE: f64 = 100.0;
const GOBLIN_MIN_GAP: f64 = 2.0;
const DEMON_MIN_EDGE: f64 = 0.2;

/// Scoring configuration (`[scoring]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Average minutes at or above which playing time counts as locked.
    #[serde(default = "default_locked_minutes")]
    pub locked_minutes: f64,

    /// Average minutes at or above which playing time counts as medium.
    #[serde(default = "default_medium_minutes")]
    pub medium_minutes: f64,

    /// Tempo/efficiency model constants (`[scoring.tempo]`).
    #[serde(default)]
    pub tempo: TempoConfig,

    /// Pace/rank model constants (`[scoring.pace]`).
    #[serde(default)]
    pub pace: PaceConfig,
}

fn default_locked_minutes() -> f64 {
    32.0
}

fn default_medium_minutes() -> f64 {
    24.0
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            locked_minutes: default_locked_minutes(),
            medium_minutes: default_medium_minutes(),
            tempo: TempoConfig::default(),
            pace: PaceConfig::default(),
        }
    }
}

/// Everything the scoring stage derives for one proposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreCard {
    pub subscores: SubScores,
    pub composite: f64,
    pub line_structure: LineStructure,
    pub minutes_tier: MinutesTier,
    /// `line - median`, when a median is known.
    pub median_gap: Option<f64>,
}

/// SES scorer.
pub struct Scorer {
    config: ScoringConfig,
    environment: EnvironmentScorer,
}

impl Scorer {
    #[must_use]
    pub fn new(config: ScoringConfig) -> Self {
        let environment = EnvironmentScorer::new(config.tempo.clone(), config.pace.clone());
        Self {
            config,
            environment,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one proposition.
    #[must_use]
    pub fn score(&self, prop: &Proposition, archetype: Archetype) -> ScoreCard {
        let median = prop.effective_median();
        let median_gap = median.map(|m| prop.line - m);
        let line_structure = LineStructure::classify(prop.line);
        let minutes_tier = self.minutes_tier(prop.avg_minutes);

        let subscores = SubScores {
            median_gap: median_gap_score(prop.side, median_gap),
            line_structure: line_structure_score(line_structure, prop.side),
            minutes: minutes_score(minutes_tier),
            market_type: market_type_score(
                prop.market_type,
                prop.side,
                prop.line,
                median,
                minutes_tier,
            ),
            environment: self.environment.score(prop, archetype),
        };

        ScoreCard {
            composite: subscores.total().clamp(0.0, MAX_COMPOSITE),
            subscores,
            line_structure,
            minutes_tier,
            median_gap,
        }
    }

    /// Bucket average minutes. Missing minutes count as medium.
    #[must_use]
    pub fn minutes_tier(&self, minutes: Option<f64>) -> MinutesTier {
        match minutes {
            None => MinutesTier::Medium,
            Some(m) if m >= self.config.locked_minutes => MinutesTier::Locked,
            Some(m) if m >= self.config.medium_minutes => MinutesTier::Medium,
            Some(_) => MinutesTier::Risky,
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

/// Median-gap component. `gap` is `line - median`.
#[must_use]
pub fn median_gap_score(side: Side, gap: Option<f64>) -> f64 {
    let Some(gap) = gap else {
        return UNKNOWN_MEDIAN_SCORE;
    };
    let at_most = |bound: f64| gap <= bound + LINE_EPSILON;
    let at_least = |bound: f64| gap >= bound - LINE_EPSILON;

    match side {
        Side::Over if at_most(-2.0) => 40.0,
        Side::Over if at_most(-1.0) => 32.0,
        Side::Over if at_most(0.0) => 24.0,
        Side::Over if at_most(1.0) => 12.0,
        Side::Over => 0.0,
        Side::Under if at_least(2.0) => 40.0,
        Side::Under if at_least(1.0) => 28.0,
        Side::Under if at_least(0.5) => 16.0,
        Side::Under => 0.0,
    }
}

/// Line-structure component. Whole lines can push, which favors both sides.
#[must_use]
pub const fn line_structure_score(structure: LineStructure, side: Side) -> f64 {
    match (structure, side) {
        (LineStructure::Whole, _) => 20.0,
        (LineStructure::Half, Side::Over) => 12.0,
        (LineStructure::Half, Side::Under) => 6.0,
    }
}

#[must_use]
pub const fn minutes_score(tier: MinutesTier) -> f64 {
    match tier {
        MinutesTier::Locked => 15.0,
        MinutesTier::Medium => 10.0,
        MinutesTier::Risky => 4.0,
    }
}

/// Market-type component. Shaded lines only score well when the median
/// backs the bet's side.
#[must_use]
pub fn market_type_score(
    market: MarketType,
    side: Side,
    line: f64,
    median: Option<f64>,
    tier: MinutesTier,
) -> f64 {
    match market {
        MarketType::Standard => 15.0,
        MarketType::Goblin => {
            let cushion = median.map(|m| match side {
                Side::Over => m - line,
                Side::Under => line - m,
            });
            if cushion.is_some_and(|c| c >= GOBLIN_MIN_GAP - LINE_EPSILON) {
                10.0
            } else {
                3.0
            }
        }
        MarketType::Demon => {
            let clears = median.is_some_and(|m| match side {
                Side::Over => m >= line * (1.0 + DEMON_MIN_EDGE) - LINE_EPSILON,
                Side::Under => m <= line * (1.0 - DEMON_MIN_EDGE) + LINE_EPSILON,
            });
            if clears && tier == MinutesTier::Locked {
                12.0
            } else {
                2.0
            }
        }
    }
}
