//! Pace/defensive-rank environment model.
//!
//! A weighted blend of normalized factors, scaled by 12.5 onto [0, 10]:
//!
//! | factor                                   | weight |
//! |------------------------------------------|--------|
//! | opponent stat defense rank (inv. under)  |  0.30  |
//! | team stat offense rank                   |  0.20  |
//! | league pace rating                       |  0.15  |
//! | opponent pace rank                       |  0.05  |
//! | blowout probability                      | -0.10  |
//!
//! Missing inputs count as the league midpoint (0.5); a missing blowout
//! input counts as no blowout risk.

use serde::{Deserialize, Serialize};

use super::{EnvironmentModel, ENVIRONMENT_CAP, NEUTRAL_ENVIRONMENT};
use crate::domain::{BaseStat, Proposition, StatRanks, StatType};

const DEFENSE_WEIGHT: f64 = 0.30;
const OFFENSE_WEIGHT: f64 = 0.20;
const LEAGUE_PACE_WEIGHT: f64 = 0.15;
const OPPONENT_PACE_WEIGHT: f64 = 0.05;
const BLOWOUT_WEIGHT: f64 = -0.10;
const SCALE: f64 = 12.5;
const MIDPOINT: f64 = 0.5;

/// League constants for the pace/rank model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceConfig {
    /// Teams in the league; ranks run 1..=team_count.
    #[serde(default = "default_team_count")]
    pub team_count: u32,

    /// Pace rating mapped to 0.
    #[serde(default = "default_pace_floor")]
    pub pace_floor: f64,

    /// Pace rating mapped to 1.
    #[serde(default = "default_pace_ceiling")]
    pub pace_ceiling: f64,

    /// Absolute spread treated as a certain blowout.
    #[serde(default = "default_blowout_spread_cap")]
    pub blowout_spread_cap: f64,
}

fn default_team_count() -> u32 {
    30
}

fn default_pace_floor() -> f64 {
    95.0
}

fn default_pace_ceiling() -> f64 {
    105.0
}

fn default_blowout_spread_cap() -> f64 {
    15.0
}

impl Default for PaceConfig {
    fn default() -> Self {
        Self {
            team_count: default_team_count(),
            pace_floor: default_pace_floor(),
            pace_ceiling: default_pace_ceiling(),
            blowout_spread_cap: default_blowout_spread_cap(),
        }
    }
}

/// Sub-weights used to blend single-stat ranks for a statistic.
#[must_use]
pub fn rank_weights(stat: &StatType) -> Vec<(BaseStat, f64)> {
    use BaseStat::{Assists, Blocks, Points, Rebounds, Steals};

    let components = stat.components();
    let has = |s: BaseStat| components.contains(&s);

    match components.len() {
        0 => Vec::new(),
        1 => vec![(components[0], 1.0)],
        2 if has(Points) && has(Rebounds) => vec![(Points, 0.6), (Rebounds, 0.4)],
        2 if has(Points) && has(Assists) => vec![(Points, 0.6), (Assists, 0.4)],
        2 if has(Rebounds) && has(Assists) => vec![(Rebounds, 0.5), (Assists, 0.5)],
        2 if has(Blocks) && has(Steals) => vec![(Blocks, 0.5), (Steals, 0.5)],
        3 if has(Points) && has(Rebounds) && has(Assists) => {
            vec![(Points, 0.5), (Rebounds, 0.25), (Assists, 0.25)]
        }
        n => {
            let weight = 1.0 / n as f64;
            components.iter().map(|s| (*s, weight)).collect()
        }
    }
}

/// Environment model for leagues with pace ratings and per-stat ranks.
#[derive(Debug, Clone, Default)]
pub struct PaceRankModel {
    config: PaceConfig,
}

impl PaceRankModel {
    #[must_use]
    pub const fn new(config: PaceConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &PaceConfig {
        &self.config
    }

    fn span(&self) -> f64 {
        f64::from(self.config.team_count.max(2) - 1)
    }

    fn clamp_rank(&self, rank: u32) -> f64 {
        f64::from(rank.clamp(1, self.config.team_count.max(2)))
    }

    /// 0 for the stingiest defense, 1 for the most generous.
    fn defense_factor(&self, rank: u32) -> f64 {
        (self.clamp_rank(rank) - 1.0) / self.span()
    }

    /// 1 for the most productive unit (or fastest team), 0 for the least.
    fn strength_factor(&self, rank: u32) -> f64 {
        (f64::from(self.config.team_count.max(2)) - self.clamp_rank(rank)) / self.span()
    }

    /// Weighted factor across the stat's components, renormalized over the
    /// ranks that are present.
    fn blended(
        &self,
        ranks: &StatRanks,
        stat: &StatType,
        factor: impl Fn(&Self, u32) -> f64,
    ) -> Option<f64> {
        let (sum, weight) = rank_weights(stat)
            .into_iter()
            .filter_map(|(base, w)| ranks.get(base).map(|rank| (factor(self, rank) * w, w)))
            .fold((0.0, 0.0), |(sum, total), (value, w)| (sum + value, total + w));
        (weight > 0.0).then(|| sum / weight)
    }

    fn league_pace_factor(&self, pace: f64) -> f64 {
        let range = self.config.pace_ceiling - self.config.pace_floor;
        if range <= 0.0 {
            return MIDPOINT;
        }
        ((pace - self.config.pace_floor) / range).clamp(0.0, 1.0)
    }

    fn blowout_probability(&self, spread: f64) -> f64 {
        if self.config.blowout_spread_cap <= 0.0 {
            return 0.0;
        }
        (spread.abs() / self.config.blowout_spread_cap).min(1.0)
    }
}

impl EnvironmentModel for PaceRankModel {
    fn name(&self) -> &'static str {
        "pace_rank"
    }

    fn applies_to(&self, _prop: &Proposition) -> bool {
        true
    }

    fn score(&self, prop: &Proposition) -> f64 {
        let Some(ctx) = prop.pace_context.as_ref() else {
            return NEUTRAL_ENVIRONMENT;
        };

        let defense = self
            .blended(&ctx.opponent_defense_ranks, &prop.stat, Self::defense_factor)
            .unwrap_or(MIDPOINT);
        let defense = if prop.side.is_under() {
            1.0 - defense
        } else {
            defense
        };
        let offense = self
            .blended(&ctx.team_offense_ranks, &prop.stat, Self::strength_factor)
            .unwrap_or(MIDPOINT);
        let league_pace = ctx
            .league_pace
            .map_or(MIDPOINT, |pace| self.league_pace_factor(pace));
        let opponent_pace = ctx
            .opponent_pace_rank
            .map_or(MIDPOINT, |rank| self.strength_factor(rank));
        let blowout = prop
            .spread
            .map_or(0.0, |spread| self.blowout_probability(spread));

        let blend = DEFENSE_WEIGHT * defense
            + OFFENSE_WEIGHT * offense
            + LEAGUE_PACE_WEIGHT * league_pace
            + OPPONENT_PACE_WEIGHT * opponent_pace
            + BLOWOUT_WEIGHT * blowout;

        (blend * SCALE).clamp(0.0, ENVIRONMENT_CAP)
    }
}
