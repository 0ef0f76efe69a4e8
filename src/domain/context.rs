//! Game-environment inputs for the two sport data regimes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::stat::BaseStat;

/// Which environment model a sport's data supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SportFamily {
    /// College basketball: adjusted tempo and efficiency figures.
    TempoEfficiency,
    /// Professional leagues: pace ratings and per-stat defensive ranks.
    PaceRank,
}

impl SportFamily {
    /// Map a sport tag onto its data regime. `None` for missing or
    /// unrecognized tags.
    #[must_use]
    pub fn from_sport(sport: Option<&str>) -> Option<Self> {
        match sport?.trim().to_lowercase().as_str() {
            "cbb" | "ncaab" | "ncaam" | "ncaaw" | "ncaa" | "wcbb" | "college_basketball" => {
                Some(Self::TempoEfficiency)
            }
            "nba" | "wnba" | "gleague" | "g_league" => Some(Self::PaceRank),
            _ => None,
        }
    }

    /// Regime implied by the context a proposition carries: tempo tables
    /// alone select tempo/efficiency, anything else pace/rank.
    #[must_use]
    pub const fn from_context(game_context: bool, pace_context: bool) -> Self {
        if game_context && !pace_context {
            Self::TempoEfficiency
        } else {
            Self::PaceRank
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TempoEfficiency => "tempo_efficiency",
            Self::PaceRank => "pace_rank",
        }
    }
}

impl fmt::Display for SportFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Adjusted tempo and efficiency figures for both teams in a game.
///
/// Tempo is possessions per 40 minutes; efficiency is points per 100
/// possessions, both opponent-adjusted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameContext {
    #[serde(default)]
    pub team_tempo: Option<f64>,
    #[serde(default)]
    pub opponent_tempo: Option<f64>,
    /// Player's team adjusted offensive efficiency.
    #[serde(default)]
    pub team_offense: Option<f64>,
    /// Opponent adjusted defensive efficiency (lower is stronger).
    #[serde(default)]
    pub opponent_defense: Option<f64>,
}

impl GameContext {
    /// Mean of both teams' tempo, when both are known.
    #[must_use]
    pub fn combined_tempo(&self) -> Option<f64> {
        Some((self.team_tempo? + self.opponent_tempo?) / 2.0)
    }
}

/// League rank per base statistic. Rank 1 is the best unit in the league
/// (fewest allowed for defense, most produced for offense).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRanks {
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub rebounds: Option<u32>,
    #[serde(default)]
    pub assists: Option<u32>,
    #[serde(default)]
    pub threes: Option<u32>,
    #[serde(default)]
    pub steals: Option<u32>,
    #[serde(default)]
    pub blocks: Option<u32>,
    #[serde(default)]
    pub turnovers: Option<u32>,
}

impl StatRanks {
    #[must_use]
    pub const fn get(&self, stat: BaseStat) -> Option<u32> {
        match stat {
            BaseStat::Points => self.points,
            BaseStat::Rebounds => self.rebounds,
            BaseStat::Assists => self.assists,
            BaseStat::Threes => self.threes,
            BaseStat::Steals => self.steals,
            BaseStat::Blocks => self.blocks,
            BaseStat::Turnovers => self.turnovers,
        }
    }
}

/// Pace ratings and stat-specific ranks for the pace/rank regime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaceContext {
    /// Opponent's rank at limiting each statistic.
    #[serde(default)]
    pub opponent_defense_ranks: StatRanks,
    /// Player's team rank at producing each statistic.
    #[serde(default)]
    pub team_offense_ranks: StatRanks,
    /// Projected possessions per 48 minutes for this game.
    #[serde(default)]
    pub league_pace: Option<f64>,
    /// Opponent's pace rank (1 = fastest).
    #[serde(default)]
    pub opponent_pace_rank: Option<u32>,
}
