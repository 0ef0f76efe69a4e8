//! Tempo/efficiency environment model.
//!
//! Additive around a neutral 5: a faster combined tempo helps overs, a
//! stronger opposing defense hurts them, and an elite offense adds a small
//! bonus to overs.

use serde::{Deserialize, Serialize};

use super::{EnvironmentModel, ENVIRONMENT_CAP, NEUTRAL_ENVIRONMENT};
use crate::domain::Proposition;

/// League constants for the tempo/efficiency model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempoConfig {
    /// League average adjusted tempo (possessions per 40).
    #[serde(default = "default_league_tempo")]
    pub league_tempo: f64,

    /// League average adjusted efficiency (points per 100 possessions).
    #[serde(default = "default_league_efficiency")]
    pub league_efficiency: f64,

    /// Offensive efficiency at or above which a team counts as elite.
    #[serde(default = "default_elite_offense")]
    pub elite_offense: f64,
}

fn default_league_tempo() -> f64 {
    67.5
}

fn default_league_efficiency() -> f64 {
    105.0
}

fn default_elite_offense() -> f64 {
    115.0
}

impl Default for TempoConfig {
    fn default() -> Self {
        Self {
            league_tempo: default_league_tempo(),
            league_efficiency: default_league_efficiency(),
            elite_offense: default_elite_offense(),
        }
    }
}

const PACE_POINTS_PER_POSSESSION: f64 = 0.5;
const MAX_PACE_ADJUSTMENT: f64 = 4.0;
const DEFENSE_EFFICIENCY_PER_POINT: f64 = 3.0;
const MAX_DEFENSE_ADJUSTMENT: f64 = 3.0;
const ELITE_OFFENSE_BONUS: f64 = 2.0;

/// Environment model for sports with adjusted tempo/efficiency tables.
#[derive(Debug, Clone, Default)]
pub struct TempoEfficiencyModel {
    config: TempoConfig,
}

impl TempoEfficiencyModel {
    #[must_use]
    pub const fn new(config: TempoConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &TempoConfig {
        &self.config
    }
}

impl EnvironmentModel for TempoEfficiencyModel {
    fn name(&self) -> &'static str {
        "tempo_efficiency"
    }

    fn applies_to(&self, prop: &Proposition) -> bool {
        prop.game_context.is_some() && prop.stat.is_counting()
    }

    fn score(&self, prop: &Proposition) -> f64 {
        let Some(ctx) = prop.game_context.as_ref() else {
            return NEUTRAL_ENVIRONMENT;
        };
        let direction = if prop.side.is_over() { 1.0 } else { -1.0 };
        let mut score = NEUTRAL_ENVIRONMENT;

        if let Some(tempo) = ctx.combined_tempo() {
            let pace = ((tempo - self.config.league_tempo) * PACE_POINTS_PER_POSSESSION)
                .clamp(-MAX_PACE_ADJUSTMENT, MAX_PACE_ADJUSTMENT);
            score += direction * pace;
        }

        if let Some(defense) = ctx.opponent_defense {
            // Positive when the opponent allows fewer points than average.
            let strength = ((self.config.league_efficiency - defense)
                / DEFENSE_EFFICIENCY_PER_POINT)
                .clamp(-MAX_DEFENSE_ADJUSTMENT, MAX_DEFENSE_ADJUSTMENT);
            score -= direction * strength;
        }

        if prop.side.is_over()
            && ctx
                .team_offense
                .is_some_and(|offense| offense >= self.config.elite_offense)
        {
            score += ELITE_OFFENSE_BONUS;
        }

        score.clamp(0.0, ENVIRONMENT_CAP)
    }
}
