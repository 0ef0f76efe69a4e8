//! Environment subscore (0 to 10).
//!
//! Two independent models implement [`EnvironmentModel`]:
//!
//! - [`tempo::TempoEfficiencyModel`]: adjusted tempo and efficiency tables
//!   (college basketball feeds).
//! - [`pace::PaceRankModel`]: league pace rating plus per-stat defensive and
//!   offensive ranks (professional feeds).
//!
//! [`EnvironmentScorer`] picks one by [`SportFamily`](crate::domain::SportFamily)
//! and then applies the archetype adjustments.

pub mod pace;
pub mod tempo;

use tracing::trace;

use crate::domain::{Archetype, LineStructure, Proposition, SportFamily};

pub use pace::{PaceConfig, PaceRankModel};
pub use tempo::{TempoConfig, TempoEfficiencyModel};

/// Score returned when a model has no usable context.
pub const NEUTRAL_ENVIRONMENT: f64 = 5.0;

/// Upper bound of the environment subscore.
pub const ENVIRONMENT_CAP: f64 = 10.0;

const GUARD_ASSIST_BONUS: f64 = 4.0;
const BIG_REBOUND_PENALTY: f64 = 6.0;

/// A contextual environment model.
pub trait EnvironmentModel: Send + Sync {
    /// Model identifier, used in logs.
    fn name(&self) -> &'static str;

    /// Whether this model has enough input to score the proposition.
    fn applies_to(&self, prop: &Proposition) -> bool;

    /// Score in `[0, ENVIRONMENT_CAP]`.
    fn score(&self, prop: &Proposition) -> f64;
}

/// Selects an environment model per proposition and applies archetype
/// adjustments on top of it.
pub struct EnvironmentScorer {
    tempo: Box<dyn EnvironmentModel>,
    pace: Box<dyn EnvironmentModel>,
}

impl EnvironmentScorer {
    #[must_use]
    pub fn new(tempo: TempoConfig, pace: PaceConfig) -> Self {
        Self::with_models(
            Box::new(TempoEfficiencyModel::new(tempo)),
            Box::new(PaceRankModel::new(pace)),
        )
    }

    /// Build a scorer from arbitrary models.
    #[must_use]
    pub fn with_models(
        tempo: Box<dyn EnvironmentModel>,
        pace: Box<dyn EnvironmentModel>,
    ) -> Self {
        Self { tempo, pace }
    }

    /// The model that scores this proposition.
    #[must_use]
    pub fn model_for(&self, prop: &Proposition) -> &dyn EnvironmentModel {
        match prop.sport_family() {
            SportFamily::TempoEfficiency if self.tempo.applies_to(prop) => self.tempo.as_ref(),
            _ => self.pace.as_ref(),
        }
    }

    /// Environment subscore including archetype adjustments.
    #[must_use]
    pub fn score(&self, prop: &Proposition, archetype: Archetype) -> f64 {
        let model = self.model_for(prop);
        let base = model.score(prop).clamp(0.0, ENVIRONMENT_CAP);
        let adjusted = adjust_for_archetype(base, prop, archetype);
        trace!(
            model = model.name(),
            player = %prop.player,
            base,
            adjusted,
            "Environment scored"
        );
        adjusted
    }
}

impl Default for EnvironmentScorer {
    fn default() -> Self {
        Self::new(TempoConfig::default(), PaceConfig::default())
    }
}

/// Guard assist overs gain; Big rebound unders on half-point lines lose.
fn adjust_for_archetype(score: f64, prop: &Proposition, archetype: Archetype) -> f64 {
    match archetype {
        Archetype::Guard if prop.side.is_over() && prop.stat.is_assist_type() => {
            (score + GUARD_ASSIST_BONUS).min(ENVIRONMENT_CAP)
        }
        Archetype::Big
            if prop.side.is_under()
                && prop.stat.is_rebound_type()
                && LineStructure::classify(prop.line).is_half() =>
        {
            (score - BIG_REBOUND_PENALTY).max(0.0)
        }
        _ => score,
    }
}
