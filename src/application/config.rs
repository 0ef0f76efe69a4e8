//! Engine configuration: the rule and scoring sections of the config file.

use serde::{Deserialize, Serialize};

use super::combination::CombinationConfig;
use super::decision::DecisionThresholds;
use super::scoring::ScoringConfig;
use super::veto::VetoConfig;

/// Everything the evaluator and combination builder need.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub veto: VetoConfig,

    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub decision: DecisionThresholds,

    #[serde(default)]
    pub combination: CombinationConfig,
}
