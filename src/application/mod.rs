//! Application services.
//!
//! The evaluation pipeline runs veto rules, SES scoring and the decision
//! classifier per proposition, then the combination builder consumes the
//! evaluated batch.

pub mod combination;
pub mod config;
pub mod decision;
pub mod environment;
pub mod evaluator;
pub mod scoring;
pub mod veto;

pub use combination::{build_combination, CombinationBuilder, CombinationConfig};
pub use config::EngineConfig;
pub use decision::DecisionThresholds;
pub use environment::{EnvironmentModel, EnvironmentScorer};
pub use evaluator::{evaluate, Evaluator};
pub use scoring::{ScoreCard, Scorer, ScoringConfig};
pub use veto::{VetoConfig, VetoEngine};
