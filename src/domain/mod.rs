//! Sport- and feed-agnostic domain types.

pub mod archetype;
pub mod combination;
pub mod context;
pub mod error;
pub mod evaluation;
pub mod id;
pub mod line;
pub mod proposition;
pub mod stat;
pub mod veto;

pub use archetype::Archetype;
pub use combination::{Combination, CombinationFailure, PairKind};
pub use context::{GameContext, PaceContext, SportFamily, StatRanks};
pub use evaluation::{
    Decision, EvaluationKey, EvaluationResult, MinutesTier, SubScoreKind, SubScores,
};
pub use id::PlayerId;
pub use line::LineStructure;
pub use proposition::{MarketType, Proposition, Side};
pub use stat::{BaseStat, StatType};
pub use veto::{Veto, VetoRule};
