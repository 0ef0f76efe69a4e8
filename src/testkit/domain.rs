//! Builders for domain records used across tests.
//!
//! Evaluation results are normally produced by the evaluator; the
//! combination and store tests only care about identity, side, team and
//! composite, so [`result`] fills everything else with fixed values.

use crate::application::decision::classify;
use crate::domain::{
    Archetype, Decision, EvaluationResult, LineStructure, MarketType, MinutesTier, Proposition,
    Side, SubScores,
};

/// A points proposition with the given line and side.
pub fn points(player: &str, line: f64, side: Side) -> Proposition {
    Proposition::new(player, "points", line, side)
}

/// A proposition with a median, locked minutes and a small spread.
pub fn standard(player: &str, stat: &str, line: f64, side: Side, median: f64) -> Proposition {
    Proposition::new(player, stat, line, side)
        .with_median(median)
        .with_minutes(34.0)
        .with_spread(3.0)
}

/// An evaluation result whose decision follows the default thresholds.
///
/// An empty `team` leaves the team unknown.
pub fn result(player: &str, team: &str, side: Side, composite: f64) -> EvaluationResult {
    EvaluationResult {
        player: player.into(),
        stat: "points".into(),
        line: 20.5,
        side,
        team: (!team.is_empty()).then(|| team.to_string()),
        opponent: None,
        sport: None,
        market_type: MarketType::Standard,
        date: None,
        line_structure: LineStructure::Half,
        archetype: Archetype::Wing,
        minutes_tier: MinutesTier::Locked,
        median_gap: None,
        subscores: SubScores::default(),
        composite,
        decision: classify(composite),
        veto: None,
        justification: String::new(),
    }
}

/// Like [`result`], but rejected regardless of composite.
pub fn rejected(player: &str, team: &str, side: Side, composite: f64) -> EvaluationResult {
    EvaluationResult {
        decision: Decision::Reject,
        ..result(player, team, side, composite)
    }
}
