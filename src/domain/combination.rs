//! Two-leg combination records.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::evaluation::EvaluationResult;

/// Why no combination could be built from a batch.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinationFailure {
    /// Fewer than two results passed the quality filter.
    #[error("insufficient picks: {found} qualifying, need 2")]
    InsufficientPicks { found: usize },

    /// Every qualifying result is an under.
    #[error("requires at least 1 over")]
    NoOverCandidate,

    /// Every candidate pair shares a team or a player.
    #[error("same team: no qualifying legs from different teams or players")]
    SameTeam,
}

/// Side mix of a combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairKind {
    OverUnder,
    OverOver,
}

impl PairKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OverUnder => "over/under",
            Self::OverOver => "over/over",
        }
    }
}

impl fmt::Display for PairKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two diversified legs and their average composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    pub legs: [EvaluationResult; 2],
    pub combined_score: f64,
    pub kind: PairKind,
    pub reason: String,
}

impl Combination {
    /// Pair two legs, scoring the pair by the mean composite.
    #[must_use]
    pub fn new(first: EvaluationResult, second: EvaluationResult, kind: PairKind) -> Self {
        let combined_score = (first.composite + second.composite) / 2.0;
        let reason = format!(
            "{kind} pair, average SES {combined_score:.1} ({} + {})",
            first.label(),
            second.label()
        );
        Self {
            legs: [first, second],
            combined_score,
            kind,
            reason,
        }
    }
}
