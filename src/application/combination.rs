//! Two-leg combination builder.
//!
//! Candidates are non-rejected results scoring at least `min_score`. The
//! builder prefers the best over/under pair and falls back to the best
//! over/over pair; both legs must come from different players and, when
//! both teams are known, different teams.
//!
//! The search is exhaustive over all pairs. Slates larger than
//! `exhaustive_limit` first search only the top `bucket_size` overs and
//! unders by composite (top-k bucket join). When team or player conflicts
//! leave the buckets without a pair, the full candidate lists are searched.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{Combination, CombinationFailure, Decision, EvaluationResult, PairKind};

/// Combination configuration (`[combination]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationConfig {
    /// Minimum composite for a leg.
    #[serde(default = "default_min_score")]
    pub min_score: f64,

    /// Candidate count above which the search switches to the bucket join.
    #[serde(default = "default_exhaustive_limit")]
    pub exhaustive_limit: usize,

    /// Legs kept per side in the bucket join.
    #[serde(default = "default_bucket_size")]
    pub bucket_size: usize,
}

fn default_min_score() -> f64 {
    68.0
}

fn default_exhaustive_limit() -> usize {
    512
}

fn default_bucket_size() -> usize {
    32
}

impl Default for CombinationConfig {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            exhaustive_limit: default_exhaustive_limit(),
            bucket_size: default_bucket_size(),
        }
    }
}

/// Builds the best diversified two-leg combination.
#[derive(Debug, Clone, Default)]
pub struct CombinationBuilder {
    config: CombinationConfig,
}

/// A candidate leg with its position in the input and precomputed keys.
#[derive(Clone)]
struct Leg<'a> {
    index: usize,
    result: &'a EvaluationResult,
    player: String,
    team: Option<String>,
}

impl Leg<'_> {
    fn compatible(&self, other: &Self) -> bool {
        if self.player == other.player {
            return false;
        }
        match (&self.team, &other.team) {
            (Some(a), Some(b)) => a != b,
            _ => true,
        }
    }
}

impl CombinationBuilder {
    #[must_use]
    pub const fn new(config: CombinationConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &CombinationConfig {
        &self.config
    }

    fn qualifies(&self, result: &EvaluationResult) -> bool {
        result.decision != Decision::Reject && result.composite >= self.config.min_score
    }

    /// Build the combination from an evaluated batch.
    pub fn build(&self, results: &[EvaluationResult]) -> Result<Combination, CombinationFailure> {
        let candidates: Vec<Leg<'_>> = results
            .iter()
            .filter(|r| self.qualifies(r))
            .enumerate()
            .map(|(index, result)| Leg {
                index,
                result,
                player: result.player.normalized(),
                team: result.team_key(),
            })
            .collect();

        if candidates.len() < 2 {
            debug!(found = candidates.len(), "Not enough qualifying legs");
            return Err(CombinationFailure::InsufficientPicks {
                found: candidates.len(),
            });
        }

        let (overs, unders): (Vec<Leg<'_>>, Vec<Leg<'_>>) =
            candidates.into_iter().partition(|leg| leg.result.side.is_over());

        if overs.is_empty() {
            return Err(CombinationFailure::NoOverCandidate);
        }

        let pair = if overs.len() + unders.len() > self.config.exhaustive_limit {
            debug!(
                overs = overs.len(),
                unders = unders.len(),
                bucket = self.config.bucket_size,
                "Switching to bucket join"
            );
            let top_overs = top(&overs, self.config.bucket_size);
            let top_unders = top(&unders, self.config.bucket_size);
            best_over_under(&top_overs, &top_unders)
                .or_else(|| best_over_under(&overs, &unders))
                .or_else(|| best_over_pair(&top_overs))
                .or_else(|| best_over_pair(&overs))
        } else {
            best_over_under(&overs, &unders).or_else(|| best_over_pair(&overs))
        };
        let best = pair.ok_or(CombinationFailure::SameTeam)?;

        let combination = Combination::new(best.0.clone(), best.1.clone(), best.2);
        info!(
            kind = %combination.kind,
            score = combination.combined_score,
            first = %combination.legs[0].label(),
            second = %combination.legs[1].label(),
            "Combination built"
        );
        Ok(combination)
    }
}

type Pair<'a> = (&'a EvaluationResult, &'a EvaluationResult, PairKind);

/// Best compatible over/under pair; the first pair found wins ties.
fn best_over_under<'a>(overs: &[Leg<'a>], unders: &[Leg<'a>]) -> Option<Pair<'a>> {
    let mut best: Option<(f64, Pair<'a>)> = None;
    for over in overs {
        for under in unders {
            if !over.compatible(under) {
                continue;
            }
            let score = (over.result.composite + under.result.composite) / 2.0;
            if best.as_ref().map_or(true, |(top, _)| score > *top) {
                best = Some((score, (over.result, under.result, PairKind::OverUnder)));
            }
        }
    }
    best.map(|(_, pair)| pair)
}

/// Best compatible over/over pair.
fn best_over_pair<'a>(overs: &[Leg<'a>]) -> Option<Pair<'a>> {
    let mut best: Option<(f64, Pair<'a>)> = None;
    for (i, first) in overs.iter().enumerate() {
        for second in &overs[i + 1..] {
            if !first.compatible(second) {
                continue;
            }
            let score = (first.result.composite + second.result.composite) / 2.0;
            if best.as_ref().map_or(true, |(top, _)| score > *top) {
                best = Some((score, (first.result, second.result, PairKind::OverOver)));
            }
        }
    }
    best.map(|(_, pair)| pair)
}

/// The `k` highest composites, in input order.
fn top<'a>(legs: &[Leg<'a>], k: usize) -> Vec<Leg<'a>> {
    let mut kept = legs.to_vec();
    kept.sort_by(|a, b| {
        b.result
            .composite
            .total_cmp(&a.result.composite)
            .then(a.index.cmp(&b.index))
    });
    kept.truncate(k);
    kept.sort_by_key(|leg| leg.index);
    kept
}

/// Build a combination with the default configuration.
pub fn build_combination(results: &[EvaluationResult]) -> Result<Combination, CombinationFailure> {
    CombinationBuilder::default().build(results)
}
