//! Evaluation pipeline: veto, score, decide.
//!
//! Each proposition is evaluated independently; the batch entry points are
//! total and return one result per input, in input order.
//!
//! # Examples
//!
//! ```
//! use propedge::application::evaluate;
//! use propedge::domain::{Decision, Proposition, Side};
//!
//! let props = vec![
//!     Proposition::new("Jalen Brunson", "points", 22.5, Side::Over)
//!         .with_median(25.0)
//!         .with_minutes(34.0)
//!         .with_spread(3.0),
//! ];
//! let results = evaluate(&props);
//! assert_eq!(results[0].composite, 87.0);
//! assert_eq!(results[0].decision, Decision::Bet);
//! ```

use tracing::info;

use super::combination::CombinationBuilder;
use super::config::EngineConfig;
use super::decision::DecisionThresholds;
use super::scoring::Scorer;
use super::veto::VetoEngine;
use crate::domain::{
    Archetype, Combination, CombinationFailure, Decision, EvaluationResult, Proposition,
};

/// Configured evaluation engine.
pub struct Evaluator {
    veto: VetoEngine,
    scorer: Scorer,
    thresholds: DecisionThresholds,
    combinations: CombinationBuilder,
}

impl Evaluator {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            veto: VetoEngine::new(config.veto),
            scorer: Scorer::new(config.scoring),
            thresholds: config.decision,
            combinations: CombinationBuilder::new(config.combination),
        }
    }

    /// Evaluate a single proposition.
    #[must_use]
    pub fn evaluate_one(&self, prop: &Proposition) -> EvaluationResult {
        let archetype = Archetype::classify(prop.position.as_deref(), &prop.stat);
        let veto = self.veto.check(prop, archetype);
        let card = self.scorer.score(prop, archetype);
        let (decision, justification) = self.thresholds.decide(&card, veto.as_ref());

        EvaluationResult {
            player: prop.player.clone(),
            stat: prop.stat.clone(),
            line: prop.line,
            side: prop.side,
            team: prop.team.clone(),
            opponent: prop.opponent.clone(),
            sport: prop.sport.clone(),
            market_type: prop.market_type,
            date: prop.date,
            line_structure: card.line_structure,
            archetype,
            minutes_tier: card.minutes_tier,
            median_gap: card.median_gap,
            subscores: card.subscores,
            composite: card.composite,
            decision,
            veto,
            justification,
        }
    }

    /// Evaluate a batch, preserving input order.
    #[must_use]
    pub fn evaluate(&self, props: &[Proposition]) -> Vec<EvaluationResult> {
        let results: Vec<EvaluationResult> = props.iter().map(|p| self.evaluate_one(p)).collect();

        let count = |d: Decision| results.iter().filter(|r| r.decision == d).count();
        info!(
            total = results.len(),
            bet = count(Decision::Bet),
            lean = count(Decision::Lean),
            reject = count(Decision::Reject),
            vetoed = results.iter().filter(|r| r.is_vetoed()).count(),
            "Evaluation complete"
        );
        results
    }

    /// Build the best two-leg combination from evaluated results.
    pub fn build_combination(
        &self,
        results: &[EvaluationResult],
    ) -> Result<Combination, CombinationFailure> {
        self.combinations.build(results)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Evaluate a batch with the default configuration.
#[must_use]
pub fn evaluate(props: &[Proposition]) -> Vec<EvaluationResult> {
    Evaluator::default().evaluate(props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Side, VetoRule};

    #[test]
    fn empty_batch_yields_no_results() {
        assert!(evaluate(&[]).is_empty());
    }

    #[test]
    fn vetoed_results_are_rejected_but_still_scored() {
        let prop = Proposition::new("A", "points", 20.3, Side::Over)
            .with_median(20.0)
            .with_minutes(36.0);
        let result = Evaluator::default().evaluate_one(&prop);
        assert_eq!(result.decision, Decision::Reject);
        assert_eq!(
            result.veto.as_ref().map(|v| v.rule),
            Some(VetoRule::MedianDeadZone)
        );
        assert!(result.composite > 0.0);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let props = vec![
            Proposition::new("A", "pra", 35.5, Side::Over).with_median(38.0),
            Proposition::new("B", "rebounds", 10.5, Side::Under).with_position("C"),
        ];
        let evaluator = Evaluator::default();
        assert_eq!(evaluator.evaluate(&props), evaluator.evaluate(&props));
    }

    #[test]
    fn results_keep_input_order_and_identity() {
        let props = vec![
            Proposition::new("A", "points", 20.5, Side::Over).with_team("NYK"),
            Proposition::new("B", "assists", 6.5, Side::Under).with_team("BOS"),
        ];
        let results = evaluate(&props);
        assert_eq!(results[0].player.as_str(), "A");
        assert_eq!(results[1].player.as_str(), "B");
        assert_eq!(results[1].team.as_deref(), Some("BOS"));
        assert_eq!(results[1].archetype, Archetype::Guard);
    }
}
