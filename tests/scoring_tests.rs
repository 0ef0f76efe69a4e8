//! Integration tests for SES scoring and decisions.

mod support;

use propedge::application::{evaluate, DecisionThresholds, Evaluator};
use propedge::domain::{
    Decision, GameContext, LineStructure, MarketType, MinutesTier, Proposition, Side,
    SubScoreKind,
};
use support::proposition::{pace, strong_over, strong_under, weak_over};

#[test]
fn half_point_over_below_median_is_a_bet() {
    let result = Evaluator::default().evaluate_one(&strong_over("Jalen Brunson", "NYK"));

    assert_eq!(result.subscores.median_gap, 40.0);
    assert_eq!(result.subscores.line_structure, 12.0);
    assert_eq!(result.subscores.minutes, 15.0);
    assert_eq!(result.subscores.market_type, 15.0);
    assert_eq!(result.subscores.environment, 5.0);
    assert_eq!(result.composite, 87.0);
    assert_eq!(result.decision, Decision::Bet);
    assert_eq!(result.line_structure, LineStructure::Half);
    assert_eq!(result.minutes_tier, MinutesTier::Locked);
    assert_eq!(result.median_gap, Some(-2.5));
    assert!(result.justification.contains("median gap -2.5"));
}

#[test]
fn whole_line_under_scores_structure_bonus() {
    let result = Evaluator::default().evaluate_one(&strong_under("Rudy Gobert", "MIN"));
    assert_eq!(result.subscores.line_structure, 20.0);
    assert_eq!(result.composite, 95.0);
    assert_eq!(result.decision, Decision::Bet);
}

#[test]
fn weak_over_is_rejected_with_weakest_component() {
    let result = Evaluator::default().evaluate_one(&weak_over("A", "BOS"));
    assert_eq!(result.composite, 36.0);
    assert_eq!(result.decision, Decision::Reject);
    assert!(result.veto.is_none());
    assert!(result
        .justification
        .contains(SubScoreKind::MedianGap.label()));
}

#[test]
fn composite_is_the_sum_of_capped_subscores() {
    let props = vec![
        strong_over("A", "NYK"),
        strong_under("B", "MIN"),
        weak_over("C", "BOS"),
        Proposition::new("D", "pra", 35.5, Side::Over),
        Proposition::new("E", "assists", 8.5, Side::Over)
            .with_position("PG")
            .with_median(10.0)
            .with_pace_context(pace(30, 1, 104.0)),
        Proposition::new("F", "rebounds", 11.5, Side::Under)
            .with_position("C")
            .with_median(9.0)
            .with_sport("ncaab")
            .with_game_context(GameContext {
                team_tempo: Some(72.0),
                opponent_tempo: Some(70.0),
                team_offense: Some(118.0),
                opponent_defense: Some(110.0),
            }),
        Proposition::new("G", "points", 19.5, Side::Over)
            .with_median(25.0)
            .with_market_type(MarketType::Demon)
            .with_minutes(36.0),
    ];

    for result in evaluate(&props) {
        assert!(
            (0.0..=100.0).contains(&result.composite),
            "{} out of range",
            result.label()
        );
        assert!((result.subscores.total() - result.composite).abs() < 1e-9);
        for kind in SubScoreKind::ALL {
            let value = result.subscores.get(kind);
            assert!(
                (0.0..=kind.cap()).contains(&value),
                "{} {} = {value}",
                result.label(),
                kind.label()
            );
        }
    }
}

#[test]
fn missing_median_scores_fifteen() {
    let prop = Proposition::new("A", "points", 20.5, Side::Over);
    let result = Evaluator::default().evaluate_one(&prop);
    assert_eq!(result.subscores.median_gap, 15.0);
    assert!(result.median_gap.is_none());
}

#[test]
fn recent_results_stand_in_for_missing_median() {
    let prop = Proposition::new("A", "points", 17.5, Side::Over)
        .with_recent(vec![22.0, 18.0, 25.0, 20.0, 21.0]);
    let result = Evaluator::default().evaluate_one(&prop);
    assert_eq!(result.median_gap, Some(-3.5));
    assert_eq!(result.subscores.median_gap, 40.0);
}

#[test]
fn favorable_pace_context_raises_environment() {
    let neutral = Evaluator::default().evaluate_one(&strong_over("A", "NYK"));
    let favorable = Evaluator::default()
        .evaluate_one(&strong_over("A", "NYK").with_pace_context(pace(30, 1, 105.0)));
    assert!(favorable.subscores.environment > neutral.subscores.environment);
    assert!(favorable.subscores.environment <= 10.0);
}

#[test]
fn guard_assist_overs_get_environment_bonus() {
    let guard = Proposition::new("Trae Young", "assists", 10.5, Side::Over).with_position("PG");
    let wing = Proposition::new("Trae Young", "assists", 10.5, Side::Over).with_position("SF");
    let results = evaluate(&[guard, wing]);
    assert_eq!(results[0].subscores.environment, 9.0);
    assert_eq!(results[1].subscores.environment, 5.0);
}

#[test]
fn custom_thresholds_change_the_decision_only() {
    let prop = strong_over("A", "NYK");
    let strict = propedge::application::EngineConfig {
        decision: DecisionThresholds {
            bet: 90.0,
            lean: 80.0,
        },
        ..Default::default()
    };
    let default = Evaluator::default().evaluate_one(&prop);
    let result = Evaluator::new(strict).evaluate_one(&prop);
    assert_eq!(result.composite, default.composite);
    assert_eq!(result.decision, Decision::Lean);
}

#[test]
fn evaluation_preserves_input_order() {
    let props = vec![
        weak_over("first", "A"),
        strong_over("second", "B"),
        strong_under("third", "C"),
    ];
    let players: Vec<String> = evaluate(&props)
        .iter()
        .map(|r| r.player.to_string())
        .collect();
    assert_eq!(players, ["first", "second", "third"]);
}

#[test]
fn game_context_without_sport_tag_uses_tempo_model() {
    let context = GameContext {
        team_tempo: Some(75.0),
        opponent_tempo: Some(75.0),
        team_offense: Some(120.0),
        opponent_defense: Some(112.0),
    };
    let untagged = Evaluator::default().evaluate_one(
        &Proposition::new("A", "points", 15.5, Side::Over).with_game_context(context.clone()),
    );
    let tagged = Evaluator::default().evaluate_one(
        &Proposition::new("A", "points", 15.5, Side::Over)
            .with_sport("ncaab")
            .with_game_context(context),
    );
    assert!(untagged.subscores.environment > 5.0);
    assert_eq!(untagged.subscores.environment, tagged.subscores.environment);
}
