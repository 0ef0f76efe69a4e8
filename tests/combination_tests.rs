//! Integration tests for the two-leg combination builder.

mod support;

use propedge::application::{build_combination, CombinationBuilder, CombinationConfig, Evaluator};
use propedge::domain::{CombinationFailure, Decision, PairKind, Side};
use propedge::testkit;
use propedge::testkit::domain::{rejected, result};
use support::proposition::{strong_over, strong_under, weak_over};

#[test]
fn prefers_over_under_from_evaluated_slate() {
    let props = vec![
        strong_over("Jalen Brunson", "NYK"),
        strong_over("Jayson Tatum", "BOS"),
        strong_under("Rudy Gobert", "MIN"),
        weak_over("Bench Guy", "DAL"),
    ];
    let evaluator = Evaluator::default();
    let results = evaluator.evaluate(&props);
    let combination = evaluator.build_combination(&results).unwrap();

    assert_eq!(combination.kind, PairKind::OverUnder);
    assert_eq!(combination.legs[0].player.as_str(), "Jalen Brunson");
    assert_eq!(combination.legs[1].player.as_str(), "Rudy Gobert");
    assert_eq!(combination.combined_score, 91.0);
    assert!(combination.reason.contains("over/under"));
}

#[test]
fn falls_back_to_two_overs() {
    let results = vec![
        result("A", "NYK", Side::Over, 80.0),
        result("B", "BOS", Side::Over, 70.0),
        result("C", "MIA", Side::Over, 75.0),
    ];
    let combination = build_combination(&results).unwrap();
    assert_eq!(combination.kind, PairKind::OverOver);
    assert_eq!(combination.legs[0].player.as_str(), "A");
    assert_eq!(combination.legs[1].player.as_str(), "C");
    assert_eq!(combination.combined_score, 77.5);
}

#[test]
fn fails_with_fewer_than_two_qualifying_legs() {
    let results = vec![
        result("A", "NYK", Side::Over, 80.0),
        result("B", "BOS", Side::Over, 66.0),
        rejected("C", "MIA", Side::Under, 90.0),
    ];
    assert_eq!(
        build_combination(&results).unwrap_err(),
        CombinationFailure::InsufficientPicks { found: 1 }
    );
    assert_eq!(
        build_combination(&[]).unwrap_err(),
        CombinationFailure::InsufficientPicks { found: 0 }
    );
}

#[test]
fn fails_without_an_over() {
    let results = vec![
        result("A", "NYK", Side::Under, 80.0),
        result("B", "BOS", Side::Under, 75.0),
    ];
    let failure = build_combination(&results).unwrap_err();
    assert_eq!(failure, CombinationFailure::NoOverCandidate);
    assert_eq!(failure.to_string(), "requires at least 1 over");
}

#[test]
fn fails_when_every_pair_shares_a_team() {
    let results = vec![
        result("A", "NYK", Side::Over, 80.0),
        result("B", "nyk ", Side::Under, 75.0),
        result("C", "NYK", Side::Over, 70.0),
    ];
    assert_eq!(
        build_combination(&results).unwrap_err(),
        CombinationFailure::SameTeam
    );
}

#[test]
fn unknown_teams_do_not_conflict() {
    let results = vec![
        result("A", "", Side::Over, 80.0),
        result("B", "NYK", Side::Under, 75.0),
    ];
    let combination = build_combination(&results).unwrap();
    assert_eq!(combination.kind, PairKind::OverUnder);
}

#[test]
fn never_pairs_the_same_player_twice() {
    let results = vec![
        result("Luka Doncic", "", Side::Over, 90.0),
        result("luka  doncic", "", Side::Under, 88.0),
        result("Kyrie Irving", "", Side::Under, 70.0),
    ];
    let combination = build_combination(&results).unwrap();
    assert_eq!(combination.legs[1].player.as_str(), "Kyrie Irving");
}

#[test]
fn min_score_is_configurable() {
    let results = vec![
        result("A", "NYK", Side::Over, 66.0),
        result("B", "BOS", Side::Under, 65.0),
    ];
    assert!(build_combination(&results).is_err());

    let evaluator = Evaluator::new(testkit::config::with_min_score(64.0));
    let combination = evaluator.build_combination(&results).unwrap();
    assert_eq!(combination.legs[0].decision, Decision::Lean);
}

#[test]
fn bucket_join_matches_exhaustive_search_on_large_slates() {
    let teams = ["NYK", "BOS", "MIA", "MIL", "PHI", "CLE"];
    let results: Vec<_> = (0..240u32)
        .map(|i| {
            let side = if i % 3 == 0 { Side::Under } else { Side::Over };
            let composite = 68.0 + f64::from(i % 29);
            result(&format!("P{i}"), teams[i as usize % teams.len()], side, composite)
        })
        .collect();

    let exhaustive = CombinationBuilder::new(CombinationConfig {
        exhaustive_limit: usize::MAX,
        ..CombinationConfig::default()
    })
    .build(&results)
    .unwrap();
    let bucketed = CombinationBuilder::new(CombinationConfig {
        exhaustive_limit: 10,
        bucket_size: 8,
        ..CombinationConfig::default()
    })
    .build(&results)
    .unwrap();

    assert_eq!(bucketed.combined_score, exhaustive.combined_score);
    assert_eq!(bucketed.kind, exhaustive.kind);
}

#[test]
fn bucket_join_searches_past_a_single_team_top_bucket() {
    let results = vec![
        result("O1", "NYK", Side::Over, 95.0),
        result("O2", "NYK", Side::Over, 94.0),
        result("U1", "NYK", Side::Under, 95.0),
        result("U2", "NYK", Side::Under, 94.0),
        result("O3", "BOS", Side::Over, 70.0),
        result("U3", "MIA", Side::Under, 70.0),
    ];
    let combination = CombinationBuilder::new(CombinationConfig {
        exhaustive_limit: 4,
        bucket_size: 2,
        ..CombinationConfig::default()
    })
    .build(&results)
    .unwrap();

    assert_eq!(combination.kind, PairKind::OverUnder);
    assert_eq!(combination.combined_score, 82.5);
    assert_eq!(combination.legs[0].player.as_str(), "O1");
    assert_eq!(combination.legs[1].player.as_str(), "U3");
}
