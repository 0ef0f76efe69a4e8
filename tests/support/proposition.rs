use propedge::domain::{PaceContext, Proposition, Side, StatRanks};

/// Points over 22.5 against a 25.0 median with locked minutes: SES 87.
pub fn strong_over(player: &str, team: &str) -> Proposition {
    Proposition::new(player, "points", 22.5, Side::Over)
        .with_team(team)
        .with_median(25.0)
        .with_minutes(34.0)
        .with_spread(3.0)
}

/// Whole-line under two below the line with locked minutes: SES 95.
pub fn strong_under(player: &str, team: &str) -> Proposition {
    Proposition::new(player, "points", 20.0, Side::Under)
        .with_team(team)
        .with_median(18.0)
        .with_minutes(34.0)
        .with_spread(3.0)
}

/// Over on a line above the median with risky minutes: rejected.
pub fn weak_over(player: &str, team: &str) -> Proposition {
    Proposition::new(player, "points", 24.5, Side::Over)
        .with_team(team)
        .with_median(22.0)
        .with_minutes(18.0)
}

/// Pace context with the same rank for every statistic.
pub fn pace(defense_rank: u32, offense_rank: u32, league_pace: f64) -> PaceContext {
    let ranks = |rank| StatRanks {
        points: Some(rank),
        rebounds: Some(rank),
        assists: Some(rank),
        threes: Some(rank),
        steals: Some(rank),
        blocks: Some(rank),
        turnovers: Some(rank),
    };
    PaceContext {
        opponent_defense_ranks: ranks(defense_rank),
        team_offense_ranks: ranks(offense_rank),
        league_pace: Some(league_pace),
        opponent_pace_rank: None,
    }
}
