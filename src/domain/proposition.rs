//! Proposition input record.
//!
//! A proposition is one candidate bet: a player, a statistic, a line and a
//! side, plus whatever context upstream collectors resolved. Only the four
//! identifying fields are required; everything else degrades to a neutral
//! default inside the engine.
//!
//! # Examples
//!
//! ```
//! use propedge::domain::{MarketType, Proposition, Side};
//!
//! let prop = Proposition::new("Jalen Brunson", "points", 26.5, Side::Over)
//!     .with_team("NYK")
//!     .with_median(28.0)
//!     .with_minutes(35.5)
//!     .with_market_type(MarketType::Standard);
//!
//! assert!(prop.stat.is_counting());
//! assert_eq!(prop.effective_median(), Some(28.0));
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::context::{GameContext, PaceContext, SportFamily};
use super::error::DomainError;
use super::id::PlayerId;
use super::line::median;
use super::stat::StatType;

/// Direction of the bet relative to the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[serde(alias = "Over", alias = "OVER")]
    Over,
    #[serde(alias = "Under", alias = "UNDER")]
    Under,
}

impl Side {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Over => "over",
            Self::Under => "under",
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Over)
    }

    #[must_use]
    pub const fn is_under(self) -> bool {
        matches!(self, Self::Under)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "over" | "o" | "higher" | "more" => Ok(Self::Over),
            "under" | "u" | "lower" | "less" => Ok(Self::Under),
            _ => Err(DomainError::InvalidSide {
                value: s.to_string(),
            }),
        }
    }
}

/// How far the offered line sits from the standard line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketType {
    #[default]
    #[serde(alias = "standard", alias = "STANDARD")]
    Standard,
    /// Line shaded in the bettor's favor, reduced payout.
    #[serde(alias = "goblin", alias = "GOBLIN")]
    Goblin,
    /// Line shaded against the bettor, boosted payout.
    #[serde(alias = "demon", alias = "DEMON")]
    Demon,
}

impl MarketType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Goblin => "Goblin",
            Self::Demon => "Demon",
        }
    }
}

impl fmt::Display for MarketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarketType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "goblin" => Ok(Self::Goblin),
            "demon" => Ok(Self::Demon),
            _ => Err(DomainError::InvalidMarketType {
                value: s.to_string(),
            }),
        }
    }
}

/// One candidate bet as supplied by upstream collectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposition {
    pub player: PlayerId,
    #[serde(alias = "stat_type")]
    pub stat: StatType,
    pub line: f64,
    pub side: Side,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub opponent: Option<String>,
    /// American odds, e.g. -115.
    #[serde(default)]
    pub price: Option<i32>,
    #[serde(default, alias = "minutes")]
    pub avg_minutes: Option<f64>,
    /// Rolling median of recent results.
    #[serde(default, alias = "rolling_median")]
    pub median: Option<f64>,
    /// Recent results in any order; only aggregates are used.
    #[serde(default, alias = "recent_performances")]
    pub recent: Vec<f64>,
    #[serde(default, alias = "point_spread")]
    pub spread: Option<f64>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub market_type: MarketType,
    #[serde(default)]
    pub sport: Option<String>,
    #[serde(default)]
    pub game_context: Option<GameContext>,
    #[serde(default)]
    pub pace_context: Option<PaceContext>,
    /// Slate date, part of the persistence key.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl Proposition {
    /// Create a proposition with only the identifying fields set.
    pub fn new(
        player: impl Into<PlayerId>,
        stat: impl Into<StatType>,
        line: f64,
        side: Side,
    ) -> Self {
        Self {
            player: player.into(),
            stat: stat.into(),
            line,
            side,
            team: None,
            opponent: None,
            price: None,
            avg_minutes: None,
            median: None,
            recent: Vec::new(),
            spread: None,
            position: None,
            market_type: MarketType::Standard,
            sport: None,
            game_context: None,
            pace_context: None,
            date: None,
        }
    }

    #[must_use]
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    #[must_use]
    pub fn with_opponent(mut self, opponent: impl Into<String>) -> Self {
        self.opponent = Some(opponent.into());
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: i32) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn with_minutes(mut self, minutes: f64) -> Self {
        self.avg_minutes = Some(minutes);
        self
    }

    #[must_use]
    pub fn with_median(mut self, median: f64) -> Self {
        self.median = Some(median);
        self
    }

    #[must_use]
    pub fn with_recent(mut self, recent: impl Into<Vec<f64>>) -> Self {
        self.recent = recent.into();
        self
    }

    #[must_use]
    pub fn with_spread(mut self, spread: f64) -> Self {
        self.spread = Some(spread);
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    #[must_use]
    pub fn with_market_type(mut self, market_type: MarketType) -> Self {
        self.market_type = market_type;
        self
    }

    #[must_use]
    pub fn with_sport(mut self, sport: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self
    }

    #[must_use]
    pub fn with_game_context(mut self, ctx: GameContext) -> Self {
        self.game_context = Some(ctx);
        self
    }

    #[must_use]
    pub fn with_pace_context(mut self, ctx: PaceContext) -> Self {
        self.pace_context = Some(ctx);
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Rolling median when supplied, otherwise the median of the recent
    /// series. `None` when neither is available.
    #[must_use]
    pub fn effective_median(&self) -> Option<f64> {
        self.median.or_else(|| median(&self.recent))
    }

    /// Highest recent result.
    #[must_use]
    pub fn ceiling(&self) -> Option<f64> {
        self.recent.iter().copied().reduce(f64::max)
    }

    /// Data regime for the environment score. Without a recognized sport
    /// tag the supplied context decides.
    #[must_use]
    pub fn sport_family(&self) -> SportFamily {
        SportFamily::from_sport(self.sport.as_deref()).unwrap_or_else(|| {
            SportFamily::from_context(self.game_context.is_some(), self.pace_context.is_some())
        })
    }
}
