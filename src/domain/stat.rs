//! Statistic tags and combination detection.
//!
//! Upstream feeds label statistics inconsistently (`pts`, `Points`,
//! `points_rebounds`, `PRA`, `pts+rebs+asts`, `pts-rebs`, ...). [`StatType`] keeps the
//! raw tag for display and resolves it once into the base statistics it sums.
//! A tag that does not resolve is kept as an opaque, non-counting statistic
//! (fantasy score, shooting percentages and so on).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single box-score statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseStat {
    Points,
    Rebounds,
    Assists,
    Threes,
    Steals,
    Blocks,
    Turnovers,
}

impl BaseStat {
    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::Rebounds => "rebounds",
            Self::Assists => "assists",
            Self::Threes => "threes",
            Self::Steals => "steals",
            Self::Blocks => "blocks",
            Self::Turnovers => "turnovers",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        let stat = match token {
            "points" | "point" | "pts" | "pt" | "p" => Self::Points,
            "rebounds" | "rebound" | "rebs" | "reb" | "r" => Self::Rebounds,
            "assists" | "assist" | "asts" | "ast" | "a" => Self::Assists,
            "threes" | "3pm" | "3pt" | "3ptm" | "fg3m" | "3s" => Self::Threes,
            "steals" | "steal" | "stl" | "stls" | "s" => Self::Steals,
            "blocks" | "block" | "blk" | "blks" | "b" => Self::Blocks,
            "turnovers" | "turnover" | "tov" | "to" => Self::Turnovers,
            _ => return None,
        };
        Some(stat)
    }
}

impl fmt::Display for BaseStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whole-tag shorthands that cannot be split on separators.
fn shorthand(tag: &str) -> Option<&'static [BaseStat]> {
    use BaseStat::{Assists, Blocks, Points, Rebounds, Steals, Threes};

    let components: &'static [BaseStat] = match tag {
        "pra" => &[Points, Rebounds, Assists],
        "pr" => &[Points, Rebounds],
        "pa" => &[Points, Assists],
        "ra" => &[Rebounds, Assists],
        "stocks" | "bs" | "sb" => &[Blocks, Steals],
        "three_pointers_made" | "three_pointers" | "3_pointers_made" | "3-pt made"
        | "3pt_made" | "threes_made" => &[Threes],
        _ => return None,
    };
    Some(components)
}

/// A statistic tag resolved into the base statistics it adds up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct StatType {
    raw: String,
    components: Vec<BaseStat>,
}

impl StatType {
    /// Parse a raw statistic tag.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let components = resolve(&raw);
        Self { raw, components }
    }

    /// The tag exactly as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Base statistics summed by this tag. Empty for unrecognized tags.
    #[must_use]
    pub fn components(&self) -> &[BaseStat] {
        &self.components
    }

    /// True for additive combinations such as points+rebounds.
    #[must_use]
    pub fn is_combination(&self) -> bool {
        self.components.len() >= 2
    }

    /// True when the tag resolved into box-score counts.
    #[must_use]
    pub fn is_counting(&self) -> bool {
        !self.components.is_empty()
    }

    #[must_use]
    pub fn includes(&self, stat: BaseStat) -> bool {
        self.components.contains(&stat)
    }

    #[must_use]
    pub fn is_rebound_type(&self) -> bool {
        self.includes(BaseStat::Rebounds)
    }

    #[must_use]
    pub fn is_assist_type(&self) -> bool {
        self.includes(BaseStat::Assists)
    }

    /// Stable key independent of the upstream spelling, e.g.
    /// `points+rebounds`. Unrecognized tags fall back to the lowercased raw
    /// tag.
    #[must_use]
    pub fn canonical(&self) -> String {
        if self.components.is_empty() {
            return self.raw.trim().to_lowercase();
        }
        self.components
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join("+")
    }
}

fn resolve(raw: &str) -> Vec<BaseStat> {
    let tag = raw.trim().to_lowercase();
    if let Some(components) = shorthand(&tag) {
        return components.to_vec();
    }

    let mut components = Vec::new();
    for token in tag
        .split(|c: char| matches!(c, '+' | '-' | '_' | ' ' | '&' | '/' | ','))
        .filter(|t| !t.is_empty() && *t != "and")
    {
        match BaseStat::from_token(token) {
            Some(stat) if !components.contains(&stat) => components.push(stat),
            Some(_) => {}
            None => return Vec::new(),
        }
    }
    components
}

impl From<String> for StatType {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for StatType {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<StatType> for String {
    fn from(stat: StatType) -> Self {
        stat.raw
    }
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
