//! Auto-fail rules.
//!
//! Five hard exclusions evaluated in a fixed order; the first rule that
//! matches wins. The rules are mutually exclusive in practice, the order
//! only makes the reported reason deterministic.
//!
//! 1. Half-point combination under
//! 2. Median dead zone
//! 3. Rebound-floor immunity for named high-minute bigs
//! 4. Blowout overrule
//! 5. Recent ceiling check

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::id::normalize_name;
use crate::domain::line::{is_exact_half, LINE_EPSILON};
use crate::domain::{Archetype, Proposition, Veto, VetoRule};

/// Tunable constants for the veto rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VetoConfig {
    /// Maximum `|line - median|` treated as no edge.
    #[serde(default = "default_dead_zone")]
    pub dead_zone: f64,

    /// Gap above the median that lifts the rebound-floor exception.
    #[serde(default = "default_rebounder_override_gap")]
    pub rebounder_override_gap: f64,

    /// Absolute point spread at which a game counts as a projected blowout.
    #[serde(default = "default_blowout_spread")]
    pub blowout_spread: f64,

    /// Average minutes at which a player is exempt from blowout fades.
    #[serde(default = "default_blowout_min_minutes")]
    pub blowout_min_minutes: f64,

    /// `max(recent) / line` above which an under is unsafe.
    #[serde(default = "default_ceiling_ratio")]
    pub ceiling_ratio: f64,

    /// Recent results required before the ceiling check applies.
    #[serde(default = "default_ceiling_min_games")]
    pub ceiling_min_games: usize,

    /// High-minute bigs whose rebound floor is unusually stable.
    #[serde(default = "default_rebounder_exceptions")]
    pub rebounder_exceptions: Vec<String>,
}

fn default_dead_zone() -> f64 {
    0.5
}

fn default_rebounder_override_gap() -> f64 {
    2.0
}

fn default_blowout_spread() -> f64 {
    8.0
}

fn default_blowout_min_minutes() -> f64 {
    30.0
}

fn default_ceiling_ratio() -> f64 {
    1.5
}

fn default_ceiling_min_games() -> usize {
    5
}

fn default_rebounder_exceptions() -> Vec<String> {
    [
        "Nikola Jokic",
        "Domantas Sabonis",
        "Anthony Davis",
        "Rudy Gobert",
        "Karl-Anthony Towns",
        "Bam Adebayo",
        "Giannis Antetokounmpo",
        "Alperen Sengun",
        "Victor Wembanyama",
        "Jarrett Allen",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for VetoConfig {
    fn default() -> Self {
        Self {
            dead_zone: default_dead_zone(),
            rebounder_override_gap: default_rebounder_override_gap(),
            blowout_spread: default_blowout_spread(),
            blowout_min_minutes: default_blowout_min_minutes(),
            ceiling_ratio: default_ceiling_ratio(),
            ceiling_min_games: default_ceiling_min_games(),
            rebounder_exceptions: default_rebounder_exceptions(),
        }
    }
}

/// Evaluates the ordered veto rules against single propositions.
///
/// The exception list is frozen into a normalized set at construction.
#[derive(Debug, Clone)]
pub struct VetoEngine {
    config: VetoConfig,
    exceptions: HashSet<String>,
}

impl VetoEngine {
    #[must_use]
    pub fn new(config: VetoConfig) -> Self {
        let exceptions = config
            .rebounder_exceptions
            .iter()
            .map(|name| normalize_name(name))
            .filter(|name| !name.is_empty())
            .collect();
        Self { config, exceptions }
    }

    #[must_use]
    pub const fn config(&self) -> &VetoConfig {
        &self.config
    }

    /// True when the player is on the rebound-floor exception list.
    #[must_use]
    pub fn is_rebounder_exception(&self, prop: &Proposition) -> bool {
        self.exceptions.contains(&prop.player.normalized())
    }

    /// Run the rules in order and return the first that fires.
    #[must_use]
    pub fn check(&self, prop: &Proposition, archetype: Archetype) -> Option<Veto> {
        let veto = VetoRule::ALL
            .into_iter()
            .find_map(|rule| self.apply(rule, prop, archetype));
        if let Some(ref veto) = veto {
            debug!(
                player = %prop.player,
                stat = %prop.stat,
                line = prop.line,
                side = %prop.side,
                rule = %veto.rule,
                detail = %veto.detail,
                "Proposition vetoed"
            );
        }
        veto
    }

    /// Evaluate a single rule.
    #[must_use]
    pub fn apply(&self, rule: VetoRule, prop: &Proposition, archetype: Archetype) -> Option<Veto> {
        match rule {
            VetoRule::HalfPointComboUnder => half_point_combo_under(prop),
            VetoRule::MedianDeadZone => self.median_dead_zone(prop),
            VetoRule::ReboundFloorImmunity => self.rebound_floor_immunity(prop, archetype),
            VetoRule::BlowoutOverrule => self.blowout_overrule(prop),
            VetoRule::CeilingCheck => self.ceiling_check(prop),
        }
    }

    fn median_dead_zone(&self, prop: &Proposition) -> Option<Veto> {
        let median = prop.effective_median()?;
        let distance = (prop.line - median).abs();
        (distance <= self.config.dead_zone + LINE_EPSILON).then(|| {
            Veto::new(
                VetoRule::MedianDeadZone,
                format!(
                    "line {} within {} of median {median:.1}",
                    prop.line, self.config.dead_zone
                ),
            )
        })
    }

    fn rebound_floor_immunity(&self, prop: &Proposition, archetype: Archetype) -> Option<Veto> {
        if archetype != Archetype::Big
            || !prop.side.is_under()
            || !prop.stat.is_combination()
            || !prop.stat.is_rebound_type()
            || !self.is_rebounder_exception(prop)
        {
            return None;
        }

        let median = prop.effective_median();
        if let Some(median) = median {
            if prop.line >= median + self.config.rebounder_override_gap - LINE_EPSILON {
                return None;
            }
        }

        let detail = match median {
            Some(median) => format!(
                "{} on exception list, line {} less than {} above median {median:.1}",
                prop.player, prop.line, self.config.rebounder_override_gap
            ),
            None => format!("{} on exception list, no median to override", prop.player),
        };
        Some(Veto::new(VetoRule::ReboundFloorImmunity, detail))
    }

    fn blowout_overrule(&self, prop: &Proposition) -> Option<Veto> {
        if !prop.side.is_under() {
            return None;
        }
        let spread = prop.spread?.abs();
        let minutes = prop.avg_minutes?;
        (spread >= self.config.blowout_spread && minutes >= self.config.blowout_min_minutes).then(
            || {
                Veto::new(
                    VetoRule::BlowoutOverrule,
                    format!("spread {spread:.1} with {minutes:.1} average minutes"),
                )
            },
        )
    }

    fn ceiling_check(&self, prop: &Proposition) -> Option<Veto> {
        if !prop.side.is_under()
            || prop.line <= 0.0
            || prop.recent.len() < self.config.ceiling_min_games
        {
            return None;
        }
        let ceiling = prop.ceiling()?;
        let ratio = ceiling / prop.line;
        (ratio > self.config.ceiling_ratio).then(|| {
            Veto::new(
                VetoRule::CeilingCheck,
                format!(
                    "ceiling {ceiling:.1} is {ratio:.2}x line {} (limit {})",
                    prop.line, self.config.ceiling_ratio
                ),
            )
        })
    }
}

impl Default for VetoEngine {
    fn default() -> Self {
        Self::new(VetoConfig::default())
    }
}

fn half_point_combo_under(prop: &Proposition) -> Option<Veto> {
    (prop.stat.is_combination() && prop.side.is_under() && is_exact_half(prop.line)).then(|| {
        Veto::new(
            VetoRule::HalfPointComboUnder,
            format!("{} under {} on a half-point line", prop.stat, prop.line),
        )
    })
}
