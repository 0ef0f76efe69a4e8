//! Veto rule identities.
//!
//! The rules themselves are evaluated in `application::veto`; this module
//! only names them so results can carry a typed reason.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The hard exclusion rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VetoRule {
    HalfPointComboUnder,
    MedianDeadZone,
    ReboundFloorImmunity,
    BlowoutOverrule,
    CeilingCheck,
}

impl VetoRule {
    /// All rules in evaluation order.
    pub const ALL: [Self; 5] = [
        Self::HalfPointComboUnder,
        Self::MedianDeadZone,
        Self::ReboundFloorImmunity,
        Self::BlowoutOverrule,
        Self::CeilingCheck,
    ];

    /// Stable snake_case identifier.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::HalfPointComboUnder => "half_point_combo_under",
            Self::MedianDeadZone => "median_dead_zone",
            Self::ReboundFloorImmunity => "rebound_floor_immunity",
            Self::BlowoutOverrule => "blowout_overrule",
            Self::CeilingCheck => "ceiling_check",
        }
    }

    /// One-line reason surfaced in justifications.
    #[must_use]
    pub const fn rationale(self) -> &'static str {
        match self {
            Self::HalfPointComboUnder => {
                "combo unders on half-point lines lose to late-game padding and rebound variance"
            }
            Self::MedianDeadZone => "line sits within the median dead zone, no statistical edge",
            Self::ReboundFloorImmunity => {
                "high-minute big with a stable rebound floor, combo under not allowed"
            }
            Self::BlowoutOverrule => {
                "high-minute player in a projected blowout, do not fade on blowout risk alone"
            }
            Self::CeilingCheck => "recent single-game ceiling far above the line, under is unsafe",
        }
    }

    /// Look a rule up by its code, tolerating dashes and case.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|rule| rule.code() == code)
    }
}

impl fmt::Display for VetoRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A fired veto: which rule, plus the numbers that tripped it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Veto {
    pub rule: VetoRule,
    pub detail: String,
}

impl Veto {
    pub fn new(rule: VetoRule, detail: impl Into<String>) -> Self {
        Self {
            rule,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Veto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.rule, self.detail)
    }
}
