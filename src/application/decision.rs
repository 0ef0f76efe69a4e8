//! Decision classifier and justification text.

use serde::{Deserialize, Serialize};

use super::scoring::ScoreCard;
use crate::domain::{Decision, Veto};

/// Decision thresholds (`[decision]`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionThresholds {
    /// Minimum composite for a standalone bet.
    #[serde(default = "default_bet")]
    pub bet: f64,

    /// Minimum composite for a lean.
    #[serde(default = "default_lean")]
    pub lean: f64,
}

fn default_bet() -> f64 {
    72.0
}

fn default_lean() -> f64 {
    64.0
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            bet: default_bet(),
            lean: default_lean(),
        }
    }
}

impl DecisionThresholds {
    /// Classify a composite score. Vetoes are handled by [`decide`].
    #[must_use]
    pub fn classify(&self, composite: f64) -> Decision {
        if composite >= self.bet {
            Decision::Bet
        } else if composite >= self.lean {
            Decision::Lean
        } else {
            Decision::Reject
        }
    }

    /// Map a score card and optional veto to a decision and justification.
    #[must_use]
    pub fn decide(&self, card: &ScoreCard, veto: Option<&Veto>) -> (Decision, String) {
        if let Some(veto) = veto {
            let text = format!("vetoed ({}): {}; {}", veto.rule, veto.rule.rationale(), veto.detail);
            return (Decision::Reject, text);
        }

        let decision = self.classify(card.composite);
        let text = match decision {
            Decision::Bet | Decision::Lean => {
                let gap = card
                    .median_gap
                    .map_or_else(|| "median unknown".to_string(), |g| format!("median gap {g:+.1}"));
                format!(
                    "SES {:.1}: {gap}, {} line",
                    card.composite, card.line_structure
                )
            }
            Decision::Reject => {
                let weakest = card.subscores.weakest();
                format!(
                    "SES {:.1} below {:.0}: weakest component {} ({:.0}/{:.0})",
                    card.composite,
                    self.lean,
                    weakest.label(),
                    card.subscores.get(weakest),
                    weakest.cap()
                )
            }
        };
        (decision, text)
    }
}

/// Classify with the default thresholds.
#[must_use]
pub fn classify(composite: f64) -> Decision {
    DecisionThresholds::default().classify(composite)
}
