//! Line shape helpers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tolerance for comparing lines, medians and gaps. Upstream lines are
/// quoted in tenths at most.
pub const LINE_EPSILON: f64 = 1e-9;

/// Whether a line can push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStructure {
    /// Integer line; a result exactly on the line pushes.
    Whole,
    /// Fractional line (normally `.5`); no push possible.
    Half,
}

impl LineStructure {
    /// Classify a line by its fractional part.
    #[must_use]
    pub fn classify(line: f64) -> Self {
        let frac = line.fract().abs();
        if frac < LINE_EPSILON || (1.0 - frac) < LINE_EPSILON {
            Self::Whole
        } else {
            Self::Half
        }
    }

    #[must_use]
    pub const fn is_half(self) -> bool {
        matches!(self, Self::Half)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Whole => "whole",
            Self::Half => "half",
        }
    }
}

impl fmt::Display for LineStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when the fractional part of `line` is exactly one half.
#[must_use]
pub fn is_exact_half(line: f64) -> bool {
    (line.fract().abs() - 0.5).abs() < LINE_EPSILON
}

/// Median of a series, ignoring order. `None` for an empty series.
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_whole_and_half() {
        assert_eq!(LineStructure::classify(24.0), LineStructure::Whole);
        assert_eq!(LineStructure::classify(24.5), LineStructure::Half);
        assert_eq!(LineStructure::classify(0.5), LineStructure::Half);
    }

    #[test]
    fn exact_half_only_for_point_five() {
        assert!(is_exact_half(24.5));
        assert!(!is_exact_half(24.0));
        assert!(!is_exact_half(24.25));
    }

    #[test]
    fn median_odd_even_and_empty() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }
}
