//! Canonical test configurations.

use crate::application::{CombinationConfig, EngineConfig, VetoConfig};

/// Default engine configuration with an empty rebounder exception list.
pub fn without_exceptions() -> EngineConfig {
    EngineConfig {
        veto: VetoConfig {
            rebounder_exceptions: Vec::new(),
            ..VetoConfig::default()
        },
        ..EngineConfig::default()
    }
}

/// Default engine configuration with a custom combination floor.
pub fn with_min_score(min_score: f64) -> EngineConfig {
    EngineConfig {
        combination: CombinationConfig {
            min_score,
            ..CombinationConfig::default()
        },
        ..EngineConfig::default()
    }
}
