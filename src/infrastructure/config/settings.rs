//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. Every
//! field has a default, so an empty file is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use propedge::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use crate::application::{
    CombinationConfig, DecisionThresholds, EngineConfig, ScoringConfig, VetoConfig,
};
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Veto rule constants and the rebounder exception list.
    #[serde(default)]
    pub veto: VetoConfig,

    /// SES scoring constants, including both environment models.
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Bet / lean thresholds.
    #[serde(default)]
    pub decision: DecisionThresholds,

    /// Combination builder settings.
    #[serde(default)]
    pub combination: CombinationConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Render the effective configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::InvalidValue {
                field: "config",
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Engine sections, ready for [`Evaluator::new`](crate::application::Evaluator::new).
    #[must_use]
    pub fn engine(&self) -> EngineConfig {
        EngineConfig {
            veto: self.veto.clone(),
            scoring: self.scoring.clone(),
            decision: self.decision,
            combination: self.combination.clone(),
        }
    }

    /// Initialize tracing with the configured level and format.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected \"pretty\" or \"json\", got {:?}", self.logging.format),
            }
            .into());
        }

        let veto = &self.veto;
        if veto.dead_zone < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "dead_zone",
                reason: "must be 0 or greater".to_string(),
            }
            .into());
        }
        if veto.ceiling_ratio <= 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "ceiling_ratio",
                reason: "must be greater than 1".to_string(),
            }
            .into());
        }
        if veto.ceiling_min_games == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ceiling_min_games",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        let scoring = &self.scoring;
        if scoring.medium_minutes > scoring.locked_minutes {
            return Err(ConfigError::InvalidValue {
                field: "medium_minutes",
                reason: "must be <= locked_minutes".to_string(),
            }
            .into());
        }
        if scoring.pace.team_count < 2 {
            return Err(ConfigError::InvalidValue {
                field: "team_count",
                reason: "must be at least 2".to_string(),
            }
            .into());
        }
        if scoring.pace.pace_floor >= scoring.pace.pace_ceiling {
            return Err(ConfigError::InvalidValue {
                field: "pace_ceiling",
                reason: "must be greater than pace_floor".to_string(),
            }
            .into());
        }
        if scoring.pace.blowout_spread_cap <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "blowout_spread_cap",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        let decision = &self.decision;
        if !(0.0..=100.0).contains(&decision.bet) || !(0.0..=100.0).contains(&decision.lean) {
            return Err(ConfigError::InvalidValue {
                field: "decision",
                reason: "thresholds must be between 0 and 100".to_string(),
            }
            .into());
        }
        if decision.lean > decision.bet {
            return Err(ConfigError::InvalidValue {
                field: "lean",
                reason: "must be <= bet".to_string(),
            }
            .into());
        }

        let combination = &self.combination;
        if !(0.0..=100.0).contains(&combination.min_score) {
            return Err(ConfigError::InvalidValue {
                field: "min_score",
                reason: "must be between 0 and 100".to_string(),
            }
            .into());
        }
        if combination.bucket_size < 2 {
            return Err(ConfigError::InvalidValue {
                field: "bucket_size",
                reason: "must be at least 2".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
