//! Handler for the `config` command group, plus config resolution shared by
//! the evaluation commands.

use std::fs;
use std::path::Path;

use serde_json::json;
use tracing::debug;

use super::diagnostic::ConfigDiagnostic;
use super::{output, paths};
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Load and validate a config file, rendering TOML syntax errors against
/// the file content.
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
    Config::parse_toml(&content).map_err(|err| {
        if let Error::Config(ConfigError::Parse(ref parse)) = err {
            if !output::is_json() {
                if let Some(diagnostic) = ConfigDiagnostic::from_toml(parse, &content) {
                    eprintln!("{}", diagnostic.render(output::is_color()));
                }
            }
        }
        err
    })
}

/// Config for the evaluation commands: the explicit path, else the default
/// path when it exists, else built-in defaults.
pub fn resolve(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load(path),
        None => {
            let default = paths::default_config();
            if default.exists() {
                load(&default)
            } else {
                debug!("No config file, using defaults");
                Ok(Config::default())
            }
        }
    }
}

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!(
        "2. Run: propedge config validate -c {}",
        path.display()
    ));
    output::note(&format!(
        "3. Run: propedge evaluate slate.json -c {}",
        path.display()
    ));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = load(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "config": serde_json::to_value(&config)?,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());
    output::field("Log level", &config.logging.level);
    output::field(
        "Thresholds",
        format!("bet {} / lean {}", config.decision.bet, config.decision.lean),
    );
    output::field("Combo floor", config.combination.min_score);
    output::field("Exceptions", config.veto.rebounder_exceptions.len());
    output::section("Resolved TOML");
    output::lines(&config.to_toml()?);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config = load(path)?;
    output::success("Config file is valid");

    let warnings = warnings(&config);
    if !warnings.is_empty() {
        output::section("Warnings");
        for warning in &warnings {
            output::warning(warning);
        }
    }

    output::field("Next", format!("propedge config show -c {}", path.display()));
    Ok(())
}

/// Settings that are valid but probably unintended.
fn warnings(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();
    if config.veto.rebounder_exceptions.is_empty() {
        warnings.push("rebounder_exceptions is empty; rebound floor immunity never fires".into());
    }
    if config.combination.min_score > config.decision.bet {
        warnings.push(format!(
            "combination min_score {} is above the bet threshold {}; only bets can be legs",
            config.combination.min_score, config.decision.bet
        ));
    }
    if config.combination.min_score < config.decision.lean {
        warnings.push(format!(
            "combination min_score {} is below the lean threshold {}; it has no effect",
            config.combination.min_score, config.decision.lean
        ));
    }
    warnings
}
