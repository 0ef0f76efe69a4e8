//! Command-line interface definitions.
//!
//! Defines the CLI structure for the propedge binary using `clap`: evaluate
//! a slate of propositions, build a combination, manage configuration and
//! describe the veto rules.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use super::paths;

/// Player-prop evaluation engine CLI
#[derive(Parser, Debug)]
#[command(name = "propedge")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Resolve to a concrete on/off switch. `Auto` honors `NO_COLOR` and
    /// whether stdout is a terminal.
    #[must_use]
    pub fn enabled(self) -> bool {
        use std::io::IsTerminal;

        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal(),
        }
    }
}

/// Top-level subcommands for the propedge CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a JSON file of propositions
    Evaluate(EvaluateArgs),

    /// Evaluate propositions and build the best two-leg combination
    Combo(ComboArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Describe the veto rules
    #[command(subcommand)]
    Rules(RulesCommand),
}

/// Subcommands for `propedge config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Subcommands for `propedge rules`.
#[derive(Subcommand, Debug)]
pub enum RulesCommand {
    /// List the veto rules in evaluation order.
    List,
    /// Explain a single veto rule.
    Explain {
        /// Rule code (e.g., "median_dead_zone" or "ceiling-check").
        name: String,
    },
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `evaluate` subcommand.
#[derive(Parser, Debug)]
pub struct EvaluateArgs {
    /// JSON file holding an array of propositions (`-` for stdin).
    pub input: PathBuf,

    /// Configuration file. Defaults apply when omitted and
    /// `~/.propedge/config.toml` does not exist.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Upsert results into this JSON-file store.
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Slate date (YYYY-MM-DD) for propositions that omit one.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Only evaluate propositions on this side (over or under).
    #[arg(long)]
    pub side: Option<String>,
}

/// Arguments for the `combo` subcommand.
#[derive(Parser, Debug)]
pub struct ComboArgs {
    /// JSON file holding an array of propositions (`-` for stdin).
    pub input: PathBuf,

    /// Configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
