//! CLI module graph and command dispatch.

pub mod combo;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod evaluate;
pub mod input;
pub mod output;
pub mod paths;
pub mod rules;

use command::{Cli, Commands, ConfigCommand, RulesCommand};

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Run the parsed command line.
pub fn execute(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Evaluate(args) => evaluate::execute(args),
        Commands::Combo(args) => combo::execute(args),
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(&args.config),
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args.config),
        Commands::Rules(RulesCommand::List) => rules::list(),
        Commands::Rules(RulesCommand::Explain { name }) => rules::explain(name),
    }
}

/// Initialize tracing from the config, raised by `-v` (debug) or `-vv` (trace).
pub(crate) fn init_logging(config: &Config) {
    let logging = match output::verbosity() {
        0 => config.logging.clone(),
        1 => config.logging.clone().with_level("debug"),
        _ => config.logging.clone().with_level("trace"),
    };
    logging.init();
}
