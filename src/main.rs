use clap::Parser;
use propedge::adapter::inbound::cli::command::Cli;
use propedge::adapter::inbound::cli::output::{self, OutputConfig};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(
        cli.json,
        cli.quiet,
        cli.verbose,
        cli.color.enabled(),
    ));

    if let Err(e) = propedge::adapter::inbound::cli::execute(&cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
