//! Handler for the `combo` command.

use serde_json::json;

use super::command::ComboArgs;
use super::{config, evaluate, input, output};
use crate::application::Evaluator;
use crate::domain::Combination;
use crate::error::{Error, Result};

/// Execute `combo`.
pub fn execute(args: &ComboArgs) -> Result<()> {
    let config = config::resolve(args.config.as_deref())?;
    super::init_logging(&config);

    let props = input::load(&args.input, None)?;
    let evaluator = Evaluator::new(config.engine());
    let results = evaluator.evaluate(&props);

    let combination = match evaluator.build_combination(&results) {
        Ok(combination) => combination,
        Err(failure) => {
            if output::is_json() {
                output::json_line(
                    "combination_failure",
                    json!({
                        "reason": failure.to_string(),
                        "failure": serde_json::to_value(&failure)?,
                    }),
                );
            } else if output::verbosity() > 0 && !results.is_empty() {
                output::section("Evaluations");
                output::lines(&evaluate::table(&results));
            }
            return Err(Error::Combination(failure));
        }
    };

    if output::is_json() {
        output::json_line("combination", serde_json::to_value(&combination)?);
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    render(&combination);
    Ok(())
}

fn render(combination: &Combination) {
    output::section("Combination");
    output::field("Kind", combination.kind);
    output::field(
        "Score",
        output::highlight(format!("{:.1}", combination.combined_score)),
    );
    for (i, leg) in combination.legs.iter().enumerate() {
        let team = leg.team.as_deref().unwrap_or("?");
        output::field(
            &format!("Leg {}", i + 1),
            format!(
                "{} ({team}) SES {:.1} {}",
                leg.label(),
                leg.composite,
                output::decision(leg.decision)
            ),
        );
    }
    output::note(&combination.reason);
}
