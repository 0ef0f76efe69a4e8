//! Handler for the `evaluate` command.

use serde_json::json;
use tabled::{Table, Tabled};
use tracing::info;

use super::command::EvaluateArgs;
use super::{config, input, output};
use crate::adapter::outbound::store::JsonFileStore;
use crate::application::Evaluator;
use crate::domain::{Decision, EvaluationResult};
use crate::error::Result;
use crate::port::EvaluationStore;

#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "Player")]
    player: String,
    #[tabled(rename = "Stat")]
    stat: String,
    #[tabled(rename = "Line")]
    line: String,
    #[tabled(rename = "Side")]
    side: String,
    #[tabled(rename = "SES")]
    composite: String,
    #[tabled(rename = "Decision")]
    decision: String,
    #[tabled(rename = "Note")]
    note: String,
}

impl From<&EvaluationResult> for ResultRow {
    fn from(result: &EvaluationResult) -> Self {
        let note = match &result.veto {
            Some(veto) => veto.rule.code().to_string(),
            None => result.subscores.weakest().label().to_string(),
        };
        Self {
            player: result.player.to_string(),
            stat: result.stat.to_string(),
            line: format!("{:.1}", result.line),
            side: result.side.to_string(),
            composite: format!("{:.1}", result.composite),
            decision: result.decision.to_string(),
            note,
        }
    }
}

/// Table of results, one row per proposition.
pub(super) fn table(results: &[EvaluationResult]) -> String {
    let rows: Vec<ResultRow> = results.iter().map(ResultRow::from).collect();
    Table::new(rows).to_string()
}

/// Execute `evaluate`.
pub fn execute(args: &EvaluateArgs) -> Result<()> {
    let config = config::resolve(args.config.as_deref())?;
    super::init_logging(&config);

    let props = input::load(&args.input, args.date)?;
    let props = input::filter_side(props, args.side.as_deref())?;
    let results = Evaluator::new(config.engine()).evaluate(&props);

    let stored = match &args.store {
        Some(path) => {
            let store = JsonFileStore::new(path);
            let written = store.upsert(&results)?;
            info!(path = %path.display(), written, "Stored evaluations");
            Some(written)
        }
        None => None,
    };

    if output::is_json() {
        for result in &results {
            output::json_line("evaluation", serde_json::to_value(result)?);
        }
        output::json_line(
            "summary",
            json!({
                "total": results.len(),
                "bet": count(&results, Decision::Bet),
                "lean": count(&results, Decision::Lean),
                "reject": count(&results, Decision::Reject),
                "stored": stored,
            }),
        );
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    if results.is_empty() {
        output::warning("No propositions in input");
        return Ok(());
    }

    output::section("Evaluations");
    output::lines(&table(&results));

    output::section("Summary");
    output::field("Propositions", results.len());
    output::field(
        "Decisions",
        format!(
            "{} {}, {} {}, {} {}",
            count(&results, Decision::Bet),
            output::decision(Decision::Bet),
            count(&results, Decision::Lean),
            output::decision(Decision::Lean),
            count(&results, Decision::Reject),
            output::decision(Decision::Reject),
        ),
    );
    if let (Some(written), Some(path)) = (stored, &args.store) {
        output::success(&format!("Stored {written} results in {}", path.display()));
    }
    if output::verbosity() > 0 {
        output::section("Justifications");
        for result in &results {
            output::note(&format!("{}: {}", result.label(), result.justification));
        }
    }
    Ok(())
}

fn count(results: &[EvaluationResult], decision: Decision) -> usize {
    results.iter().filter(|r| r.decision == decision).count()
}
