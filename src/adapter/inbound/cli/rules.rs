//! Veto rule listing and explanation.

use serde_json::json;
use tabled::{Table, Tabled};

use super::output;
use crate::application::VetoConfig;
use crate::domain::VetoRule;
use crate::error::Result;

#[derive(Tabled)]
struct RuleRow {
    #[tabled(rename = "#")]
    order: usize,
    #[tabled(rename = "Rule")]
    code: &'static str,
    #[tabled(rename = "Applies to")]
    scope: &'static str,
    #[tabled(rename = "Rationale")]
    rationale: &'static str,
}

fn scope(rule: VetoRule) -> &'static str {
    match rule {
        VetoRule::HalfPointComboUnder => "combo unders on .5 lines",
        VetoRule::MedianDeadZone => "any side",
        VetoRule::ReboundFloorImmunity => "big rebound-combo unders",
        VetoRule::BlowoutOverrule => "unders in blowouts",
        VetoRule::CeilingCheck => "unders with recent history",
    }
}

/// Condition text with the default constants filled in.
fn condition(rule: VetoRule, config: &VetoConfig) -> String {
    match rule {
        VetoRule::HalfPointComboUnder => {
            "statistic is a combination AND side is under AND line ends in exactly .5".to_string()
        }
        VetoRule::MedianDeadZone => format!(
            "median known AND |line - median| <= {}",
            config.dead_zone
        ),
        VetoRule::ReboundFloorImmunity => format!(
            "archetype Big AND rebound combination AND under AND player on the exception list \
             ({} names), unless line >= median + {}",
            config.rebounder_exceptions.len(),
            config.rebounder_override_gap
        ),
        VetoRule::BlowoutOverrule => format!(
            "under AND |spread| >= {} AND average minutes >= {}",
            config.blowout_spread, config.blowout_min_minutes
        ),
        VetoRule::CeilingCheck => format!(
            "under AND at least {} recent games AND max(recent) / line > {}",
            config.ceiling_min_games, config.ceiling_ratio
        ),
    }
}

fn available() -> String {
    VetoRule::ALL
        .iter()
        .map(|rule| rule.code())
        .collect::<Vec<_>>()
        .join(", ")
}

/// List the veto rules.
pub fn list() -> Result<()> {
    if output::is_quiet() && !output::is_json() {
        return Ok(());
    }

    if output::is_json() {
        let rules: Vec<_> = VetoRule::ALL
            .iter()
            .enumerate()
            .map(|(i, rule)| {
                json!({
                    "order": i + 1,
                    "rule": rule.code(),
                    "scope": scope(*rule),
                    "rationale": rule.rationale(),
                })
            })
            .collect();
        output::json_output(json!({
            "command": "rules.list",
            "rules": rules,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Veto rules (first match wins)");

    let rows: Vec<RuleRow> = VetoRule::ALL
        .iter()
        .enumerate()
        .map(|(i, rule)| RuleRow {
            order: i + 1,
            code: rule.code(),
            scope: scope(*rule),
            rationale: rule.rationale(),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());

    output::hint(&format!(
        "run {} for details",
        output::highlight("propedge rules explain <rule>")
    ));
    Ok(())
}

/// Explain a single veto rule.
pub fn explain(name: &str) -> Result<()> {
    if output::is_quiet() && !output::is_json() {
        return Ok(());
    }

    let config = VetoConfig::default();
    let rule = VetoRule::from_code(name);

    if output::is_json() {
        let payload = match rule {
            Some(rule) => json!({
                "command": "rules.explain",
                "rule": rule.code(),
                "rationale": rule.rationale(),
                "condition": condition(rule, &config),
                "config_path": "veto",
            }),
            None => json!({
                "command": "rules.explain",
                "status": "unknown_rule",
                "requested": name,
                "available": VetoRule::ALL.iter().map(|r| r.code()).collect::<Vec<_>>(),
            }),
        };
        output::json_output(payload);
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));

    let Some(rule) = rule else {
        output::error(&format!("Unknown rule: {name}"));
        output::hint(&format!("available rules: {}", available()));
        return Ok(());
    };

    output::section(rule.code());
    output::field("Rationale", rule.rationale());
    output::field("Fires when", condition(rule, &config));
    output::note("Constants are configurable under [veto]; the values shown are the defaults.");
    Ok(())
}
