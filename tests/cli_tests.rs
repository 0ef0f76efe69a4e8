//! CLI integration tests.

mod support;

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use support::files::{temp_path, write_temp};

const SLATE: &str = r#"[
  {"player": "Jalen Brunson", "stat": "points", "line": 22.5, "side": "over",
   "team": "NYK", "median": 25.0, "minutes": 34.0, "spread": 3.0},
  {"player": "Rudy Gobert", "stat": "points", "line": 20.0, "side": "under",
   "team": "MIN", "median": 18.0, "minutes": 34.0, "spread": 3.0},
  {"player": "Tyrese Maxey", "stat": "points", "line": 20.3, "side": "over",
   "team": "PHI", "median": 20.0}
]"#;

const UNDERS_ONLY: &str = r#"{"propositions": [
  {"player": "A", "stat": "points", "line": 20.0, "side": "under",
   "team": "NYK", "median": 18.0, "minutes": 34.0},
  {"player": "B", "stat": "points", "line": 15.0, "side": "under",
   "team": "BOS", "median": 13.0, "minutes": 34.0}
]}"#;

/// Binary with `HOME` pointed at an empty directory so no user config leaks in.
fn propedge(home: &tempfile::TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("propedge");
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn home() -> tempfile::TempDir {
    tempfile::tempdir().expect("temp home")
}

#[test]
fn help_lists_commands() {
    propedge(&home())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("evaluate"))
        .stdout(predicate::str::contains("combo"))
        .stdout(predicate::str::contains("rules"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_prints_name() {
    propedge(&home())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("propedge"));
}

#[test]
fn rules_list_shows_every_rule() {
    propedge(&home())
        .args(["rules", "list", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("half_point_combo_under"))
        .stdout(predicate::str::contains("median_dead_zone"))
        .stdout(predicate::str::contains("rebound_floor_immunity"))
        .stdout(predicate::str::contains("blowout_overrule"))
        .stdout(predicate::str::contains("ceiling_check"));
}

#[test]
fn rules_list_json() {
    propedge(&home())
        .args(["rules", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""command":"rules.list""#));
}

#[test]
fn rules_explain_shows_condition() {
    propedge(&home())
        .args(["rules", "explain", "ceiling_check", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fires when"))
        .stdout(predicate::str::contains("1.5"));
}

#[test]
fn evaluate_prints_table_and_summary() {
    let input = write_temp("slate", "json", SLATE);
    propedge(&home())
        .args(["evaluate", "--color", "never"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Jalen Brunson"))
        .stdout(predicate::str::contains("87.0"))
        .stdout(predicate::str::contains("median_dead_zone"))
        .stdout(predicate::str::contains("2 bet, 0 lean, 1 reject"));
    let _ = fs::remove_file(&input);
}

#[test]
fn evaluate_json_emits_one_line_per_result() {
    let input = write_temp("slate", "json", SLATE);
    let output = propedge(&home())
        .args(["evaluate", "--json"])
        .arg(&input)
        .output()
        .expect("run propedge");
    let _ = fs::remove_file(&input);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["type"], "evaluation");
    assert_eq!(lines[0]["payload"]["player"], "Jalen Brunson");
    assert_eq!(lines[0]["payload"]["decision"], "bet");
    assert_eq!(lines[2]["payload"]["veto"]["rule"], "median_dead_zone");
    assert_eq!(lines[3]["type"], "summary");
    assert_eq!(lines[3]["payload"]["reject"], 1);
}

#[test]
fn evaluate_reads_stdin_and_stores_results() {
    let store = temp_path("evaluations", "json");
    propedge(&home())
        .args(["evaluate", "-", "--date", "2025-01-15", "--store"])
        .arg(&store)
        .write_stdin(SLATE)
        .assert()
        .success();

    let saved: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&store).expect("store file")).expect("store json");
    let _ = fs::remove_file(&store);
    assert_eq!(saved.len(), 3);
    assert!(saved.iter().all(|r| r["date"] == "2025-01-15"));
}

#[test]
fn evaluate_filters_by_side() {
    let input = write_temp("slate", "json", SLATE);
    let output = propedge(&home())
        .args(["evaluate", "--json", "--side", "under"])
        .arg(&input)
        .output()
        .expect("run propedge");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["payload"]["player"], "Rudy Gobert");
    assert_eq!(lines[1]["payload"]["total"], 1);

    propedge(&home())
        .args(["evaluate", "--color", "never", "--side", "sideways"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid side 'sideways'"));
    let _ = fs::remove_file(&input);
}

#[test]
fn combo_builds_over_under_pair() {
    let input = write_temp("slate", "json", SLATE);
    propedge(&home())
        .args(["combo", "--color", "never"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("over/under"))
        .stdout(predicate::str::contains("Jalen Brunson"))
        .stdout(predicate::str::contains("Rudy Gobert"));
    let _ = fs::remove_file(&input);
}

#[test]
fn combo_without_over_exits_nonzero() {
    let input = write_temp("unders", "json", UNDERS_ONLY);
    propedge(&home())
        .args(["combo", "--color", "never"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires at least 1 over"));
    let _ = fs::remove_file(&input);
}

#[test]
fn invalid_config_exits_nonzero() {
    let input = write_temp("slate", "json", SLATE);
    let config = write_temp("config", "toml", "[decision]\nbet = 60.0\nlean = 70.0\n");
    propedge(&home())
        .args(["evaluate", "--color", "never", "-c"])
        .arg(&config)
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for lean"));
    let _ = fs::remove_file(&input);
    let _ = fs::remove_file(&config);
}

#[test]
fn malformed_input_exits_nonzero() {
    let input = write_temp("broken", "json", "[{\"player\": ");
    propedge(&home())
        .arg("evaluate")
        .arg(&input)
        .assert()
        .failure();
    let _ = fs::remove_file(&input);
}

#[test]
fn config_init_then_validate() {
    let home = home();
    let path = home.path().join("config.toml");

    propedge(&home)
        .args(["config", "init", "--color", "never"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    propedge(&home)
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .failure();

    propedge(&home)
        .args(["config", "validate", "--color", "never", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file is valid"));
}

#[test]
fn config_show_json_includes_thresholds() {
    let home = home();
    let path = write_temp("show", "toml", "[decision]\nbet = 75.0\n");
    propedge(&home)
        .args(["config", "show", "--json", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""command":"config.show""#))
        .stdout(predicate::str::contains(r#""bet":75.0"#));
    let _ = fs::remove_file(&path);
}
