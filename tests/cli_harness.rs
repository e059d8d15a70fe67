//! End-to-end CLI harness: run the compiled binary against input files
//! and check the rendered report JSON.

mod common;

use common::*;
use std::process::Command;

fn intake(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_intake"));
    // Keep the config file inside the test sandbox.
    cmd.env("XDG_CONFIG_HOME", config_dir);
    cmd
}

#[test]
fn candidate_report_from_a_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("candidates.json");
    let rows = serde_json::Value::Array(vec![
        serde_json::Value::Object(pascal_candidate_row()),
        serde_json::Value::Object(snake_candidate_row()),
    ]);
    std::fs::write(&input, serde_json::to_string(&rows).unwrap()).unwrap();

    let output = intake(dir.path())
        .args(["--kind", "candidate"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total"], 2);
    assert_eq!(report["funnel"][0]["stage"], "Total Applications");
    assert_eq!(report["geography"][0]["state"], "MD");

    // The config file materializes on first run.
    assert!(dir.path().join("intake").join("config.toml").exists());
}

#[test]
fn customer_report_from_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("customers.jsonl");
    let mut lines = String::new();
    for row in [customer_row(), customer_row()] {
        lines.push_str(&serde_json::to_string(&row).unwrap());
        lines.push('\n');
    }
    std::fs::write(&input, lines).unwrap();

    let output = intake(dir.path())
        .args(["--kind", "customer"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total"], 2);
    assert_eq!(report["dementia"]["withDementia"], 2);
    assert_eq!(report["referralSources"][0]["source"], "Google");
}

#[test]
fn report_writes_to_the_out_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("forms.json");
    let out = dir.path().join("report.json");
    let rows = serde_json::Value::Array(vec![serde_json::Value::Object(form_row())]);
    std::fs::write(&input, serde_json::to_string(&rows).unwrap()).unwrap();

    let output = intake(dir.path())
        .args(["--kind", "form"])
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty(), "report goes to the file, not stdout");

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(report["total"], 1);
    assert_eq!(report["summary"][0]["metric"], "Total Submissions");
}

#[test]
fn rejected_rows_are_warned_and_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("candidates.json");
    let rows = serde_json::json!([
        {"ContactName": "Ada", "PhoneNumber": "555-0100"},
        {"ContactName": "No Phone"},
    ]);
    std::fs::write(&input, serde_json::to_string(&rows).unwrap()).unwrap();

    let output = intake(dir.path())
        .args(["--kind", "candidate"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total"], 1, "the invalid row is dropped, not fatal");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rejected row"), "stderr was: {stderr}");
}

#[test]
fn unreadable_input_fails_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let output = intake(dir.path())
        .args(["--kind", "candidate"])
        .arg(dir.path().join("does-not-exist.json"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does-not-exist.json"), "stderr was: {stderr}");
}
