//! End-to-end CLI integration tests using test fixtures.
//!
//! Each fixture in `tests/fixtures/` contains:
//! - a manifest.json
//! - an expected.report.json (timestamps and tool version use placeholders)
//!
//! These tests run `logishield audit` against each fixture with the built-in default profile and
//! verify the exit code and the normalized JSON report.

use assert_cmd::Command;
use logishield_test_util::normalize_nondeterministic;
use predicates::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn logishield_cmd() -> Command {
    Command::cargo_bin("logishield").expect("logishield binary not found - run `cargo build` first")
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("logishield-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

/// Run `audit` on a manifest with no config file present.
fn run_audit(manifest: &Path, temp: &TempDir) -> (i32, Value) {
    let report_path = temp.path().join("report.json");

    let output = logishield_cmd()
        .current_dir(temp.path())
        .arg("audit")
        .arg("--manifest")
        .arg(manifest)
        .arg("--report-out")
        .arg(&report_path)
        .output()
        .expect("run logishield");

    let exit_code = output.status.code().unwrap_or(-1);
    let report_content = std::fs::read_to_string(&report_path).expect("read report");
    let report: Value = serde_json::from_str(&report_content).expect("parse report JSON");
    (exit_code, report)
}

fn check_fixture(name: &str, expected_exit: i32) {
    let temp = TempDir::new().expect("temp dir");
    let fixture = fixtures_dir().join(name);
    let (exit_code, report) = run_audit(&fixture.join("manifest.json"), &temp);

    let expected_text = std::fs::read_to_string(fixture.join("expected.report.json"))
        .expect("read expected report");
    let expected: Value = serde_json::from_str(&expected_text).expect("parse expected report");

    assert_eq!(exit_code, expected_exit, "exit code for fixture '{name}'");
    let actual = normalize_nondeterministic(report);
    let expected = normalize_nondeterministic(expected);
    assert_eq!(
        actual,
        expected,
        "Report mismatch for fixture '{}'.\n\nActual:\n{}",
        name,
        serde_json::to_string_pretty(&actual).unwrap()
    );
}

#[test]
fn fixture_clean_is_clear() {
    check_fixture("clean", 0);
}

#[test]
fn fixture_missing_license_is_flagged() {
    check_fixture("missing_license", 2);
}

#[test]
fn fixture_dashboard_columns_is_flagged() {
    check_fixture("dashboard_columns", 2);
}

#[test]
fn fixture_empty_manifest_is_clear() {
    check_fixture("empty_manifest", 0);
}

#[test]
fn malformed_manifest_writes_runtime_error_report() {
    let temp = TempDir::new().expect("temp dir");
    let manifest = temp.path().join("manifest.json");
    std::fs::write(
        &manifest,
        r#"[{"hscode": "8542", "value": 50000}, {"hscode": "2204", "value": "12k"}]"#,
    )
    .expect("write manifest");

    let (exit_code, report) = run_audit(&manifest, &temp);

    assert_eq!(exit_code, 1);
    assert_eq!(report["status"], "flagged");
    let findings = report["findings"].as_array().expect("findings");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["check_id"], "tool.runtime");
    assert!(findings[0].get("item_index").is_none());
    let message = findings[0]["message"].as_str().expect("message");
    assert!(message.contains("manifest item 1"), "message: {message}");
    assert!(message.contains("`value`"), "message: {message}");
}

#[test]
fn missing_manifest_file_exits_with_runtime_error() {
    let temp = TempDir::new().expect("temp dir");
    logishield_cmd()
        .current_dir(temp.path())
        .args(["audit", "--manifest", "nope.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read manifest: nope.json"));

    assert!(temp.path().join("artifacts/logishield/report.json").exists());
}

#[test]
fn profile_override_changes_the_table() {
    let temp = TempDir::new().expect("temp dir");
    let manifest = temp.path().join("manifest.json");
    std::fs::write(&manifest, r#"[{"hscode": "8506", "value": 2500}]"#).expect("write manifest");

    let (exit_code, report) = run_audit(&manifest, &temp);
    assert_eq!(exit_code, 2);
    assert_eq!(report["findings"][0]["code"], "unknown_code");

    let report_path = temp.path().join("electronics.json");
    logishield_cmd()
        .current_dir(temp.path())
        .args(["--profile", "electronics", "audit", "--manifest"])
        .arg(&manifest)
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .code(2);
    let report: Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).expect("read")).expect("json");
    assert_eq!(report["data"]["profile"], "electronics");
    assert_eq!(
        report["findings"][0]["message"],
        "missing export license for Lithium Batteries"
    );
}

#[test]
fn config_file_rules_are_applied() {
    let temp = TempDir::new().expect("temp dir");
    std::fs::write(
        temp.path().join("logishield.toml"),
        r#"
schema = "logishield.config.v1"

[rules."9999"]
name = "Sample Goods"
restriction = "none"
tax_rate = 0.1
"#,
    )
    .expect("write config");
    let manifest = temp.path().join("manifest.json");
    std::fs::write(&manifest, r#"[{"hscode": "9999", "value": 100}]"#).expect("write manifest");

    let (exit_code, report) = run_audit(&manifest, &temp);
    assert_eq!(exit_code, 0);
    assert_eq!(report["status"], "clear");
    assert_eq!(report["estimated_tax"], 10.0);
    assert_eq!(report["data"]["rules_loaded"], 3);
}

#[test]
fn invalid_config_exits_with_runtime_error() {
    let temp = TempDir::new().expect("temp dir");
    std::fs::write(
        temp.path().join("logishield.toml"),
        "[rules.\"2204\"]\nname = \"Wine\"\nrestriction = \"severe\"\n",
    )
    .expect("write config");
    let manifest = fixtures_dir().join("clean").join("manifest.json");

    let (exit_code, report) = run_audit(&manifest, &temp);
    assert_eq!(exit_code, 1);
    let message = report["findings"][0]["message"].as_str().expect("message");
    assert!(message.contains("unknown restriction: severe"), "message: {message}");
}

#[test]
fn wrong_typed_license_flag_writes_runtime_error_report() {
    let temp = TempDir::new().expect("temp dir");
    let manifest = temp.path().join("manifest.json");
    std::fs::write(
        &manifest,
        r#"[{"hscode": "2204", "value": 1}, {"hscode": "8542", "value": 1, "has_license": "yes"}]"#,
    )
    .expect("write manifest");

    let (exit_code, report) = run_audit(&manifest, &temp);

    assert_eq!(exit_code, 1);
    let message = report["findings"][0]["message"].as_str().expect("message");
    assert!(message.contains("manifest item 1"), "message: {message}");
    assert!(message.contains("`has_license`"), "message: {message}");
}

#[test]
fn unwritable_report_path_is_logged() {
    let temp = TempDir::new().expect("temp dir");
    std::fs::write(temp.path().join("blocker"), "not a directory").expect("write blocker");
    let manifest = fixtures_dir().join("clean").join("manifest.json");

    logishield_cmd()
        .current_dir(temp.path())
        .env_remove("RUST_LOG")
        .arg("audit")
        .arg("--manifest")
        .arg(&manifest)
        .args(["--report-out", "blocker/report.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("runtime error report not written"))
        .stderr(predicate::str::contains("logishield error: write report json"));
}
