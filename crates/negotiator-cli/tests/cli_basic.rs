//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. None of
//! them reach the network: they stop at argument validation or at the
//! input-gating checks that run before any client is built.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "negotiator-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_help() {
    let (stdout, _, code) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("extract"));
    assert!(stdout.contains("recommend"));
}

#[test]
fn test_extract_help() {
    let (stdout, _, code) = run_cli(&["extract", "--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("--json"));
}

#[test]
fn test_extract_rejects_empty_input() {
    let (_, stderr, code) = run_cli(&["extract", "   "]);
    assert_eq!(code, 1);
    assert!(stderr.contains("no input text"));
}

#[test]
fn test_recommend_rejects_empty_task_list() {
    let path = std::env::temp_dir().join("negotiator-cli-test-empty-tasks.json");
    std::fs::write(&path, "[]").unwrap();

    let (_, stderr, code) = run_cli(&[
        "recommend",
        "--time",
        "30",
        "--energy",
        "neutral",
        "--tasks-file",
        path.to_str().unwrap(),
    ]);

    assert_eq!(code, 1);
    assert!(stderr.contains("no tasks to recommend from"));
}

#[test]
fn test_recommend_rejects_out_of_range_time() {
    let (_, stderr, code) = run_cli(&[
        "recommend",
        "--time",
        "300",
        "--energy",
        "neutral",
    ]);
    assert_ne!(code, 0);
    assert!(stderr.contains("300"));
}

#[test]
fn test_recommend_rejects_unknown_energy() {
    let (_, stderr, code) = run_cli(&[
        "recommend",
        "--time",
        "30",
        "--energy",
        "sleepy",
    ]);
    assert_ne!(code, 0);
    assert!(stderr.contains("invalid energy level") || stderr.contains("sleepy"));
}

#[test]
fn test_config_list_is_json() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("config list output");
    assert!(parsed["models"]["extract"].is_array());
}

#[test]
fn test_completions_bash() {
    let (stdout, _, code) = run_cli(&["completions", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("negotiator"));
}
