//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Only
//! commands that terminate on their own are exercised; the interactive
//! run loops are bounded with `--for-ms` where needed. PRODTIMER_ENV is
//! pinned to `dev` so the user's real config is never touched.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "prodtimer-cli", "--"])
        .args(args)
        .env("PRODTIMER_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_config_show() {
    let (stdout, _, code) = run_cli(&["config", "show"]);
    assert_eq!(code, 0, "config show failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("config show not JSON");
    assert!(parsed["durations"]["work_min"].is_u64());
}

#[test]
fn test_config_path() {
    let (stdout, _, code) = run_cli(&["config", "path"]);
    assert_eq!(code, 0, "config path failed");
    assert!(stdout.contains("config.toml"));
}

#[test]
fn test_config_set_duration() {
    let (stdout, _, code) = run_cli(&["config", "set-duration", "break", "7"]);
    assert_eq!(code, 0, "config set-duration failed");
    assert!(stdout.contains("break duration set to 7 min"));
}

#[test]
fn test_config_set_duration_rejects_zero() {
    let (_, stderr, code) = run_cli(&["config", "set-duration", "work", "0"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("invalid duration"));
}

#[test]
fn test_countdown_rejects_zero_override() {
    let (_, stderr, code) = run_cli(&["countdown", "run", "--work-min", "0"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("invalid duration"));
}

#[test]
fn test_stopwatch_bounded_run_emits_snapshot() {
    let (stdout, _, code) = run_cli(&["stopwatch", "run", "--for-ms", "200", "--json"]);
    assert_eq!(code, 0, "stopwatch run failed");
    assert!(stdout.contains("stopwatch_started"));
    assert!(stdout.contains("stopwatch_snapshot"));
}
