//! Tests for the `cloudstate` binary.

mod common;

use common::temp_event_log;
use serde_json::Value;
use std::process::Command;
use tempfile::TempDir;

/// Command pointed at a config path inside `dir` that does not exist, so
/// tests see built-in defaults regardless of the user's config directory.
fn cloudstate_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cloudstate"));
    cmd.arg("--config").arg(dir.path().join("config.toml"));
    cmd
}

fn config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[test]
fn test_help_lists_commands() {
    let dir = config_dir();
    let output = cloudstate_cmd(&dir)
        .arg("--help")
        .output()
        .expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("replay"));
    assert!(stdout.contains("defaults"));
}

#[test]
fn test_defaults_prints_initial_state() {
    let dir = config_dir();
    let output = cloudstate_cmd(&dir)
        .args(["defaults", "--compact"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    let state: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(state["initialized"], Value::Bool(false));
    assert_eq!(state["query"]["page"], Value::from(1));
    assert_eq!(state["activities"]["deletes"], serde_json::json!({}));
}

#[test]
fn test_replay_prints_final_state() {
    let log = temp_event_log(&[
        r#"{"family": "cloud_storage", "type": "LIST_REQUESTED"}"#,
        r#"{"family": "cloud_storage", "type": "LIST_SUCCEEDED", "count": 3, "items": [{"id": 1, "display_name": "One", "provider_type": "AZURE_CONTAINER", "resource": "one", "credentials_type": "CONNECTION_STRING"}], "previews": [{"uri": "blob:1"}], "query": {"page": 2}}"#,
        r#"{"family": "cloud_storage", "type": "DELETE_REQUESTED", "id": 1}"#,
    ]);
    let dir = config_dir();
    let output = cloudstate_cmd(&dir)
        .arg("replay")
        .arg(log.path())
        .arg("--compact")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let state: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(state["initialized"], Value::Bool(true));
    assert_eq!(state["count"], Value::from(3));
    assert_eq!(state["query"]["page"], Value::from(2));
    assert_eq!(state["items"][0]["instance"]["display_name"], "One");
    assert_eq!(state["items"][0]["preview"]["uri"], "blob:1");
    assert_eq!(state["activities"]["deletes"]["1"], Value::Bool(false));
}

#[test]
fn test_replay_rejects_invalid_event() {
    let log = temp_event_log(&[r#"{"family": "cloud_storage", "type": "NOPE"}"#]);
    let dir = config_dir();
    let output = cloudstate_cmd(&dir)
        .arg("replay")
        .arg(log.path())
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid event at line 1"));
}

#[test]
fn test_replay_uses_config_from_dir() {
    let dir = config_dir();
    std::fs::write(
        dir.path().join("config.toml"),
        "[replay]\nskip_invalid = true\npretty = false\n",
    )
    .expect("Failed to write config");
    let log = temp_event_log(&["garbage", r#"{"family": "cloud_storage", "type": "LIST_REQUESTED"}"#]);
    let output = cloudstate_cmd(&dir)
        .arg("replay")
        .arg(log.path())
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim().lines().count(), 1);
    let state: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(state["fetching"], Value::Bool(true));
}

#[test]
fn test_replay_skip_invalid() {
    let log = temp_event_log(&[
        "garbage",
        r#"{"family": "auth", "type": "LOGOUT_SUCCESS"}"#,
    ]);
    let dir = config_dir();
    let output = cloudstate_cmd(&dir)
        .arg("replay")
        .arg(log.path())
        .args(["--skip-invalid", "--compact"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    let state: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(state["fetching"], Value::Bool(false));
}
