//! Tests for the `signin-flow` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn signin_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_signin-flow"));
    cmd.env("RUST_LOG", "off").env_remove("SIGNIN_FLOW_LOG");
    cmd
}

fn temp_config() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[auth]
latency_ms = 0

[[auth.accounts]]
email = "a@b.com"
password = "abcdef"
"#,
    )
    .expect("Failed to write config");
    (dir, path)
}

fn run_script(args: &[&str], script: &str) -> Output {
    let mut child = signin_cmd()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn binary");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(script.as_bytes())
        .expect("Failed to write script");
    child.wait_with_output().expect("Failed to wait for binary")
}

#[test]
fn test_help_lists_options() {
    let output = signin_cmd().arg("--help").output().expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--latency-ms"));
    assert!(stdout.contains("--outage"));
}

#[test]
fn test_script_signs_in() {
    let (_dir, path) = temp_config();
    let output = run_script(
        &["--config", path.to_str().unwrap()],
        "email not-an-email\nblur email\nemail a@b.com\npassword abc\nblur password\npassword abcdef\nsubmit\n",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("state:   emailErr.badFormat"));
    assert!(stdout.contains("state:   passwordErr.tooShort"));
    assert!(stdout.contains("state:   awaitingResponse"));
    assert!(stdout.contains("state:   signedIn"));
}

#[test]
fn test_outage_offers_retry_in_json() {
    let (_dir, path) = temp_config();
    let output = run_script(
        &["--config", path.to_str().unwrap(), "--outage", "--json"],
        "email a@b.com\npassword abcdef\nsubmit\n",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let last = stdout.lines().last().expect("at least one line");
    let value: serde_json::Value = serde_json::from_str(last).expect("json line");
    assert_eq!(value["state"], "serviceErr");
    assert_eq!(value["view"]["submit_label"], "retry");
    assert_eq!(value["focus"], "submit");
}

#[test]
fn test_invalid_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[auth]\nlatency_ms = 999999\n").unwrap();

    let output = run_script(&["--config", path.to_str().unwrap()], "");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loading configuration"));
}
