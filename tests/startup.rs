//! Process-level startup behavior of the `poap-config` binary.

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

mod common;

use common::*;

/// Run the binary with a cleared environment inside `dir`.
fn run(dir: &TempDir, vars: &[(&str, &str)], args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_poap-config"))
        .env_clear()
        .envs(vars.iter().copied())
        .current_dir(dir.path())
        .args(args)
        .output()
        .expect("failed to run poap-config")
}

#[test]
fn test_empty_environment_exits_with_status_1() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&dir, &[], &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("ENV variable POAP_CONTRACT_ADDR is required"),
        "stderr was: {}",
        stderr
    );
    // The miss itself and the startup rejection; nothing printed outside the logger.
    let mentions = stderr
        .lines()
        .filter(|l| l.contains("ENV variable POAP_CONTRACT_ADDR is required"))
        .count();
    assert_eq!(mentions, 2, "stderr was: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_full_environment_starts() {
    let dir = tempfile::tempdir().unwrap();
    let env = full_env();
    let vars: Vec<(&str, &str)> = env.iter().collect();
    let output = run(&dir, &vars, &[]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(L1_CONTRACT));
    assert!(!stdout.contains("top-secret"));
}

#[test]
fn test_env_file_settings_apply_to_logging() {
    let dir = tempfile::tempdir().unwrap();
    let mut env = full_env();
    env.remove("SECRET_KEY");
    env.set("LOG_FORMAT", "json");

    let contents: String = env
        .iter()
        .map(|(key, value)| format!("{}='{}'\n", key, value))
        .collect();
    fs::write(dir.path().join(".env"), contents).unwrap();

    let output = run(&dir, &[], &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ENV variable SECRET_KEY is required"));
    for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
        assert!(
            serde_json::from_str::<serde_json::Value>(line).is_ok(),
            "not a JSON log line: {}",
            line
        );
    }
}

#[test]
fn test_process_variables_override_env_file() {
    let dir = tempfile::tempdir().unwrap();
    let env = full_env();
    let contents: String = env
        .iter()
        .map(|(key, value)| format!("{}='{}'\n", key, value))
        .collect();
    fs::write(dir.path().join(".env"), contents).unwrap();

    let output = run(&dir, &[("SECRET_KEY", "")], &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ENV variable SECRET_KEY is required"));
}
