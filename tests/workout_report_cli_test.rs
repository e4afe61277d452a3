// ABOUTME: Integration tests for the workout-report binary
// ABOUTME: Tests exit codes, stdout/stderr separation, and output format selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

/// Run the binary with a clean logging environment and capture its output
fn run_cli(args: &[&str], envs: &[(&str, &str)]) -> (i32, String, String) {
    let mut command = Command::new(env!("CARGO_BIN_EXE_workout-report"));
    command
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("LOG_FORMAT")
        .env_remove("WORKOUT_OUTPUT_FORMAT");
    for (key, value) in envs {
        command.env(key, value);
    }
    let output = command.output().unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn write_packages(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_cli_verbose_keeps_logs_off_stdout() {
    let (exit_code, stdout, stderr) = run_cli(&["-v"], &[]);

    assert_eq!(exit_code, 0, "Default batch should exit with 0");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "Expected one line per sample package: {stdout}");
    assert!(lines.iter().all(|line| line.starts_with("Тип тренировки: ")));
    assert!(lines[0].starts_with("Тип тренировки: Swimming;"));
    assert!(lines[1].starts_with("Тип тренировки: Running;"));
    assert!(lines[2].starts_with("Тип тренировки: SportsWalking;"));
    assert!(
        stderr.contains("Workout batch processed"),
        "Verbose logs should go to stderr: {stderr}"
    );
    assert!(!stdout.contains("Workout batch processed"));
}

#[test]
fn test_cli_quiet_by_default() {
    let (exit_code, stdout, stderr) = run_cli(&[], &[]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.lines().count(), 3);
    assert!(stderr.is_empty(), "Default level should log nothing: {stderr}");
}

#[test]
fn test_cli_rejects_unknown_env_format() {
    let (exit_code, stdout, stderr) = run_cli(&[], &[("WORKOUT_OUTPUT_FORMAT", "yaml")]);

    assert_eq!(exit_code, 1, "Invalid configuration is fatal");
    assert!(stdout.is_empty(), "No report lines on fatal error: {stdout}");
    assert!(stderr.contains("WORKOUT_OUTPUT_FORMAT"));
}

#[test]
fn test_cli_env_selects_json() {
    let (exit_code, stdout, _stderr) = run_cli(&[], &[("WORKOUT_OUTPUT_FORMAT", "json")]);

    assert_eq!(exit_code, 0);
    let first: serde_json::Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert_eq!(first["training_type"], "Swimming");
}

#[test]
fn test_cli_format_flag_overrides_env() {
    let (exit_code, stdout, _stderr) = run_cli(
        &["--format", "text"],
        &[("WORKOUT_OUTPUT_FORMAT", "json")],
    );

    assert_eq!(exit_code, 0);
    assert!(stdout
        .lines()
        .all(|line| line.starts_with("Тип тренировки: ")));
}

#[test]
fn test_cli_bad_entries_are_not_fatal() {
    let file = write_packages(
        r#"[
            {"workout_type": "RUN", "data": [15000, 1, 75]},
            {"workout_type": "XYZ", "data": [1, 2, 3]},
            {"workout_type": "WLK", "data": [9000, 1]}
        ]"#,
    );
    let path = file.path().to_str().unwrap();
    let (exit_code, stdout, stderr) = run_cli(&["-i", path, "-f", "json"], &[]);

    assert_eq!(exit_code, 0, "Rejected packages must not fail the run");
    let values: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(values.len(), 3);
    assert_eq!(values[0]["training_type"], "Running");
    assert_eq!(values[1]["error"]["code"], "UNKNOWN_WORKOUT_TYPE");
    assert_eq!(values[2]["error"]["code"], "ARITY_MISMATCH");
    assert!(stderr.contains("Skipping workout package"));
}

#[test]
fn test_cli_missing_input_is_fatal() {
    let (exit_code, stdout, stderr) =
        run_cli(&["--input", "/nonexistent/workout-packages.json"], &[]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Failed to read workout packages"));
}

#[test]
fn test_cli_help_lists_options() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"], &[]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--input"));
    assert!(stdout.contains("--format"));
    assert!(stdout.contains("--verbose"));
}
