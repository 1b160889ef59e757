// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Exit status of the `fermat-test` binary

use std::process::{Command, Output};
use tempfile::TempDir;

fn fermat_test(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fermat-test"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to launch fermat-test")
}

#[test]
fn test_unknown_provider_exits_with_provider_fault() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("harness.toml");
    std::fs::write(&config, "providers = [\"vec2\", \"ghost\"]\n").unwrap();

    let output = fermat_test(&["--config", config.to_str().unwrap(), "--regression-tool", "true"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2), "{stderr}");
    assert!(stderr.contains("ghost"), "{stderr}");
    // nothing ran
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Ran "));
}

#[cfg(unix)]
#[test]
fn test_failing_regression_tool_exits_with_stage_failure() {
    let fixtures = TempDir::new().unwrap();
    let fixtures = fixtures.path().to_str().unwrap();

    let output = fermat_test(&["-q", "--regression-tool", "false", "--fixtures", fixtures]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1), "{stdout}");
    assert!(stdout.contains("Regression gate: failed (exit code 1"), "{stdout}");
}

#[test]
fn test_unavailable_regression_tool_exits_with_stage_failure() {
    let fixtures = TempDir::new().unwrap();
    let fixtures = fixtures.path().to_str().unwrap();

    let output = fermat_test(&[
        "-q",
        "--regression-tool",
        "/nonexistent/check-regressions",
        "--fixtures",
        fixtures,
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1), "{stdout}");
    assert!(stdout.contains("Regression gate: unavailable"), "{stdout}");
}

#[cfg(unix)]
#[test]
fn test_passing_run_exits_successfully() {
    let fixtures = TempDir::new().unwrap();
    let fixtures = fixtures.path().to_str().unwrap();

    let output = fermat_test(&["--regression-tool", "true", "--fixtures", fixtures]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0), "{stdout}");
    assert!(stdout.contains("(vec2.TestCase) ... ok"), "{stdout}");
    assert!(stdout.contains("Overall: PASSED"), "{stdout}");
}

#[test]
fn test_list_runs_nothing() {
    let output = fermat_test(&["list", "--regression-tool", "/nonexistent/check-regressions"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0), "{stdout}");
    assert!(stdout.contains("test_add_sub (vec2.TestCase)"), "{stdout}");
    assert!(stdout.contains("from 8 providers"), "{stdout}");
    assert!(!stdout.contains("Ran "));
}
