// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! End-to-end tests for the two-stage harness pipeline

use fermat::harness::{
    check, CaseFailure, GateOutcome, HarnessConfig, HarnessError, Orchestrator, ProviderRegistry,
    Stage, TestCaseCollection, TestStatus, UnitCase,
};
use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;
use tempfile::TempDir;

/// Provider `a`: two passing cases
struct ProviderA {
    runs: Rc<Cell<usize>>,
}

impl TestCaseCollection for ProviderA {
    fn cases(&self) -> Vec<UnitCase> {
        let first = Rc::clone(&self.runs);
        let second = Rc::clone(&self.runs);
        vec![
            UnitCase::new("test_a_one", move || {
                first.set(first.get() + 1);
                check(1 + 1 == 2, "arithmetic")
            }),
            UnitCase::new("test_a_two", move || {
                second.set(second.get() + 1);
                Ok(())
            }),
        ]
    }
}

/// Provider `b`: one failing case
struct ProviderB {
    runs: Rc<Cell<usize>>,
}

impl TestCaseCollection for ProviderB {
    fn cases(&self) -> Vec<UnitCase> {
        let runs = Rc::clone(&self.runs);
        vec![UnitCase::new("test_b_fails", move || {
            runs.set(runs.get() + 1);
            Err(CaseFailure::new("b diagnostic: 3 != 4"))
        })]
    }
}

/// Provider `mixed`: pass, panic, pass
#[derive(Default)]
struct Mixed;

impl TestCaseCollection for Mixed {
    fn cases(&self) -> Vec<UnitCase> {
        vec![
            UnitCase::new("test_first", || Ok(())),
            UnitCase::new("test_panics", || {
                let values: Vec<u32> = Vec::new();
                check(values[3] == 0, "unreachable")
            }),
            UnitCase::new("test_last", || Ok(())),
        ]
    }
}

fn registry(runs: &Rc<Cell<usize>>) -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    let a_runs = Rc::clone(runs);
    registry.register("a", move || Box::new(ProviderA { runs: Rc::clone(&a_runs) }));
    let b_runs = Rc::clone(runs);
    registry.register("b", move || Box::new(ProviderB { runs: Rc::clone(&b_runs) }));
    registry.register_default::<Mixed>("mixed");
    registry
}

fn config(providers: &[&str], tool: &str, fixtures: &Path) -> HarnessConfig {
    HarnessConfig {
        providers: providers.iter().map(|p| p.to_string()).collect(),
        fixture_dir: fixtures.to_path_buf(),
        regression_tool: tool.into(),
        ..HarnessConfig::default()
    }
}

fn run(orchestrator: &Orchestrator) -> (Result<fermat::HarnessReport, HarnessError>, String) {
    colored::control::set_override(false);
    let mut out = Vec::new();
    let result = orchestrator.run(&mut out);
    (result, String::from_utf8(out).unwrap())
}

#[cfg(unix)]
#[test]
fn test_failing_provider_fails_overall_regardless_of_gate() {
    let fixtures = TempDir::new().unwrap();
    let runs = Rc::new(Cell::new(0));
    let orchestrator = Orchestrator::new(
        config(&["a", "b"], "true", fixtures.path()),
        registry(&runs),
    );

    let (result, output) = run(&orchestrator);
    let report = result.unwrap();

    let suite = report.suite.as_ref().unwrap();
    assert_eq!((suite.total, suite.passed, suite.failed, suite.errors), (3, 2, 1, 0));
    let failure = suite.failures().next().unwrap();
    assert_eq!(failure.identity(), "test_b_fails (b.TestCase)");
    assert!(failure.detail.as_deref().unwrap().contains("b diagnostic: 3 != 4"));

    // empty fixture directory with a successful tool
    match report.regression.as_ref().unwrap() {
        GateOutcome::Completed(result) => {
            assert!(result.success());
            assert_eq!(result.fixture_count, 0);
        }
        other => panic!("gate did not complete: {other:?}"),
    }

    assert!(!report.success());
    assert_eq!(report.failed_stages(), vec![Stage::UnitSuite]);

    assert!(output.contains("test_a_one (a.TestCase) ... ok"));
    assert!(output.contains("test_a_two (a.TestCase) ... ok"));
    assert!(output.contains("test_b_fails (b.TestCase) ... FAIL"));
    assert!(output.contains("Ran 3 tests"));
    assert!(output.contains("FAILED (failures=1)"));
    assert!(output.contains("Overall: FAILED (unit suite failed)"));
}

#[test]
fn test_provider_contract_fault_runs_nothing() {
    let fixtures = TempDir::new().unwrap();
    let runs = Rc::new(Cell::new(0));
    let orchestrator = Orchestrator::new(
        config(&["a", "unknown", "b"], "/nonexistent/check-regressions", fixtures.path()),
        registry(&runs),
    );

    let (result, output) = run(&orchestrator);
    match result {
        Err(HarnessError::ProviderContract { provider }) => assert_eq!(provider, "unknown"),
        other => panic!("expected a provider contract fault, got {other:?}"),
    }
    assert_eq!(runs.get(), 0);
    assert!(output.is_empty());
}

#[test]
fn test_duplicate_provider_is_a_fault() {
    let fixtures = TempDir::new().unwrap();
    let runs = Rc::new(Cell::new(0));
    let orchestrator = Orchestrator::new(
        config(&["a", "a"], "true", fixtures.path()),
        registry(&runs),
    );

    let err = orchestrator.run_suite(&mut Vec::new()).unwrap_err();
    assert!(err.is_provider_fault());
    assert_eq!(err.exit_code(), 2);
    assert_eq!(runs.get(), 0);
}

#[test]
fn test_one_outcome_per_case_in_suite_order() {
    colored::control::set_override(false);
    let fixtures = TempDir::new().unwrap();
    let runs = Rc::new(Cell::new(0));
    let orchestrator = Orchestrator::new(
        config(&["b", "mixed", "a"], "true", fixtures.path()),
        registry(&runs),
    );

    let suite = orchestrator.load_suite().unwrap();
    let expected = suite.identities();
    assert_eq!(expected.len(), 6);

    let report = orchestrator.run_suite(&mut Vec::new()).unwrap();
    let identities: Vec<String> = report.outcomes.iter().map(|o| o.identity()).collect();
    assert_eq!(identities, expected);
    assert_eq!(runs.get(), 3);
}

#[test]
fn test_panicking_case_does_not_stop_the_suite() {
    colored::control::set_override(false);
    let fixtures = TempDir::new().unwrap();
    let runs = Rc::new(Cell::new(0));
    let orchestrator = Orchestrator::new(
        config(&["mixed"], "true", fixtures.path()),
        registry(&runs),
    );

    let report = orchestrator.run_suite(&mut Vec::new()).unwrap();
    let statuses: Vec<TestStatus> = report.outcomes.iter().map(|o| o.status).collect();
    assert_eq!(statuses, vec![TestStatus::Passed, TestStatus::Error, TestStatus::Passed]);

    let detail = report.outcomes[1].detail.as_deref().unwrap();
    assert!(detail.contains("index out of bounds"), "{detail}");
}

#[cfg(unix)]
#[test]
fn test_gate_result_is_independent_of_the_suite() {
    let fixtures = TempDir::new().unwrap();
    std::fs::write(fixtures.path().join("case.scad"), "cube(1);").unwrap();
    let runs = Rc::new(Cell::new(0));
    let orchestrator = Orchestrator::new(config(&["a"], "false", fixtures.path()), registry(&runs));

    let (result, output) = run(&orchestrator);
    let report = result.unwrap();

    assert!(report.suite.as_ref().unwrap().success());
    match report.regression.as_ref().unwrap() {
        GateOutcome::Completed(result) => {
            assert!(!result.success());
            assert_eq!(result.exit_code, Some(1));
            assert_eq!(result.fixture_count, 1);
        }
        other => panic!("gate did not complete: {other:?}"),
    }
    assert_eq!(report.failed_stages(), vec![Stage::RegressionGate]);
    assert!(output.contains("Regression gate: failed (exit code 1"));
}

#[test]
fn test_unavailable_tool_is_not_a_tool_failure() {
    let fixtures = TempDir::new().unwrap();
    let runs = Rc::new(Cell::new(0));
    let orchestrator = Orchestrator::new(
        config(&["a"], "/nonexistent/check-regressions", fixtures.path()),
        registry(&runs),
    );

    let (result, output) = run(&orchestrator);
    let report = result.unwrap();

    assert_eq!(report.suite.as_ref().unwrap().passed, 2);
    assert!(matches!(
        report.regression,
        Some(GateOutcome::Unavailable { ref tool, .. }) if tool == "/nonexistent/check-regressions"
    ));
    assert!(!report.success());
    assert!(output.contains("Regression gate: unavailable"));
}
