// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Orchestrator - sequences the unit suite and the regression gate

use colored::Colorize;
use std::error::Error as _;
use std::io::Write;
use tracing::info;

use super::composer::AggregateSuite;
use super::config::HarnessConfig;
use super::error::HarnessError;
use super::gate::RegressionGate;
use super::loader::SuiteLoader;
use super::registry::ProviderRegistry;
use super::reporter::HarnessReporter;
use super::runner::SuiteRunner;
use super::types::{GateOutcome, HarnessReport, SuiteReport};

/// Runs the two-stage pipeline and owns the overall verdict
pub struct Orchestrator {
    config: HarnessConfig,
    registry: ProviderRegistry,
}

impl Orchestrator {
    pub fn new(config: HarnessConfig, registry: ProviderRegistry) -> Self {
        Self { config, registry }
    }

    /// Orchestrator over the built-in providers
    pub fn builtin(config: HarnessConfig) -> Self {
        Self::new(config, ProviderRegistry::builtin())
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Resolve and compose the configured providers without running anything
    pub fn load_suite(&self) -> Result<AggregateSuite, HarnessError> {
        let collections = SuiteLoader::new(&self.registry).load(&self.config.providers)?;
        Ok(AggregateSuite::compose(collections))
    }

    /// Full pipeline: unit suite, then regression gate, then the combined
    /// report.
    ///
    /// Provider faults abort before either stage runs. A failing suite does
    /// not stop the gate, and an unavailable tool is reported next to the
    /// suite results instead of hiding them.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<HarnessReport, HarnessError> {
        let suite = self.load_suite()?;
        let suite_report = self.execute_suite(&suite, out)?;
        let gate_outcome = self.run_gate(out)?;

        let report = HarnessReport::new(Some(suite_report), Some(gate_outcome));
        HarnessReporter::write_summary(&report, out)?;
        Ok(report)
    }

    /// Unit suite only
    pub fn run_suite<W: Write>(&self, out: &mut W) -> Result<SuiteReport, HarnessError> {
        let suite = self.load_suite()?;
        self.execute_suite(&suite, out)
    }

    /// Regression gate only
    pub fn run_gate<W: Write>(&self, out: &mut W) -> Result<GateOutcome, HarnessError> {
        let gate = RegressionGate::from_config(&self.config);

        writeln!(out)?;
        writeln!(
            out,
            "{} {} {}",
            "Regression gate:".bold().cyan(),
            gate.tool().display(),
            gate.fixture_dir().display()
        )?;
        out.flush()?;

        let outcome = match gate.check() {
            Ok(result) => {
                info!(success = result.success(), "regression gate completed");
                GateOutcome::Completed(result)
            }
            // the launch error is the only fault `check` reports
            Err(err) => GateOutcome::Unavailable {
                tool: gate.tool().display().to_string(),
                reason: err
                    .source()
                    .map_or_else(|| err.to_string(), |source| source.to_string()),
            },
        };
        Ok(outcome)
    }

    fn execute_suite<W: Write>(
        &self,
        suite: &AggregateSuite,
        out: &mut W,
    ) -> Result<SuiteReport, HarnessError> {
        writeln!(
            out,
            "{} {} tests from {} providers",
            "Unit suite:".bold().cyan(),
            suite.len(),
            suite.collections().len()
        )?;
        writeln!(out)?;

        let report = SuiteRunner::new(self.config.verbose).run(suite, out)?;
        info!(
            total = report.total,
            passed = report.passed,
            failed = report.failed,
            errors = report.errors,
            "unit suite completed"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::contract::{CaseFailure, TestCaseCollection, UnitCase};
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counting {
        runs: Rc<Cell<usize>>,
        fail: bool,
    }

    impl TestCaseCollection for Counting {
        fn cases(&self) -> Vec<UnitCase> {
            let runs = Rc::clone(&self.runs);
            let fail = self.fail;
            vec![UnitCase::new("test_counted", move || {
                runs.set(runs.get() + 1);
                if fail {
                    Err(CaseFailure::new("forced"))
                } else {
                    Ok(())
                }
            })]
        }
    }

    fn orchestrator(providers: &[&str], tool: &str, runs: &Rc<Cell<usize>>) -> Orchestrator {
        let mut registry = ProviderRegistry::new();
        for (name, fail) in [("good", false), ("bad", true)] {
            let runs = Rc::clone(runs);
            registry.register(name, move || {
                Box::new(Counting {
                    runs: Rc::clone(&runs),
                    fail,
                })
            });
        }

        let config = HarnessConfig {
            providers: providers.iter().map(|p| p.to_string()).collect(),
            regression_tool: tool.into(),
            fixture_dir: std::env::temp_dir(),
            ..HarnessConfig::default()
        };
        Orchestrator::new(config, registry)
    }

    #[test]
    fn test_provider_fault_runs_nothing() {
        colored::control::set_override(false);
        let runs = Rc::new(Cell::new(0));
        let orchestrator = orchestrator(&["good", "ghost"], "/nonexistent/tool", &runs);

        let mut out = Vec::new();
        let err = orchestrator.run(&mut out).unwrap_err();

        assert!(matches!(err, HarnessError::ProviderContract { .. }));
        assert_eq!(runs.get(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_unavailable_tool_keeps_suite_results() {
        colored::control::set_override(false);
        let runs = Rc::new(Cell::new(0));
        let orchestrator = orchestrator(&["good", "bad"], "/nonexistent/tool", &runs);

        let mut out = Vec::new();
        let report = orchestrator.run(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert_eq!(runs.get(), 2);
        let suite = report.suite.as_ref().unwrap();
        assert_eq!((suite.total, suite.failed), (2, 1));
        match report.regression {
            Some(GateOutcome::Unavailable { ref tool, ref reason }) => {
                assert_eq!(tool, "/nonexistent/tool");
                assert!(!reason.is_empty());
                assert!(!reason.contains("could not be started"), "{reason}");
            }
            ref other => panic!("expected an unavailable gate, got {other:?}"),
        }
        assert!(!report.success());
        assert!(output.contains("unavailable"));
    }

    #[cfg(unix)]
    #[test]
    fn test_gate_runs_after_failing_suite() {
        colored::control::set_override(false);
        let runs = Rc::new(Cell::new(0));
        let orchestrator = orchestrator(&["bad"], "true", &runs);

        let mut out = Vec::new();
        let report = orchestrator.run(&mut out).unwrap();

        let gate = report.regression.as_ref().unwrap();
        assert!(gate.success());
        assert_eq!(report.failed_stages(), vec![crate::harness::types::Stage::UnitSuite]);
        assert!(!report.success());
    }
}
