// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Suite runner - executes an aggregate suite case by case

use colored::Colorize;
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::time::Instant;
use tracing::warn;

use super::composer::AggregateSuite;
use super::contract::{case_identity, UnitCase};
use super::error::HarnessError;
use super::loader::TestProvider;
use super::types::{SuiteReport, TestOutcome, TestStatus};

const HEAVY_RULE: &str = "======================================================================";
const LIGHT_RULE: &str = "----------------------------------------------------------------------";

thread_local! {
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
    static PANIC_LOCATION: RefCell<Option<String>> = const { RefCell::new(None) };
}

static PANIC_HOOK: Once = Once::new();

/// Wrap the current panic hook so panics raised while a case runs are
/// recorded instead of printed. Other threads keep the previous behaviour.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if CAPTURING.with(Cell::get) {
                let location = info
                    .location()
                    .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()));
                PANIC_LOCATION.with(|slot| *slot.borrow_mut() = location);
            } else {
                previous(info);
            }
        }));
    });
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Run `body`, turning a panic into its diagnostic text
fn catch_fault<T>(body: impl FnOnce() -> T) -> Result<T, String> {
    install_panic_hook();
    CAPTURING.with(|c| c.set(true));
    let result = panic::catch_unwind(AssertUnwindSafe(body));
    CAPTURING.with(|c| c.set(false));

    result.map_err(|payload| {
        let message = panic_message(payload.as_ref());
        match PANIC_LOCATION.with(|slot| slot.borrow_mut().take()) {
            Some(location) => format!("panicked at {location}: {message}"),
            None => format!("panicked: {message}"),
        }
    })
}

/// Execute one case in isolation
pub fn run_case(provider: &TestProvider, case: &UnitCase) -> TestOutcome {
    let start = Instant::now();
    let result = catch_fault(|| case.run());
    let duration = start.elapsed();

    let (status, detail) = match result {
        Ok(Ok(())) => (TestStatus::Passed, None),
        Ok(Err(failure)) => (TestStatus::Failed, Some(failure.to_string())),
        Err(fault) => {
            warn!(provider = %provider.name, case = case.name(), "test case panicked");
            (TestStatus::Error, Some(fault))
        }
    };

    TestOutcome {
        provider: provider.name.clone(),
        name: case.name().to_string(),
        status,
        duration,
        detail,
    }
}

fn colored_word(status: TestStatus) -> String {
    match status {
        TestStatus::Passed => status.word().green().to_string(),
        TestStatus::Failed => status.word().red().bold().to_string(),
        TestStatus::Error => status.word().red().bold().to_string(),
    }
}

/// Sequential suite runner
#[derive(Debug, Clone, Copy)]
pub struct SuiteRunner {
    verbose: bool,
}

impl SuiteRunner {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Run every case once, in suite order, streaming progress to `out`.
    ///
    /// A failing or panicking case is recorded and the run continues.
    pub fn run<W: Write>(
        &self,
        suite: &AggregateSuite,
        out: &mut W,
    ) -> Result<SuiteReport, HarnessError> {
        let start = Instant::now();
        let mut report = SuiteReport::new();

        for (provider, case) in suite.iter() {
            if self.verbose {
                write!(out, "{} ... ", case_identity(&provider.name, case.name()))?;
                out.flush()?;
            }

            let outcome = run_case(provider, case);

            if self.verbose {
                writeln!(out, "{}", colored_word(outcome.status))?;
            } else {
                write!(out, "{}", outcome.status.symbol())?;
                out.flush()?;
            }

            report.add_outcome(outcome);
        }

        if !self.verbose && !suite.is_empty() {
            writeln!(out)?;
        }

        report.duration = start.elapsed();
        Self::write_failures(&report, out)?;
        Self::write_summary(&report, out)?;
        Ok(report)
    }

    fn write_failures<W: Write>(report: &SuiteReport, out: &mut W) -> Result<(), HarnessError> {
        for outcome in report.failures() {
            writeln!(out, "{}", HEAVY_RULE)?;
            writeln!(out, "{}: {}", outcome.status.word().red().bold(), outcome.identity())?;
            writeln!(out, "{}", LIGHT_RULE)?;
            if let Some(ref detail) = outcome.detail {
                writeln!(out, "{}", detail)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_summary<W: Write>(report: &SuiteReport, out: &mut W) -> Result<(), HarnessError> {
        writeln!(out, "{}", LIGHT_RULE)?;
        writeln!(
            out,
            "Ran {} test{} in {:.3}s",
            report.total,
            if report.total == 1 { "" } else { "s" },
            report.duration.as_secs_f64()
        )?;
        writeln!(out)?;

        if report.success() {
            writeln!(out, "{}", "OK".green().bold())?;
        } else {
            let mut parts = Vec::new();
            if report.failed > 0 {
                parts.push(format!("failures={}", report.failed));
            }
            if report.errors > 0 {
                parts.push(format!("errors={}", report.errors));
            }
            writeln!(out, "{} ({})", "FAILED".red().bold(), parts.join(", "))?;
        }
        Ok(())
    }
}
