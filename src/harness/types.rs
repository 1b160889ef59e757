// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Harness result types

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use super::contract::case_identity;

// Custom serialization for Duration
fn serialize_duration<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64())
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = f64::deserialize(deserializer)?;
    Ok(Duration::from_secs_f64(secs))
}

/// Pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    UnitSuite,
    RegressionGate,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::UnitSuite => "unit suite",
            Stage::RegressionGate => "regression gate",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Test result status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestStatus {
    Passed,
    /// An assertion did not hold
    Failed,
    /// The case panicked
    Error,
}

impl TestStatus {
    /// Word used on verbose progress lines
    pub fn word(&self) -> &'static str {
        match self {
            TestStatus::Passed => "ok",
            TestStatus::Failed => "FAIL",
            TestStatus::Error => "ERROR",
        }
    }

    /// Character used on compact progress lines
    pub fn symbol(&self) -> char {
        match self {
            TestStatus::Passed => '.',
            TestStatus::Failed => 'F',
            TestStatus::Error => 'E',
        }
    }
}

/// Outcome of one executed test case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestOutcome {
    pub provider: String,
    pub name: String,
    pub status: TestStatus,
    #[serde(serialize_with = "serialize_duration", deserialize_with = "deserialize_duration")]
    pub duration: Duration,
    /// Assertion detail or panic information for non-passing cases
    pub detail: Option<String>,
}

impl TestOutcome {
    pub fn identity(&self) -> String {
        case_identity(&self.provider, &self.name)
    }

    pub fn passed(&self) -> bool {
        self.status == TestStatus::Passed
    }
}

/// Result of the unit-suite stage
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuiteReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    #[serde(serialize_with = "serialize_duration", deserialize_with = "deserialize_duration")]
    pub duration: Duration,
    pub outcomes: Vec<TestOutcome>,
}

impl SuiteReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_outcome(&mut self, outcome: TestOutcome) {
        self.total += 1;
        match outcome.status {
            TestStatus::Passed => self.passed += 1,
            TestStatus::Failed => self.failed += 1,
            TestStatus::Error => self.errors += 1,
        }
        self.outcomes.push(outcome);
    }

    /// Every outcome passed
    pub fn success(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &TestOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    pub fn pass_rate(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f32 / self.total as f32) * 100.0
        }
    }
}

/// Completion status of the external regression tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionResult {
    pub tool: String,
    pub fixture_dir: PathBuf,
    /// Files found under the fixture directory at launch time
    pub fixture_count: usize,
    /// `None` when the tool was terminated by a signal
    pub exit_code: Option<i32>,
    pub signal: Option<i32>,
    #[serde(serialize_with = "serialize_duration", deserialize_with = "deserialize_duration")]
    pub duration: Duration,
}

impl RegressionResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Human-readable exit signal
    pub fn describe_exit(&self) -> String {
        match (self.exit_code, self.signal) {
            (Some(code), _) => format!("exit code {code}"),
            (None, Some(signal)) => format!("terminated by signal {signal}"),
            (None, None) => "terminated without exit code".to_string(),
        }
    }
}

/// What the regression gate produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GateOutcome {
    /// The tool ran to completion (successfully or not)
    Completed(RegressionResult),
    /// The tool could not be launched
    Unavailable { tool: String, reason: String },
}

impl GateOutcome {
    pub fn success(&self) -> bool {
        match self {
            GateOutcome::Completed(result) => result.success(),
            GateOutcome::Unavailable { .. } => false,
        }
    }
}

/// Combined report of one harness invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessReport {
    pub timestamp: String,
    /// `None` when the stage was not part of this invocation
    pub suite: Option<SuiteReport>,
    pub regression: Option<GateOutcome>,
}

impl HarnessReport {
    pub fn new(suite: Option<SuiteReport>, regression: Option<GateOutcome>) -> Self {
        Self {
            timestamp: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            suite,
            regression,
        }
    }

    /// Stages that ran and did not succeed, in pipeline order
    pub fn failed_stages(&self) -> Vec<Stage> {
        let mut stages = Vec::new();
        if self.suite.as_ref().is_some_and(|s| !s.success()) {
            stages.push(Stage::UnitSuite);
        }
        if self.regression.as_ref().is_some_and(|g| !g.success()) {
            stages.push(Stage::RegressionGate);
        }
        stages
    }

    /// Every stage that ran succeeded, and at least one ran
    pub fn success(&self) -> bool {
        (self.suite.is_some() || self.regression.is_some()) && self.failed_stages().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(status: TestStatus) -> TestOutcome {
        TestOutcome {
            provider: "vec2".to_string(),
            name: "test_case".to_string(),
            status,
            duration: Duration::from_millis(1),
            detail: None,
        }
    }

    fn regression(exit_code: Option<i32>) -> RegressionResult {
        RegressionResult {
            tool: "check-regressions".to_string(),
            fixture_dir: PathBuf::from("regressions"),
            fixture_count: 0,
            exit_code,
            signal: None,
            duration: Duration::ZERO,
        }
    }

    #[test]
    fn test_suite_counts() {
        let mut report = SuiteReport::new();
        report.add_outcome(outcome(TestStatus::Passed));
        report.add_outcome(outcome(TestStatus::Failed));
        report.add_outcome(outcome(TestStatus::Error));

        assert_eq!((report.total, report.passed, report.failed, report.errors), (3, 1, 1, 1));
        assert!(!report.success());
        assert_eq!(report.failures().count(), 2);
    }

    #[test]
    fn test_combined_success_requires_both_stages() {
        let mut passing = SuiteReport::new();
        passing.add_outcome(outcome(TestStatus::Passed));

        let ok = HarnessReport::new(
            Some(passing.clone()),
            Some(GateOutcome::Completed(regression(Some(0)))),
        );
        assert!(ok.success());

        let gate_failed = HarnessReport::new(
            Some(passing.clone()),
            Some(GateOutcome::Completed(regression(Some(1)))),
        );
        assert_eq!(gate_failed.failed_stages(), vec![Stage::RegressionGate]);

        let unavailable = HarnessReport::new(
            Some(passing),
            Some(GateOutcome::Unavailable {
                tool: "missing".to_string(),
                reason: "not found".to_string(),
            }),
        );
        assert!(!unavailable.success());

        assert!(!HarnessReport::new(None, None).success());
    }

    #[test]
    fn test_describe_exit() {
        assert_eq!(regression(Some(3)).describe_exit(), "exit code 3");
        let mut killed = regression(None);
        killed.signal = Some(9);
        assert_eq!(killed.describe_exit(), "terminated by signal 9");
        assert!(!killed.success());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = HarnessReport::new(Some(SuiteReport::new()), None);
        let json = serde_json::to_string(&report).unwrap();
        let back: HarnessReport = serde_json::from_str(&json).unwrap();
        assert!(back.suite.is_some());
        assert!(back.regression.is_none());
    }
}
