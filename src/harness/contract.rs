// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! The contract every test provider implements
//!
//! A provider module exposes a type named `TestCase` implementing
//! [`TestCaseCollection`]. Each [`UnitCase`] it yields is self-contained:
//! returning a [`CaseFailure`] marks the case failed, panicking marks it as
//! an error. Neither stops the rest of the suite.

use crate::geometry::Real;
use crate::utils::math::{approx_eq, EPS};
use std::fmt;
use std::panic::Location;
use thiserror::Error;

/// Result of running one case body
pub type CaseResult = Result<(), CaseFailure>;

/// Assertion failure raised by a case body
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{location}: {message}")]
pub struct CaseFailure {
    pub message: String,
    /// `file:line` of the failing check
    pub location: String,
}

impl CaseFailure {
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let caller = Location::caller();
        Self {
            message: message.into(),
            location: format!("{}:{}", caller.file(), caller.line()),
        }
    }
}

/// A single named test case
pub struct UnitCase {
    name: String,
    body: Box<dyn Fn() -> CaseResult>,
}

impl UnitCase {
    pub fn new(name: impl Into<String>, body: impl Fn() -> CaseResult + 'static) -> Self {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Execute the case body once
    pub fn run(&self) -> CaseResult {
        (self.body)()
    }
}

impl fmt::Debug for UnitCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitCase").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Discoverable collection of test cases exposed by a provider
pub trait TestCaseCollection {
    /// Cases in the order the provider wants them run
    fn cases(&self) -> Vec<UnitCase>;
}

/// Identity used in progress lines and reports
pub fn case_identity(provider: &str, case: &str) -> String {
    format!("{case} ({provider}.TestCase)")
}

#[track_caller]
pub fn check(condition: bool, message: impl Into<String>) -> CaseResult {
    if condition {
        Ok(())
    } else {
        Err(CaseFailure::new(message))
    }
}

#[track_caller]
pub fn check_eq<T: PartialEq + fmt::Debug>(left: T, right: T) -> CaseResult {
    if left == right {
        Ok(())
    } else {
        Err(CaseFailure::new(format!("{left:?} != {right:?}")))
    }
}

/// Scalars equal within [`EPS`]
#[track_caller]
pub fn check_approx(left: Real, right: Real) -> CaseResult {
    if approx_eq(left, right, EPS) {
        Ok(())
    } else {
        Err(CaseFailure::new(format!("{left} != {right} (eps {EPS:e})")))
    }
}

/// Component-wise approximate equality, usually fed with `as_slice()` of a
/// vector or matrix
#[track_caller]
pub fn check_all_approx(left: &[Real], right: &[Real]) -> CaseResult {
    if left.len() != right.len() {
        return Err(CaseFailure::new(format!(
            "dimension mismatch: {} != {}",
            left.len(),
            right.len()
        )));
    }

    match left
        .iter()
        .zip(right)
        .position(|(a, b)| !approx_eq(*a, *b, EPS))
    {
        None => Ok(()),
        Some(idx) => Err(CaseFailure::new(format!(
            "{left:?} != {right:?} (component {idx}: {} vs {})",
            left[idx], right[idx]
        ))),
    }
}

/// Unwrap an `Option` inside a case body
#[track_caller]
pub fn check_some<T>(value: Option<T>, what: &str) -> Result<T, CaseFailure> {
    value.ok_or_else(|| CaseFailure::new(format!("expected {what}, got None")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_records_caller_location() {
        let err = check(false, "boom").unwrap_err();
        assert_eq!(err.message, "boom");
        assert!(err.location.starts_with(file!()), "{}", err.location);
        assert!(err.to_string().ends_with(": boom"));
    }

    #[test]
    fn test_checks() {
        assert!(check_eq(1, 1).is_ok());
        assert!(check_eq("a", "b").is_err());
        assert!(check_approx(0.1 + 0.2, 0.3).is_ok());
        assert!(check_approx(1.0, 1.1).is_err());
        assert!(check_all_approx(&[1.0, 2.0], &[1.0, 2.0]).is_ok());
        assert!(check_all_approx(&[1.0, 2.0], &[1.0]).is_err());

        let err = check_all_approx(&[1.0, 2.0], &[1.0, 2.5]).unwrap_err();
        assert!(err.message.contains("component 1"));
        assert_eq!(check_some(Some(3), "value").unwrap(), 3);
        assert!(check_some::<i32>(None, "value").is_err());
    }

    #[test]
    fn test_unit_case_runs_body() {
        let case = UnitCase::new("test_ok", || Ok(()));
        assert_eq!(case.name(), "test_ok");
        assert!(case.run().is_ok());
        assert_eq!(case_identity("vec3", "test_ok"), "test_ok (vec3.TestCase)");
    }
}
