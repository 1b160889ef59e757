// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Aggregated unit-suite runner and regression gate

pub mod composer;
pub mod config;
pub mod contract;
pub mod error;
pub mod gate;
pub mod loader;
pub mod orchestrator;
pub mod registry;
pub mod reporter;
pub mod runner;
pub mod types;

pub use composer::AggregateSuite;
pub use config::{HarnessConfig, BUILTIN_PROVIDERS};
pub use contract::{
    case_identity, check, check_all_approx, check_approx, check_eq, check_some, CaseFailure,
    CaseResult, TestCaseCollection, UnitCase,
};
pub use error::HarnessError;
pub use gate::RegressionGate;
pub use loader::{LoadedCollection, SuiteLoader, TestProvider};
pub use orchestrator::Orchestrator;
pub use registry::ProviderRegistry;
pub use reporter::HarnessReporter;
pub use runner::SuiteRunner;
pub use types::{
    GateOutcome, HarnessReport, RegressionResult, Stage, SuiteReport, TestOutcome, TestStatus,
};
