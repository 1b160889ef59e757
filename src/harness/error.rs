// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Harness fault taxonomy

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a run aborted by a provider fault
pub const EXIT_PROVIDER_FAULT: i32 = 2;
/// Exit code for a run in which at least one stage failed
pub const EXIT_STAGE_FAILED: i32 = 1;

/// Faults that stop a stage (or the whole run) instead of being recorded as
/// an individual test outcome.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A configured provider has no registered `TestCase` collection
    #[error("provider `{provider}` does not expose a TestCase collection")]
    ProviderContract { provider: String },

    #[error("provider `{provider}` is configured more than once")]
    DuplicateProvider { provider: String },

    /// The regression tool could not be launched at all
    #[error("regression tool {tool:?} could not be started: {source}")]
    RegressionToolUnavailable {
        tool: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

impl HarnessError {
    /// Provider faults abort before anything executes
    pub fn is_provider_fault(&self) -> bool {
        matches!(
            self,
            HarnessError::ProviderContract { .. } | HarnessError::DuplicateProvider { .. }
        )
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_provider_fault() {
            EXIT_PROVIDER_FAULT
        } else {
            EXIT_STAGE_FAILED
        }
    }
}
