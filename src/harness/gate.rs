// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Regression gate - runs the external regression checker over the fixtures

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::Instant;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::config::HarnessConfig;
use super::error::HarnessError;
use super::types::RegressionResult;

/// Launches the regression tool with the fixture directory as its only
/// argument and reports how it exited. The tool's output is passed through
/// untouched and never interpreted.
#[derive(Debug, Clone)]
pub struct RegressionGate {
    tool: PathBuf,
    fixture_dir: PathBuf,
}

impl RegressionGate {
    pub fn new(tool: impl Into<PathBuf>, fixture_dir: impl Into<PathBuf>) -> Self {
        Self {
            tool: tool.into(),
            fixture_dir: fixture_dir.into(),
        }
    }

    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::new(&config.regression_tool, &config.fixture_dir)
    }

    pub fn tool(&self) -> &Path {
        &self.tool
    }

    pub fn fixture_dir(&self) -> &Path {
        &self.fixture_dir
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.tool);
        command.arg(&self.fixture_dir).stdin(Stdio::null());
        command
    }

    /// Run the tool to completion.
    ///
    /// `Ok` carries the completion status whatever it is; `Err` means the
    /// tool could not be started.
    pub fn check(&self) -> Result<RegressionResult, HarnessError> {
        let fixture_count = count_fixtures(&self.fixture_dir);
        debug!(
            tool = %self.tool.display(),
            fixture_dir = %self.fixture_dir.display(),
            fixture_count,
            "launching regression tool"
        );

        let start = Instant::now();
        // `status` spawns, waits and reaps the child before returning
        let status = self.command().status().map_err(|source| {
            warn!(tool = %self.tool.display(), error = %source, "regression tool unavailable");
            HarnessError::RegressionToolUnavailable {
                tool: self.tool.clone(),
                source,
            }
        })?;

        let result = RegressionResult {
            tool: self.tool.display().to_string(),
            fixture_dir: self.fixture_dir.clone(),
            fixture_count,
            exit_code: status.code(),
            signal: exit_signal(&status),
            duration: start.elapsed(),
        };
        debug!(exit = %result.describe_exit(), "regression tool finished");
        Ok(result)
    }
}

/// Files under the fixture directory; a missing directory counts as empty
fn count_fixtures(dir: &Path) -> usize {
    if !dir.is_dir() {
        return 0;
    }

    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}

#[cfg(unix)]
fn exit_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: &ExitStatus) -> Option<i32> {
    None
}
