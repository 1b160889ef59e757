// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Harness configuration
//!
//! The defaults are the fixed constants of the orchestration. A TOML file is
//! only read when a caller asks for it explicitly.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Built-in providers in run order
pub const BUILTIN_PROVIDERS: [&str; 8] = [
    "vec2",
    "vec3",
    "vec4",
    "mat3",
    "mat4",
    "quat",
    "point_cloud",
    "vec",
];

/// Fixture directory handed to the regression tool
pub const DEFAULT_FIXTURE_DIR: &str = "regressions";

/// Regression tool, resolved through `PATH` unless given as a path
pub const DEFAULT_REGRESSION_TOOL: &str = "check-regressions";

/// Harness configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Provider identifiers, in run order
    pub providers: Vec<String>,
    /// Fixture directory passed to the regression tool
    pub fixture_dir: PathBuf,
    /// Regression tool executable
    pub regression_tool: PathBuf,
    /// One progress line per test instead of one character
    pub verbose: bool,
    /// Directory for JSON/Markdown reports; nothing is written when unset
    pub output_dir: Option<PathBuf>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            providers: BUILTIN_PROVIDERS.iter().map(|p| p.to_string()).collect(),
            fixture_dir: PathBuf::from(DEFAULT_FIXTURE_DIR),
            regression_tool: PathBuf::from(DEFAULT_REGRESSION_TOOL),
            verbose: true,
            output_dir: None,
        }
    }
}

impl HarnessConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: HarnessConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }
}
