// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Combined harness report generator

use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::io::Write;
use std::path::Path;

use super::error::HarnessError;
use super::types::{GateOutcome, HarnessReport, SuiteReport};

/// Harness reporter
pub struct HarnessReporter;

impl HarnessReporter {
    /// Write JSON report
    pub fn write_json(report: &HarnessReport, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Write Markdown report
    pub fn write_markdown(report: &HarnessReport, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, Self::render_markdown(report))?;
        Ok(())
    }

    pub fn render_markdown(report: &HarnessReport) -> String {
        let mut md = String::new();

        md.push_str("# Fermat Test Harness Report\n\n");
        md.push_str(&format!("**Generated:** {}\n\n", report.timestamp));
        md.push_str(&format!(
            "**Overall:** {}\n\n",
            if report.success() { "PASSED" } else { "FAILED" }
        ));
        md.push_str("---\n\n");

        if let Some(ref suite) = report.suite {
            md.push_str("## Unit Suite\n\n");
            md.push_str(&format!("- **Total:** {}\n", suite.total));
            md.push_str(&format!("- **Passed:** {} ({:.1}%)\n", suite.passed, suite.pass_rate()));
            md.push_str(&format!("- **Failed:** {}\n", suite.failed));
            md.push_str(&format!("- **Errors:** {}\n", suite.errors));
            md.push_str(&format!("- **Duration:** {:.3}s\n\n", suite.duration.as_secs_f64()));

            if !suite.success() {
                md.push_str("### Failed Tests\n\n");
                for outcome in suite.failures() {
                    md.push_str(&format!("- `{}` ({:?})\n", outcome.identity(), outcome.status));
                    if let Some(ref detail) = outcome.detail {
                        md.push_str(&format!("  - {}\n", detail));
                    }
                }
                md.push('\n');
            }
            md.push_str("---\n\n");
        }

        if let Some(ref gate) = report.regression {
            md.push_str("## Regression Gate\n\n");
            match gate {
                GateOutcome::Completed(result) => {
                    md.push_str(&format!("- **Tool:** `{}`\n", result.tool));
                    md.push_str(&format!(
                        "- **Fixtures:** `{}` ({} files)\n",
                        result.fixture_dir.display(),
                        result.fixture_count
                    ));
                    md.push_str(&format!(
                        "- **Result:** {} ({})\n",
                        if result.success() { "passed" } else { "failed" },
                        result.describe_exit()
                    ));
                    md.push_str(&format!(
                        "- **Duration:** {:.3}s\n\n",
                        result.duration.as_secs_f64()
                    ));
                }
                GateOutcome::Unavailable { tool, reason } => {
                    md.push_str(&format!("- **Tool:** `{}`\n", tool));
                    md.push_str(&format!("- **Result:** unavailable ({})\n\n", reason));
                }
            }
            md.push_str("---\n\n");
        }

        md
    }

    /// Write the combined terminal summary
    pub fn write_summary<W: Write>(
        report: &HarnessReport,
        out: &mut W,
    ) -> Result<(), HarnessError> {
        writeln!(out, "\n{}", "═".repeat(70).white())?;
        writeln!(out, "{}", "Harness Report".bold())?;
        writeln!(out, "{}", "═".repeat(70).white())?;

        if let Some(ref suite) = report.suite {
            Self::write_suite_line(suite, out)?;
        }
        if let Some(ref gate) = report.regression {
            Self::write_gate_line(gate, out)?;
        }

        let failed = report.failed_stages();
        if report.success() {
            writeln!(out, "  {} {}", "Overall:".white(), "PASSED".green().bold())?;
        } else if failed.is_empty() {
            writeln!(out, "  {} {} (no stage ran)", "Overall:".white(), "FAILED".red().bold())?;
        } else {
            let names: Vec<&str> = failed.iter().map(|s| s.as_str()).collect();
            writeln!(
                out,
                "  {} {} ({} failed)",
                "Overall:".white(),
                "FAILED".red().bold(),
                names.join(", ")
            )?;
        }
        writeln!(out, "{}", "═".repeat(70).white())?;
        Ok(())
    }

    fn write_suite_line<W: Write>(suite: &SuiteReport, out: &mut W) -> Result<(), HarnessError> {
        let icon = if suite.success() { "✓".green() } else { "✗".red() };
        writeln!(
            out,
            "  {} {}: {} run, {} passed, {} failed, {} errors ({:.3}s)",
            icon,
            "Unit suite".cyan(),
            suite.total,
            suite.passed.to_string().green(),
            if suite.failed > 0 {
                suite.failed.to_string().red()
            } else {
                suite.failed.to_string().white()
            },
            if suite.errors > 0 {
                suite.errors.to_string().red()
            } else {
                suite.errors.to_string().white()
            },
            suite.duration.as_secs_f64()
        )?;

        for outcome in suite.failures() {
            writeln!(out, "      {} {}", "-".red(), outcome.identity())?;
        }
        Ok(())
    }

    fn write_gate_line<W: Write>(gate: &GateOutcome, out: &mut W) -> Result<(), HarnessError> {
        match gate {
            GateOutcome::Completed(result) => {
                let (icon, verdict) = if result.success() {
                    ("✓".green(), "passed".green())
                } else {
                    ("✗".red(), "failed".red())
                };
                writeln!(
                    out,
                    "  {} {}: {} ({}, {} fixtures in {})",
                    icon,
                    "Regression gate".cyan(),
                    verdict,
                    result.describe_exit(),
                    result.fixture_count,
                    result.fixture_dir.display()
                )?;
            }
            GateOutcome::Unavailable { tool, reason } => {
                writeln!(
                    out,
                    "  {} {}: {} (could not start {}: {})",
                    "✗".red(),
                    "Regression gate".cyan(),
                    "unavailable".yellow().bold(),
                    tool,
                    reason
                )?;
            }
        }
        Ok(())
    }
}
