// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Fermat test harness CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use fermat::harness::error::EXIT_STAGE_FAILED;
use fermat::harness::{
    case_identity, HarnessConfig, HarnessError, HarnessReport, HarnessReporter, Orchestrator,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fermat-test")]
#[command(about = "Run the aggregated unit suite and the regression gate", long_about = None)]
struct Cli {
    /// One character per test instead of one line
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Explicit TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Regression tool executable
    #[arg(long, global = true)]
    regression_tool: Option<PathBuf>,

    /// Fixture directory handed to the regression tool
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    /// Also write JSON and Markdown reports to this directory
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Unit suite, then regression gate (default)
    Run,
    /// Unit suite only
    Suite,
    /// Regression gate only
    Regressions,
    /// List providers and their tests without running anything
    List,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            let code = err
                .downcast_ref::<HarnessError>()
                .map(HarnessError::exit_code)
                .unwrap_or(EXIT_STAGE_FAILED);
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::from(code as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config = load_config(cli)?;
    info!(providers = config.providers.len(), "configuration loaded");

    let orchestrator = Orchestrator::builtin(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => orchestrator.run(&mut out)?,
        Commands::Suite => {
            let suite = orchestrator.run_suite(&mut out)?;
            let report = HarnessReport::new(Some(suite), None);
            HarnessReporter::write_summary(&report, &mut out)?;
            report
        }
        Commands::Regressions => {
            let gate = orchestrator.run_gate(&mut out)?;
            let report = HarnessReport::new(None, Some(gate));
            HarnessReporter::write_summary(&report, &mut out)?;
            report
        }
        Commands::List => {
            list_providers(&orchestrator, &mut out)?;
            return Ok(ExitCode::SUCCESS);
        }
    };
    out.flush()?;

    if let Some(ref dir) = orchestrator.config().output_dir {
        write_reports(&report, dir)?;
    }

    Ok(if report.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_STAGE_FAILED as u8)
    })
}

fn load_config(cli: &Cli) -> Result<HarnessConfig> {
    let mut config = match cli.config {
        Some(ref path) => HarnessConfig::from_file(path)?,
        None => HarnessConfig::default(),
    };

    if cli.quiet {
        config.verbose = false;
    }
    if let Some(ref tool) = cli.regression_tool {
        config.regression_tool = tool.clone();
    }
    if let Some(ref fixtures) = cli.fixtures {
        config.fixture_dir = fixtures.clone();
    }
    if let Some(ref output) = cli.output {
        config.output_dir = Some(output.clone());
    }
    Ok(config)
}

fn list_providers<W: Write>(orchestrator: &Orchestrator, out: &mut W) -> Result<()> {
    let suite = orchestrator.load_suite()?;
    for collection in suite.collections() {
        writeln!(
            out,
            "{} ({} tests)",
            collection.provider.name.bold().cyan(),
            collection.cases.len()
        )?;
        for case in &collection.cases {
            writeln!(out, "  {}", case_identity(&collection.provider.name, case.name()))?;
        }
    }
    writeln!(out, "\n{} tests from {} providers", suite.len(), suite.collections().len())?;
    Ok(())
}

fn write_reports(report: &HarnessReport, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let json_path = dir.join("harness_report.json");
    HarnessReporter::write_json(report, &json_path)?;
    let md_path = dir.join("harness_report.md");
    HarnessReporter::write_markdown(report, &md_path)?;

    println!("\n{}", "Reports written:".bold());
    println!("  JSON:     {}", json_path.display());
    println!("  Markdown: {}", md_path.display());
    Ok(())
}
