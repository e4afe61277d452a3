// ABOUTME: Workout report CLI printing one summary line per sensor package
// ABOUTME: Loads packages from a JSON file or the built-in samples and reports each in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Report the built-in sample packages
//! workout-report
//!
//! # Report packages from a file as JSON lines
//! workout-report --input packages.json --format json
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use workout_report::config::ReportConfig;
use workout_report::dispatcher::{default_packages, load_packages, process_batch};
use workout_report::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "workout-report",
    version,
    about = "Summarize workout sensor packages",
    long_about = "Computes distance, mean speed, and calories for running, walking, and swimming packages and prints one report line per package."
)]
struct Cli {
    /// JSON file with an array of {"workout_type": ..., "data": [...]} packages
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Output format (overrides WORKOUT_OUTPUT_FORMAT)
    #[arg(long, short = 'f', value_enum)]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ReportConfig::from_env()?.with_overrides(cli.format, cli.verbose);
    config.logging.init()?;

    let packages = match cli.input.as_deref() {
        Some(path) => load_packages(path)?,
        None => default_packages(),
    };

    let outcomes = process_batch(&packages);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for outcome in &outcomes {
        let line = outcome.render(config.output_format)?;
        writeln!(out, "{line}").context("Failed to write report line")?;
    }

    let failed = outcomes.iter().filter(|o| !o.is_success()).count();
    info!(
        batch.total = outcomes.len(),
        batch.failed = failed,
        output.format = %config.output_format,
        "Workout batch processed"
    );
    Ok(())
}
