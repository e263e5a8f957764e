//! PepStats Tables - Main entry point

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use pepstats_common::logging::init_logging;
use pepstats_tables::run::{self, RunSummary};
use pepstats_tables::Cli;
use std::process;
use tracing::error;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn execute(cli: Cli) -> anyhow::Result<()> {
    let verbose = cli.verbose;
    let config = cli.into_config().context("Invalid arguments")?;

    let prepared = run::prepare(config).context("Failed to prepare run directory")?;

    // Environment variables take precedence over the flags
    let log_config = prepared.log_config(verbose).merge_env()?;
    let _guard = init_logging(&log_config)?;

    let summary = match prepared.execute() {
        Ok(summary) => summary,
        Err(e) => {
            // Logged while the guard is alive so it reaches the run log
            error!(error = %e, "Run failed");
            return Err(e).context("PepStats Tables run failed");
        },
    };
    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    let artifacts = &summary.artifacts;
    println!(
        "{} Tabulated {} protein(s) in {:.2}s",
        "✓".green().bold(),
        summary.proteins,
        summary.elapsed.as_secs_f64()
    );
    if summary.wrote_report {
        println!("  {}", artifacts.report.display());
    }
    println!("  {}", artifacts.row_table.display());
    println!("  {}", artifacts.column_table.display());
    if summary.kept_flattened {
        println!("  {}", artifacts.flattened.display());
    }
    println!("  {}", artifacts.log_file().display().to_string().dimmed());
}
