//! Run orchestration
//!
//! A run goes through two phases so that logging can be installed between
//! them: [`prepare`] creates (or empties) the run directory that holds the
//! log file, then [`PreparedRun::execute`] produces the report, builds both
//! tables and writes every artifact. A flattened stream input skips the
//! report and is tabulated under the partial block policy.

use chrono::{DateTime, Local};
use pepstats_common::logging::{LogConfig, LogLevel, LogOutput};
use pepstats_common::{PepStatsError, Result};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

use crate::config::{RunArtifacts, RunConfig, RunInput};
use crate::emboss::PepStats;
use crate::pipeline::TablePipeline;
use crate::progress;
use crate::table::Tables;
use crate::workspace::{prepare_run_dir, ScratchDir};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub artifacts: RunArtifacts,
    pub proteins: usize,
    pub elapsed: Duration,
    pub wrote_report: bool,
    pub kept_flattened: bool,
}

/// A run whose directory exists and is empty
#[derive(Debug)]
pub struct PreparedRun {
    config: RunConfig,
    artifacts: RunArtifacts,
}

/// Validate the configuration and set up the run directory
pub fn prepare(config: RunConfig) -> Result<PreparedRun> {
    config.validate()?;
    let artifacts = config.artifacts()?;
    prepare_run_dir(&artifacts.dir)?;
    Ok(PreparedRun { config, artifacts })
}

impl PreparedRun {
    pub fn artifacts(&self) -> &RunArtifacts {
        &self.artifacts
    }

    /// Logging into `<prefix>.log`; console output only when verbose
    pub fn log_config(&self, verbose: bool) -> LogConfig {
        let (level, output) = if verbose {
            (LogLevel::Debug, LogOutput::Both)
        } else {
            (LogLevel::Info, LogOutput::File)
        };

        LogConfig::builder()
            .level(level)
            .output(output)
            .log_dir(self.artifacts.dir.clone())
            .log_file_name(self.artifacts.log_file_name.clone())
            .build()
    }

    /// Produce the report, build both tables and save every artifact
    #[instrument(skip_all, fields(run = %self.config.run_name))]
    pub fn execute(self) -> Result<RunSummary> {
        let timer = Instant::now();
        let started: DateTime<Local> = Local::now();
        let config = &self.config;
        let artifacts = &self.artifacts;

        info!(start = %started.format(TIMESTAMP_FORMAT), "PepStats Tables run started");
        info!(os = std::env::consts::OS, arch = std::env::consts::ARCH, "Host");
        info!(
            input = %config.input.path().display(),
            kind = config.input.kind(),
            run_name = %config.run_name,
            partial_blocks = %config.policy,
            "Run configuration"
        );

        let pipeline = TablePipeline::pepstats(config.policy)?;
        let (tables, wrote_report, kept_flattened) = match &config.input {
            RunInput::Flattened(flattened) => {
                let tables = self.tabulate_flattened(&pipeline, flattened)?;
                (tables, false, true)
            },
            RunInput::Proteome(_) | RunInput::Report(_) => {
                let tables = self.tabulate_report(&pipeline)?;
                (tables, true, config.keep_flattened)
            },
        };

        tables.row.save(&artifacts.row_table)?;
        tables.column.save(&artifacts.column_table)?;
        info!(
            row_table = %artifacts.row_table.display(),
            column_table = %artifacts.column_table.display(),
            "Tables written"
        );

        let elapsed = timer.elapsed();
        info!(
            finish = %Local::now().format(TIMESTAMP_FORMAT),
            runtime = %progress::format_runtime(elapsed),
            "PepStats Tables run finished"
        );

        Ok(RunSummary {
            proteins: tables.protein_count(),
            artifacts: self.artifacts,
            elapsed,
            wrote_report,
            kept_flattened,
        })
    }

    /// Produce the report in scratch space, save it and extract the tables
    fn tabulate_report(&self, pipeline: &TablePipeline) -> Result<Tables> {
        let config = &self.config;
        let artifacts = &self.artifacts;

        let scratch = ScratchDir::create(config)?;
        info!(
            mode = config.scratch.describe(),
            dir = %scratch.path().display(),
            "Scratch directory"
        );

        let stem = config.input_stem()?;
        let scratch_report = scratch.path().join(PepStats::report_name(&stem));
        produce_report(config, &scratch_report)?;
        move_file(&scratch_report, &artifacts.report)?;
        debug!(report = %artifacts.report.display(), "Report saved");

        let report = fs::read_to_string(&artifacts.report)?;
        let output = pipeline.run(&report)?;
        if config.keep_flattened {
            fs::write(&artifacts.flattened, output.flattened_text())?;
        }

        scratch.close()?;
        Ok(output.tables)
    }

    /// Copy a saved flattened stream into the run directory and tabulate it
    fn tabulate_flattened(&self, pipeline: &TablePipeline, flattened: &Path) -> Result<Tables> {
        require_file(flattened, "flattened stream")?;
        info!(
            flattened = %flattened.display(),
            partial_blocks = %pipeline.policy(),
            "Tabulating saved flattened stream, pepstats not run"
        );

        fs::copy(flattened, &self.artifacts.flattened)?;
        let text = fs::read_to_string(&self.artifacts.flattened)?;
        pipeline.tabulate_text(&text)
    }
}

/// Put the pepstats report for the configured input at `dest`
fn produce_report(config: &RunConfig, dest: &Path) -> Result<()> {
    match &config.input {
        RunInput::Proteome(proteome) => {
            require_file(proteome, "proteome")?;
            let pepstats = PepStats::locate(&config.pepstats_bin)?;
            info!(
                tmp_dir = config.scratch.flag(),
                command = %pepstats.command_line(proteome, dest),
                "Command issued"
            );
            pepstats.run(proteome, dest)
        },
        RunInput::Report(report) => {
            require_file(report, "report")?;
            info!(report = %report.display(), "Using existing pepstats report, pepstats not run");
            fs::copy(report, dest)?;
            Ok(())
        },
        RunInput::Flattened(flattened) => Err(PepStatsError::config(format!(
            "'{}' is a flattened stream, not a pepstats report",
            flattened.display()
        ))),
    }
}

fn require_file(path: &Path, what: &str) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(PepStatsError::config(format!(
            "{} file '{}' does not exist",
            what,
            path.display()
        )))
    }
}

/// Rename, falling back to copy and delete across file systems
fn move_file(from: &Path, to: &Path) -> Result<()> {
    if fs::rename(from, to).is_err() {
        fs::copy(from, to)?;
        fs::remove_file(from)?;
    }
    Ok(())
}
