//! Command-line arguments

use clap::{ArgGroup, Parser};
use pepstats_common::{PepStatsError, Result};
use std::path::PathBuf;

use crate::config::{RunConfig, RunInput, ScratchLocation, DEFAULT_PEPSTATS_BIN, DEFAULT_RUN_NAME};
use crate::stream::PartialBlockPolicy;

/// PepStats Tables - tabulate EMBOSS pepstats reports
///
/// Runs pepstats on a proteome (or reads an existing report) and writes a
/// protein-major table and an attribute-major table of 32 properties per
/// protein.
#[derive(Parser, Debug)]
#[command(name = "pepstats-tables")]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .args(["proteome", "report", "flattened"])
))]
pub struct Cli {
    /// Proteome FASTA file to analyze with pepstats
    #[arg(short, long, value_name = "FASTA")]
    pub proteome: Option<PathBuf>,

    /// Existing pepstats report to tabulate (pepstats is not run)
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Flattened stream saved with --keep-flattened to tabulate again
    #[arg(long, value_name = "FILE")]
    pub flattened: Option<PathBuf>,

    /// Run name, appended to the input file name in every artifact
    #[arg(short, long, default_value = DEFAULT_RUN_NAME)]
    pub run_name: String,

    /// Scratch location: 0 = system temp dir, 1 = local <prefix>.tmp
    #[arg(short = 'z', long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    pub tmp_dir: u8,

    /// Directory in which the run directory is created
    #[arg(short, long, default_value = ".")]
    pub output_root: PathBuf,

    /// pepstats executable
    #[arg(long, env = "PEPSTATS_BIN", default_value = DEFAULT_PEPSTATS_BIN)]
    pub pepstats_bin: PathBuf,

    /// What to do with a trailing block shorter than 32 lines (--flattened input)
    #[arg(long, value_enum, default_value_t = PartialBlockPolicy::Reject)]
    pub partial_blocks: PartialBlockPolicy,

    /// Also save the flattened token stream
    #[arg(long)]
    pub keep_flattened: bool,

    /// Verbose output (debug logging, also on the console)
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the parsed arguments into a run configuration
    pub fn into_config(self) -> Result<RunConfig> {
        let input = match (self.proteome, self.report, self.flattened) {
            (Some(proteome), _, _) => RunInput::Proteome(proteome),
            (None, Some(report), _) => RunInput::Report(report),
            (None, None, Some(flattened)) => RunInput::Flattened(flattened),
            (None, None, None) => {
                return Err(PepStatsError::config(
                    "one of --proteome, --report or --flattened is required",
                ))
            },
        };

        let config = RunConfig {
            input,
            run_name: self.run_name,
            scratch: ScratchLocation::from_flag(self.tmp_dir)?,
            output_root: self.output_root,
            pepstats_bin: self.pepstats_bin,
            policy: self.partial_blocks,
            keep_flattened: self.keep_flattened,
        };
        config.validate()?;
        Ok(config)
    }
}
