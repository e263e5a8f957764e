//! Run configuration
//!
//! Everything a run needs to know is resolved once into a [`RunConfig`] and
//! passed down explicitly. All artifact names derive from
//! `prefix = <input file name>_<run name>`.

use pepstats_common::{PepStatsError, Result};
use std::path::{Path, PathBuf};

use crate::stream::PartialBlockPolicy;

/// Default run name when none is given
pub const DEFAULT_RUN_NAME: &str = "PepStats_Tables";

/// Default pepstats executable, looked up on `PATH`
pub const DEFAULT_PEPSTATS_BIN: &str = "pepstats";

/// Where a run's scratch files live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScratchLocation {
    /// Fresh directory under the system temp dir (honors `TMPDIR`)
    #[default]
    System,
    /// `<prefix>.tmp` next to the run directory
    Local,
}

impl ScratchLocation {
    /// Map the numeric `-z` flag (0 or 1)
    pub fn from_flag(flag: u8) -> Result<Self> {
        match flag {
            0 => Ok(ScratchLocation::System),
            1 => Ok(ScratchLocation::Local),
            other => Err(PepStatsError::config(format!(
                "tmp dir flag must be 0 or 1, got {}",
                other
            ))),
        }
    }

    pub fn flag(self) -> u8 {
        match self {
            ScratchLocation::System => 0,
            ScratchLocation::Local => 1,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            ScratchLocation::System => "Normal Run",
            ScratchLocation::Local => "Local TMPDIR Run",
        }
    }
}

/// What the run reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunInput {
    /// FASTA proteome, analyzed with pepstats first
    Proteome(PathBuf),
    /// Existing pepstats report, tabulated directly
    Report(PathBuf),
    /// Flattened stream saved by an earlier run, tabulated under the
    /// partial block policy
    Flattened(PathBuf),
}

impl RunInput {
    pub fn path(&self) -> &Path {
        match self {
            RunInput::Proteome(path) | RunInput::Report(path) | RunInput::Flattened(path) => {
                path
            },
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RunInput::Proteome(_) => "Proteome",
            RunInput::Report(_) => "PepStats Report",
            RunInput::Flattened(_) => "Flattened Stream",
        }
    }
}

/// Fully resolved configuration of one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: RunInput,
    pub run_name: String,
    pub scratch: ScratchLocation,
    pub output_root: PathBuf,
    pub pepstats_bin: PathBuf,
    pub policy: PartialBlockPolicy,
    pub keep_flattened: bool,
}

impl RunConfig {
    pub fn new(input: RunInput) -> Self {
        Self {
            input,
            run_name: DEFAULT_RUN_NAME.to_string(),
            scratch: ScratchLocation::default(),
            output_root: PathBuf::from("."),
            pepstats_bin: PathBuf::from(DEFAULT_PEPSTATS_BIN),
            policy: PartialBlockPolicy::default(),
            keep_flattened: false,
        }
    }

    /// Check the names the run directory is built from
    pub fn validate(&self) -> Result<()> {
        self.input_file_name()?;
        let run_name = self.run_name.trim();
        if run_name.is_empty() {
            return Err(PepStatsError::config("run name must not be empty"));
        }
        if run_name.contains(['/', '\\']) {
            return Err(PepStatsError::config(format!(
                "run name '{}' must not contain path separators",
                run_name
            )));
        }
        Ok(())
    }

    /// File name of the input, extension included
    pub fn input_file_name(&self) -> Result<String> {
        self.input
            .path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                PepStatsError::config(format!(
                    "input path '{}' has no file name",
                    self.input.path().display()
                ))
            })
    }

    /// File name of the input without its last extension
    pub fn input_stem(&self) -> Result<String> {
        self.input
            .path()
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .ok_or_else(|| {
                PepStatsError::config(format!(
                    "input path '{}' has no file name",
                    self.input.path().display()
                ))
            })
    }

    /// `<input file name>_<run name>`
    pub fn prefix(&self) -> Result<String> {
        Ok(format!("{}_{}", self.input_file_name()?, self.run_name.trim()))
    }

    pub fn run_dir(&self) -> Result<PathBuf> {
        Ok(self.output_root.join(format!("{}.dir", self.prefix()?)))
    }

    pub fn local_scratch_dir(&self) -> Result<PathBuf> {
        Ok(self.output_root.join(format!("{}.tmp", self.prefix()?)))
    }

    pub fn artifacts(&self) -> Result<RunArtifacts> {
        let prefix = self.prefix()?;
        let dir = self.run_dir()?;
        Ok(RunArtifacts {
            log_file_name: format!("{}.log", prefix),
            report: dir.join(format!("{}.00_Main_PepStats_Analysis", prefix)),
            row_table: dir.join(format!("{}.01_PepStats_Table_01", prefix)),
            column_table: dir.join(format!("{}.02_PepStats_Table_02", prefix)),
            flattened: dir.join(format!("{}.flattened", prefix)),
            dir,
        })
    }
}

/// Paths of everything a run leaves behind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArtifacts {
    pub dir: PathBuf,
    pub log_file_name: String,
    pub report: PathBuf,
    pub row_table: PathBuf,
    pub column_table: PathBuf,
    pub flattened: PathBuf,
}

impl RunArtifacts {
    pub fn log_file(&self) -> PathBuf {
        self.dir.join(&self.log_file_name)
    }
}
