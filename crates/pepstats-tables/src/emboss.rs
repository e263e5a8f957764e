//! EMBOSS pepstats invocation
//!
//! pepstats is an external program; the run only needs its report. It is
//! called once per proteome as
//! `pepstats -sequence <proteome> -outfile <scratch>/001_<stem>.out`
//! with `LC_ALL=C` so number formatting does not depend on the locale.

use pepstats_common::{PepStatsError, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

use crate::progress;

/// Resolve the pepstats executable
///
/// A value with a directory part must point at an existing file. A bare
/// name is looked up on `PATH`.
pub fn locate_executable(bin: &Path) -> Result<PathBuf> {
    if bin.components().count() > 1 {
        if bin.is_file() {
            return Ok(bin.to_path_buf());
        }
        return Err(PepStatsError::dependency(format!(
            "pepstats executable '{}' does not exist",
            bin.display()
        )));
    }

    let path_var = env::var_os("PATH").unwrap_or_default();
    env::split_paths(&path_var)
        .map(|dir| dir.join(bin))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| {
            PepStatsError::dependency(format!(
                "'{}' not found on PATH; install EMBOSS or pass --pepstats-bin",
                bin.display()
            ))
        })
}

/// A located pepstats executable
#[derive(Debug, Clone)]
pub struct PepStats {
    bin: PathBuf,
}

impl PepStats {
    pub fn locate(bin: &Path) -> Result<Self> {
        let bin = locate_executable(bin)?;
        info!(bin = %bin.display(), "pepstats detected");
        Ok(Self { bin })
    }

    /// Name of the report pepstats writes for `input`: `001_<stem>.out`
    pub fn report_name(input_stem: &str) -> String {
        format!("001_{}.out", input_stem)
    }

    /// Command line as it is written to the run log
    pub fn command_line(&self, input: &Path, outfile: &Path) -> String {
        format!(
            "{} -sequence {} -outfile {}",
            self.bin.display(),
            input.display(),
            outfile.display()
        )
    }

    /// Run pepstats on `input`, writing its report to `outfile`
    pub fn run(&self, input: &Path, outfile: &Path) -> Result<()> {
        debug!(command = %self.command_line(input, outfile), "Running pepstats");
        let spinner = progress::create_spinner("Running pepstats");

        let status = Command::new(&self.bin)
            .arg("-sequence")
            .arg(input)
            .arg("-outfile")
            .arg(outfile)
            .env("LC_ALL", "C")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| {
                PepStatsError::external_tool(format!(
                    "failed to start '{}': {}",
                    self.bin.display(),
                    e
                ))
            });
        spinner.finish_and_clear();
        let status = status?;

        if !status.success() {
            return Err(PepStatsError::external_tool(format!(
                "pepstats exited with {} for '{}'",
                status,
                input.display()
            )));
        }
        if !outfile.is_file() {
            return Err(PepStatsError::external_tool(format!(
                "pepstats did not write '{}'",
                outfile.display()
            )));
        }
        Ok(())
    }
}
