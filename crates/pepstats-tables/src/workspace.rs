//! Run and scratch directories
//!
//! The run directory `<prefix>.dir` holds every artifact of a run. It is
//! created when missing and emptied when it already exists. Scratch files
//! go either to a fresh system temp directory or to `<prefix>.tmp`; the
//! latter is moved aside with a timestamp suffix when a previous run left
//! one behind.

use chrono::Local;
use pepstats_common::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::{RunConfig, ScratchLocation};

/// Create `dir`, or remove everything inside it if it exists
pub fn prepare_run_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        let mut removed = 0usize;
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                fs::remove_dir_all(&path)?;
            } else {
                fs::remove_file(&path)?;
            }
            removed += 1;
        }
        debug!(dir = %dir.display(), removed, "Emptied existing run directory");
    } else {
        fs::create_dir_all(dir)?;
        debug!(dir = %dir.display(), "Created run directory");
    }
    Ok(())
}

/// Scratch directory of one run, removed by [`ScratchDir::close`]
#[derive(Debug)]
pub enum ScratchDir {
    /// Under the system temp dir, removed on drop as well
    Temp(tempfile::TempDir),
    /// `<prefix>.tmp` under the output root
    Local(PathBuf),
}

impl ScratchDir {
    pub fn create(config: &RunConfig) -> Result<Self> {
        let prefix = config.prefix()?;
        match config.scratch {
            ScratchLocation::System => {
                let dir = tempfile::Builder::new()
                    .prefix(&format!("{}_", prefix))
                    .tempdir()?;
                Ok(ScratchDir::Temp(dir))
            },
            ScratchLocation::Local => {
                let dir = config.local_scratch_dir()?;
                if dir.exists() {
                    let moved = timestamped(&dir);
                    fs::rename(&dir, &moved)?;
                    info!(
                        from = %dir.display(),
                        to = %moved.display(),
                        "Moved previous scratch directory aside"
                    );
                }
                fs::create_dir_all(&dir)?;
                Ok(ScratchDir::Local(dir))
            },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ScratchDir::Temp(dir) => dir.path(),
            ScratchDir::Local(dir) => dir,
        }
    }

    /// Remove the directory and everything in it
    pub fn close(self) -> Result<()> {
        match self {
            ScratchDir::Temp(dir) => dir.close()?,
            ScratchDir::Local(dir) => fs::remove_dir_all(dir)?,
        }
        Ok(())
    }
}

/// `<path>_<YYYY_MM_DD_HHMMSS>`
fn timestamped(path: &Path) -> PathBuf {
    let stamp = Local::now().format("%Y_%m_%d_%H%M%S");
    let mut name = path.as_os_str().to_os_string();
    name.push(format!("_{}", stamp));
    PathBuf::from(name)
}
