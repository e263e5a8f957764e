//! PepStats Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Error handling and logging shared by the PepStats Tables workspace.
//!
//! - **Error Handling**: [`PepStatsError`] and the [`Result`] alias
//! - **Logging**: `tracing` subscriber setup with console and run-log output
//!
//! # Example
//!
//! ```
//! use pepstats_common::{PepStatsError, Result};
//!
//! fn check_width(names: usize, expected: usize) -> Result<()> {
//!     if names != expected {
//!         return Err(PepStatsError::CountMismatch { names, expected });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_width(31, 32).is_err());
//! ```

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{PepStatsError, Result};
