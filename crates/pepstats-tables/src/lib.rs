//! PepStats Tables Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Turns EMBOSS pepstats reports into two tab-separated tables of 32
//! properties per protein.
//!
//! # Overview
//!
//! - **Rules**: ordered pattern rules naming each extracted value ([`rules`])
//! - **Extraction**: per-protein records validated against the rules ([`extract`])
//! - **Tabulation**: flattened stream, grouping and transposition
//!   ([`stream`], [`group`], [`transpose`], [`table`])
//! - **Runs**: run directory, scratch space, pepstats invocation and artifacts
//!   ([`config`], [`workspace`], [`emboss`], [`run`])
//!
//! # Example
//!
//! ```
//! use pepstats_tables::{PartialBlockPolicy, TablePipeline};
//!
//! let pipeline = TablePipeline::pepstats(PartialBlockPolicy::Reject)?;
//! let output = pipeline.run("")?;
//! assert_eq!(output.tables.protein_count(), 0);
//! assert_eq!(output.tables.column.lines().len(), 32);
//! # Ok::<(), pepstats_common::PepStatsError>(())
//! ```

pub mod cli;
pub mod config;
pub mod emboss;
pub mod extract;
pub mod group;
pub mod pipeline;
pub mod progress;
pub mod rules;
pub mod run;
pub mod stream;
pub mod table;
pub mod transpose;
pub mod workspace;

// Re-export commonly used types
pub use cli::Cli;
pub use config::{RunConfig, RunInput, ScratchLocation};
pub use pipeline::{PipelineOutput, TablePipeline};
pub use rules::RuleSet;
pub use stream::{FlattenedStream, PartialBlockPolicy};
pub use table::{ColumnTable, RowTable, Tables};
