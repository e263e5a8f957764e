//! Error types for PepStats Tables

use thiserror::Error;

/// Result type alias for PepStats Tables operations
pub type Result<T> = std::result::Result<T, PepStatsError>;

/// Main error type for PepStats Tables
///
/// The first three variants cover the table pipeline itself; the rest come
/// from the orchestration around it (files, the pepstats executable, the
/// pattern rules).
#[derive(Error, Debug)]
pub enum PepStatsError {
    /// A protein section did not yield exactly one value per pattern rule
    #[error("Malformed record for protein #{index} ({protein_id}): {detail}")]
    MalformedRecord {
        index: usize,
        protein_id: String,
        detail: String,
    },

    /// A column-name list does not line up with the record width
    #[error("Column count mismatch: {names} column names for {expected} values per record")]
    CountMismatch { names: usize, expected: usize },

    /// The flattened stream does not divide into whole records
    #[error(
        "Partial trailing block: {lines} flattened lines is not a multiple of {lines_per_entry} \
         ({remainder} lines left over)"
    )]
    PartialTrailingBlock {
        lines: usize,
        lines_per_entry: usize,
        remainder: usize,
    },

    /// A report line matched a rule but the selected token is missing
    #[error("Extraction error at report line {line_number}: {detail}")]
    Extraction { line_number: usize, detail: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pattern rule: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A required external program is not available
    #[error("Missing dependency: {0}")]
    Dependency(String),

    /// An external program ran but failed
    #[error("External tool failed: {0}")]
    ExternalTool(String),
}

impl PepStatsError {
    /// Create a malformed record error
    pub fn malformed_record(
        index: usize,
        protein_id: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::MalformedRecord {
            index,
            protein_id: protein_id.into(),
            detail: detail.into(),
        }
    }

    /// Create an extraction error
    pub fn extraction(line_number: usize, detail: impl Into<String>) -> Self {
        Self::Extraction {
            line_number,
            detail: detail.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a dependency error
    pub fn dependency(msg: impl Into<String>) -> Self {
        Self::Dependency(msg.into())
    }

    /// Create an external tool error
    pub fn external_tool(msg: impl Into<String>) -> Self {
        Self::ExternalTool(msg.into())
    }
}
