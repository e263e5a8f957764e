//! Flattened token stream
//!
//! The text form written between extraction and tabulation: one token per
//! line (each followed by a space), a blank line between proteins and a
//! single trailing newline. Grouping and transposing work on the non-blank
//! lines of this stream, counting `lines_per_entry` lines per protein.

use pepstats_common::{PepStatsError, Result};
use tracing::warn;

use crate::extract::FlattenedRecord;

/// What to do with a trailing block shorter than `lines_per_entry`
///
/// The same policy drives both the row and the column branch, so the two
/// tables always describe the same proteins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PartialBlockPolicy {
    /// Fail with a partial-trailing-block error
    #[default]
    Reject,
    /// Drop the partial block from both tables and log a warning
    #[value(name = "drop")]
    DropWithWarning,
}

impl std::fmt::Display for PartialBlockPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartialBlockPolicy::Reject => write!(f, "reject"),
            PartialBlockPolicy::DropWithWarning => write!(f, "drop"),
        }
    }
}

/// Non-blank token lines of a flattened stream, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlattenedStream {
    lines: Vec<String>,
}

impl FlattenedStream {
    pub fn from_records(records: &[FlattenedRecord]) -> Self {
        Self {
            lines: records.iter().flat_map(|r| r.tokens().iter().cloned()).collect(),
        }
    }

    /// Read the text form back, dropping blank lines and trailing spaces
    pub fn parse(text: &str) -> Self {
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();

        Self { lines }
    }

    /// Render the text form from validated records
    pub fn render(records: &[FlattenedRecord]) -> String {
        let blocks: Vec<String> = records
            .iter()
            .map(|record| {
                record
                    .tokens()
                    .iter()
                    .map(|token| format!("{} ", token))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect();

        let mut text = blocks.join("\n\n");
        text.push('\n');
        text
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Split into consecutive blocks of `lines_per_entry` lines
    ///
    /// A short trailing block is rejected or dropped according to `policy`.
    pub fn blocks(&self, lines_per_entry: usize, policy: PartialBlockPolicy) -> Result<Vec<&[String]>> {
        if lines_per_entry == 0 {
            return Err(PepStatsError::config("lines per entry must be at least 1"));
        }

        let remainder = self.lines.len() % lines_per_entry;
        if remainder != 0 {
            match policy {
                PartialBlockPolicy::Reject => {
                    return Err(PepStatsError::PartialTrailingBlock {
                        lines: self.lines.len(),
                        lines_per_entry,
                        remainder,
                    });
                },
                PartialBlockPolicy::DropWithWarning => {
                    warn!(
                        lines = self.lines.len(),
                        lines_per_entry, remainder, "Dropping partial trailing block"
                    );
                },
            }
        }

        Ok(self.lines.chunks_exact(lines_per_entry).collect())
    }
}
