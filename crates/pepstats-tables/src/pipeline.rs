//! Report to tables pipeline
//!
//! ```text
//! report ──extract──▶ records ──flatten──▶ stream ─┬─group─────▶ RowTable
//!                                                  └─transpose─▶ ColumnTable
//! ```

use pepstats_common::Result;
use tracing::{info, instrument};

use crate::extract::{FieldExtractor, FlattenedRecord};
use crate::group::group_rows;
use crate::rules::RuleSet;
use crate::stream::{FlattenedStream, PartialBlockPolicy};
use crate::table::{ColumnTable, RowTable, Tables};
use crate::transpose::transpose;

/// Output of a full pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub records: Vec<FlattenedRecord>,
    pub tables: Tables,
}

impl PipelineOutput {
    /// Text form of the flattened stream the tables were built from
    pub fn flattened_text(&self) -> String {
        FlattenedStream::render(&self.records)
    }
}

/// Extraction and tabulation with one rule set and one partial block policy
#[derive(Debug, Clone)]
pub struct TablePipeline {
    rules: RuleSet,
    policy: PartialBlockPolicy,
}

impl TablePipeline {
    pub fn new(rules: RuleSet, policy: PartialBlockPolicy) -> Self {
        Self { rules, policy }
    }

    /// Pipeline for EMBOSS pepstats reports
    pub fn pepstats(policy: PartialBlockPolicy) -> Result<Self> {
        Ok(Self::new(RuleSet::pepstats()?, policy))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn policy(&self) -> PartialBlockPolicy {
        self.policy
    }

    /// Run every stage on a raw report
    #[instrument(skip_all, fields(bytes = report.len()))]
    pub fn run(&self, report: &str) -> Result<PipelineOutput> {
        let records = FieldExtractor::new(&self.rules).extract(report)?;
        let stream = FlattenedStream::from_records(&records);
        let tables = self.tabulate(&stream)?;

        info!(
            proteins = tables.protein_count(),
            attributes = self.rules.lines_per_entry(),
            "Tables assembled"
        );
        Ok(PipelineOutput { records, tables })
    }

    /// Build both tables from a flattened stream
    ///
    /// The row and column branches share the stream and the policy, so a
    /// partial trailing block is treated the same way in both.
    pub fn tabulate(&self, stream: &FlattenedStream) -> Result<Tables> {
        let lines_per_entry = self.rules.lines_per_entry();
        let columns = self.rules.column_names();

        let rows = group_rows(stream, lines_per_entry, self.policy)?;
        let row = RowTable::assemble(&columns, lines_per_entry, rows)?;

        let transposed = transpose(stream, lines_per_entry, self.policy)?;
        let column = ColumnTable::assemble(&columns, transposed)?;

        Ok(Tables { row, column })
    }

    /// Rebuild both tables from the text form of a flattened stream
    pub fn tabulate_text(&self, flattened: &str) -> Result<Tables> {
        self.tabulate(&FlattenedStream::parse(flattened))
    }
}
