//! Record grouping: one tab-separated row per protein

use pepstats_common::Result;
use tracing::debug;

use crate::stream::{FlattenedStream, PartialBlockPolicy};

/// Join every block of `lines_per_entry` stream lines into one row
pub fn group_rows(
    stream: &FlattenedStream,
    lines_per_entry: usize,
    policy: PartialBlockPolicy,
) -> Result<Vec<String>> {
    let rows: Vec<String> = stream
        .blocks(lines_per_entry, policy)?
        .into_iter()
        .map(|block| block.join("\t"))
        .collect();

    debug!(rows = rows.len(), "Grouped flattened stream into rows");
    Ok(rows)
}
