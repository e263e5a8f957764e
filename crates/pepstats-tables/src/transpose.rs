//! Transposition: blocks-of-lines (per protein) to lines-of-blocks (per attribute)

use pepstats_common::Result;
use tracing::debug;

use crate::stream::{FlattenedStream, PartialBlockPolicy};

/// Transpose the stream into `lines_per_entry` rows
///
/// Row `i` holds position `i` of every block, in block order, joined by tabs.
/// With no complete block every row is empty.
pub fn transpose(
    stream: &FlattenedStream,
    lines_per_entry: usize,
    policy: PartialBlockPolicy,
) -> Result<Vec<String>> {
    let blocks = stream.blocks(lines_per_entry, policy)?;
    let rows = transpose_blocks(&blocks, lines_per_entry);

    debug!(
        rows = rows.len(),
        columns = blocks.len(),
        "Transposed flattened stream"
    );
    Ok(rows)
}

/// Transpose equally sized blocks; every block must hold `width` items
fn transpose_blocks<S: AsRef<str>>(blocks: &[&[S]], width: usize) -> Vec<String> {
    (0..width)
        .map(|i| {
            blocks
                .iter()
                .map(|block| block[i].as_ref())
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect()
}
