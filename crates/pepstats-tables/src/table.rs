//! Table assembly
//!
//! [`RowTable`] is protein-major: a header row of column names, then one row
//! per protein. [`ColumnTable`] is attribute-major: one line per column name
//! followed by that attribute's value for every protein.

use pepstats_common::{PepStatsError, Result};
use std::io::Write;
use std::path::Path;

/// Protein-major table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTable {
    header: String,
    rows: Vec<String>,
}

impl RowTable {
    /// Put the header row in front of the grouped rows
    ///
    /// `columns` must have one name per record value.
    pub fn assemble<S: AsRef<str>>(
        columns: &[S],
        lines_per_entry: usize,
        rows: Vec<String>,
    ) -> Result<Self> {
        if columns.len() != lines_per_entry {
            return Err(PepStatsError::CountMismatch {
                names: columns.len(),
                expected: lines_per_entry,
            });
        }

        let header = columns.iter().map(|c| c.as_ref()).collect::<Vec<&str>>().join("\t");
        Ok(Self { header, rows })
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Data rows, without the header
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn render(&self) -> String {
        render_lines(std::iter::once(&self.header).chain(&self.rows))
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writer.write_all(self.render().as_bytes())?;
        writer.flush()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.render())?;
        Ok(())
    }
}

/// Attribute-major table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTable {
    lines: Vec<String>,
}

impl ColumnTable {
    /// Pair each column name with its transposed row
    ///
    /// A name whose row is empty (no proteins) is written on its own.
    pub fn assemble<S: AsRef<str>>(names: &[S], transposed: Vec<String>) -> Result<Self> {
        if names.len() != transposed.len() {
            return Err(PepStatsError::CountMismatch {
                names: names.len(),
                expected: transposed.len(),
            });
        }

        let lines = names
            .iter()
            .zip(transposed)
            .map(|(name, row)| {
                if row.is_empty() {
                    name.as_ref().to_string()
                } else {
                    format!("{}\t{}", name.as_ref(), row)
                }
            })
            .collect();

        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Values of every line, with the leading attribute name removed
    pub fn data_rows(&self) -> Vec<&str> {
        self.lines
            .iter()
            .map(|line| line.split_once('\t').map(|(_, values)| values).unwrap_or(""))
            .collect()
    }

    pub fn render(&self) -> String {
        render_lines(&self.lines)
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writer.write_all(self.render().as_bytes())?;
        writer.flush()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.render())?;
        Ok(())
    }
}

fn render_lines<'a>(lines: impl IntoIterator<Item = &'a String>) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Both renderings of one set of proteins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
    pub row: RowTable,
    pub column: ColumnTable,
}

impl Tables {
    pub fn protein_count(&self) -> usize {
        self.row.rows().len()
    }
}
