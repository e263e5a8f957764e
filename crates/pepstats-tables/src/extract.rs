//! Field extraction from raw pepstats reports
//!
//! The extractor walks the report once. Every line matching a rule
//! contributes one token to the current [`ProteinRecord`]; the record-start
//! rule opens a new record. Records keep the rule index of every value, so
//! completeness is checked against the rule set instead of being inferred
//! from line counts further down the pipeline.

use pepstats_common::{PepStatsError, Result};
use tracing::{debug, trace};

use crate::rules::RuleSet;

/// One token pulled out of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedValue {
    /// Index of the rule that matched
    pub rule: usize,
    pub token: String,
    /// 1-based line number in the report
    pub line_number: usize,
}

/// Everything extracted for one protein, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinRecord {
    /// 0-based position of the protein in the report
    pub index: usize,
    pub protein_id: String,
    pub values: Vec<ExtractedValue>,
}

/// A validated record: exactly one token per rule, in rule order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedRecord {
    tokens: Vec<String>,
}

impl FlattenedRecord {
    /// Validate a raw record against the rule set
    ///
    /// Fails with [`PepStatsError::MalformedRecord`] when a value is missing,
    /// repeated or out of order.
    pub fn from_record(record: ProteinRecord, rules: &RuleSet) -> Result<Self> {
        let expected = rules.lines_per_entry();
        let in_order = record.values.len() == expected
            && record.values.iter().enumerate().all(|(i, v)| v.rule == i);

        if !in_order {
            return Err(PepStatsError::malformed_record(
                record.index,
                &record.protein_id,
                describe_layout_problem(&record, rules),
            ));
        }

        Ok(Self {
            tokens: record.values.into_iter().map(|v| v.token).collect(),
        })
    }

    /// Build a record from tokens that are already in record order
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn protein_id(&self) -> &str {
        self.tokens.first().map(String::as_str).unwrap_or_default()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn describe_layout_problem(record: &ProteinRecord, rules: &RuleSet) -> String {
    let expected = rules.lines_per_entry();
    let mut counts = vec![0usize; expected];
    for value in &record.values {
        if let Some(count) = counts.get_mut(value.rule) {
            *count += 1;
        }
    }

    let column = |i: usize| rules.get(i).map(|r| r.column().to_string()).unwrap_or_default();
    let missing: Vec<String> = (0..expected).filter(|&i| counts[i] == 0).map(column).collect();
    let repeated: Vec<String> = (0..expected).filter(|&i| counts[i] > 1).map(column).collect();

    let mut detail = format!("found {} of {} values", record.values.len(), expected);
    if !missing.is_empty() {
        detail.push_str(&format!("; missing {}", missing.join(", ")));
    }
    if !repeated.is_empty() {
        detail.push_str(&format!("; repeated {}", repeated.join(", ")));
    }
    if missing.is_empty() && repeated.is_empty() {
        let misplaced = record
            .values
            .iter()
            .enumerate()
            .find(|(i, v)| v.rule != *i)
            .map(|(_, v)| v);
        if let Some(v) = misplaced {
            detail.push_str(&format!(
                "; {} out of order at report line {}",
                column(v.rule),
                v.line_number
            ));
        }
    }
    detail
}

/// Scans report lines against a rule set
pub struct FieldExtractor<'r> {
    rules: &'r RuleSet,
}

impl<'r> FieldExtractor<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self { rules }
    }

    /// Extract raw protein records from report text, without completeness checks
    pub fn extract_records(&self, report: &str) -> Result<Vec<ProteinRecord>> {
        let mut records: Vec<ProteinRecord> = Vec::new();

        for (i, line) in report.lines().enumerate() {
            let line_number = i + 1;
            let Some((rule_index, rule)) = self.rules.match_line(line) else {
                continue;
            };

            let token = rule.selector().select(line).ok_or_else(|| {
                PepStatsError::extraction(
                    line_number,
                    format!("{} rule needs {} of {:?}", rule.column(), rule.selector(), line.trim()),
                )
            })?;
            trace!(line_number, column = rule.column(), token, "Matched report line");

            if rule.starts_record() {
                records.push(ProteinRecord {
                    index: records.len(),
                    protein_id: token.to_string(),
                    values: Vec::with_capacity(self.rules.lines_per_entry()),
                });
            }

            let Some(current) = records.last_mut() else {
                return Err(PepStatsError::malformed_record(
                    0,
                    "<no header>",
                    format!(
                        "{} value at report line {} appears before the first protein header",
                        rule.column(),
                        line_number
                    ),
                ));
            };

            current.values.push(ExtractedValue {
                rule: rule_index,
                token: token.to_string(),
                line_number,
            });
        }

        debug!(proteins = records.len(), "Extracted protein records");
        Ok(records)
    }

    /// Extract and validate every record, failing on the first malformed one
    pub fn extract(&self, report: &str) -> Result<Vec<FlattenedRecord>> {
        self.extract_records(report)?
            .into_iter()
            .map(|record| FlattenedRecord::from_record(record, self.rules))
            .collect()
    }
}
