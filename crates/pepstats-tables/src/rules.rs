//! Pattern rules for pepstats reports
//!
//! A [`RuleSet`] is the single source of truth for what gets extracted from
//! a report: its order fixes the record layout, its length is the number of
//! values per protein, and its column names become the Row Table header and
//! the Column Table's attribute names.

use pepstats_common::{PepStatsError, Result};
use regex::Regex;

/// Which whitespace-delimited token of a matched line holds the value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSelector {
    /// 1-based token position
    Position(usize),
    /// Last token on the line
    Last,
}

impl ValueSelector {
    /// Pick the selected token out of `line`
    pub fn select<'a>(&self, line: &'a str) -> Option<&'a str> {
        match *self {
            ValueSelector::Position(0) => None,
            ValueSelector::Position(n) => line.split_whitespace().nth(n - 1),
            ValueSelector::Last => line.split_whitespace().next_back(),
        }
    }
}

impl std::fmt::Display for ValueSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSelector::Position(n) => write!(f, "token {}", n),
            ValueSelector::Last => write!(f, "last token"),
        }
    }
}

/// One labeled pattern plus the token to extract from lines it matches
#[derive(Debug, Clone)]
pub struct PatternRule {
    column: String,
    pattern: Regex,
    selector: ValueSelector,
    starts_record: bool,
}

impl PatternRule {
    /// Create a value rule
    pub fn new(column: impl Into<String>, pattern: &str, selector: ValueSelector) -> Result<Self> {
        Ok(Self {
            column: column.into(),
            pattern: Regex::new(pattern)?,
            selector,
            starts_record: false,
        })
    }

    /// Create the rule whose match opens a new protein record
    pub fn record_start(
        column: impl Into<String>,
        pattern: &str,
        selector: ValueSelector,
    ) -> Result<Self> {
        let mut rule = Self::new(column, pattern, selector)?;
        rule.starts_record = true;
        Ok(rule)
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn selector(&self) -> ValueSelector {
        self.selector
    }

    pub fn starts_record(&self) -> bool {
        self.starts_record
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

/// Standard residues in report order: (one-letter code, three-letter code)
const RESIDUES: [(&str, &str); 20] = [
    ("A", "Ala"),
    ("C", "Cys"),
    ("D", "Asp"),
    ("E", "Glu"),
    ("F", "Phe"),
    ("G", "Gly"),
    ("H", "His"),
    ("I", "Ile"),
    ("K", "Lys"),
    ("L", "Leu"),
    ("M", "Met"),
    ("N", "Asn"),
    ("P", "Pro"),
    ("Q", "Gln"),
    ("R", "Arg"),
    ("S", "Ser"),
    ("T", "Thr"),
    ("V", "Val"),
    ("W", "Trp"),
    ("Y", "Tyr"),
];

/// Physicochemical property classes in report order
const PROPERTY_CLASSES: [&str; 9] = [
    "Tiny",
    "Small",
    "Aliphatic",
    "Aromatic",
    "Non-polar",
    "Polar",
    "Charged",
    "Basic",
    "Acidic",
];

/// Token holding the Mole% column of a residue line:
/// `A = Ala   <Number>   <Mole%>   <DayhoffStat>`
const RESIDUE_MOLE_PERCENT_TOKEN: usize = 5;

/// Ordered list of pattern rules; the first matching rule wins
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<PatternRule>,
}

impl RuleSet {
    /// Build a rule set, checking that exactly one rule starts a record and
    /// that it comes first
    pub fn new(rules: Vec<PatternRule>) -> Result<Self> {
        let Some(first) = rules.first() else {
            return Err(PepStatsError::config("rule set is empty"));
        };

        if !first.starts_record() {
            return Err(PepStatsError::config(format!(
                "first rule '{}' must start a record",
                first.column()
            )));
        }

        if let Some(extra) = rules.iter().skip(1).find(|r| r.starts_record()) {
            return Err(PepStatsError::config(format!(
                "only the first rule may start a record, '{}' does too",
                extra.column()
            )));
        }

        for (i, rule) in rules.iter().enumerate() {
            if rules[..i].iter().any(|r| r.column() == rule.column()) {
                return Err(PepStatsError::config(format!(
                    "duplicate column name '{}'",
                    rule.column()
                )));
            }
        }

        Ok(Self { rules })
    }

    /// The 32 rules for an EMBOSS pepstats report
    pub fn pepstats() -> Result<Self> {
        let mut rules = Vec::with_capacity(3 + RESIDUES.len() + PROPERTY_CLASSES.len());

        rules.push(PatternRule::record_start(
            "Protein_ID",
            r"^PEPSTATS of ",
            ValueSelector::Position(3),
        )?);
        rules.push(PatternRule::new(
            "Molecular_weight",
            r"^Molecular weight =",
            ValueSelector::Position(4),
        )?);
        rules.push(PatternRule::new(
            "Isoelectric_Point",
            r"^Isoelectric Point =",
            ValueSelector::Last,
        )?);

        for (code, name) in RESIDUES {
            rules.push(PatternRule::new(
                format!("Mole%_{}", name),
                &format!(r"^{} = {}\b", code, name),
                ValueSelector::Position(RESIDUE_MOLE_PERCENT_TOKEN),
            )?);
        }

        for class in PROPERTY_CLASSES {
            rules.push(PatternRule::new(
                format!("Mole%_{}", class),
                &format!(r"^{}\s", regex::escape(class)),
                ValueSelector::Last,
            )?);
        }

        Self::new(rules)
    }

    /// Number of values in every complete record
    pub fn lines_per_entry(&self) -> usize {
        self.rules.len()
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    pub fn get(&self, index: usize) -> Option<&PatternRule> {
        self.rules.get(index)
    }

    /// Column names in record order
    pub fn column_names(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.column().to_string()).collect()
    }

    /// First rule matching `line`, with its index
    pub fn match_line(&self, line: &str) -> Option<(usize, &PatternRule)> {
        self.rules.iter().enumerate().find(|(_, rule)| rule.is_match(line))
    }

    /// Indices of every rule matching `line`, not just the winner
    pub fn all_matches(&self, line: &str) -> Vec<usize> {
        self.rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.is_match(line))
            .map(|(i, _)| i)
            .collect()
    }
}
