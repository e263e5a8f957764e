//! Common test utilities for PepStats Tables integration tests
//!
//! Builds pepstats reports in the layout EMBOSS writes them, including the
//! lines no rule extracts (ambiguity codes, extinction coefficients, column
//! headers), so tests exercise the same noise a real report carries.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{report, ProteinStats};
//!
//! let text = report(&[ProteinStats::new("P1", "100.5", "6.2")]);
//! ```

#![allow(dead_code)]

use std::path::PathBuf;

/// Residue lines in report order: (code, name, extracted)
///
/// Ambiguity and rare codes are printed by pepstats but never extracted.
pub const RESIDUE_LINES: [(&str, &str, bool); 26] = [
    ("A", "Ala", true),
    ("B", "Asx", false),
    ("C", "Cys", true),
    ("D", "Asp", true),
    ("E", "Glu", true),
    ("F", "Phe", true),
    ("G", "Gly", true),
    ("H", "His", true),
    ("I", "Ile", true),
    ("J", "---", false),
    ("K", "Lys", true),
    ("L", "Leu", true),
    ("M", "Met", true),
    ("N", "Asn", true),
    ("O", "---", false),
    ("P", "Pro", true),
    ("Q", "Gln", true),
    ("R", "Arg", true),
    ("S", "Ser", true),
    ("T", "Thr", true),
    ("U", "---", false),
    ("V", "Val", true),
    ("W", "Trp", true),
    ("X", "Xaa", false),
    ("Y", "Tyr", true),
    ("Z", "Glx", false),
];

/// Property lines in report order: (class, member residues)
pub const PROPERTY_LINES: [(&str, &str); 9] = [
    ("Tiny", "(A+C+G+S+T)"),
    ("Small", "(A+B+C+D+G+N+P+S+T+V)"),
    ("Aliphatic", "(A+I+L+V)"),
    ("Aromatic", "(F+H+W+Y)"),
    ("Non-polar", "(A+C+F+G+I+L+M+P+V+W+Y)"),
    ("Polar", "(D+E+H+K+N+Q+R+S+T+Z)"),
    ("Charged", "(B+D+E+H+K+R+Z)"),
    ("Basic", "(H+K+R)"),
    ("Acidic", "(B+D+E+Z)"),
];

/// Values of one protein, as they appear in the report
#[derive(Debug, Clone)]
pub struct ProteinStats {
    pub id: String,
    pub molecular_weight: String,
    pub isoelectric_point: String,
    /// Mole% of the 20 extracted residues, in report order
    pub residues: Vec<String>,
    /// Mole% of the 9 property classes, in report order
    pub classes: Vec<String>,
}

impl ProteinStats {
    /// Protein with deterministic filler values for every Mole% column
    pub fn new(id: &str, molecular_weight: &str, isoelectric_point: &str) -> Self {
        let seed = id.bytes().map(usize::from).sum::<usize>();
        Self {
            id: id.to_string(),
            molecular_weight: molecular_weight.to_string(),
            isoelectric_point: isoelectric_point.to_string(),
            residues: (0..20)
                .map(|i| format!("{}.{:03}", (seed + i) % 13, (seed * 7 + i * 31) % 1000))
                .collect(),
            classes: (0..9)
                .map(|i| format!("{}.{:03}", 10 + (seed + i) % 80, (seed * 3 + i * 17) % 1000))
                .collect(),
        }
    }

    pub fn with_residue(mut self, index: usize, mole_percent: &str) -> Self {
        self.residues[index] = mole_percent.to_string();
        self
    }

    /// The 32 values the tables should hold for this protein
    pub fn expected_values(&self) -> Vec<String> {
        let mut values = vec![
            self.id.clone(),
            self.molecular_weight.clone(),
            self.isoelectric_point.clone(),
        ];
        values.extend(self.residues.iter().cloned());
        values.extend(self.classes.iter().cloned());
        values
    }

    /// Expected Row Table line
    pub fn expected_row(&self) -> String {
        self.expected_values().join("\t")
    }

    /// One pepstats section
    pub fn section(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("PEPSTATS of {} from 1 to 120\n\n", self.id));
        out.push_str(&format!(
            "Molecular weight = {} \t\tResidues = 120\t\n",
            self.molecular_weight
        ));
        out.push_str("Average Residue Weight  = 110.041 \tCharge   = 1.5\t\n");
        out.push_str(&format!("Isoelectric Point = {}\n", self.isoelectric_point));
        out.push_str("A280 Molar Extinction Coefficients  = 8480 (reduced)   8605 (cystine bridges)\n");
        out.push_str("A280 Extinction Coefficients 1mg/ml = 0.642 (reduced)   0.652 (cystine bridges)\n");
        out.push_str("Improbability of expression in inclusion bodies = 0.731\n\n");

        out.push_str("Residue\t\tNumber\t\tMole%\t\tDayhoffStat\n");
        let mut extracted = self.residues.iter();
        for (code, name, is_extracted) in RESIDUE_LINES {
            let mole = if is_extracted {
                extracted.next().map(String::as_str).unwrap_or("0.000")
            } else {
                "0.000"
            };
            out.push_str(&format!("{} = {}\t\t4\t\t{}\t\t0.812\t\n", code, name, mole));
        }

        out.push_str("\nProperty\tResidues\t\tNumber\t\tMole%\n");
        for ((class, members), mole) in PROPERTY_LINES.iter().zip(&self.classes) {
            out.push_str(&format!("{}\t\t{}\t\t17\t\t{}\n", class, members, mole));
        }
        out.push('\n');
        out
    }
}

/// Full report for `proteins`, sections in order
pub fn report(proteins: &[ProteinStats]) -> String {
    proteins.iter().map(ProteinStats::section).collect()
}

/// Column names in record order
pub fn expected_columns() -> Vec<String> {
    let mut columns = vec![
        "Protein_ID".to_string(),
        "Molecular_weight".to_string(),
        "Isoelectric_Point".to_string(),
    ];
    columns.extend(
        RESIDUE_LINES
            .iter()
            .filter(|(_, _, extracted)| *extracted)
            .map(|(_, name, _)| format!("Mole%_{}", name)),
    );
    columns.extend(PROPERTY_LINES.iter().map(|(class, _)| format!("Mole%_{}", class)));
    columns
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
