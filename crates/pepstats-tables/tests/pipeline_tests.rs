//! Integration tests for the report to tables pipeline

mod common;

use common::{expected_columns, fixture_path, report, ProteinStats};
use pepstats_common::PepStatsError;
use pepstats_tables::{PartialBlockPolicy, TablePipeline};
use proptest::prelude::*;
use std::fs;

fn pipeline() -> TablePipeline {
    TablePipeline::pepstats(PartialBlockPolicy::Reject).expect("pepstats rules compile")
}

/// Split "name\tv1\tv2" lines into their value fields
fn column_values(line: &str) -> Vec<&str> {
    line.split('\t').skip(1).collect()
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_two_protein_scenario() {
    let p1 = ProteinStats::new("P1", "100.5", "6.2").with_residue(0, "8.1");
    let p2 = ProteinStats::new("P2", "95.0", "5.9").with_residue(0, "7.4");
    let output = pipeline().run(&report(&[p1.clone(), p2.clone()])).unwrap();

    let row = &output.tables.row;
    assert_eq!(row.header(), expected_columns().join("\t"));
    assert_eq!(row.rows(), [p1.expected_row(), p2.expected_row()]);
    assert!(row.rows()[0].starts_with("P1\t100.5\t6.2\t8.1\t"));
    assert!(row.rows()[1].starts_with("P2\t95.0\t5.9\t7.4\t"));

    let lines = output.tables.column.lines();
    assert_eq!(lines.len(), 32);
    assert_eq!(lines[0], "Protein_ID\tP1\tP2");
    assert_eq!(lines[1], "Molecular_weight\t100.5\t95.0");
    assert_eq!(lines[2], "Isoelectric_Point\t6.2\t5.9");
    assert_eq!(lines[3], "Mole%_Ala\t8.1\t7.4");
}

#[test]
fn test_fixture_report() {
    let text = fs::read_to_string(fixture_path("two_proteins.pepstats")).unwrap();
    let output = pipeline().run(&text).unwrap();

    assert_eq!(output.tables.protein_count(), 2);
    assert!(output.tables.row.rows()[0]
        .starts_with("ENSP00000451042\t812.80\t3.8000\t12.500\t0.000\t12.500\t"));
    assert!(output.tables.row.rows()[1].ends_with("\t5.556\t5.556\t0.000"));

    let column = output.tables.column.render();
    assert!(column.contains("\nMolecular_weight\t812.80\t2091.56\n"));
    assert!(column.contains("\nMole%_Leu\t0.000\t22.222\n"));
    assert!(column.contains("\nMole%_Ser\t25.000\t22.222\n"));
    assert!(column.contains("\nMole%_Non-polar\t50.000\t66.667\n"));
    assert!(column.ends_with("\nMole%_Acidic\t12.500\t0.000\n"));
}

#[test]
fn test_single_protein() {
    let p1 = ProteinStats::new("ENSP00000451042", "993.10", "8.7500");
    let output = pipeline().run(&report(&[p1.clone()])).unwrap();

    assert_eq!(output.tables.row.render().lines().count(), 2);
    assert_eq!(output.tables.row.rows(), [p1.expected_row()]);

    let lines = output.tables.column.lines();
    assert_eq!(lines.len(), 32);
    for (line, (name, value)) in lines
        .iter()
        .zip(expected_columns().iter().zip(p1.expected_values()))
    {
        assert_eq!(line, &format!("{}\t{}", name, value));
    }
}

#[test]
fn test_empty_input() {
    let output = pipeline().run("").unwrap();

    assert_eq!(output.tables.row.render(), format!("{}\n", expected_columns().join("\t")));
    assert_eq!(
        output.tables.column.render(),
        format!("{}\n", expected_columns().join("\n"))
    );
    assert_eq!(output.flattened_text(), "\n");
}

#[test]
fn test_every_report_line_matches_at_most_one_rule() {
    let pipeline = pipeline();
    let rules = pipeline.rules();
    let generated = report(&[
        ProteinStats::new("P1", "100.5", "6.2"),
        ProteinStats::new("P2", "95.0", "5.9"),
    ]);
    let fixture = fs::read_to_string(fixture_path("two_proteins.pepstats")).unwrap();

    for text in [generated, fixture] {
        let mut matched = vec![0usize; rules.lines_per_entry()];
        for line in text.lines() {
            let matches = rules.all_matches(line);
            assert!(matches.len() <= 1, "line {:?} matched rules {:?}", line, matches);
            for rule in matches {
                matched[rule] += 1;
            }
        }
        // Every rule fires exactly once per protein section
        assert_eq!(matched, vec![2; 32]);
    }
}

#[test]
fn test_section_with_31_values_is_rejected() {
    let good = ProteinStats::new("P1", "100.5", "6.2").section();
    let broken: String = ProteinStats::new("P2", "95.0", "5.9")
        .section()
        .lines()
        .filter(|line| !line.starts_with("W = Trp"))
        .map(|line| format!("{}\n", line))
        .collect();

    let err = pipeline().run(&(good + &broken)).unwrap_err();
    match err {
        PepStatsError::MalformedRecord {
            index,
            protein_id,
            detail,
        } => {
            assert_eq!(index, 1);
            assert_eq!(protein_id, "P2");
            assert!(detail.contains("31 of 32"), "detail was: {}", detail);
            assert!(detail.contains("Mole%_Trp"), "detail was: {}", detail);
        },
        other => panic!("expected malformed record, got {:?}", other),
    }
}

#[test]
fn test_order_is_preserved() {
    let ids = ["Q9Y6K9", "A0A024R161", "P01308", "O15553", "P69905"];
    let proteins: Vec<_> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| ProteinStats::new(id, &format!("{}.0", 1000 + i), "7.0"))
        .collect();
    let output = pipeline().run(&report(&proteins)).unwrap();

    let row_ids: Vec<&str> = output
        .tables
        .row
        .rows()
        .iter()
        .map(|row| row.split('\t').next().unwrap())
        .collect();
    assert_eq!(row_ids, ids);
    assert_eq!(column_values(&output.tables.column.lines()[0]), ids);
}

#[test]
fn test_flattened_text_rebuilds_the_same_tables() {
    let proteins = [
        ProteinStats::new("P1", "100.5", "6.2"),
        ProteinStats::new("P2", "95.0", "5.9"),
    ];
    let pipeline = pipeline();
    let output = pipeline.run(&report(&proteins)).unwrap();

    let flattened = output.flattened_text();
    assert_eq!(flattened.lines().filter(|l| l.is_empty()).count(), 1);
    assert!(flattened.lines().filter(|l| !l.is_empty()).all(|l| l.ends_with(' ')));

    assert_eq!(pipeline.tabulate_text(&flattened).unwrap(), output.tables);
}

#[test]
fn test_truncated_flattened_stream_follows_policy() {
    let proteins = [
        ProteinStats::new("P1", "100.5", "6.2"),
        ProteinStats::new("P2", "95.0", "5.9"),
    ];
    let flattened = pipeline().run(&report(&proteins)).unwrap().flattened_text();
    let truncated: String = flattened
        .lines()
        .take(33 + 10)
        .map(|line| format!("{}\n", line))
        .collect();

    let err = pipeline().tabulate_text(&truncated).unwrap_err();
    assert!(matches!(
        err,
        PepStatsError::PartialTrailingBlock {
            lines: 42,
            lines_per_entry: 32,
            remainder: 10
        }
    ));

    let tables = TablePipeline::pepstats(PartialBlockPolicy::DropWithWarning)
        .unwrap()
        .tabulate_text(&truncated)
        .unwrap();
    assert_eq!(tables.row.rows(), [proteins[0].expected_row()]);
    assert_eq!(column_values(&tables.column.lines()[0]), ["P1"]);
}

// ============================================================================
// PROPERTIES
// ============================================================================

fn protein_strategy() -> impl Strategy<Value = ProteinStats> {
    (
        "[A-Z][A-Z0-9_.]{0,11}",
        "[0-9]{2,6}\\.[0-9]{1,2}",
        "[0-9]{1,2}\\.[0-9]{4}",
        proptest::collection::vec("[0-9]{1,2}\\.[0-9]{3}", 20),
        proptest::collection::vec("[0-9]{1,3}\\.[0-9]{3}", 9),
    )
        .prop_map(|(id, mw, pi, residues, classes)| ProteinStats {
            id,
            molecular_weight: mw,
            isoelectric_point: pi,
            residues,
            classes,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_transposed_rows_equal_column_table(proteins in proptest::collection::vec(protein_strategy(), 0..8)) {
        let output = pipeline().run(&report(&proteins)).unwrap();
        let rows: Vec<Vec<&str>> = output
            .tables
            .row
            .rows()
            .iter()
            .map(|row| row.split('\t').collect())
            .collect();

        let transposed: Vec<String> = (0..32)
            .map(|i| rows.iter().map(|row| row[i]).collect::<Vec<_>>().join("\t"))
            .collect();
        prop_assert_eq!(transposed, output.tables.column.data_rows());
    }

    #[test]
    fn prop_every_row_and_column_line_has_full_width(proteins in proptest::collection::vec(protein_strategy(), 0..8)) {
        let output = pipeline().run(&report(&proteins)).unwrap();

        prop_assert_eq!(output.tables.protein_count(), proteins.len());
        for row in output.tables.row.rows() {
            prop_assert_eq!(row.split('\t').count(), 32);
        }
        for line in output.tables.column.lines() {
            prop_assert_eq!(column_values(line).len(), proteins.len());
        }
        for (row, protein) in output.tables.row.rows().iter().zip(&proteins) {
            prop_assert_eq!(row, &protein.expected_row());
        }
    }
}
