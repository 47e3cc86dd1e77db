//! Unit tests for report generation
//!
//! These run real alignments through the writers and check the rendered
//! text, so they cover the align -> report seam rather than formatting
//! in isolation.

use gosat::report::{
    write_pairwise, write_tabular, write_tabular_with_comments, AlignedPair, PairwiseConfig,
    ReportContext,
};

use crate::helpers::align_dna;

fn pair_from(query_id: &str, subject_id: &str, query: &[u8], subject: &[u8]) -> AlignedPair {
    AlignedPair {
        query_id: query_id.to_string(),
        subject_id: subject_id.to_string(),
        alignment: align_dna(query, subject, 10.0, 0.5),
    }
}

#[test]
fn test_pairwise_report_for_gapless_pair() {
    let pairs = vec![pair_from("q1", "s1", b"GATTACA", b"GCATGCT")];
    let context = ReportContext {
        query_name: Some("query.fasta".to_string()),
        subject_name: Some("subject.fasta".to_string()),
        version: Some("0.1.0".to_string()),
        ..Default::default()
    };

    let mut output = Vec::new();
    write_pairwise(&pairs, &mut output, &PairwiseConfig::default(), &context).unwrap();
    let text = String::from_utf8(output).unwrap();

    assert!(text.starts_with("NEEDLE 0.1.0\n"));
    assert!(text.contains("Query= q1"));
    assert!(text.contains("Subject= s1"));
    assert!(text.contains(" Score = -1.0"));
    assert!(text.contains(" Identities = 3/7 (43%), Gaps = 0/7 (0%)"));
    assert!(text.contains("Query     1  GATTACA  7"));
    assert!(text.contains("Sbjct     1  GCATGCT  7"));
}

#[test]
fn test_pairwise_report_for_gapped_pair() {
    // Cheap gap opens pull the alignment apart into three gap runs.
    let pairs = vec![AlignedPair {
        query_id: "q1".to_string(),
        subject_id: "s1".to_string(),
        alignment: align_dna(b"GATTACA", b"GCATGCT", 2.0, 0.5),
    }];

    let mut output = Vec::new();
    write_pairwise(
        &pairs,
        &mut output,
        &PairwiseConfig::default(),
        &ReportContext::default(),
    )
    .unwrap();
    let text = String::from_utf8(output).unwrap();

    assert!(text.contains(" Score = 12.5"));
    assert!(text.contains(" Identities = 4/10 (40%), Gaps = 6/10 (60%)"));
    assert!(text.contains("Query     1  G-AT--TACA  7"));
    assert!(text.contains("Sbjct     1  GCATGCT---  7"));
    assert!(text.contains("| ||  |"));
}

#[test]
fn test_tabular_report_lines_in_input_order() {
    let pairs = vec![
        pair_from("q1", "s1", b"GATTACA", b"GCATGCT"),
        pair_from("q1", "s2", b"GATTACA", b"GATTACA"),
    ];

    let mut output = Vec::new();
    write_tabular(&pairs, &mut output).unwrap();
    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "q1\ts1\t-1.0\t7\t42.857\t3\t4\t0\t0");
    assert_eq!(lines[1], "q1\ts2\t35.0\t7\t100.000\t7\t0\t0\t0");
}

#[test]
fn test_commented_tabular_report() {
    let pairs = vec![pair_from("q1", "s1", b"GATTACA", b"GCATGCT")];
    let context = ReportContext {
        query_name: Some("query.fasta".to_string()),
        subject_name: Some("subject.fasta".to_string()),
        version: Some("0.1.0".to_string()),
        ..Default::default()
    };

    let mut output = Vec::new();
    write_tabular_with_comments(&pairs, &mut output, &context).unwrap();
    let text = String::from_utf8(output).unwrap();

    assert!(text.starts_with("# NEEDLE 0.1.0\n"));
    assert!(text.contains("# Query: query.fasta"));
    assert!(text.contains("# 1 alignments"));
    assert!(text.ends_with("q1\ts1\t-1.0\t7\t42.857\t3\t4\t0\t0\n"));
}

#[test]
fn test_pairwise_wraps_long_alignments() {
    let query: Vec<u8> = crate::helpers::make_nucleotide_sequence(100);
    let pairs = vec![pair_from("q1", "s1", &query, &query)];

    let mut output = Vec::new();
    write_pairwise(
        &pairs,
        &mut output,
        &PairwiseConfig::default(),
        &ReportContext::default(),
    )
    .unwrap();
    let text = String::from_utf8(output).unwrap();

    // 100 columns wrap at 60 into two chunks.
    assert!(text.contains("Query     1  "));
    assert!(text.contains("Query    61  "));
    assert!(text.contains("  60\n"));
    assert!(text.contains("  100\n"));
}
