//! Unit tests for the global alignment engine
//!
//! Fixed expectations below were computed by hand from the recurrence
//! and cross-checked against EMBOSS needle behavior for the classic
//! textbook pairs.

use crate::helpers::{
    align_dna, align_protein, align_with, assert_alignment_consistent, make_nucleotide_sequence,
};
use gosat::align::{align_global, GlobalAlignConfig};
use gosat::error::AlignError;
use gosat::scoring::{blosum62, ednafull};

use proptest::{prop_assert, prop_assert_eq, proptest};

#[test]
fn test_gattaca_default_penalties() {
    // With open 10 the two mismatch columns are cheaper than any gap.
    let result = align_dna(b"GATTACA", b"GCATGCT", 10.0, 0.5);
    assert_eq!(result.score, -1.0);
    assert_eq!(result.aligned_query, "GATTACA");
    assert_eq!(result.aligned_subject, "GCATGCT");
    assert_eq!(result.matches, 3);
    assert_eq!(result.mismatches, 4);
    assert_eq!(result.gaps, 0);
    assert_eq!(result.gap_opens, 0);
    assert_alignment_consistent(&result, b"GATTACA", b"GCATGCT");
}

#[test]
fn test_gattaca_cheap_gaps() {
    // Dropping the open penalty to 2 makes gap runs worthwhile.
    let result = align_dna(b"GATTACA", b"GCATGCT", 2.0, 0.5);
    assert_eq!(result.score, 12.5);
    assert_eq!(result.aligned_query, "G-AT--TACA");
    assert_eq!(result.aligned_subject, "GCATGCT---");
    assert_eq!(result.matches, 4);
    assert_eq!(result.mismatches, 0);
    assert_eq!(result.gaps, 6);
    assert_eq!(result.gap_opens, 3);
    assert_alignment_consistent(&result, b"GATTACA", b"GCATGCT");
}

#[test]
fn test_protein_pair_with_two_gap_runs() {
    let result = align_protein(b"PRTEINS", b"PRTWPSEIN", 11.0, 1.0);
    assert_eq!(result.score, 8.0);
    assert_eq!(result.aligned_query, "PRT---EINS");
    assert_eq!(result.aligned_subject, "PRTWPSEIN-");
    assert_eq!(result.matches, 6);
    assert_eq!(result.mismatches, 0);
    assert_eq!(result.gaps, 4);
    assert_eq!(result.gap_opens, 2);
    assert_eq!(result.len(), 10);
    assert_alignment_consistent(&result, b"PRTEINS", b"PRTWPSEIN");
}

#[test]
fn test_hemoglobin_fragment_pair() {
    let result = align_protein(b"HEAGAWGHEE", b"PAWHEAE", 10.0, 1.0);
    assert_eq!(result.score, 3.0);
    assert_eq!(result.aligned_query, "HEAGAWGHEE");
    assert_eq!(result.aligned_subject, "---PAWHEAE");
    assert_eq!(result.matches, 3);
    assert_eq!(result.mismatches, 4);
    assert_eq!(result.gaps, 3);
    assert_eq!(result.gap_opens, 1);
    assert_alignment_consistent(&result, b"HEAGAWGHEE", b"PAWHEAE");
}

#[test]
fn test_empty_query() {
    let result = align_dna(b"", b"ACGT", 10.0, 0.5);
    assert_eq!(result.score, -11.5);
    assert_eq!(result.aligned_query, "----");
    assert_eq!(result.aligned_subject, "ACGT");
    assert_eq!(result.matches, 0);
    assert_eq!(result.gaps, 4);
    assert_eq!(result.gap_opens, 1);
}

#[test]
fn test_empty_subject() {
    let result = align_dna(b"ACGT", b"", 10.0, 0.5);
    assert_eq!(result.score, -11.5);
    assert_eq!(result.aligned_query, "ACGT");
    assert_eq!(result.aligned_subject, "----");
    assert_eq!(result.gaps, 4);
    assert_eq!(result.gap_opens, 1);
}

#[test]
fn test_both_empty() {
    let result = align_dna(b"", b"", 10.0, 0.5);
    assert_eq!(result.score, 0.0);
    assert!(result.is_empty());
    assert_eq!(result.gap_opens, 0);
}

#[test]
fn test_single_vs_triple() {
    let result = align_dna(b"A", b"AAA", 10.0, 0.5);
    assert_eq!(result.score, -5.5);
    assert_eq!(result.aligned_query, "--A");
    assert_eq!(result.aligned_subject, "AAA");
    assert_eq!(result.matches, 1);
    assert_eq!(result.gaps, 2);
    assert_eq!(result.gap_opens, 1);
}

#[test]
fn test_trailing_subject_gap() {
    let result = align_dna(b"ACGT", b"AC", 10.0, 0.5);
    assert_eq!(result.score, -0.5);
    assert_eq!(result.aligned_query, "ACGT");
    assert_eq!(result.aligned_subject, "AC--");
    assert_eq!(result.matches, 2);
    assert_eq!(result.mismatches, 0);
    assert_eq!(result.gaps, 2);
    assert_eq!(result.gap_opens, 1);
}

#[test]
fn test_leading_subject_gap_on_ties() {
    // All columns tie, so the diagonal preference during the backward
    // walk places the gap run at the front.
    let result = align_dna(b"AAAA", b"AA", 10.0, 0.5);
    assert_eq!(result.score, -0.5);
    assert_eq!(result.aligned_query, "AAAA");
    assert_eq!(result.aligned_subject, "--AA");
    assert_eq!(result.matches, 2);
    assert_eq!(result.gaps, 2);
    assert_eq!(result.gap_opens, 1);
}

#[test]
fn test_identity_percent() {
    let result = align_dna(b"ACGTACGT", b"ACGTACGT", 10.0, 0.5);
    assert_eq!(result.score, 40.0);
    assert_eq!(result.identity(), 100.0);

    let result = align_dna(b"GATTACA", b"GCATGCT", 10.0, 0.5);
    assert!((result.identity() - 3.0 / 7.0 * 100.0).abs() < 1e-9);
}

#[test]
fn test_iupac_ambiguity_codes_score() {
    // N scores -1 against itself in EDNAFULL; ambiguity codes are
    // ordinary symbols, never a validation error.
    let result = align_dna(b"ACGTN", b"ACGTN", 10.0, 0.5);
    assert_eq!(result.score, 19.0);
    assert_eq!(result.matches, 5);
}

#[test]
fn test_unknown_symbol_reports_position() {
    let table = ednafull();
    let err = align_global(b"ACGT", b"ACUT", &table, &GlobalAlignConfig::default()).unwrap_err();
    match err {
        AlignError::UnknownSymbol { symbol, position } => {
            assert_eq!(symbol, 'U');
            assert_eq!(position, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_matrix_budget() {
    let table = ednafull();
    let config = GlobalAlignConfig {
        max_matrix_cells: 100,
        ..Default::default()
    };
    let query = make_nucleotide_sequence(32);
    let err = align_global(&query, &query, &table, &config).unwrap_err();
    assert!(matches!(err, AlignError::MatrixTooLarge { .. }));

    // At the boundary the alignment still runs: 10 * 10 <= 100.
    let query = make_nucleotide_sequence(9);
    assert!(align_global(&query, &query, &table, &config).is_ok());
}

#[test]
fn test_invalid_penalties() {
    let table = ednafull();
    for (open, extend) in [(-1.0, 0.5), (10.0, -0.5), (f64::NAN, 0.5), (10.0, f64::NAN)] {
        let config = GlobalAlignConfig {
            gap_open: open,
            gap_extend: extend,
            ..Default::default()
        };
        let err = align_global(b"A", b"A", &table, &config).unwrap_err();
        assert!(
            matches!(err, AlignError::InvalidPenalty { .. }),
            "penalties ({open}, {extend}) accepted"
        );
    }
}

#[test]
fn test_blosum62_self_alignment() {
    // W scores 11 against itself, C scores 9.
    let result = align_protein(b"WCW", b"WCW", 11.0, 1.0);
    assert_eq!(result.score, 31.0);
    assert_eq!(result.matches, 3);
}

#[test]
fn test_score_is_symmetric_for_fixed_pair() {
    let forward = align_dna(b"GATTACA", b"GCATGCT", 10.0, 0.5);
    let backward = align_dna(b"GCATGCT", b"GATTACA", 10.0, 0.5);
    assert_eq!(forward.score, backward.score);
}

proptest! {
    #[test]
    fn prop_test_alignment_consistency(
        q in "[ACGT]{0,32}",
        s in "[ACGT]{0,32}",
    ) {
        let result = align_dna(q.as_bytes(), s.as_bytes(), 10.0, 0.5);
        assert_alignment_consistent(&result, q.as_bytes(), s.as_bytes());
        prop_assert!(result.len() >= q.len().max(s.len()));
        prop_assert!(result.len() <= q.len() + s.len());
        prop_assert!(result.gap_opens <= result.gaps);
    }

    #[test]
    fn prop_test_score_symmetry(
        q in "[ACGT]{0,24}",
        s in "[ACGT]{0,24}",
    ) {
        // EDNAFULL is symmetric, so swapping the inputs mirrors the
        // alignment without changing the optimum.
        let forward = align_dna(q.as_bytes(), s.as_bytes(), 10.0, 0.5);
        let backward = align_dna(s.as_bytes(), q.as_bytes(), 10.0, 0.5);
        prop_assert_eq!(forward.score, backward.score);
    }

    #[test]
    fn prop_test_self_alignment_is_gapless(q in "[ACGT]{1,32}") {
        let result = align_dna(q.as_bytes(), q.as_bytes(), 10.0, 0.5);
        prop_assert_eq!(result.score, 5.0 * q.len() as f64);
        prop_assert_eq!(result.matches, q.len());
        prop_assert_eq!(result.gaps, 0);
        prop_assert_eq!(result.gap_opens, 0);
    }

    #[test]
    fn prop_test_cheaper_gaps_never_lower_the_score(
        q in "[ACGT]{0,24}",
        s in "[ACGT]{0,24}",
    ) {
        let expensive = align_dna(q.as_bytes(), s.as_bytes(), 10.0, 0.5);
        let cheap = align_dna(q.as_bytes(), s.as_bytes(), 2.0, 0.5);
        prop_assert!(cheap.score >= expensive.score);
    }

    #[test]
    fn prop_test_scores_are_half_integral(
        q in "[ACGT]{0,24}",
        s in "[ACGT]{0,24}",
    ) {
        // Integer substitution scores and a 0.5 extension penalty keep
        // every reachable score on the 0.5 grid, which is why exact
        // equality is sound in these tests.
        let result = align_dna(q.as_bytes(), s.as_bytes(), 10.0, 0.5);
        let doubled = result.score * 2.0;
        prop_assert_eq!(doubled, doubled.round());
    }
}

#[test]
fn test_gap_run_stays_contiguous() {
    // Several placements of the two gap columns tie at -4; ties between
    // opening and continuing keep the continuation, so both land in one
    // run.
    let result = align_with(&blosum62(), b"AA", b"AARA", 11.0, 1.0);
    assert_eq!(result.score, -4.0);
    assert_eq!(result.aligned_query, "A--A");
    assert_eq!(result.aligned_subject, "AARA");
    assert_eq!(result.gap_opens, 1);
    assert_eq!(result.gaps, 2);
    assert_alignment_consistent(&result, b"AA", b"AARA");
}
