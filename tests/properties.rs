use gene_aligner::{
    Aligner, AlignerConfig, AlignerError, AlignmentMode, AlignmentParams, AlignmentResult,
    BandedAligner, Cost, FullAligner, Optimality, ScoringScheme, TracebackOperation, GAP,
};
use proptest::prelude::*;

fn strip_gaps(row: &[u8]) -> Vec<u8> {
    row.iter().copied().filter(|&b| b != GAP).collect()
}

fn assert_well_formed(result: &AlignmentResult, seq1: &[u8], seq2: &[u8]) {
    assert_eq!(result.aligned_seq1.len(), result.aligned_seq2.len());
    assert_eq!(result.aligned_seq1.len(), result.operations.len());
    assert_eq!(strip_gaps(&result.aligned_seq1), seq1);
    assert_eq!(strip_gaps(&result.aligned_seq2), seq2);
    for (a, b) in result.aligned_seq1.iter().zip(&result.aligned_seq2) {
        assert!(!(*a == GAP && *b == GAP), "column with two gaps");
    }
}

fn sequence() -> impl Strategy<Value = Vec<u8>> {
    "[ACGTacgt]{0,40}".prop_map(String::into_bytes)
}

proptest! {
    #[test]
    fn full_alignment_reproduces_inputs(seq1 in sequence(), seq2 in sequence()) {
        let result = FullAligner::new(ScoringScheme::default()).align(&seq1, &seq2).unwrap();
        assert_well_formed(&result, &seq1, &seq2);
    }

    #[test]
    fn banded_alignment_reproduces_inputs(seq1 in sequence(), seq2 in sequence(), radius in 0usize..6) {
        let aligner = BandedAligner::new(ScoringScheme::default(), radius).unwrap();
        match aligner.align(&seq1, &seq2) {
            Ok(result) => assert_well_formed(&result, &seq1, &seq2),
            Err(AlignerError::BandExhausted { .. }) => {
                prop_assert!(seq1.len().abs_diff(seq2.len()) > radius);
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn banded_never_beats_full(seq1 in sequence(), seq2 in sequence(), radius in 0usize..6) {
        // Full mode never folds case, so compare under the same rule
        let scoring = ScoringScheme::default().case_sensitive();
        let full = FullAligner::new(scoring).align(&seq1, &seq2).unwrap();
        let banded = BandedAligner::new(scoring, radius).unwrap();
        if let Ok(banded) = banded.align(&seq1, &seq2) {
            prop_assert!(banded.score >= full.score);
            if banded.optimality == Optimality::BandProven {
                prop_assert_eq!(banded.score, full.score);
            }
        }
    }

    #[test]
    fn self_alignment_is_all_matches(seq in sequence()) {
        let result = FullAligner::new(ScoringScheme::default()).align(&seq, &seq).unwrap();
        prop_assert_eq!(result.score, Cost::units(-3) * seq.len());
        prop_assert!(result.operations.iter().all(|op| *op == TracebackOperation::Match));
    }

    #[test]
    fn alignment_against_empty_is_all_gaps(seq in sequence()) {
        let result = FullAligner::new(ScoringScheme::default()).align(&seq, b"").unwrap();
        prop_assert_eq!(result.score, Cost::units(5) * seq.len());
        prop_assert_eq!(&result.aligned_seq1, &seq);
        prop_assert!(result.aligned_seq2.iter().all(|&b| b == GAP));
    }

    #[test]
    fn score_only_agrees_with_traceback(seq1 in sequence(), seq2 in sequence()) {
        let scoring = ScoringScheme::default();
        let full = FullAligner::new(scoring);
        prop_assert_eq!(full.score(&seq1, &seq2), full.align(&seq1, &seq2).unwrap().score);

        let banded = BandedAligner::new(scoring, 3).unwrap();
        if let Ok(result) = banded.align(&seq1, &seq2) {
            prop_assert_eq!(banded.score(&seq1, &seq2).unwrap(), result.score);
        }
    }

    #[test]
    fn extending_both_prefixes_costs_at_most_a_substitution(
        seq1 in "[ACGT]{1,30}".prop_map(String::into_bytes),
        seq2 in "[ACGT]{1,30}".prop_map(String::into_bytes),
    ) {
        let aligner = Aligner::new(AlignerConfig::default()).unwrap();
        let shorter = seq1.len().min(seq2.len()) as i64;
        let score_at = |length: i64| {
            aligner
                .align(&seq1, &seq2, AlignmentParams::new(AlignmentMode::Full, length))
                .unwrap()
                .score
        };
        for length in 1..=shorter {
            prop_assert!(score_at(length) <= score_at(length - 1) + Cost::units(1));
        }
    }
}
