use gene_aligner::{
    align, Aligner, AlignerConfig, AlignerError, AlignmentMode, AlignmentParams, Cost, Optimality,
    ScoringScheme, DEFAULT_INDEL, DEFAULT_MATCH,
};
use pretty_assertions::assert_eq;

#[test]
fn test_identical_full() {
    let result = align(b"AAA", b"AAA", false, 3).unwrap();
    assert_eq!(result.score, Cost::units(3 * DEFAULT_MATCH));
    assert_eq!(result.score.as_f64(), -9.0);
    assert_eq!(result.aligned_seq1_str(), "AAA");
    assert_eq!(result.aligned_seq2_str(), "AAA");
}

#[test]
fn test_two_matches_two_deletions() {
    let result = align(b"AAAA", b"AA", false, 4).unwrap();
    assert_eq!(result.score, Cost::units(2 * DEFAULT_MATCH + 2 * DEFAULT_INDEL));
    let stats = result.stats();
    assert_eq!(stats.matches, 2);
    assert_eq!(stats.deletions, 2);
}

#[test]
fn test_banded_agrees_with_full_on_short_input() {
    let banded = align(b"ACGT", b"AGT", true, 4).unwrap();
    let full = align(b"ACGT", b"AGT", false, 4).unwrap();
    assert_eq!(banded.score, full.score);
    assert_eq!(banded.optimality, Optimality::BandProven);
    assert_eq!(full.optimality, Optimality::Exact);
}

#[test]
fn test_empty_first_sequence() {
    let result = align(b"", b"GATTA", false, 5).unwrap();
    assert_eq!(result.score, Cost::units(5 * DEFAULT_INDEL));
    assert_eq!(result.aligned_seq1_str(), "-----");
    assert_eq!(result.aligned_seq2_str(), "GATTA");
}

#[test]
fn test_banded_rejects_divergent_lengths() {
    let err = align(b"ACGTACGTACGT", b"ACGT", true, 100).unwrap_err();
    assert!(matches!(
        err,
        AlignerError::BandExhausted {
            len1: 12,
            len2: 4,
            radius: 3
        }
    ));

    // Capping the length brings both ends back inside the band
    let result = align(b"ACGTACGTACGT", b"ACGT", true, 4).unwrap();
    assert_eq!(result.score, Cost::units(4 * DEFAULT_MATCH));
}

#[test]
fn test_custom_scoring_scheme() {
    let config = AlignerConfig::new()
        .with_scoring(ScoringScheme::new(0, 1, 1))
        .unwrap();
    let aligner = Aligner::new(config).unwrap();
    let params = AlignmentParams::new(AlignmentMode::Full, 100);

    // Unit costs give plain edit distance
    let result = aligner.align(b"kitten", b"sitting", params).unwrap();
    assert_eq!(result.score, Cost::units(3));
}

#[test]
fn test_preview_width() {
    let seq = "ACGT".repeat(50);
    let result = align(seq.as_bytes(), seq.as_bytes(), false, 1000).unwrap();
    assert_eq!(result.len(), 200);
    let (row1, row2) = result.preview(100);
    assert_eq!(row1.len(), 100);
    assert_eq!(row1, row2);
}
