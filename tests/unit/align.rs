//! End-to-end tests for the alignment engine.

use psat::align::{align_global, align_local, ScoringScheme};
use psat::post::filter::{dedup, drop_empty};

#[test]
fn test_global_textbook_example() {
    // The classical Needleman-Wunsch example: GATTACA vs GCATGCU under
    // match 1 / mismatch -1 / gap -1 scores 0.
    let scheme = ScoringScheme::new(1, -1, -1);
    let alignment = align_global(b"GATTACA", b"GCATGCU", &scheme);

    assert_eq!(alignment.score, 0);
    assert_eq!(alignment.seq1, "G-ATTACA");
    assert_eq!(alignment.seq2, "GCAT-GCU");
}

#[test]
fn test_global_recovers_inputs() {
    let scheme = ScoringScheme::new(1, -1, -1);
    let alignment = align_global(b"GATTACA", b"GCATGCU", &scheme);

    assert_eq!(alignment.seq1.len(), alignment.seq2.len());
    let (degapped1, degapped2) = alignment.degapped();
    assert_eq!(degapped1, "GATTACA");
    assert_eq!(degapped2, "GCATGCU");
}

#[test]
fn test_global_empty_side_scores_gap_times_length() {
    let scheme = ScoringScheme::new(6, -3, -3);
    let alignment = align_global(b"GATTACA", b"", &scheme);

    assert_eq!(alignment.len(), 7);
    assert_eq!(alignment.seq2, "-------");
    assert_eq!(alignment.score, -3 * 7);
}

#[test]
fn test_local_textbook_example() {
    // The classical Smith-Waterman example: TGTTACGG vs GGTTGACTA under
    // match 3 / mismatch -3 / gap -2 peaks at 13 with GTT-AC / GTTGAC.
    let scheme = ScoringScheme::new(3, -3, -2);
    let alignments = align_local(b"TGTTACGG", b"GGTTGACTA", &scheme);

    assert_eq!(alignments.len(), 1);
    assert_eq!(alignments[0].score, 13);
    assert_eq!(alignments[0].seq1, "GTT-AC");
    assert_eq!(alignments[0].seq2, "GTTGAC");
}

#[test]
fn test_local_sides_are_contiguous_substrings() {
    let scheme = ScoringScheme::new(3, -3, -2);
    let seq1 = b"TGTTACGG";
    let seq2 = b"GGTTGACTA";

    for alignment in align_local(seq1, seq2, &scheme) {
        let (degapped1, degapped2) = alignment.degapped();
        assert!(String::from_utf8_lossy(seq1).contains(&degapped1));
        assert!(String::from_utf8_lossy(seq2).contains(&degapped2));
    }
}

#[test]
fn test_local_dissimilar_sequences_filterable() {
    // No shared symbols: the matrix is all zeros and every interior cell
    // seeds a trivial alignment, which the filters can discard.
    let scheme = ScoringScheme::new(1, -1, -1);
    let alignments = align_local(b"AAAA", b"TTTT", &scheme);

    assert_eq!(alignments.len(), 16);
    assert!(alignments.iter().all(|a| a.is_empty()));

    let kept = drop_empty(alignments.clone());
    assert!(kept.is_empty());

    let deduped = dedup(alignments);
    assert_eq!(deduped.len(), 1);
}

#[test]
fn test_rerun_is_bit_identical() {
    let scheme = ScoringScheme::new(2, -2, -1);
    let seq1 = b"ACGTGGTACCA";
    let seq2 = b"CGTAGGATCCA";

    assert_eq!(
        align_global(seq1, seq2, &scheme),
        align_global(seq1, seq2, &scheme)
    );
    assert_eq!(
        align_local(seq1, seq2, &scheme),
        align_local(seq1, seq2, &scheme)
    );
}
