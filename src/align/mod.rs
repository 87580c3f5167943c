//! Pairwise alignment engine.
//!
//! One dynamic-programming model serves both alignment modes: the builder
//! fills a score matrix and a direction grid, and the traceback walks the
//! grid back to reconstruct alignments. Global mode produces exactly one
//! alignment; local mode produces one alignment per maximal-score cell.

pub mod matrix;
pub mod result;
pub mod scoring;
pub mod traceback;

pub use matrix::{build_matrices, AlignmentMode, DpMatrices, MaxScoreSet, ScoreMatrix};
pub use result::Alignment;
pub use scoring::{ScoringScheme, GAP};
pub use traceback::{global_traceback, local_traceback, TracebackDir, TracebackMatrix};

/// Align two sequences end to end, returning the single alignment selected
/// by the deterministic tie-break (diagonal, then gap in seq2, then gap in
/// seq1). Other equally-scoring alignments may exist.
pub fn align_global(seq1: &[u8], seq2: &[u8], scheme: &ScoringScheme) -> Alignment {
    let (matrices, _) = build_matrices(seq1, seq2, scheme, AlignmentMode::Global);
    global_traceback(&matrices.dirs, &matrices.scores, seq1, seq2)
}

/// Align the best-scoring substrings of two sequences, returning one
/// alignment per maximal-score cell in discovery order. Duplicate or empty
/// alignments are preserved; see the post-processing filters to remove them.
pub fn align_local(seq1: &[u8], seq2: &[u8], scheme: &ScoringScheme) -> Vec<Alignment> {
    let (matrices, max_set) = build_matrices(seq1, seq2, scheme, AlignmentMode::Local);
    let max_set = max_set.unwrap_or_default();

    max_set
        .cells
        .iter()
        .map(|&seed| local_traceback(&matrices.dirs, &matrices.scores, seq1, seq2, seed))
        .collect()
}
