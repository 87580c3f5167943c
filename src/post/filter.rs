use crate::align::Alignment;
use rustc_hash::FxHashSet;

/// Drop repeated alignments, keeping the first occurrence of each aligned
/// pair.
///
/// Adjacent maximal cells can reconstruct the same substring pair; the
/// engine reports them all, so deduplication is a caller-side choice.
pub fn dedup(alignments: Vec<Alignment>) -> Vec<Alignment> {
    let mut seen: FxHashSet<(String, String)> = FxHashSet::default();
    alignments
        .into_iter()
        .filter(|a| seen.insert((a.seq1.clone(), a.seq2.clone())))
        .collect()
}

/// Remove zero-length alignments, the seeds of an all-zero matrix
pub fn drop_empty(alignments: Vec<Alignment>) -> Vec<Alignment> {
    alignments.into_iter().filter(|a| !a.is_empty()).collect()
}
