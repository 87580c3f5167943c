use super::matrix::ScoreMatrix;
use super::result::Alignment;
use super::scoring::GAP;

/// Direction a DP cell's score came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracebackDir {
    /// From cell (i-1, j-1): consume one symbol of each sequence
    Diag,
    /// From cell (i, j-1): consume seq1[j-1] opposite a gap in seq2
    Left,
    /// From cell (i-1, j): consume seq2[i-1] opposite a gap in seq1
    Up,
    /// End of alignment
    Stop,
}

/// Direction grid filled alongside the score matrix
pub struct TracebackMatrix {
    data: Vec<TracebackDir>,
    rows: usize,
    cols: usize,
}

impl TracebackMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![TracebackDir::Stop; rows * cols],
            rows,
            cols,
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> TracebackDir {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, dir: TracebackDir) {
        self.data[row * self.cols + col] = dir;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

/// Reconstruct the single global alignment by walking the direction grid
/// from the bottom-right corner to the origin.
///
/// Border cells carry Left/Up directions, so a walk that exhausts one
/// sequence keeps consuming the other against gaps until it reaches (0, 0).
/// Characters are discovered last-to-first and reversed before return.
pub fn global_traceback(
    dirs: &TracebackMatrix,
    scores: &ScoreMatrix,
    seq1: &[u8],
    seq2: &[u8],
) -> Alignment {
    let mut i = dirs.rows() - 1;
    let mut j = dirs.cols() - 1;
    let score = scores.get(i, j);

    let mut aligned1 = Vec::with_capacity(i + j);
    let mut aligned2 = Vec::with_capacity(i + j);

    loop {
        match dirs.get(i, j) {
            TracebackDir::Diag => {
                aligned1.push(seq1[j - 1]);
                aligned2.push(seq2[i - 1]);
                i -= 1;
                j -= 1;
            }
            TracebackDir::Left => {
                aligned1.push(seq1[j - 1]);
                aligned2.push(GAP);
                j -= 1;
            }
            TracebackDir::Up => {
                aligned1.push(GAP);
                aligned2.push(seq2[i - 1]);
                i -= 1;
            }
            TracebackDir::Stop => break,
        }
    }

    aligned1.reverse();
    aligned2.reverse();

    Alignment::from_bytes(aligned1, aligned2, score)
}

/// Reconstruct one local alignment starting from a maximal-score seed cell.
///
/// A cell scoring 0 is a restart point: the walk stops there without
/// consuming it. A seed that itself scores 0 yields an empty alignment.
pub fn local_traceback(
    dirs: &TracebackMatrix,
    scores: &ScoreMatrix,
    seq1: &[u8],
    seq2: &[u8],
    seed: (usize, usize),
) -> Alignment {
    let (mut i, mut j) = seed;
    let score = scores.get(i, j);

    let mut aligned1 = Vec::new();
    let mut aligned2 = Vec::new();

    while scores.get(i, j) != 0 {
        match dirs.get(i, j) {
            TracebackDir::Diag => {
                aligned1.push(seq1[j - 1]);
                aligned2.push(seq2[i - 1]);
                i -= 1;
                j -= 1;
            }
            TracebackDir::Left => {
                aligned1.push(seq1[j - 1]);
                aligned2.push(GAP);
                j -= 1;
            }
            TracebackDir::Up => {
                aligned1.push(GAP);
                aligned2.push(seq2[i - 1]);
                i -= 1;
            }
            TracebackDir::Stop => break,
        }
    }

    aligned1.reverse();
    aligned2.reverse();

    Alignment::from_bytes(aligned1, aligned2, score)
}
