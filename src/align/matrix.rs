use super::scoring::ScoringScheme;
use super::traceback::{TracebackDir, TracebackMatrix};

/// Alignment mode, controlling border initialization, the zero floor, and
/// whether maximal cells are tracked during the fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentMode {
    /// End-to-end alignment (Needleman-Wunsch)
    Global,
    /// Best-substring alignment (Smith-Waterman)
    Local,
}

/// DP score matrix with seq2 along rows and seq1 along columns; cell (i, j)
/// holds the best score for aligning seq2[..i] against seq1[..j]
pub struct ScoreMatrix {
    data: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl ScoreMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        self.data[row * self.cols + col] = value;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

/// Maximum cell value of a local-mode matrix and every cell attaining it,
/// in row-major discovery order.
///
/// A strictly greater score resets the set; an equal score appends. The
/// initial maximum is 0 with no cells, so an all-zero matrix reports every
/// interior cell and each one seeds a trivial empty alignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaxScoreSet {
    pub score: i32,
    pub cells: Vec<(usize, usize)>,
}

/// Score and direction grids produced by one fill
pub struct DpMatrices {
    pub scores: ScoreMatrix,
    pub dirs: TracebackMatrix,
}

/// Fill the DP matrices for seq1 vs seq2 under the given scheme and mode.
///
/// Recurrence for cell (i, j), with g the gap penalty:
///
/// ```text
/// diag = M[i-1][j-1] + score(seq1[j-1], seq2[i-1])
/// left = M[i][j-1]   + g      // gap in seq2
/// up   = M[i-1][j]   + g      // gap in seq1
/// ```
///
/// Global mode takes the maximum of the three and seeds the border with
/// multiples of g; local mode clamps at 0 (restart) and zeroes the border.
/// Ties are resolved diagonal first, then left, then up; the winning term
/// is recorded in the direction grid so traceback never re-derives it.
/// Local mode also returns the maximal score and the cells attaining it.
pub fn build_matrices(
    seq1: &[u8],
    seq2: &[u8],
    scheme: &ScoringScheme,
    mode: AlignmentMode,
) -> (DpMatrices, Option<MaxScoreSet>) {
    let rows = seq2.len() + 1;
    let cols = seq1.len() + 1;
    let g = scheme.gap_penalty;

    let mut scores = ScoreMatrix::new(rows, cols);
    let mut dirs = TracebackMatrix::new(rows, cols);

    if mode == AlignmentMode::Global {
        // Closed-form border: linear gap cost makes it equal to the
        // step-wise initialization.
        for i in 1..rows {
            scores.set(i, 0, g * i as i32);
            dirs.set(i, 0, TracebackDir::Up);
        }
        for j in 1..cols {
            scores.set(0, j, g * j as i32);
            dirs.set(0, j, TracebackDir::Left);
        }
    }

    let mut max = MaxScoreSet::default();

    for i in 1..rows {
        for j in 1..cols {
            let diag = scores.get(i - 1, j - 1) + scheme.score(seq1[j - 1], seq2[i - 1]);
            let left = scores.get(i, j - 1) + g;
            let up = scores.get(i - 1, j) + g;

            let mut best = diag.max(left).max(up);
            if mode == AlignmentMode::Local && best < 0 {
                best = 0;
            }
            scores.set(i, j, best);

            let dir = if mode == AlignmentMode::Local && best == 0 {
                TracebackDir::Stop
            } else if best == diag {
                TracebackDir::Diag
            } else if best == left {
                TracebackDir::Left
            } else {
                TracebackDir::Up
            };
            dirs.set(i, j, dir);

            if mode == AlignmentMode::Local {
                if best > max.score {
                    max.score = best;
                    max.cells.clear();
                    max.cells.push((i, j));
                } else if best == max.score {
                    max.cells.push((i, j));
                }
            }
        }
    }

    let max_set = match mode {
        AlignmentMode::Global => None,
        AlignmentMode::Local => Some(max),
    };

    (DpMatrices { scores, dirs }, max_set)
}
