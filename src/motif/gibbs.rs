use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Parameters for the Gibbs motif sampler
#[derive(Debug, Clone)]
pub struct GibbsConfig {
    /// Fixed motif window length
    pub motif_len: usize,
    /// Symbol alphabet; symbols outside it are ignored when counting
    pub alphabet: Vec<u8>,
    /// Uniform background probability of each symbol
    pub background: f64,
    /// RNG seed; runs are deterministic for a given seed
    pub seed: u64,
    /// Hard cap on sampling iterations
    pub max_iterations: usize,
}

impl Default for GibbsConfig {
    fn default() -> Self {
        Self {
            motif_len: 6,
            alphabet: b"ACGT".to_vec(),
            background: 0.25,
            seed: 20,
            max_iterations: 1000,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MotifError {
    /// The hold-one-out iteration needs at least two sequences
    #[error("motif sampling needs at least two sequences, found {found}")]
    TooFewSequences { found: usize },
    /// Every sequence must hold at least one full motif window
    #[error("sequence {index} is shorter ({len}) than the motif length {motif_len}")]
    SequenceTooShort {
        index: usize,
        len: usize,
        motif_len: usize,
    },
}

/// One discovered motif window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif {
    /// Index of the source sequence
    pub seq_index: usize,
    /// Start offset of the window within the source sequence
    pub start: usize,
    /// The window itself
    pub window: String,
}

/// Gibbs sampler over a set of sequences with one motif window each.
///
/// Each round holds one sequence out, builds a pseudo-count log-odds PSSM
/// from the remaining windows, rescans the held-out sequence with it, and
/// moves that sequence's window to the best-scoring start. Sampling stops
/// when the held-out sequence's best window equals its current one.
pub struct GibbsSampler {
    seqs: Vec<Vec<u8>>,
    config: GibbsConfig,
    rng: StdRng,
    positions: Vec<usize>,
}

impl GibbsSampler {
    pub fn new(seqs: Vec<Vec<u8>>, config: GibbsConfig) -> Result<Self, MotifError> {
        if seqs.len() < 2 {
            return Err(MotifError::TooFewSequences { found: seqs.len() });
        }
        for (index, seq) in seqs.iter().enumerate() {
            if seq.len() < config.motif_len {
                return Err(MotifError::SequenceTooShort {
                    index,
                    len: seq.len(),
                    motif_len: config.motif_len,
                });
            }
        }

        let rng = StdRng::seed_from_u64(config.seed);
        let positions = vec![0; seqs.len()];
        Ok(Self {
            seqs,
            config,
            rng,
            positions,
        })
    }

    /// One uniformly random window start per sequence
    fn pick_init_positions(&mut self) -> Vec<usize> {
        let motif_len = self.config.motif_len;
        let mut positions = Vec::with_capacity(self.seqs.len());
        for i in 0..self.seqs.len() {
            let upper = self.seqs[i].len() - motif_len;
            positions.push(self.rng.gen_range(0..=upper));
        }
        positions
    }

    /// Count matrix over the given motif windows, one row per alphabet
    /// symbol and one column per motif position, every count starting at 1
    pub fn count_matrix(&self, motifs: &[&[u8]]) -> Vec<Vec<f64>> {
        let mut counts =
            vec![vec![1.0; self.config.motif_len]; self.config.alphabet.len()];
        for motif in motifs {
            for (j, &symbol) in motif.iter().enumerate() {
                if let Some(k) = self.config.alphabet.iter().position(|&a| a == symbol) {
                    counts[k][j] += 1.0;
                }
            }
        }
        counts
    }

    /// Log2-odds position-specific scoring matrix from a count matrix.
    ///
    /// With pseudo-counts of 1 over k-1 windows each column sums to
    /// |alphabet| + k - 1, which normalizes counts to frequencies.
    pub fn pssm(&self, counts: &[Vec<f64>]) -> Vec<Vec<f64>> {
        let column_sum = (self.config.alphabet.len() + self.seqs.len() - 1) as f64;
        counts
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&count| (count / column_sum / self.config.background).log2())
                    .collect()
            })
            .collect()
    }

    /// Log-odds score of every motif-length window of a sequence.
    /// Symbols outside the alphabet contribute 0.
    pub fn score_windows(&self, seq: &[u8], pssm: &[Vec<f64>]) -> Vec<f64> {
        let motif_len = self.config.motif_len;
        (0..=seq.len() - motif_len)
            .map(|start| {
                seq[start..start + motif_len]
                    .iter()
                    .enumerate()
                    .map(|(j, &symbol)| {
                        self.config
                            .alphabet
                            .iter()
                            .position(|&a| a == symbol)
                            .map_or(0.0, |k| pssm[k][j])
                    })
                    .sum()
            })
            .collect()
    }

    /// Run the sampler to convergence (or the iteration cap) and return the
    /// final motif window of every sequence
    pub fn run(&mut self) -> Vec<Motif> {
        self.positions = self.pick_init_positions();
        let mut last_heldout: Option<usize> = None;

        for iteration in 1..=self.config.max_iterations {
            // Never hold the same sequence out twice in a row.
            let heldout = loop {
                let candidate = self.rng.gen_range(0..self.seqs.len());
                if Some(candidate) != last_heldout {
                    break candidate;
                }
            };
            last_heldout = Some(heldout);

            let motifs: Vec<&[u8]> = (0..self.seqs.len())
                .filter(|&i| i != heldout)
                .map(|i| self.window(i))
                .collect();
            let counts = self.count_matrix(&motifs);
            let pssm = self.pssm(&counts);
            let scores = self.score_windows(&self.seqs[heldout], &pssm);

            // First maximum on ties, so reruns are reproducible.
            let mut best = 0;
            for (start, &score) in scores.iter().enumerate() {
                if score > scores[best] {
                    best = start;
                }
            }

            debug!(
                "iteration {}: held out sequence {}, best window start {}",
                iteration, heldout, best
            );

            if self.positions[heldout] == best {
                debug!("converged after {} iterations", iteration);
                return self.motifs();
            }
            self.positions[heldout] = best;
        }

        warn!(
            "no convergence within {} iterations, reporting current windows",
            self.config.max_iterations
        );
        self.motifs()
    }

    fn window(&self, index: usize) -> &[u8] {
        let start = self.positions[index];
        &self.seqs[index][start..start + self.config.motif_len]
    }

    fn motifs(&self) -> Vec<Motif> {
        (0..self.seqs.len())
            .map(|index| Motif {
                seq_index: index,
                start: self.positions[index],
                window: String::from_utf8_lossy(self.window(index)).into_owned(),
            })
            .collect()
    }
}
