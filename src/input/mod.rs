//! FASTA input boundary.
//!
//! The alignment engine itself has no failure modes; everything that can go
//! wrong with user input is reported here.

use anyhow::{Context, Result};
use bio::io::fasta;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// An alignment request needs a pair of sequences
    #[error("expected at least two sequences, found {found}")]
    TooFewSequences { found: usize },
}

/// Read every record from a FASTA file
pub fn read_records(path: &Path) -> Result<Vec<fasta::Record>> {
    let reader = fasta::Reader::from_file(path)
        .with_context(|| format!("failed to open FASTA file {}", path.display()))?;

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record
            .with_context(|| format!("invalid FASTA record in {}", path.display()))?;
        records.push(record);
    }
    Ok(records)
}

/// Read the first two records of a FASTA file, the pair to align.
///
/// Supplying fewer than two sequences is a precondition violation reported
/// here, at the boundary, not by the engine.
pub fn read_sequence_pair(path: &Path) -> Result<(fasta::Record, fasta::Record)> {
    let mut records = read_records(path)?;
    if records.len() < 2 {
        return Err(InputError::TooFewSequences {
            found: records.len(),
        }
        .into());
    }

    let second = records.swap_remove(1);
    let first = records.swap_remove(0);
    Ok((first, second))
}
