//! Pairwise alignment output.
//!
//! Renders an alignment as wrapped blocks of the two gapped sequences with
//! a midline marking identical columns.

use crate::align::{Alignment, GAP};
use std::io::{self, Write};

/// Line length for alignment display
pub const DEFAULT_LINE_LENGTH: usize = 60;

/// Configuration for pairwise output
#[derive(Debug, Clone, Copy)]
pub struct PairwiseConfig {
    /// Alignment columns per display line
    pub line_length: usize,
}

impl Default for PairwiseConfig {
    fn default() -> Self {
        Self {
            line_length: DEFAULT_LINE_LENGTH,
        }
    }
}

/// Write one alignment as sequence/midline/sequence blocks
pub fn write_alignment<W: Write>(
    writer: &mut W,
    alignment: &Alignment,
    config: &PairwiseConfig,
) -> io::Result<()> {
    writeln!(writer, "Score = {}", alignment.score)?;

    if alignment.is_empty() {
        writeln!(writer, "(empty alignment)")?;
        writeln!(writer)?;
        return Ok(());
    }

    let width = config.line_length.max(1);
    for start in (0..alignment.len()).step_by(width) {
        let end = (start + width).min(alignment.len());
        let line1 = &alignment.seq1[start..end];
        let line2 = &alignment.seq2[start..end];
        let midline: String = line1
            .bytes()
            .zip(line2.bytes())
            .map(|(a, b)| if a == b && a != GAP { '|' } else { ' ' })
            .collect();

        writeln!(writer, "{}", line1)?;
        writeln!(writer, "{}", midline)?;
        writeln!(writer, "{}", line2)?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Write a numbered list of local alignments in seed order
pub fn write_alignment_list<W: Write>(
    writer: &mut W,
    alignments: &[Alignment],
    config: &PairwiseConfig,
) -> io::Result<()> {
    if alignments.is_empty() {
        writeln!(writer, "No alignments found.")?;
        return Ok(());
    }

    for (index, alignment) in alignments.iter().enumerate() {
        writeln!(writer, "Alignment {}:", index + 1)?;
        write_alignment(writer, alignment, config)?;
    }
    Ok(())
}
