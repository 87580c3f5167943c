use anyhow::Result;
use clap::Args;
use log::info;
use std::io::Write;
use std::path::PathBuf;

use crate::align::{align_global, ScoringScheme};
use crate::input::read_sequence_pair;
use crate::report::pairwise::{write_alignment, PairwiseConfig, DEFAULT_LINE_LENGTH};

use super::open_output;

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// FASTA file holding the two sequences to align
    pub input: PathBuf,
    /// Score for identical symbols
    #[arg(long, default_value_t = 6)]
    pub match_score: i32,
    /// Score for differing symbols
    #[arg(long, default_value_t = -3)]
    pub mismatch: i32,
    /// Cost of one gap step
    #[arg(long, default_value_t = -3)]
    pub gap: i32,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// Alignment columns per output line
    #[arg(long, default_value_t = DEFAULT_LINE_LENGTH)]
    pub line_length: usize,
}

pub fn run(args: GlobalArgs) -> Result<()> {
    let (first, second) = read_sequence_pair(&args.input)?;
    let scheme = ScoringScheme::new(args.match_score, args.mismatch, args.gap);

    info!(
        "global alignment of {} ({} bp) against {} ({} bp)",
        first.id(),
        first.seq().len(),
        second.id(),
        second.seq().len()
    );

    let alignment = align_global(first.seq(), second.seq(), &scheme);

    let config = PairwiseConfig {
        line_length: args.line_length,
    };
    let mut writer = open_output(&args.out)?;
    write_alignment(&mut writer, &alignment, &config)?;
    writer.flush()?;
    Ok(())
}
