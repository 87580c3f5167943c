use anyhow::Result;
use clap::Args;
use log::info;
use std::io::Write;
use std::path::PathBuf;

use crate::align::{align_local, ScoringScheme};
use crate::input::read_sequence_pair;
use crate::post::filter::{dedup, drop_empty};
use crate::report::pairwise::{write_alignment_list, PairwiseConfig, DEFAULT_LINE_LENGTH};

use super::open_output;

#[derive(Args, Debug)]
pub struct LocalArgs {
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
    /// Report each distinct aligned pair once
    #[arg(long, default_value_t = false)]
    pub dedup: bool,
    /// Drop empty alignments (produced when no substrings score above zero)
    #[arg(long, default_value_t = false)]
    pub skip_empty: bool,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// Alignment columns per output line
    #[arg(long, default_value_t = DEFAULT_LINE_LENGTH)]
    pub line_length: usize,
}

pub fn run(args: LocalArgs) -> Result<()> {
    let (first, second) = read_sequence_pair(&args.input)?;
    let scheme = ScoringScheme::new(args.match_score, args.mismatch, args.gap);

    info!(
        "local alignment of {} ({} bp) against {} ({} bp)",
        first.id(),
        first.seq().len(),
        second.id(),
        second.seq().len()
    );

    let mut alignments = align_local(first.seq(), second.seq(), &scheme);
    info!(
        "{} maximal alignment(s) with score {}",
        alignments.len(),
        alignments.first().map(|a| a.score).unwrap_or(0)
    );

    if args.skip_empty {
        alignments = drop_empty(alignments);
    }
    if args.dedup {
        alignments = dedup(alignments);
    }

    let config = PairwiseConfig {
        line_length: args.line_length,
    };
    let mut writer = open_output(&args.out)?;
    write_alignment_list(&mut writer, &alignments, &config)?;
    writer.flush()?;
    Ok(())
}
