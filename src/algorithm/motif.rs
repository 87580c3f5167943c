use anyhow::{Context, Result};
use clap::Args;
use log::info;
use std::io::Write;
use std::path::PathBuf;

use crate::input::read_records;
use crate::motif::{GibbsConfig, GibbsSampler};

use super::open_output;

#[derive(Args, Debug)]
pub struct MotifArgs {
    /// FASTA file holding the sequences to search
    pub input: PathBuf,
    /// Motif window length
    #[arg(long, default_value_t = 6)]
    pub motif_len: usize,
    /// RNG seed; reruns with the same seed give identical results
    #[arg(long, default_value_t = 20)]
    pub seed: u64,
    /// Uniform background probability of each symbol
    #[arg(long, default_value_t = 0.25)]
    pub background: f64,
    /// Give up after this many sampling iterations
    #[arg(long, default_value_t = 1000)]
    pub max_iterations: usize,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: MotifArgs) -> Result<()> {
    let records = read_records(&args.input)?;
    let seqs: Vec<Vec<u8>> = records.iter().map(|r| r.seq().to_vec()).collect();

    info!(
        "motif search over {} sequence(s), window length {}",
        seqs.len(),
        args.motif_len
    );

    let config = GibbsConfig {
        motif_len: args.motif_len,
        seed: args.seed,
        background: args.background,
        max_iterations: args.max_iterations,
        ..GibbsConfig::default()
    };
    let mut sampler =
        GibbsSampler::new(seqs, config).context("cannot sample motifs from this input")?;
    let motifs = sampler.run();

    let mut writer = open_output(&args.out)?;
    for motif in &motifs {
        writeln!(
            writer,
            "{}\t{}\t{}",
            records[motif.seq_index].id(),
            motif.start,
            motif.window
        )?;
    }
    writer.flush()?;
    Ok(())
}
