use anyhow::Result;
use clap::{Parser, Subcommand};
use psat::algorithm::{global, local, motif};

#[derive(Parser)]
#[command(name = "psat")]
#[command(version = "0.1.0")]
#[command(about = "Pairwise sequence alignment and motif discovery toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// End-to-end alignment of two sequences (Needleman-Wunsch)
    Global(global::GlobalArgs),

    /// Best-substring alignment of two sequences (Smith-Waterman)
    Local(local::LocalArgs),

    /// Motif discovery by Gibbs sampling
    Motif(motif::MotifArgs),
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Global(args) => {
            global::run(args)?;
        }
        Commands::Local(args) => {
            local::run(args)?;
        }
        Commands::Motif(args) => {
            motif::run(args)?;
        }
    }
    Ok(())
}
