use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tranco-topk",
    about = "Slice a Tranco-style ranking file into fixed top-K domain lists",
    version,
    long_about = None
)]
pub struct Args {
    /// Path to the ranking file (one rank,domain record per line)
    pub input: PathBuf,

    /// Number of worker threads for writing the output files
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
