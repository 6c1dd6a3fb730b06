use std::path::PathBuf;

#[derive(Debug)]
pub struct TierReport {
    pub name: &'static str,
    pub cutoff: usize,
    pub lines_written: usize,
    pub path: PathBuf,
}

#[derive(Debug)]
pub struct RunSummary {
    pub input: PathBuf,
    pub domains_loaded: usize,
    pub tiers: Vec<TierReport>,
}
