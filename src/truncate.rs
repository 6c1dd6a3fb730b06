use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

use crate::{
    ranking,
    report::{RunSummary, TierReport},
    tiers::TIERS,
    Args,
};

/// Writes the first `min(cutoff, domains.len())` entries to `out_path`, one
/// per line. Existing files are truncated. Returns the number of lines
/// written.
pub fn write_top_k(domains: &[String], cutoff: usize, out_path: &Path) -> Result<usize> {
    let file = File::create(out_path)
        .with_context(|| format!("Failed to create output file {:?}", out_path))?;
    let mut writer = BufWriter::new(file);

    let count = cutoff.min(domains.len());
    for domain in &domains[..count] {
        writeln!(writer, "{}", domain)
            .with_context(|| format!("Failed to write to {:?}", out_path))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {:?}", out_path))?;

    Ok(count)
}

/// Loads the ranking file and regenerates all six top-K lists next to it.
pub fn update_lists(args: &Args) -> Result<RunSummary> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "list_update", input = ?args.input, "Starting top list update");

    // dirname semantics: a bare filename writes into the current directory.
    let out_dir = args
        .input
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(PathBuf::new);

    let domains = ranking::load_ranked_list(&args.input)?;
    println!(
        "Will update the top URL lists using {} domains in {}",
        crate::utils::format_number(domains.len()),
        args.input.display()
    );

    let workers = args.workers.unwrap_or_else(|| {
        let cpu_count = num_cpus::get();
        std::cmp::min(cpu_count, 8)
    });
    info!(
        action = "configure",
        component = "list_update",
        worker_count = workers,
        "Using workers for output writes"
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .context("Failed to build worker pool")?;

    // The six writes are independent and only read the shared list, so they
    // can fan out freely; any single failure aborts the whole run.
    let tiers: Vec<TierReport> = pool.install(|| {
        TIERS
            .par_iter()
            .map(|tier| {
                let out_path = out_dir.join(tier.filename());
                println!("Updating top {} file: {}", tier.cutoff, out_path.display());

                let write_start = Instant::now();
                let lines_written = write_top_k(&domains, tier.cutoff, &out_path)?;
                info!(
                    action = "write",
                    component = "list_update",
                    tier = tier.name,
                    lines_written,
                    duration_ms = write_start.elapsed().as_millis(),
                    "Output file written"
                );

                Ok(TierReport {
                    name: tier.name,
                    cutoff: tier.cutoff,
                    lines_written,
                    path: out_path,
                })
            })
            .collect::<Result<Vec<_>>>()
    })?;

    let total_time = total_start_time.elapsed();
    info!(
        action = "complete",
        component = "list_update",
        file_count = tiers.len(),
        duration_ms = total_time.as_millis(),
        "Top list update completed"
    );

    Ok(RunSummary {
        input: args.input.clone(),
        domains_loaded: domains.len(),
        tiers,
    })
}

pub fn print_summary(summary: &RunSummary) {
    println!("\n--- Top List Update ---");
    println!("Input: {}", summary.input.display());
    println!(
        "Domains loaded: {}",
        crate::utils::format_number(summary.domains_loaded)
    );
    for tier in &summary.tiers {
        println!(
            "- {}: {} lines -> {}",
            tier.name,
            crate::utils::format_number(tier.lines_written),
            tier.path.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domains(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("domain{}.com", i)).collect()
    }

    #[test]
    fn writes_exactly_cutoff_lines_when_list_is_longer() {
        let dir = tempfile::tempdir().unwrap();
        let out_path = dir.path().join("top10.csv");

        let written = write_top_k(&domains(25), 10, &out_path).unwrap();
        assert_eq!(written, 10);

        let content = std::fs::read_to_string(&out_path).unwrap();
        assert_eq!(content.lines().count(), 10);
        assert!(content.starts_with("domain1.com\n"));
        assert!(content.ends_with("domain10.com\n"));
    }

    #[test]
    fn short_lists_are_written_unpadded() {
        let dir = tempfile::tempdir().unwrap();
        let out_path = dir.path().join("top100.csv");

        let written = write_top_k(&domains(3), 100, &out_path).unwrap();
        assert_eq!(written, 3);

        let content = std::fs::read_to_string(&out_path).unwrap();
        assert_eq!(content, "domain1.com\ndomain2.com\ndomain3.com\n");
    }

    #[test]
    fn existing_files_are_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let out_path = dir.path().join("top10.csv");
        std::fs::write(&out_path, "stale.example\nstale.example\n").unwrap();

        write_top_k(&domains(1), 10, &out_path).unwrap();
        let content = std::fs::read_to_string(&out_path).unwrap();
        assert_eq!(content, "domain1.com\n");
    }

    #[test]
    fn zero_cutoff_writes_an_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let out_path = dir.path().join("top0.csv");

        let written = write_top_k(&domains(5), 0, &out_path).unwrap();
        assert_eq!(written, 0);
        assert_eq!(std::fs::read_to_string(&out_path).unwrap(), "");
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let result = write_top_k(&domains(1), 10, Path::new("/nonexistent/dir/top10.csv"));
        assert!(result.is_err());
    }
}
