use anyhow::{Context, Result};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Reads a Tranco-style ranking file into a rank-ordered list of domains.
///
/// Each record's last field is taken as the domain, so the usual
/// `rank,domain` rows work, and so do rows with extra leading columns.
/// Fields are split on the comma character alone; quotes carry no special
/// meaning. No schema validation is performed beyond requiring the file to
/// exist.
pub fn load_ranked_list(path: &Path) -> Result<Vec<String>> {
    let start_time = Instant::now();
    info!(action = "start", component = "ranking_load", path = ?path, "Loading ranking file");

    if !path.is_file() {
        anyhow::bail!("Ranking file not found at {:?}", path);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open ranking file {:?}", path))?;

    let mut domains = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Failed to read record from {:?}", path))?;
        if let Some(domain) = record.iter().last() {
            domains.push(domain.to_string());
        }
    }

    let load_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "ranking_load",
        domain_count = domains.len(),
        duration_ms = load_time.as_millis(),
        "Ranking file loaded"
    );
    Ok(domains)
}
