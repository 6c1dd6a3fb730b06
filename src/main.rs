use clap::Parser;
use tracing::error;

use tranco_topk::{truncate, utils, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    match truncate::update_lists(&args) {
        Ok(summary) => {
            truncate::print_summary(&summary);
            Ok(())
        }
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
