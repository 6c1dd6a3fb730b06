pub mod args;
pub mod ranking;
pub mod report;
pub mod tiers;
pub mod truncate;
pub mod utils;

pub use args::Args;
pub use ranking::load_ranked_list;
pub use report::{RunSummary, TierReport};
pub use tiers::{Tier, TIERS};
pub use truncate::{update_lists, write_top_k};
