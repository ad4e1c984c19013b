//! Dense positional rankings over the roster.

pub mod battery;
pub mod engine;
pub mod score;

pub use battery::{all_metrics, pair_gauntlet_metrics, pair_voyage_metrics, run_battery, Metric};
pub use engine::rank_by;
