//! Equipment demand flattening and chroniton cost estimation.

pub mod cost;
pub mod flatten;

pub use cost::{estimate_chroniton_cost, source_estimate, RNGESUS};
pub use flatten::{apply_crew_demands, calculate_crew_demands, CrewDemands, Demand};
