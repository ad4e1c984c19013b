//! Batch precalculation of crew costs, rankings and exports for the datacore site.

pub mod cli;
pub mod config;
pub mod data;
pub mod demand;
pub mod error;
pub mod pipeline;
pub mod ranking;
pub mod report;

pub use config::PipelineConfig;
pub use error::PipelineError;
