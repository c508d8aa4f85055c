//! Composition root: generate random curves, print their evaluation at a
//! fixed parameter, then filter, sort and sum the circles.

pub mod config;
pub mod report;
pub mod selection;

pub use config::PipelineConfig;
pub use report::{run_pipeline, write_report, PipelineReport};
pub use selection::{select_circles, CircleSelection};
