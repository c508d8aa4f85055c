use std::f64::consts::FRAC_PI_4;

use serde::{Deserialize, Serialize};

/// Parameters of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Number of random curves to generate
    pub curve_count: usize,
    /// Parameter `t` at which every curve is evaluated
    pub parameter: f64,
    /// Lower bound of the generator draw range
    pub range_min: f64,
    /// Upper bound of the generator draw range
    pub range_max: f64,
}

impl PipelineConfig {
    pub const DEFAULT_CURVE_COUNT: usize = 10;

    pub fn new(curve_count: usize, parameter: f64, range_min: f64, range_max: f64) -> Self {
        Self {
            curve_count,
            parameter,
            range_min,
            range_max,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CURVE_COUNT, FRAC_PI_4, -10.0, 10.0)
    }
}
