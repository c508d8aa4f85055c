use std::io::Write;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crv_core::Result;
use crv_geometry::{Curve, CurveShape};
use crv_random::CurveGenerator;

use crate::config::PipelineConfig;
use crate::selection::{select_circles, CircleSelection};

/// Marker line written after each circle entry.
pub const CIRCLE_MARKER: &str = "to another vector -->";

/// Summary of a pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub curve_count: usize,
    pub sorted_radii: Vec<f64>,
    pub radius_sum: f64,
}

/// Generate `config.curve_count` random curves and write the report for them.
#[instrument(skip_all, fields(count = config.curve_count))]
pub fn run_pipeline<R: Rng, W: Write>(
    config: &PipelineConfig,
    generator: &mut CurveGenerator<R>,
    out: &mut W,
) -> Result<PipelineReport> {
    if !generator.set_range(config.range_min, config.range_max) {
        warn!(
            range_min = config.range_min,
            range_max = config.range_max,
            current = ?generator.range(),
            "configured draw range rejected, keeping the generator's range"
        );
    }

    let curves: Vec<CurveShape> = (0..config.curve_count)
        .map(|_| generator.random_curve())
        .collect();

    let selection = write_report(&curves, config.parameter, out)?;
    let report = PipelineReport {
        curve_count: curves.len(),
        sorted_radii: selection.radii(),
        radius_sum: selection.radius_sum(),
    };
    info!(
        circles = report.sorted_radii.len(),
        radius_sum = report.radius_sum,
        "pipeline finished"
    );
    Ok(report)
}

/// Write one block per curve (kind, point and tangent at `parameter`), then
/// the circle radii in ascending order and their sum.
///
/// Returns the sorted circle selection borrowed from `curves`.
pub fn write_report<'a, W: Write>(
    curves: &'a [CurveShape],
    parameter: f64,
    out: &mut W,
) -> Result<CircleSelection<'a>> {
    for curve in curves {
        writeln!(
            out,
            "{} {} {}",
            curve.kind(),
            curve.curve_point(parameter),
            curve.curve_vector(parameter)
        )?;
        if curve.is_circle() {
            writeln!(out, "{CIRCLE_MARKER}")?;
        }
        writeln!(out)?;
    }

    let mut selection = select_circles(curves);
    selection.sort_by_radius();
    debug!(circles = selection.len(), "sorted circle selection");

    for circle in selection.circles() {
        writeln!(out, "{}", circle.radius())?;
    }
    writeln!(out, "sum = {}", selection.radius_sum())?;
    Ok(selection)
}
