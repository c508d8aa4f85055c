use rand::distr::Uniform;
use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{debug, instrument, trace};

use crv_core::Tolerance;
use crv_geometry::{Circle, CurveKind, CurveShape, Ellipse, Helix};
use crv_math::Point3;

/// Produces random curves whose scalar parameters are drawn uniformly from a
/// configurable range.
///
/// The random source is owned by the generator. Radii are always strictly
/// positive and helix steps always nonzero: degenerate draws are discarded
/// and redrawn.
pub struct CurveGenerator<R = ThreadRng> {
    rng: R,
    min: f64,
    max: f64,
    tolerance: Tolerance,
}

impl CurveGenerator<ThreadRng> {
    /// Generator backed by the thread-local, entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for CurveGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CurveGenerator<R> {
    pub const DEFAULT_RANGE: (f64, f64) = (-1.0, 1.0);

    pub fn with_rng(rng: R) -> Self {
        let (min, max) = Self::DEFAULT_RANGE;
        Self {
            rng,
            min,
            max,
            tolerance: Tolerance::default(),
        }
    }

    /// Current draw range `(min, max)`.
    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Replace the draw range.
    ///
    /// A range is ignored, keeping the previous one, when no draw from it
    /// could clear eps or when it cannot be sampled uniformly (non-finite
    /// bounds or width). Reversed bounds are swapped. Returns whether the new
    /// range was applied.
    #[instrument(level = "debug", skip(self))]
    pub fn set_range(&mut self, min: f64, max: f64) -> bool {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        if self.tolerance.is_degenerate_range(min, max) {
            debug!(current = ?self.range(), "ignoring degenerate draw range");
            return false;
        }
        if let Err(err) = Uniform::new_inclusive(min, max) {
            debug!(current = ?self.range(), %err, "ignoring unsampleable draw range");
            return false;
        }
        self.min = min;
        self.max = max;
        true
    }

    fn draw(&mut self) -> f64 {
        self.rng.random_range(self.min..=self.max)
    }

    /// Draw until the magnitude reaches eps; returns the magnitude.
    fn draw_radius(&mut self) -> f64 {
        loop {
            let radius = self.draw().abs();
            if !self.tolerance.is_zero(radius) {
                return radius;
            }
            trace!(radius, "rejected degenerate radius");
        }
    }

    /// Draw until the magnitude reaches eps; keeps the sign.
    fn draw_step(&mut self) -> f64 {
        loop {
            let step = self.draw();
            if !self.tolerance.is_zero(step) {
                return step;
            }
            trace!(step, "rejected degenerate step");
        }
    }

    fn draw_center_2d(&mut self) -> Point3 {
        let x = self.draw();
        let y = self.draw();
        Point3::new_2d(x, y)
    }

    fn draw_center_3d(&mut self) -> Point3 {
        let x = self.draw();
        let y = self.draw();
        let z = self.draw();
        Point3::new(x, y, z)
    }

    pub fn make_circle(&mut self) -> Circle {
        let radius = self.draw_radius();
        let center = self.draw_center_2d();
        debug!(%center, radius, "generated circle");
        Circle::new(center, radius)
    }

    pub fn make_ellipse(&mut self) -> Ellipse {
        let radius_x = self.draw_radius();
        let radius_y = self.draw_radius();
        let center = self.draw_center_2d();
        debug!(%center, radius_x, radius_y, "generated ellipse");
        Ellipse::new(center, radius_x, radius_y)
    }

    pub fn make_helix(&mut self) -> Helix {
        let radius = self.draw_radius();
        let step = self.draw_step();
        let center = self.draw_center_3d();
        debug!(%center, radius, step, "generated helix");
        Helix::new(center, radius, step)
    }

    /// Generate a curve of a uniformly chosen kind.
    pub fn random_curve(&mut self) -> CurveShape {
        let kind = CurveKind::ALL[self.rng.random_range(0..CurveKind::ALL.len())];
        match kind {
            CurveKind::Circle => self.make_circle().into(),
            CurveKind::Ellipse => self.make_ellipse().into(),
            CurveKind::Helix => self.make_helix().into(),
        }
    }
}
