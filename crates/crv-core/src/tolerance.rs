/// Magnitude threshold below which curve parameters count as degenerate.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for radii, steps and draw ranges (in model units)
    pub linear: f64,
}

impl Tolerance {
    pub const EPS: f64 = 1e-6;

    pub fn new(linear: f64) -> Self {
        Self { linear }
    }

    /// Check if a value is zero within linear tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() < self.linear
    }

    /// A range is degenerate when its bounds are both near zero, or when no
    /// value strictly inside it clears the tolerance.
    pub fn is_degenerate_range(self, min: f64, max: f64) -> bool {
        min.abs() + max.abs() < 2.0 * self.linear || min.abs().max(max.abs()) <= self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::EPS)
    }
}
