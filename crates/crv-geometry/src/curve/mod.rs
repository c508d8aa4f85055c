//! Curve traits and implementations.

mod circle;
mod ellipse;
mod helix;
mod shape;

use std::fmt;

use crv_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use helix::Helix;
pub use shape::CurveShape;

/// Trait for parametric curves in 3D space.
///
/// Positions and tangents are closed-form functions of `t` (radians) and are
/// defined for every real `t`.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn curve_point(&self, t: f64) -> Point3;

    /// Evaluate the tangent vector (first derivative) at parameter `t`.
    fn curve_vector(&self, t: f64) -> Vector3;

    /// Runtime kind of the curve.
    fn kind(&self) -> CurveKind;
}

/// Tag identifying a curve variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveKind {
    Circle,
    Ellipse,
    Helix,
}

impl CurveKind {
    pub const ALL: [CurveKind; 3] = [CurveKind::Circle, CurveKind::Ellipse, CurveKind::Helix];

    pub fn label(self) -> &'static str {
        match self {
            CurveKind::Circle => "Circle",
            CurveKind::Ellipse => "Ellipse",
            CurveKind::Helix => "Helix",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
