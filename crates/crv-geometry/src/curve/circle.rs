//! Circle curve.

use crv_core::{CurveError, Result, Tolerance, Validate};
use crv_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::{Curve, CurveKind};

/// A circle in the plane `z = center.z`, parameterized over `[0, 2*PI]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    center: Point3,
    radius: f64,
}

impl Circle {
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Build a circle, rejecting radii that are not strictly positive.
    pub fn try_new(center: Point3, radius: f64) -> Result<Self> {
        let circle = Self::new(center, radius);
        circle.validate()?;
        Ok(circle)
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Validate for Circle {
    fn validate(&self) -> Result<()> {
        if self.radius.is_nan() || self.radius < Tolerance::EPS {
            return Err(CurveError::InvalidRadius(self.radius));
        }
        Ok(())
    }
}

impl Curve for Circle {
    fn curve_point(&self, t: f64) -> Point3 {
        Point3::new(
            self.radius * t.cos() + self.center.x,
            self.radius * t.sin() + self.center.y,
            self.center.z,
        )
    }

    fn curve_vector(&self, t: f64) -> Vector3 {
        Vector3::new_2d(-self.radius * t.sin(), self.radius * t.cos())
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Circle
    }
}
