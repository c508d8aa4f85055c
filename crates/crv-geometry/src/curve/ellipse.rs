//! Ellipse curve.

use crv_core::{CurveError, Result, Tolerance, Validate};
use crv_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::{Curve, CurveKind};

/// An axis-aligned ellipse in the plane `z = center.z`, parameterized over
/// `[0, 2*PI]`.
///
/// `radius_x` is the semi-axis along X and `radius_y` the semi-axis along Y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    center: Point3,
    radius_x: f64,
    radius_y: f64,
}

impl Ellipse {
    pub fn new(center: Point3, radius_x: f64, radius_y: f64) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
        }
    }

    pub fn try_new(center: Point3, radius_x: f64, radius_y: f64) -> Result<Self> {
        let ellipse = Self::new(center, radius_x, radius_y);
        ellipse.validate()?;
        Ok(ellipse)
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }

    pub fn radius_y(&self) -> f64 {
        self.radius_y
    }
}

impl Validate for Ellipse {
    fn validate(&self) -> Result<()> {
        for radius in [self.radius_x, self.radius_y] {
            if radius.is_nan() || radius < Tolerance::EPS {
                return Err(CurveError::InvalidRadius(radius));
            }
        }
        Ok(())
    }
}

impl Curve for Ellipse {
    fn curve_point(&self, t: f64) -> Point3 {
        Point3::new(
            self.radius_x * t.cos() + self.center.x,
            self.radius_y * t.sin() + self.center.y,
            self.center.z,
        )
    }

    fn curve_vector(&self, t: f64) -> Vector3 {
        Vector3::new_2d(-self.radius_x * t.sin(), self.radius_y * t.cos())
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Ellipse
    }
}
