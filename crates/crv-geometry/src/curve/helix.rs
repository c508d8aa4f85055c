//! Helix curve.

use crv_core::{CurveError, Result, Tolerance, Validate};
use crv_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::{Curve, CurveKind};

/// A spiral whose axis is parallel to Z through `center`.
///
/// The planar distance from the axis grows linearly with `t` (`radius * t`)
/// while the height advances by `step` per radian. Evaluation is defined for
/// every `t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Helix {
    center: Point3,
    radius: f64,
    step: f64,
}

impl Helix {
    pub fn new(center: Point3, radius: f64, step: f64) -> Self {
        Self {
            center,
            radius,
            step,
        }
    }

    /// Build a helix; `radius` must be positive and `step` nonzero (its sign
    /// selects the winding direction along Z).
    pub fn try_new(center: Point3, radius: f64, step: f64) -> Result<Self> {
        let helix = Self::new(center, radius, step);
        helix.validate()?;
        Ok(helix)
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Validate for Helix {
    fn validate(&self) -> Result<()> {
        if self.radius.is_nan() || self.radius < Tolerance::EPS {
            return Err(CurveError::InvalidRadius(self.radius));
        }
        if self.step.is_nan() || Tolerance::default().is_zero(self.step) {
            return Err(CurveError::InvalidStep(self.step));
        }
        Ok(())
    }
}

impl Curve for Helix {
    fn curve_point(&self, t: f64) -> Point3 {
        Point3::new(
            self.radius * t * t.cos() + self.center.x,
            self.radius * t * t.sin() + self.center.y,
            self.step * t + self.center.z,
        )
    }

    fn curve_vector(&self, t: f64) -> Vector3 {
        let (sin, cos) = t.sin_cos();
        Vector3::new(
            self.radius * (cos - t * sin),
            self.radius * (sin + t * cos),
            self.step,
        )
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Helix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_helix_starts_at_center() {
        let center = Point3::new(1.0, 2.0, 3.0);
        let helix = Helix::new(center, 2.0, 1.5);
        assert_eq!(helix.curve_point(0.0), center);
        assert_eq!(helix.curve_vector(0.0), Vector3::new(2.0, 0.0, 1.5));
    }

    #[test]
    fn test_helix_height_is_affine_in_t() {
        let helix = Helix::new(Point3::new(0.0, 0.0, -4.0), 1.0, -0.75);
        for i in -8..8 {
            let t = i as f64 * PI / 4.0;
            let p = helix.curve_point(t);
            assert_abs_diff_eq!(p.z, -4.0 - 0.75 * t, epsilon = 1e-12);
            assert_eq!(helix.curve_vector(t).z, -0.75);
        }
    }

    #[test]
    fn test_helix_tangent_matches_finite_difference() {
        let helix = Helix::new(Point3::new(0.5, -0.5, 1.0), 2.0, 1.5);
        let h = 1e-6;
        for i in 0..10 {
            let t = i as f64 * 0.7;
            let ahead = helix.curve_point(t + h);
            let behind = helix.curve_point(t - h);
            let numeric = (ahead - behind) * (1.0 / (2.0 * h));
            assert_abs_diff_eq!(helix.curve_vector(t), numeric, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_helix_validation() {
        assert!(Helix::try_new(Point3::ORIGIN, 2.0, -1.5).is_ok());
        assert!(matches!(
            Helix::try_new(Point3::ORIGIN, 2.0, 0.0),
            Err(CurveError::InvalidStep(_))
        ));
        assert!(matches!(
            Helix::try_new(Point3::ORIGIN, 0.0, 1.0),
            Err(CurveError::InvalidRadius(_))
        ));
    }

    #[test]
    fn test_helix_step_at_eps_boundary() {
        assert!(Helix::try_new(Point3::ORIGIN, 1.0, -Tolerance::EPS).is_ok());
        assert!(Helix::try_new(Point3::ORIGIN, 1.0, 5e-7).is_err());
    }

    #[test]
    fn test_helix_kind() {
        assert_eq!(Helix::new(Point3::ORIGIN, 1.0, 1.0).kind(), CurveKind::Helix);
    }
}
