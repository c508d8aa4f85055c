//! Closed set of curve variants.

use crv_core::{Result, Validate};
use crv_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::{Circle, Curve, CurveKind, Ellipse, Helix};

/// Any supported curve, tagged by its variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CurveShape {
    Circle(Circle),
    Ellipse(Ellipse),
    Helix(Helix),
}

impl CurveShape {
    /// The inner circle, if this shape is one.
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            CurveShape::Circle(circle) => Some(circle),
            _ => None,
        }
    }

    pub fn is_circle(&self) -> bool {
        self.as_circle().is_some()
    }
}

impl Curve for CurveShape {
    fn curve_point(&self, t: f64) -> Point3 {
        match self {
            CurveShape::Circle(c) => c.curve_point(t),
            CurveShape::Ellipse(e) => e.curve_point(t),
            CurveShape::Helix(h) => h.curve_point(t),
        }
    }

    fn curve_vector(&self, t: f64) -> Vector3 {
        match self {
            CurveShape::Circle(c) => c.curve_vector(t),
            CurveShape::Ellipse(e) => e.curve_vector(t),
            CurveShape::Helix(h) => h.curve_vector(t),
        }
    }

    fn kind(&self) -> CurveKind {
        match self {
            CurveShape::Circle(_) => CurveKind::Circle,
            CurveShape::Ellipse(_) => CurveKind::Ellipse,
            CurveShape::Helix(_) => CurveKind::Helix,
        }
    }
}

impl Validate for CurveShape {
    fn validate(&self) -> Result<()> {
        match self {
            CurveShape::Circle(c) => c.validate(),
            CurveShape::Ellipse(e) => e.validate(),
            CurveShape::Helix(h) => h.validate(),
        }
    }
}

impl From<Circle> for CurveShape {
    fn from(circle: Circle) -> Self {
        CurveShape::Circle(circle)
    }
}

impl From<Ellipse> for CurveShape {
    fn from(ellipse: Ellipse) -> Self {
        CurveShape::Ellipse(ellipse)
    }
}

impl From<Helix> for CurveShape {
    fn from(helix: Helix) -> Self {
        CurveShape::Helix(helix)
    }
}
