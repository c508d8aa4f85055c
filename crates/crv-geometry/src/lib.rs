//! Curve workspace geometry: parametric circle, ellipse and helix curves.

pub mod curve;

pub use curve::{Circle, Curve, CurveKind, CurveShape, Ellipse, Helix};
