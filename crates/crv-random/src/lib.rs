//! Random generation of circle, ellipse and helix curves.

mod generator;

pub use generator::CurveGenerator;
