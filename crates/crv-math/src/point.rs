use std::fmt;
use std::ops::{Add, Sub};

use approx::AbsDiffEq;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::Vector3;

/// A location in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Point in the XY plane (`z = 0`).
    pub const fn new_2d(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    pub fn distance(self, other: Self) -> f64 {
        self.to_dvec3().distance(other.to_dvec3())
    }
}

impl From<DVec3> for Point3 {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for DVec3 {
    fn from(p: Point3) -> Self {
        p.to_dvec3()
    }
}

impl Sub for Point3 {
    type Output = Vector3;

    fn sub(self, rhs: Self) -> Vector3 {
        (self.to_dvec3() - rhs.to_dvec3()).into()
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;

    fn add(self, rhs: Vector3) -> Point3 {
        (self.to_dvec3() + rhs.to_dvec3()).into()
    }
}

impl AbsDiffEq for Point3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{{ {}, {}, {} }}", self.x, self.y, self.z)
    }
}
