pub mod point;
pub mod vector;

pub use glam::DVec3;
pub use point::Point3;
pub use vector::Vector3;
