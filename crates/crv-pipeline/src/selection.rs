use crv_geometry::{Circle, CurveShape};

/// The circles of a curve collection, borrowed from it in their original
/// order, together with their radius sum.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleSelection<'a> {
    circles: Vec<&'a Circle>,
    radius_sum: f64,
}

/// Collect every circle of `curves`, preserving order, and sum their radii.
pub fn select_circles(curves: &[CurveShape]) -> CircleSelection<'_> {
    let circles: Vec<&Circle> = curves.iter().filter_map(CurveShape::as_circle).collect();
    let radius_sum = circles.iter().fold(0.0, |sum, c| sum + c.radius());
    CircleSelection { circles, radius_sum }
}

impl<'a> CircleSelection<'a> {
    /// Sort ascending by radius. The sort is stable: circles with equal radii
    /// keep their relative order.
    pub fn sort_by_radius(&mut self) {
        self.circles.sort_by(|a, b| a.radius().total_cmp(&b.radius()));
    }

    pub fn circles(&self) -> &[&'a Circle] {
        &self.circles
    }

    pub fn radii(&self) -> Vec<f64> {
        self.circles.iter().map(|c| c.radius()).collect()
    }

    pub fn radius_sum(&self) -> f64 {
        self.radius_sum
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}
