//! Circle overlap tests
//!
//! Everything in the range is a disc in the scene plane, so collision is a
//! squared-distance comparison. The boundary is closed: discs that exactly
//! touch count as overlapping.

use glam::Vec2;

/// A disc in scene-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// True if the two discs touch or overlap.
    pub fn overlaps(&self, other: &Circle) -> bool {
        circles_overlap(self.center, self.radius, other.center, other.radius)
    }
}

/// Closed-boundary disc overlap: `|a - b|^2 <= (ra + rb)^2`.
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let total = radius_a + radius_b;
    a.distance_squared(b) <= total * total
}
