use std::f64::consts::PI;
use std::hash::{Hash, Hasher};

use super::{Point2D, Shape};

/// A circle in the 2D plane, defined by a center point and a radius.
///
/// The radius is stored as given: zero and negative values are accepted
/// and yield the corresponding `r^2 * pi` area.
#[derive(Debug, Clone, Copy)]
pub struct Circle {
    center: Point2D,
    radius: f64,
}

impl Circle {
    /// Creates a new circle from a center point and a radius.
    #[must_use]
    pub fn new(center: Point2D, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns the center point of the circle.
    #[must_use]
    pub fn center(&self) -> Point2D {
        self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn compute_area(&self) -> f64 {
        self.radius * self.radius * PI
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.radius.to_bits() == other.radius.to_bits() && self.center == other.center
    }
}

impl Eq for Circle {}

impl Hash for Circle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.center.hash(state);
        self.radius.to_bits().hash(state);
    }
}
