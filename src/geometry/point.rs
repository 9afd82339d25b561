use std::hash::{Hash, Hasher};

use crate::math::Point2;

/// An immutable point in the 2D plane.
///
/// Equality and hashing are bitwise over both coordinates: no tolerance is
/// applied, `0.0` and `-0.0` are distinct, and a point with `NaN`
/// coordinates is equal to itself. Equal points always hash equal.
#[derive(Debug, Clone, Copy)]
pub struct Point2D {
    x: f64,
    y: f64,
}

impl Point2D {
    /// Creates a new point from its coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the X coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Converts this point to the nalgebra point type used by the math layer.
    #[must_use]
    pub fn to_point2(self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Returns the Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Point2D) -> f64 {
        (self.to_point2() - other.to_point2()).norm()
    }
}

impl PartialEq for Point2D {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point2D {}

impl Hash for Point2D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::hash_map::DefaultHasher;

    const TOL: f64 = 1e-12;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn new_stores_coordinates() {
        let p = Point2D::new(3.5, 2.1);
        assert!((p.x() - 3.5).abs() < TOL);
        assert!((p.y() - 2.1).abs() < TOL);
    }

    #[test]
    fn distance_3_4_5() {
        let d = Point2D::new(0.0, 0.0).distance(Point2D::new(3.0, 4.0));
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn distance_offset_from_origin() {
        let d = Point2D::new(1.0, 2.0).distance(Point2D::new(4.0, 6.0));
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let p = Point2D::new(-1.5, 2.25);
        let q = Point2D::new(4.0, -0.75);
        assert!((p.distance(q) - q.distance(p)).abs() < TOL);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Point2D::new(2.5, 3.7);
        assert!(p.distance(p).abs() < TOL);
    }

    #[test]
    fn equal_points() {
        assert_eq!(Point2D::new(2.5, 3.7), Point2D::new(2.5, 3.7));
    }

    #[test]
    fn unequal_points() {
        assert_ne!(Point2D::new(2.5, 3.7), Point2D::new(4.2, 1.9));
    }

    #[test]
    fn negative_zero_is_distinct() {
        assert_ne!(Point2D::new(0.0, 0.0), Point2D::new(-0.0, 0.0));
    }

    #[test]
    fn nan_point_equals_itself() {
        let p = Point2D::new(f64::NAN, 1.0);
        assert_eq!(p, p);
    }

    #[test]
    fn equal_points_hash_equal() {
        let p = Point2D::new(2.5, 3.7);
        let q = Point2D::new(2.5, 3.7);
        assert_eq!(hash_of(&p), hash_of(&q));
    }
}
