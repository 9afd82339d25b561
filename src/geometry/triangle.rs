use std::hash::{Hash, Hasher};

use crate::error::{GeometryError, Result};
use crate::math::TOLERANCE;

use super::{Point2D, Shape};

/// A triangle in the 2D plane, defined by three vertices.
///
/// Construction rejects degenerate input: sides of approximately zero
/// length and collinear vertices. A constructed triangle always has
/// positive area.
///
/// Two triangles are equal when they have the same set of vertices,
/// regardless of the order the vertices were supplied in. Hashing is
/// consistent with that equality.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    point_a: Point2D,
    point_b: Point2D,
    point_c: Point2D,
}

impl Triangle {
    /// Creates a new triangle from three vertices.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidGeometry`] if any side length is
    /// approximately zero or the vertices are collinear.
    pub fn new(point_a: Point2D, point_b: Point2D, point_c: Point2D) -> Result<Self> {
        let side_a = point_b.distance(point_c);
        let side_b = point_a.distance(point_c);
        let side_c = point_a.distance(point_b);

        validate_sides(side_a, side_b, side_c)?;

        Ok(Self {
            point_a,
            point_b,
            point_c,
        })
    }

    /// Returns the first vertex of the triangle.
    #[must_use]
    pub fn point_a(&self) -> Point2D {
        self.point_a
    }

    /// Returns the second vertex of the triangle.
    #[must_use]
    pub fn point_b(&self) -> Point2D {
        self.point_b
    }

    /// Returns the third vertex of the triangle.
    #[must_use]
    pub fn point_c(&self) -> Point2D {
        self.point_c
    }

    /// Returns the length of the side opposite vertex A (`|BC|`).
    #[must_use]
    pub fn side_a(&self) -> f64 {
        self.point_b.distance(self.point_c)
    }

    /// Returns the length of the side opposite vertex B (`|AC|`).
    #[must_use]
    pub fn side_b(&self) -> f64 {
        self.point_a.distance(self.point_c)
    }

    /// Returns the length of the side opposite vertex C (`|AB|`).
    #[must_use]
    pub fn side_c(&self) -> f64 {
        self.point_a.distance(self.point_b)
    }

    /// Returns whether one of the three angles is a right angle.
    ///
    /// The Pythagorean identity is checked on squared side lengths,
    /// within [`TOLERANCE`].
    #[must_use]
    pub fn is_right_angled(&self) -> bool {
        let a_sq = self.side_a().powi(2);
        let b_sq = self.side_b().powi(2);
        let c_sq = self.side_c().powi(2);

        (a_sq - (b_sq + c_sq)).abs() < TOLERANCE
            || (b_sq - (c_sq + a_sq)).abs() < TOLERANCE
            || (c_sq - (a_sq + b_sq)).abs() < TOLERANCE
    }
}

fn validate_sides(side_a: f64, side_b: f64, side_c: f64) -> Result<()> {
    if side_a < TOLERANCE || side_b < TOLERANCE || side_c < TOLERANCE {
        return Err(GeometryError::InvalidGeometry(
            "side lengths cannot be approximately zero".into(),
        ));
    }

    if (side_a + side_b - side_c).abs() < TOLERANCE
        || (side_a + side_c - side_b).abs() < TOLERANCE
        || (side_b + side_c - side_a).abs() < TOLERANCE
    {
        return Err(GeometryError::InvalidGeometry(
            "the sum of any two sides must be greater than the third side".into(),
        ));
    }

    Ok(())
}

impl Shape for Triangle {
    fn compute_area(&self) -> f64 {
        // Shoelace formula over the vertex differences.
        let u = self.point_a.to_point2() - self.point_c.to_point2();
        let v = self.point_b.to_point2() - self.point_c.to_point2();
        0.5 * u.perp(&v).abs()
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        // Vertices of a valid triangle are pairwise distinct, so checking
        // membership of each own vertex in the other's vertex list decides
        // set equality.
        let contains =
            |p: Point2D| p == other.point_a || p == other.point_b || p == other.point_c;

        contains(self.point_a) && contains(self.point_b) && contains(self.point_c)
    }
}

impl Eq for Triangle {}

impl Hash for Triangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Vertices are hashed in a canonical order, independent of the
        // order they were supplied in.
        let mut keys = [
            (self.point_a.x().to_bits(), self.point_a.y().to_bits()),
            (self.point_b.x().to_bits(), self.point_b.y().to_bits()),
            (self.point_c.x().to_bits(), self.point_c.y().to_bits()),
        ];
        keys.sort_unstable();
        keys.hash(state);
    }
}
