/// Trait for closed planar shapes with a measurable area.
pub trait Shape {
    /// Computes the area of the shape.
    fn compute_area(&self) -> f64;

    /// Returns the area of the shape.
    ///
    /// Always agrees with [`Shape::compute_area`]; implementers override
    /// only the computation, never this accessor.
    fn area(&self) -> f64 {
        self.compute_area()
    }
}
