use crate::shape::Shape;

/// Computes areas for any [`Shape`], without knowing which one it got.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaCalculator;

impl AreaCalculator {
    pub fn area_of<S: Shape + ?Sized>(shape: &S) -> u64 {
        shape.area()
    }

    /// Sum of all areas, saturating at `u64::MAX`.
    pub fn total_area(shapes: &[&dyn Shape]) -> u64 {
        shapes
            .iter()
            .fold(0u64, |acc, shape| acc.saturating_add(shape.area()))
    }
}
