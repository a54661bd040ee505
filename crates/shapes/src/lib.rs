//! Rectangle/square substitution sample.
//!
//! Shapes are immutable values. A square is not modelled as a rectangle
//! whose setters keep both sides in sync; it is its own [`Shape`], so the
//! rectangle's "dimensions change independently" guarantee can never be
//! weakened by a subtype. Only the coloured rectangle, which adds data but no
//! new rules, embeds a rectangle.

pub mod area;
pub mod shape;

pub use area::AreaCalculator;
pub use shape::{ColoredRectangle, Rectangle, Shape, Square};
