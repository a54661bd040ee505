use serde::{Deserialize, Serialize};

use liskov_core::ValueObject;

/// Anything with a measurable area.
pub trait Shape {
    /// Area in square units. Pure; equals the product of the dimensions.
    fn area(&self) -> u64;
}

/// Rectangle with independently adjustable dimensions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    height: u32,
    width: u32,
}

impl Rectangle {
    pub fn new(height: u32, width: u32) -> Self {
        Self { height, width }
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Same rectangle with a new height. The width is untouched.
    pub fn with_height(self, height: u32) -> Self {
        Self { height, ..self }
    }

    /// Same rectangle with a new width. The height is untouched.
    pub fn with_width(self, width: u32) -> Self {
        Self { width, ..self }
    }

    pub fn is_square(&self) -> bool {
        self.height == self.width
    }
}

impl Shape for Rectangle {
    fn area(&self) -> u64 {
        u64::from(self.height) * u64::from(self.width)
    }
}

impl ValueObject for Rectangle {}

/// Square: one side length, always equal on all sides.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    side: u32,
}

impl Square {
    pub fn new(side: u32) -> Self {
        Self { side }
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn with_side(self, side: u32) -> Self {
        Self { side }
    }

    /// Rectangle with the same footprint. Later edits to it follow rectangle
    /// rules and no longer keep the sides equal.
    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle::new(self.side, self.side)
    }
}

impl Shape for Square {
    fn area(&self) -> u64 {
        u64::from(self.side) * u64::from(self.side)
    }
}

impl From<Square> for Rectangle {
    fn from(value: Square) -> Self {
        value.to_rectangle()
    }
}

impl ValueObject for Square {}

/// Rectangle with a colour.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColoredRectangle {
    #[serde(flatten)]
    rectangle: Rectangle,
    color: String,
}

impl ColoredRectangle {
    pub const DEFAULT_COLOR: &'static str = "White";

    /// New rectangle painted in [`Self::DEFAULT_COLOR`].
    pub fn new(height: u32, width: u32) -> Self {
        Self::from_rectangle(Rectangle::new(height, width))
    }

    pub fn from_rectangle(rectangle: Rectangle) -> Self {
        Self {
            rectangle,
            color: Self::DEFAULT_COLOR.to_string(),
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn rectangle(&self) -> &Rectangle {
        &self.rectangle
    }

    pub fn with_color(self, color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            ..self
        }
    }

    pub fn with_height(self, height: u32) -> Self {
        Self {
            rectangle: self.rectangle.with_height(height),
            ..self
        }
    }

    pub fn with_width(self, width: u32) -> Self {
        Self {
            rectangle: self.rectangle.with_width(width),
            ..self
        }
    }
}

impl Shape for ColoredRectangle {
    fn area(&self) -> u64 {
        self.rectangle.area()
    }
}

impl AsRef<Rectangle> for ColoredRectangle {
    fn as_ref(&self) -> &Rectangle {
        &self.rectangle
    }
}

impl ValueObject for ColoredRectangle {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rectangle_area_is_height_times_width() {
        assert_eq!(Rectangle::new(2, 3).area(), 6);
    }

    #[test]
    fn square_area() {
        assert_eq!(Square::new(3).area(), 9);
        assert_eq!(Square::new(4).area(), 16);
    }

    #[test]
    fn area_does_not_overflow_u32() {
        assert_eq!(
            Rectangle::new(u32::MAX, u32::MAX).area(),
            u64::from(u32::MAX) * u64::from(u32::MAX)
        );
    }

    #[test]
    fn square_converted_to_rectangle_follows_rectangle_rules() {
        let rect = Rectangle::from(Square::new(4)).with_height(4).with_width(6);
        assert_eq!(rect.height(), 4);
        assert_eq!(rect.width(), 6);
        assert_eq!(rect.area(), 24);
        assert!(!rect.is_square());
    }

    #[test]
    fn colored_rectangle_defaults_to_white() {
        let rect = ColoredRectangle::new(2, 5);
        assert_eq!(rect.color(), "White");
        assert_eq!(rect.area(), 10);

        let red = rect.with_color("Red");
        assert_eq!(red.color(), "Red");
        assert_eq!(red.rectangle(), &Rectangle::new(2, 5));
    }

    #[test]
    fn colored_rectangle_serializes_flat() {
        let json = serde_json::to_value(ColoredRectangle::new(2, 3)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "height": 2, "width": 3, "color": "White" })
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: changing one dimension never changes the other.
        #[test]
        fn rectangle_dimensions_are_independent(
            h in any::<u32>(),
            w in any::<u32>(),
            new_w in any::<u32>(),
            new_h in any::<u32>()
        ) {
            let rect = Rectangle::new(h, w);
            prop_assert_eq!(rect.with_width(new_w).height(), h);
            prop_assert_eq!(rect.with_height(new_h).width(), w);
            prop_assert_eq!(
                rect.with_width(new_w).area(),
                u64::from(h) * u64::from(new_w)
            );
        }

        /// Property: colour is extra data; it never affects rectangle behaviour.
        #[test]
        fn colored_rectangle_substitutes_for_rectangle(
            h in any::<u32>(),
            w in any::<u32>(),
            color in "[A-Za-z]{0,12}"
        ) {
            let plain = Rectangle::new(h, w);
            let colored = ColoredRectangle::from_rectangle(plain).with_color(color);
            prop_assert_eq!(colored.area(), plain.area());
            prop_assert_eq!(colored.clone().with_width(7).area(), plain.with_width(7).area());
        }

        /// Property: a square and its rectangle view agree on area.
        #[test]
        fn square_matches_equivalent_rectangle(side in any::<u32>()) {
            let square = Square::new(side);
            prop_assert_eq!(square.area(), square.to_rectangle().area());
            prop_assert!(square.to_rectangle().is_square());
        }
    }
}
