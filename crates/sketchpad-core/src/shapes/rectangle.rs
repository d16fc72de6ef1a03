//! Rectangle shape.

use crate::geometry;
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle. The origin corner is the drag/edit anchor;
/// width and height are signed, so a rectangle drawn leftward/upward from
/// its anchor carries negative extents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Anchor corner (where the draw gesture started).
    pub origin: Point,
    /// Signed width.
    pub width: f64,
    /// Signed height.
    pub height: f64,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Build the rectangle a drag gesture from `anchor` to `pointer`
    /// describes. Extents keep the drag direction's sign.
    pub fn from_drag(anchor: Point, pointer: Point) -> Self {
        Self::new(anchor, pointer.x - anchor.x, pointer.y - anchor.y)
    }

    /// Get the rectangle as a sign-normalized kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width,
            self.origin.y + self.height,
        )
        .abs()
    }

    /// Get the bounding box.
    pub fn bounds(&self) -> Rect {
        self.as_rect()
    }

    /// Check if a point hits this rectangle.
    pub fn hit_test(&self, point: Point) -> bool {
        geometry::point_in_box(point, self.origin, self.width, self.height)
    }

    /// Move the anchor corner; extents are unchanged.
    pub fn move_to(&mut self, anchor: Point) {
        self.origin = anchor;
    }

    /// Get the path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_creation() {
        let rect = Rectangle::new(Point::new(10.0, 20.0), 100.0, 50.0);
        assert!((rect.origin.x - 10.0).abs() < f64::EPSILON);
        assert!((rect.width - 100.0).abs() < f64::EPSILON);
        assert!((rect.height - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_drag_keeps_sign() {
        let rect = Rectangle::from_drag(Point::new(50.0, 50.0), Point::new(20.0, 20.0));
        assert!((rect.width + 30.0).abs() < f64::EPSILON);
        assert!((rect.height + 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_sign_invariant() {
        // Same covered region whether drawn left-to-right or right-to-left.
        let leftward = Rectangle::new(Point::new(50.0, 50.0), -30.0, -30.0);
        let rightward = Rectangle::new(Point::new(20.0, 20.0), 30.0, 30.0);
        for probe in [
            Point::new(30.0, 30.0),
            Point::new(20.0, 20.0),
            Point::new(50.0, 50.0),
            Point::new(10.0, 30.0),
            Point::new(60.0, 30.0),
        ] {
            assert_eq!(leftward.hit_test(probe), rightward.hit_test(probe));
        }
        assert!(leftward.hit_test(Point::new(30.0, 30.0)));
    }

    #[test]
    fn test_as_rect_normalizes() {
        let rect = Rectangle::new(Point::new(50.0, 50.0), -30.0, -10.0);
        let norm = rect.as_rect();
        assert!((norm.x0 - 20.0).abs() < f64::EPSILON);
        assert!((norm.y0 - 40.0).abs() < f64::EPSILON);
        assert!((norm.x1 - 50.0).abs() < f64::EPSILON);
        assert!((norm.y1 - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_area_is_valid() {
        let rect = Rectangle::new(Point::new(5.0, 5.0), 0.0, 0.0);
        assert!(rect.hit_test(Point::new(5.0, 5.0)));
        assert!(!rect.hit_test(Point::new(6.0, 5.0)));
    }
}
