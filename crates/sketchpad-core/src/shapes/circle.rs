//! Circle shape.

use crate::geometry;
use kurbo::{BezPath, Circle as KurboCircle, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A circle. The center is the drag/edit anchor; the radius is derived as
/// the distance from the anchor to the pointer at commit time and is never
/// negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center point (anchor).
    pub center: Point,
    /// Radius, >= 0.
    pub radius: f64,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Build the circle a drag gesture from `anchor` to `pointer` describes.
    pub fn from_drag(anchor: Point, pointer: Point) -> Self {
        Self::new(anchor, geometry::distance(anchor, pointer))
    }

    /// Get as a kurbo Circle.
    pub fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(self.center, self.radius)
    }

    /// Get the bounding box.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    /// Check if a point hits this circle.
    pub fn hit_test(&self, point: Point) -> bool {
        geometry::point_in_circle(point, self.center, self.radius)
    }

    /// Move the center; the radius is unchanged.
    pub fn move_to(&mut self, anchor: Point) {
        self.center = anchor;
    }

    /// Get the path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }
}
