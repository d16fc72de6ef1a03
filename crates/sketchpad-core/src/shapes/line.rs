//! Line shape.

use crate::geometry;
use kurbo::{BezPath, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A straight line segment. The start point is the drag/edit anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Start point (anchor).
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Build the line a drag gesture from `anchor` to `pointer` describes.
    pub fn from_drag(anchor: Point, pointer: Point) -> Self {
        Self::new(anchor, pointer)
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        geometry::distance(self.start, self.end)
    }

    /// Get the bounding box.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.start.x, self.start.y, self.end.x, self.end.y).abs()
    }

    /// Check if a point hits this line. Tested against the segment's
    /// enclosing rectangle, not the stroke itself.
    pub fn hit_test(&self, point: Point) -> bool {
        geometry::point_in_segment_bounds(point, self.start, self.end)
    }

    /// Move the anchor to a new position, carrying the end point along so
    /// the start->end vector is unchanged.
    pub fn move_to(&mut self, anchor: Point) {
        let delta: Vec2 = anchor - self.start;
        self.start += delta;
        self.end += delta;
    }

    /// Get the path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        if self.start == self.end {
            return path;
        }
        path.move_to(self.start);
        path.line_to(self.end);
        path
    }
}
