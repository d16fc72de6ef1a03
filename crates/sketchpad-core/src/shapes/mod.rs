//! Shape definitions for the editor.

mod circle;
mod line;
mod rectangle;

pub use circle::Circle;
pub use line::Line;
pub use rectangle::Rectangle;

use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// The shape kinds a draw gesture can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShapeKind {
    #[default]
    Line,
    Rectangle,
    Circle,
}

/// Enum wrapper for all shape types.
///
/// Shapes carry no identifier; identity within a scene is the shape's
/// position in the scene's draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Line(Line),
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape {
    /// Build the shape a drag gesture from `anchor` to `pointer` describes.
    ///
    /// This is the single construction path for draft stubs
    /// (`pointer == anchor`), live previews, and commits; commit callers
    /// pass the release coordinates so the final shape never depends on a
    /// stale preview.
    pub fn from_drag(kind: ShapeKind, anchor: Point, pointer: Point) -> Self {
        match kind {
            ShapeKind::Line => Shape::Line(Line::from_drag(anchor, pointer)),
            ShapeKind::Rectangle => Shape::Rectangle(Rectangle::from_drag(anchor, pointer)),
            ShapeKind::Circle => Shape::Circle(Circle::from_drag(anchor, pointer)),
        }
    }

    /// Get the kind of this shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(_) => ShapeKind::Line,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    /// Get the anchor point: the draw-start point for lines and circles,
    /// the origin corner for rectangles.
    pub fn anchor(&self) -> Point {
        match self {
            Shape::Line(s) => s.start,
            Shape::Rectangle(s) => s.origin,
            Shape::Circle(s) => s.center,
        }
    }

    /// Get the bounding box.
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Line(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
        }
    }

    /// Check if a point hits this shape.
    pub fn hit_test(&self, point: Point) -> bool {
        match self {
            Shape::Line(s) => s.hit_test(point),
            Shape::Rectangle(s) => s.hit_test(point),
            Shape::Circle(s) => s.hit_test(point),
        }
    }

    /// Move the anchor to a new position. Lines carry their end point along
    /// (the start->end vector is preserved); rectangles and circles keep
    /// their extents.
    pub fn move_to(&mut self, anchor: Point) {
        match self {
            Shape::Line(s) => s.move_to(anchor),
            Shape::Rectangle(s) => s.move_to(anchor),
            Shape::Circle(s) => s.move_to(anchor),
        }
    }

    /// Get the path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        match self {
            Shape::Line(s) => s.to_path(),
            Shape::Rectangle(s) => s.to_path(),
            Shape::Circle(s) => s.to_path(),
        }
    }

    /// The numeric fields applicable to this shape's kind, in display order.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            Shape::Line(_) => &["anchor_x", "anchor_y", "end_x", "end_y"],
            Shape::Rectangle(_) => &["anchor_x", "anchor_y", "width", "height"],
            Shape::Circle(_) => &["anchor_x", "anchor_y", "radius"],
        }
    }

    /// Read a numeric field by name. Returns `None` for names outside this
    /// kind's field set.
    pub fn field(&self, name: &str) -> Option<f64> {
        match (self, name) {
            (Shape::Line(s), "anchor_x") => Some(s.start.x),
            (Shape::Line(s), "anchor_y") => Some(s.start.y),
            (Shape::Line(s), "end_x") => Some(s.end.x),
            (Shape::Line(s), "end_y") => Some(s.end.y),
            (Shape::Rectangle(s), "anchor_x") => Some(s.origin.x),
            (Shape::Rectangle(s), "anchor_y") => Some(s.origin.y),
            (Shape::Rectangle(s), "width") => Some(s.width),
            (Shape::Rectangle(s), "height") => Some(s.height),
            (Shape::Circle(s), "anchor_x") => Some(s.center.x),
            (Shape::Circle(s), "anchor_y") => Some(s.center.y),
            (Shape::Circle(s), "radius") => Some(s.radius),
            _ => None,
        }
    }

    /// Write a numeric field from raw panel text. Returns whether the edit
    /// was applied.
    ///
    /// Names outside this kind's field set, unparsable text, and non-finite
    /// values are all no-ops. A negative `radius` is clamped to zero so the
    /// radius invariant holds on every write path.
    pub fn set_field(&mut self, name: &str, raw: &str) -> bool {
        let Ok(value) = raw.trim().parse::<f64>() else {
            return false;
        };
        if !value.is_finite() {
            return false;
        }
        match (self, name) {
            (Shape::Line(s), "anchor_x") => s.start.x = value,
            (Shape::Line(s), "anchor_y") => s.start.y = value,
            (Shape::Line(s), "end_x") => s.end.x = value,
            (Shape::Line(s), "end_y") => s.end.y = value,
            (Shape::Rectangle(s), "anchor_x") => s.origin.x = value,
            (Shape::Rectangle(s), "anchor_y") => s.origin.y = value,
            (Shape::Rectangle(s), "width") => s.width = value,
            (Shape::Rectangle(s), "height") => s.height = value,
            (Shape::Circle(s), "anchor_x") => s.center.x = value,
            (Shape::Circle(s), "anchor_y") => s.center.y = value,
            (Shape::Circle(s), "radius") => s.radius = value.max(0.0),
            _ => return false,
        }
        true
    }
}
