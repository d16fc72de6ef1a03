//! Pure hit-testing and measurement primitives.

use kurbo::Point;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Test whether a point lies inside an axis-aligned box given by an origin
/// corner and signed extents. Negative `width`/`height` span leftward/upward
/// from the origin; the sign is normalized before the containment test.
pub fn point_in_box(point: Point, origin: Point, width: f64, height: f64) -> bool {
    let x0 = origin.x.min(origin.x + width);
    let x1 = origin.x.max(origin.x + width);
    let y0 = origin.y.min(origin.y + height);
    let y1 = origin.y.max(origin.y + height);
    point.x >= x0 && point.x <= x1 && point.y >= y0 && point.y <= y1
}

/// Test whether a point lies inside the axis-aligned bounding rectangle of a
/// segment. This is a coarse stand-in for distance-to-segment: a hit anywhere
/// in the enclosing rectangle counts, not only near the stroke. Known
/// limitation, kept for erase/select ergonomics on thin diagonal lines.
pub fn point_in_segment_bounds(point: Point, start: Point, end: Point) -> bool {
    point_in_box(point, start, end.x - start.x, end.y - start.y)
}

/// Test whether a point lies inside (or on) a circle.
pub fn point_in_circle(point: Point, center: Point, radius: f64) -> bool {
    distance(point, center) <= radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distance_zero() {
        let p = Point::new(7.0, -2.0);
        assert!(distance(p, p).abs() < f64::EPSILON);
    }

    #[test]
    fn test_point_in_box_positive_extents() {
        let origin = Point::new(10.0, 10.0);
        assert!(point_in_box(Point::new(20.0, 20.0), origin, 30.0, 30.0));
        assert!(point_in_box(Point::new(10.0, 10.0), origin, 30.0, 30.0));
        assert!(point_in_box(Point::new(40.0, 40.0), origin, 30.0, 30.0));
        assert!(!point_in_box(Point::new(41.0, 20.0), origin, 30.0, 30.0));
    }

    #[test]
    fn test_point_in_box_negative_extents() {
        // Box dragged leftward/upward from (50,50) spans [20,50]x[20,50].
        let origin = Point::new(50.0, 50.0);
        assert!(point_in_box(Point::new(30.0, 30.0), origin, -30.0, -30.0));
        assert!(point_in_box(Point::new(50.0, 20.0), origin, -30.0, -30.0));
        assert!(!point_in_box(Point::new(51.0, 30.0), origin, -30.0, -30.0));
        assert!(!point_in_box(Point::new(19.0, 30.0), origin, -30.0, -30.0));
    }

    #[test]
    fn test_segment_bounds_includes_off_stroke_points() {
        // The whole enclosing rectangle of the diagonal counts as a hit.
        let start = Point::new(0.0, 0.0);
        let end = Point::new(100.0, 100.0);
        assert!(point_in_segment_bounds(Point::new(50.0, 50.0), start, end));
        assert!(point_in_segment_bounds(Point::new(90.0, 10.0), start, end));
        assert!(!point_in_segment_bounds(Point::new(101.0, 50.0), start, end));
    }

    #[test]
    fn test_segment_bounds_reversed_endpoints() {
        let start = Point::new(100.0, 100.0);
        let end = Point::new(0.0, 0.0);
        assert!(point_in_segment_bounds(Point::new(50.0, 50.0), start, end));
    }

    #[test]
    fn test_point_in_circle() {
        let center = Point::new(0.0, 0.0);
        assert!(point_in_circle(Point::new(3.0, 4.0), center, 5.0));
        assert!(point_in_circle(Point::new(0.0, 0.0), center, 0.0));
        assert!(!point_in_circle(Point::new(3.0, 4.1), center, 5.0));
    }
}
