//! Scene store: the ordered shape collection.

use crate::shapes::Shape;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// The authoritative, ordered collection of committed shapes.
///
/// Insertion order is draw order is z-order: the last-appended shape renders
/// on top and wins hit-test ties. Shape identity is the index into this
/// order, so indices held across mutations can go stale; the mutation
/// methods treat a stale index as a no-op rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a committed shape at the top of the z-order. The only path by
    /// which a drawn shape enters the scene.
    pub fn append(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Remove every shape matching the predicate, preserving the relative
    /// order of survivors. Returns the number removed.
    pub fn remove_where<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(&Shape) -> bool,
    {
        let before = self.shapes.len();
        self.shapes.retain(|shape| !predicate(shape));
        before - self.shapes.len()
    }

    /// Replace the shape at `index`. A stale (out-of-bounds) index is a
    /// silent no-op; returns whether the replacement happened.
    pub fn replace_at(&mut self, index: usize, shape: Shape) -> bool {
        match self.shapes.get_mut(index) {
            Some(slot) => {
                *slot = shape;
                true
            }
            None => false,
        }
    }

    /// Remove all shapes.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Find the topmost shape containing the point, scanning front to back.
    pub fn topmost_hit(&self, point: Point) -> Option<usize> {
        self.shapes
            .iter()
            .enumerate()
            .rev()
            .find(|(_, shape)| shape.hit_test(point))
            .map(|(index, _)| index)
    }

    /// Get a shape by index.
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Iterate shapes in z-order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Get the shapes as a slice, back to front.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
