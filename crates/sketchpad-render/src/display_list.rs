//! Display-list implementation of the core renderer port.

use crate::renderer::{RenderOptions, RenderResult, RendererError};
use kurbo::{BezPath, Size};
use peniko::Color;
use sketchpad_core::shapes::Shape;
use sketchpad_core::{Renderer, SURFACE_HEIGHT, SURFACE_WIDTH};

/// One stroked path in a frame.
#[derive(Debug, Clone)]
pub struct StrokedPath {
    /// The outline to stroke.
    pub path: BezPath,
    /// Stroke color.
    pub color: Color,
    /// Stroke width.
    pub width: f64,
}

/// Builds a display list per frame: `clear` starts a fresh frame, each
/// `stroke_shape` appends one stroked path. Hosts read `items` after the
/// editor repaints and submit them to their backend; the list carries
/// everything needed to reproduce the frame, so the core never reads
/// anything back.
#[derive(Debug)]
pub struct DisplayListRenderer {
    viewport: Size,
    options: RenderOptions,
    items: Vec<StrokedPath>,
}

impl Default for DisplayListRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayListRenderer {
    /// Create a renderer for the default logical surface.
    pub fn new() -> Self {
        Self {
            viewport: Size::new(SURFACE_WIDTH, SURFACE_HEIGHT),
            options: RenderOptions::default(),
            items: Vec::new(),
        }
    }

    /// Create a renderer for a custom viewport. Extents must be positive.
    pub fn with_viewport(width: f64, height: f64) -> RenderResult<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(RendererError::InvalidViewport(width, height));
        }
        Ok(Self {
            viewport: Size::new(width, height),
            ..Self::new()
        })
    }

    /// Replace the frame styling.
    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    /// Get the frame styling.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Get the viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// The current frame's stroked paths, in draw order.
    pub fn items(&self) -> &[StrokedPath] {
        &self.items
    }

    /// The color the surface should be cleared to before drawing `items`.
    pub fn background(&self) -> Color {
        self.options.background
    }
}

impl Renderer for DisplayListRenderer {
    fn clear(&mut self) {
        self.items.clear();
    }

    fn stroke_shape(&mut self, shape: &Shape) {
        self.items.push(StrokedPath {
            path: shape.to_path(),
            color: self.options.stroke,
            width: self.options.stroke_width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use sketchpad_core::{Editor, Mode, ShapeKind};

    #[test]
    fn test_invalid_viewport_rejected() {
        assert!(matches!(
            DisplayListRenderer::with_viewport(0.0, 600.0),
            Err(RendererError::InvalidViewport(..))
        ));
        assert!(DisplayListRenderer::with_viewport(800.0, 600.0).is_ok());
    }

    #[test]
    fn test_frame_follows_scene_order() {
        let mut editor = Editor::new();
        let mut renderer = DisplayListRenderer::new();

        editor.set_tool(ShapeKind::Rectangle);
        editor.pointer_down(Point::new(0.0, 0.0), &mut renderer);
        editor.pointer_up(Point::new(50.0, 50.0), &mut renderer);

        editor.set_tool(ShapeKind::Circle);
        editor.pointer_down(Point::new(100.0, 100.0), &mut renderer);
        editor.pointer_up(Point::new(110.0, 100.0), &mut renderer);

        assert_eq!(renderer.items().len(), 2);
        assert!(!renderer.items()[0].path.elements().is_empty());
    }

    #[test]
    fn test_live_draft_strokes_on_top() {
        let mut editor = Editor::new();
        let mut renderer = DisplayListRenderer::new();

        editor.set_tool(ShapeKind::Rectangle);
        editor.pointer_down(Point::new(0.0, 0.0), &mut renderer);
        editor.pointer_up(Point::new(50.0, 50.0), &mut renderer);

        editor.set_tool(ShapeKind::Line);
        editor.pointer_down(Point::new(60.0, 60.0), &mut renderer);
        editor.pointer_move(Point::new(90.0, 90.0), &mut renderer);

        // One committed shape plus the draft.
        assert_eq!(renderer.items().len(), 2);

        // Releasing replaces the draft with the committed line.
        editor.pointer_up(Point::new(90.0, 90.0), &mut renderer);
        assert_eq!(renderer.items().len(), 2);
        assert_eq!(editor.scene().len(), 2);
    }

    #[test]
    fn test_erase_shrinks_frame() {
        let mut editor = Editor::new();
        let mut renderer = DisplayListRenderer::new();

        editor.set_tool(ShapeKind::Rectangle);
        editor.pointer_down(Point::new(0.0, 0.0), &mut renderer);
        editor.pointer_up(Point::new(50.0, 50.0), &mut renderer);

        editor.set_mode(Mode::Erase);
        editor.pointer_down(Point::new(25.0, 25.0), &mut renderer);
        assert!(renderer.items().is_empty());
    }

    #[test]
    fn test_items_carry_frame_pen() {
        let mut editor = Editor::new();
        let mut renderer = DisplayListRenderer::new();
        renderer.set_options(
            RenderOptions::default()
                .with_stroke(Color::from_rgba8(200, 30, 30, 255))
                .with_stroke_width(3.0),
        );

        editor.pointer_down(Point::new(0.0, 0.0), &mut renderer);
        editor.pointer_up(Point::new(10.0, 10.0), &mut renderer);

        let item = &renderer.items()[0];
        assert_eq!(item.color.to_rgba8().r, 200);
        assert!((item.width - 3.0).abs() < f64::EPSILON);
    }
}
