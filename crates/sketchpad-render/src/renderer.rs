//! Renderer configuration and errors.

use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("invalid viewport: {0}x{1}")]
    InvalidViewport(f64, f64),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Frame styling for the display list. Shapes have no per-shape style; the
/// whole frame strokes with one fixed pen.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Background color the surface is cleared to.
    pub background: Color,
    /// Stroke color for all shapes.
    pub stroke: Color,
    /// Stroke width for all shapes.
    pub stroke_width: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: Color::from_rgba8(250, 250, 250, 255),
            stroke: Color::from_rgba8(0, 0, 0, 255),
            stroke_width: 2.0,
        }
    }
}

impl RenderOptions {
    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the stroke color.
    pub fn with_stroke(mut self, color: Color) -> Self {
        self.stroke = color;
        self
    }

    /// Set the stroke width.
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }
}
