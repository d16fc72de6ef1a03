//! Renderer port: the boundary the editor repaints through.

use crate::shapes::Shape;

/// Logical width of the drawing surface.
pub const SURFACE_WIDTH: f64 = 800.0;
/// Logical height of the drawing surface.
pub const SURFACE_HEIGHT: f64 = 600.0;

/// The repaint contract between the editor and a drawing surface.
///
/// The editor's only refresh strategy is `clear` followed by one
/// `stroke_shape` per scene element in z-order (plus one for the live draft
/// while drawing). Implementations never hand pixel data back to the core.
pub trait Renderer {
    /// Clear the whole surface.
    fn clear(&mut self);

    /// Stroke a single shape.
    fn stroke_shape(&mut self, shape: &Shape);
}

/// One recorded renderer call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    Clear,
    Stroke(Shape),
}

/// In-memory renderer for tests and headless hosts: records the command
/// stream instead of painting.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<RenderCommand>,
}

impl RecordingRenderer {
    /// Create a new empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded so far, in call order.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// The commands of the most recent frame (everything after the last
    /// `Clear`, including it). Empty if nothing was recorded.
    pub fn last_frame(&self) -> &[RenderCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, RenderCommand::Clear))
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Drop the recorded history.
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.commands.push(RenderCommand::Clear);
    }

    fn stroke_shape(&mut self, shape: &Shape) {
        self.commands.push(RenderCommand::Stroke(shape.clone()));
    }
}
