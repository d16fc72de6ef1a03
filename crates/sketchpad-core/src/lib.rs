//! Sketchpad Core Library
//!
//! Shape model, scene store, and pointer-interaction engine for the
//! Sketchpad vector editor. Hosts own the drawing surface and forward
//! pointer events in surface-local coordinates; the core owns all state
//! and repaints through the [`render::Renderer`] port.

pub mod editor;
pub mod geometry;
pub mod render;
pub mod scene;
pub mod shapes;

pub use editor::{Editor, Mode};
pub use render::{RecordingRenderer, RenderCommand, Renderer, SURFACE_HEIGHT, SURFACE_WIDTH};
pub use scene::Scene;
pub use shapes::{Circle, Line, Rectangle, Shape, ShapeKind};
