//! Sketchpad renderer adapter.
//!
//! Implements the core's [`sketchpad_core::Renderer`] port as a
//! backend-neutral display list: each frame becomes a sequence of stroked
//! [`kurbo::BezPath`] items a host can hand to any CPU or GPU backend.

mod display_list;
mod renderer;

pub use display_list::{DisplayListRenderer, StrokedPath};
pub use renderer::{RenderOptions, RenderResult, RendererError};
