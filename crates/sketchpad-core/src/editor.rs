//! Interaction controller: pointer-event sequencing over the scene.

use crate::render::Renderer;
use crate::scene::Scene;
use crate::shapes::{Shape, ShapeKind};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Operator-selected interaction modes. Exclusive; switching modes abandons
/// any in-flight gesture without committing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Mode {
    #[default]
    Draw,
    Erase,
    Drag,
}

/// A draw gesture in flight: the press anchor and the last pointer position.
#[derive(Debug, Clone, Copy)]
struct DraftGesture {
    anchor: Point,
    current: Point,
}

/// A drag gesture in flight: the grabbed scene index and the press point's
/// offset from the shape anchor.
#[derive(Debug, Clone, Copy)]
struct DragGesture {
    index: usize,
    offset: Vec2,
}

/// Per-mode gesture state. Entering a mode constructs its state fresh, so a
/// gesture cannot leak across a mode switch.
#[derive(Debug, Clone)]
enum ModeState {
    Draw { draft: Option<DraftGesture> },
    Erase { held: bool },
    Drag { grab: Option<DragGesture> },
}

impl ModeState {
    fn fresh(mode: Mode) -> Self {
        match mode {
            Mode::Draw => ModeState::Draw { draft: None },
            Mode::Erase => ModeState::Erase { held: false },
            Mode::Drag => ModeState::Drag { grab: None },
        }
    }

    fn mode(&self) -> Mode {
        match self {
            ModeState::Draw { .. } => Mode::Draw,
            ModeState::Erase { .. } => Mode::Erase,
            ModeState::Drag { .. } => Mode::Drag,
        }
    }
}

/// The interaction engine: owns the scene, the current tool and mode, the
/// selection, and the in-flight gesture. Hosts forward pointer events in
/// surface-local coordinates together with the renderer to repaint through;
/// each handler runs to completion and repaints the full scene before the
/// next event arrives.
///
/// All operations are total: a stale index, an unknown field name, or
/// unparsable panel text degrade to a no-op, never a panic.
#[derive(Debug)]
pub struct Editor {
    scene: Scene,
    tool: ShapeKind,
    state: ModeState,
    selection: Option<usize>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Create an editor with an empty scene, Draw mode, and the Line tool.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            tool: ShapeKind::default(),
            state: ModeState::fresh(Mode::default()),
            selection: None,
        }
    }

    /// Get the committed scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Get the current mode.
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Switch interaction mode. Any in-flight gesture is abandoned; nothing
    /// is committed.
    pub fn set_mode(&mut self, mode: Mode) {
        log::debug!("mode -> {:?}", mode);
        self.state = ModeState::fresh(mode);
    }

    /// Get the current tool shape.
    pub fn tool(&self) -> ShapeKind {
        self.tool
    }

    /// Select the shape kind the Draw mode produces. Abandons any in-flight
    /// gesture, like a mode switch.
    pub fn set_tool(&mut self, tool: ShapeKind) {
        self.tool = tool;
        self.state = ModeState::fresh(self.state.mode());
    }

    /// Index of the last-touched shape, if any.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// The selected shape, if the selection is still in bounds.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.scene.get(self.selection?)
    }

    /// The live draft under construction, if a draw gesture is in flight.
    /// Never part of the scene.
    pub fn preview_shape(&self) -> Option<Shape> {
        match &self.state {
            ModeState::Draw { draft: Some(d) } => {
                Some(Shape::from_drag(self.tool, d.anchor, d.current))
            }
            _ => None,
        }
    }

    /// Handle a primary-button press.
    pub fn pointer_down(&mut self, pos: Point, renderer: &mut dyn Renderer) {
        match &mut self.state {
            ModeState::Draw { draft } => {
                self.selection = None;
                *draft = Some(DraftGesture {
                    anchor: pos,
                    current: pos,
                });
            }
            ModeState::Erase { held } => {
                *held = true;
                Self::erase_at(&mut self.scene, pos);
            }
            ModeState::Drag { grab } => match self.scene.topmost_hit(pos) {
                Some(index) => {
                    // Offset from the shape anchor keeps the grab point
                    // under the pointer for the whole gesture.
                    let anchor = self.scene.get(index).map(Shape::anchor).unwrap_or(pos);
                    self.selection = Some(index);
                    *grab = Some(DragGesture {
                        index,
                        offset: pos - anchor,
                    });
                }
                None => {
                    self.selection = None;
                    *grab = None;
                }
            },
        }
        self.redraw(renderer);
    }

    /// Handle pointer movement.
    pub fn pointer_move(&mut self, pos: Point, renderer: &mut dyn Renderer) {
        match &mut self.state {
            ModeState::Draw { draft } => {
                if let Some(d) = draft {
                    d.current = pos;
                }
            }
            ModeState::Erase { held } => {
                if *held {
                    Self::erase_at(&mut self.scene, pos);
                }
            }
            ModeState::Drag { grab } => {
                if let Some(g) = *grab {
                    if let Some(shape) = self.scene.get(g.index) {
                        let mut moved = shape.clone();
                        moved.move_to(pos - g.offset);
                        self.scene.replace_at(g.index, moved);
                    }
                }
            }
        }
        self.redraw(renderer);
    }

    /// Handle a primary-button release at `pos`.
    pub fn pointer_up(&mut self, pos: Point, renderer: &mut dyn Renderer) {
        self.finish_gesture(pos);
        self.redraw(renderer);
    }

    /// Handle the pointer leaving the surface at `pos`. A draw gesture is
    /// finalized at the leave position exactly like a release, not
    /// discarded.
    pub fn pointer_leave(&mut self, pos: Point, renderer: &mut dyn Renderer) {
        self.finish_gesture(pos);
        self.redraw(renderer);
    }

    fn finish_gesture(&mut self, pos: Point) {
        match &mut self.state {
            ModeState::Draw { draft } => {
                if let Some(d) = draft.take() {
                    // Recomputed from the release coordinates; a throttled
                    // move stream cannot leave the committed fields stale.
                    let shape = Shape::from_drag(self.tool, d.anchor, pos);
                    log::debug!("committed {:?} at index {}", self.tool, self.scene.len());
                    self.scene.append(shape);
                }
            }
            ModeState::Erase { held } => *held = false,
            ModeState::Drag { grab } => *grab = None,
        }
    }

    fn erase_at(scene: &mut Scene, pos: Point) {
        let removed = scene.remove_where(|shape| shape.hit_test(pos));
        if removed > 0 {
            log::debug!("erased {} shape(s) at ({}, {})", removed, pos.x, pos.y);
        }
    }

    /// Empty the scene and reset selection and gesture state.
    pub fn clear(&mut self, renderer: &mut dyn Renderer) {
        log::debug!("cleared scene ({} shapes)", self.scene.len());
        self.scene.clear();
        self.selection = None;
        self.state = ModeState::fresh(self.state.mode());
        self.redraw(renderer);
    }

    /// Edit a numeric field of the selected shape from raw panel text.
    /// Returns whether the edit was applied.
    ///
    /// No-ops: no selection, stale selection, unknown field for the shape's
    /// kind, unparsable text, and edits to a shape currently held by a drag
    /// gesture (drag wins until release).
    pub fn set_field(&mut self, name: &str, raw: &str, renderer: &mut dyn Renderer) -> bool {
        let Some(index) = self.selection else {
            return false;
        };
        if let ModeState::Drag { grab: Some(g) } = &self.state {
            if g.index == index {
                return false;
            }
        }
        let Some(shape) = self.scene.get(index) else {
            return false;
        };
        let mut edited = shape.clone();
        if !edited.set_field(name, raw) {
            return false;
        }
        self.scene.replace_at(index, edited);
        self.redraw(renderer);
        true
    }

    /// Repaint the full scene: clear, every committed shape in z-order,
    /// then the live draft on top if one exists.
    pub fn redraw(&self, renderer: &mut dyn Renderer) {
        renderer.clear();
        for shape in self.scene.iter() {
            renderer.stroke_shape(shape);
        }
        if let Some(draft) = self.preview_shape() {
            renderer.stroke_shape(&draft);
        }
    }
}
