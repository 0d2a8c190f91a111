//! Editor facade: owns the live scene and history and routes user actions.

use crate::drag::DragController;
use crate::element::{ElementId, IdAllocator, TextDraft, TextStyle};
use crate::history::{DEFAULT_HISTORY_LIMIT, History};
use crate::input::{PointerBinding, PointerEvent, SurfaceMapper};
use crate::render::{RenderStyle, render};
use crate::scene::Scene;
use crate::surface::Surface;
use kurbo::Point;

/// Editor settings.
#[derive(Debug, Clone, Copy)]
pub struct EditorConfig {
    /// Maximum number of undo states; `None` keeps everything.
    pub history_limit: Option<usize>,
    pub render_style: RenderStyle,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
            render_style: RenderStyle::default(),
        }
    }
}

/// A text label editor bound to one drawing surface.
///
/// The editor is the only owner of the live scene and its history. Every
/// change to the live scene is followed by a redraw.
pub struct Editor<S: Surface> {
    surface: S,
    scene: Scene,
    history: History,
    drag: DragController,
    ids: IdAllocator,
    render_style: RenderStyle,
}

impl<S: Surface> Editor<S> {
    /// Create an editor with default settings and draw the empty scene.
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, EditorConfig::default())
    }

    /// Create an editor and draw the empty scene.
    pub fn with_config(surface: S, config: EditorConfig) -> Self {
        let mut editor = Self {
            surface,
            scene: Scene::new(),
            history: History::with_limit(config.history_limit),
            drag: DragController::new(),
            ids: IdAllocator::new(),
            render_style: config.render_style,
        };
        editor.redraw();
        editor
    }

    /// The live scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Add text centered on the surface.
    ///
    /// Empty or whitespace-only text is ignored and returns `None`.
    pub fn add_text(&mut self, text: &str, style: TextStyle) -> Option<ElementId> {
        self.add_draft(TextDraft::new(text, style))
    }

    /// Add a draft, centered on the surface unless it carries a position.
    pub fn add_draft(&mut self, draft: TextDraft) -> Option<ElementId> {
        if let Err(err) = draft.validate() {
            log::debug!("Ignoring add: {}", err);
            return None;
        }
        // A held element is dropped first so the add gets its own history step.
        self.finish_drag();

        let id = self.ids.next_id();
        let element = match draft.into_element(id, self.surface_center()) {
            Ok(element) => element,
            Err(err) => {
                log::debug!("Ignoring add: {}", err);
                return None;
            }
        };
        log::info!("Adding text {} at ({}, {})", id, element.position.x, element.position.y);

        let next = self.scene.add_element(element);
        let before = std::mem::replace(&mut self.scene, next);
        self.history.commit(before);
        self.redraw();
        Some(id)
    }

    /// Undo the last action. Returns true if the scene changed.
    pub fn undo(&mut self) -> bool {
        self.finish_drag();
        match self.history.undo(self.scene.clone()) {
            Some(restored) => {
                log::debug!("Undo ({} left)", self.history.undo_len());
                self.scene = restored;
                self.redraw();
                true
            }
            None => false,
        }
    }

    /// Redo the last undone action. Returns true if the scene changed.
    pub fn redo(&mut self) -> bool {
        self.finish_drag();
        match self.history.redo(self.scene.clone()) {
            Some(restored) => {
                log::debug!("Redo ({} left)", self.history.redo_len());
                self.scene = restored;
                self.redraw();
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Pointer pressed at a surface-local point. Returns true if a drag
    /// started.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        self.drag.pointer_down(&mut self.surface, &self.scene, point)
    }

    /// Pointer moved. Returns true if a held element moved.
    ///
    /// Moves update the live scene only; they are not undo steps.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        match self.drag.pointer_move(&self.scene, point) {
            Some(next) => {
                self.scene = next;
                self.redraw();
                true
            }
            None => false,
        }
    }

    /// Pointer released. Returns true if a drag was committed.
    pub fn pointer_up(&mut self, _point: Point) -> bool {
        self.finish_drag()
    }

    /// Pointer left the surface. Handled exactly like a release.
    pub fn pointer_leave(&mut self, _point: Point) -> bool {
        self.finish_drag()
    }

    /// Dispatch a surface-local pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down(point) => self.pointer_down(point),
            PointerEvent::Move(point) => self.pointer_move(point),
            PointerEvent::Up(point) => self.pointer_up(point),
            PointerEvent::Leave(point) => self.pointer_leave(point),
        }
    }

    /// Accept raw client-space pointer events through `mapper` until the
    /// returned binding is dropped.
    pub fn bind(&mut self, mapper: SurfaceMapper) -> PointerBinding<'_, S> {
        PointerBinding::new(self, mapper)
    }

    /// Repaint the live scene.
    pub fn redraw(&mut self) {
        render(&mut self.surface, &self.scene, &self.render_style);
    }

    fn surface_center(&self) -> Point {
        let size = self.surface.size();
        Point::new(size.width / 2.0, size.height / 2.0)
    }

    /// Release any held element, committing the pre-drag scene if the drag
    /// changed anything.
    fn finish_drag(&mut self) -> bool {
        let Some(before) = self.drag.release() else {
            return false;
        };
        if before == self.scene {
            log::debug!("Drag ended without movement");
            return false;
        }
        self.history.commit(before);
        true
    }
}
