//! Drag interaction state machine.

use crate::element::ElementId;
use crate::hit_test::hit_test;
use crate::scene::Scene;
use crate::surface::Surface;
use kurbo::{Point, Vec2};

/// State of a drag interaction.
#[derive(Debug, Clone, Default)]
pub enum DragState {
    /// No element is held.
    #[default]
    Idle,
    /// An element is held by the pointer.
    Dragging {
        /// Element being moved.
        id: ElementId,
        /// Pointer position relative to the top-left of the element's hit box.
        grab_offset: Vec2,
        /// Scene as it was when the drag began.
        before: Scene,
    },
}

/// Turns pointer down/move/release into element moves.
///
/// The controller never owns the live scene. It reads the scene it is given
/// and hands back new scenes for the caller to install.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Element currently held, if any.
    pub fn dragged(&self) -> Option<ElementId> {
        match self.state {
            DragState::Dragging { id, .. } => Some(id),
            DragState::Idle => None,
        }
    }

    /// Pick up the topmost element under `point`.
    ///
    /// Returns true if a drag started. A second down while dragging is
    /// ignored.
    pub fn pointer_down(&mut self, surface: &mut dyn Surface, scene: &Scene, point: Point) -> bool {
        if self.is_dragging() {
            log::debug!("Ignoring pointer down while already dragging");
            return false;
        }
        let Some(id) = hit_test(surface, scene, point) else {
            return false;
        };
        let Some(element) = scene.get(id) else {
            return false;
        };

        let top_left = Point::new(
            element.position.x,
            element.position.y - element.style.font_size.px(),
        );
        log::debug!("Drag start on {} at ({}, {})", id, point.x, point.y);
        self.state = DragState::Dragging {
            id,
            grab_offset: point - top_left,
            before: scene.clone(),
        };
        true
    }

    /// Scene with the held element following `point`, or `None` when idle.
    pub fn pointer_move(&self, scene: &Scene, point: Point) -> Option<Scene> {
        let DragState::Dragging { id, grab_offset, .. } = &self.state else {
            return None;
        };
        // The grab offset is taken from the box top while the anchor sits on
        // the baseline, hence the font size term.
        let font_size = scene.get(*id)?.style.font_size.px();
        let anchor = Point::new(
            point.x - grab_offset.x,
            point.y + font_size - grab_offset.y,
        );
        Some(scene.move_element(*id, anchor))
    }

    /// End the drag. Returns the scene from before the drag began so the
    /// caller can commit it, or `None` if nothing was held.
    pub fn release(&mut self) -> Option<Scene> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { id, before, .. } => {
                log::debug!("Drag end on {}", id);
                Some(before)
            }
            DragState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{FontSize, TextDraft, TextStyle};
    use crate::test_surface::TestSurface;

    fn scene() -> Scene {
        let element = TextDraft::new("Hello", TextStyle::default().with_font_size(FontSize::new(20)))
            .at(Point::new(100.0, 100.0))
            .into_element(ElementId(1), Point::ZERO)
            .unwrap();
        Scene::new().add_element(element)
    }

    #[test]
    fn test_down_on_miss_stays_idle() {
        let mut surface = TestSurface::new(600.0, 400.0);
        let mut drag = DragController::new();
        assert!(!drag.pointer_down(&mut surface, &scene(), Point::new(10.0, 10.0)));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_move_while_idle_is_noop() {
        let drag = DragController::new();
        assert!(drag.pointer_move(&scene(), Point::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn test_drag_moves_by_pointer_delta() {
        let mut surface = TestSurface::new(600.0, 400.0);
        let mut drag = DragController::new();
        let start = scene();

        assert!(drag.pointer_down(&mut surface, &start, Point::new(110.0, 90.0)));
        assert_eq!(drag.dragged(), Some(ElementId(1)));

        let moved = drag.pointer_move(&start, Point::new(140.0, 130.0)).unwrap();
        assert_eq!(
            moved.get(ElementId(1)).unwrap().position,
            Point::new(130.0, 140.0)
        );

        // Later moves are relative to the grab point, not cumulative.
        let moved = drag.pointer_move(&moved, Point::new(115.0, 95.0)).unwrap();
        assert_eq!(
            moved.get(ElementId(1)).unwrap().position,
            Point::new(105.0, 105.0)
        );
    }

    #[test]
    fn test_release_returns_pre_drag_scene() {
        let mut surface = TestSurface::new(600.0, 400.0);
        let mut drag = DragController::new();
        let start = scene();

        drag.pointer_down(&mut surface, &start, Point::new(110.0, 90.0));
        let _ = drag.pointer_move(&start, Point::new(200.0, 200.0));

        assert_eq!(drag.release(), Some(start));
        assert!(!drag.is_dragging());
        assert_eq!(drag.release(), None);
    }

    #[test]
    fn test_second_down_is_ignored() {
        let mut surface = TestSurface::new(600.0, 400.0);
        let mut drag = DragController::new();
        let start = scene();

        assert!(drag.pointer_down(&mut surface, &start, Point::new(110.0, 90.0)));
        assert!(!drag.pointer_down(&mut surface, &start, Point::new(120.0, 95.0)));

        // Grab offset from the first down still applies.
        let moved = drag.pointer_move(&start, Point::new(110.0, 90.0)).unwrap();
        assert_eq!(moved.get(ElementId(1)).unwrap().position, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_move_of_vanished_element() {
        let mut surface = TestSurface::new(600.0, 400.0);
        let mut drag = DragController::new();
        drag.pointer_down(&mut surface, &scene(), Point::new(110.0, 90.0));
        assert!(drag.pointer_move(&Scene::new(), Point::new(1.0, 1.0)).is_none());
    }
}
