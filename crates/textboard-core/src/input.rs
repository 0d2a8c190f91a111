//! Pointer events and mapping from client to surface coordinates.

use crate::editor::Editor;
use crate::surface::Surface;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Pointer event in some coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    /// Pointer left the surface.
    Leave(Point),
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down(p)
            | PointerEvent::Move(p)
            | PointerEvent::Up(p)
            | PointerEvent::Leave(p) => p,
        }
    }

    /// Same event with its position passed through `f`.
    pub fn map(self, f: impl FnOnce(Point) -> Point) -> Self {
        match self {
            PointerEvent::Down(p) => PointerEvent::Down(f(p)),
            PointerEvent::Move(p) => PointerEvent::Move(f(p)),
            PointerEvent::Up(p) => PointerEvent::Up(f(p)),
            PointerEvent::Leave(p) => PointerEvent::Leave(f(p)),
        }
    }
}

/// Converts client (window) coordinates into surface-local pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceMapper {
    /// Top-left of the surface in page coordinates.
    pub origin: Point,
    /// Current page scroll.
    pub scroll: Vec2,
}

impl SurfaceMapper {
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            scroll: Vec2::ZERO,
        }
    }

    pub fn with_scroll(mut self, scroll: Vec2) -> Self {
        self.scroll = scroll;
        self
    }

    /// Surface-local position of a client-space point.
    pub fn to_surface(&self, client: Point) -> Point {
        client - self.origin.to_vec2() + self.scroll
    }
}

/// Routes client-space pointer events into an editor while alive.
///
/// Dropping the binding releases a drag in progress, so tearing the surface
/// down mid-drag commits the moved position instead of leaving it held.
pub struct PointerBinding<'a, S: Surface> {
    editor: &'a mut Editor<S>,
    mapper: SurfaceMapper,
    /// Last surface-local pointer position seen.
    last_position: Point,
}

impl<'a, S: Surface> PointerBinding<'a, S> {
    pub(crate) fn new(editor: &'a mut Editor<S>, mapper: SurfaceMapper) -> Self {
        log::debug!("Pointer binding attached at {:?}", mapper.origin);
        Self {
            editor,
            mapper,
            last_position: Point::ZERO,
        }
    }

    /// Dispatch a client-space event. Returns whatever the editor reports.
    pub fn dispatch(&mut self, event: PointerEvent) -> bool {
        let mapper = self.mapper;
        let event = event.map(|p| mapper.to_surface(p));
        self.last_position = event.position();
        self.editor.handle_pointer(event)
    }

    /// Update the mapping after the surface moved or the page scrolled.
    pub fn set_mapper(&mut self, mapper: SurfaceMapper) {
        self.mapper = mapper;
    }

    pub fn editor(&self) -> &Editor<S> {
        &*self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor<S> {
        &mut *self.editor
    }
}

impl<S: Surface> Drop for PointerBinding<'_, S> {
    fn drop(&mut self) {
        if self.editor.is_dragging() {
            self.editor.pointer_leave(self.last_position);
        }
        log::debug!("Pointer binding released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{FontSize, TextStyle};
    use crate::test_surface::TestSurface;

    #[test]
    fn test_mapper_offset_and_scroll() {
        let mapper = SurfaceMapper::new(Point::new(40.0, 60.0));
        assert_eq!(mapper.to_surface(Point::new(50.0, 70.0)), Point::new(10.0, 10.0));

        let scrolled = mapper.with_scroll(Vec2::new(0.0, 100.0));
        assert_eq!(scrolled.to_surface(Point::new(50.0, 70.0)), Point::new(10.0, 110.0));
    }

    #[test]
    fn test_event_map_keeps_kind() {
        let event = PointerEvent::Leave(Point::new(1.0, 2.0)).map(|p| p + Vec2::new(1.0, 1.0));
        assert_eq!(event, PointerEvent::Leave(Point::new(2.0, 3.0)));
        assert_eq!(event.position(), Point::new(2.0, 3.0));
    }

    #[test]
    fn test_binding_maps_client_coordinates() {
        let mut editor = Editor::new(TestSurface::new(600.0, 400.0));
        let style = TextStyle::default().with_font_size(FontSize::new(20));
        let id = editor.add_text("Hello", style).unwrap();

        {
            let mut binding = editor.bind(SurfaceMapper::new(Point::new(100.0, 50.0)));
            assert!(binding.dispatch(PointerEvent::Down(Point::new(410.0, 240.0))));
            assert!(binding.dispatch(PointerEvent::Move(Point::new(420.0, 250.0))));
            assert!(binding.dispatch(PointerEvent::Up(Point::new(420.0, 250.0))));
        }

        assert_eq!(editor.scene().get(id).unwrap().position, Point::new(310.0, 210.0));
        assert_eq!(editor.history().undo_len(), 2);
    }

    #[test]
    fn test_dropping_binding_ends_drag() {
        let mut editor = Editor::new(TestSurface::new(600.0, 400.0));
        let style = TextStyle::default().with_font_size(FontSize::new(20));
        editor.add_text("Hello", style);

        {
            let mut binding = editor.bind(SurfaceMapper::default());
            binding.dispatch(PointerEvent::Down(Point::new(310.0, 190.0)));
            binding.dispatch(PointerEvent::Move(Point::new(350.0, 190.0)));
            assert!(binding.editor().is_dragging());
        }

        assert!(!editor.is_dragging());
        assert_eq!(editor.history().undo_len(), 2);
    }
}
