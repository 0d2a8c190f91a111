//! Drawing surface abstraction.

use kurbo::{Point, Size};
use peniko::Color;

/// A 2D drawing surface with canvas-style text primitives.
///
/// Coordinates are surface-local pixels with the origin at the top-left.
/// Implementations can wrap an HTML canvas, a GPU text renderer, or a
/// recording backend for tests.
pub trait Surface {
    /// Surface size in pixels.
    fn size(&self) -> Size;

    /// Fill the whole surface with `background`.
    fn clear(&mut self, background: Color);

    /// Set the font used by subsequent measure and fill calls.
    ///
    /// `font` is a composed font string such as `"italic bold 24px Arial"`.
    fn set_font(&mut self, font: &str);

    /// Set the color used by subsequent fill calls.
    fn set_fill_color(&mut self, color: Color);

    /// Advance width of `text` in the current font.
    fn measure_text_width(&mut self, text: &str) -> f64;

    /// Draw `text` with its baseline-left at `position`.
    fn fill_text(&mut self, text: &str, position: Point);
}
