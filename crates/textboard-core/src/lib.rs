//! Textboard Core Library
//!
//! Platform-agnostic scene, hit testing, drag and history engine for the
//! Textboard text label editor.

pub mod drag;
pub mod editor;
pub mod element;
pub mod error;
pub mod history;
pub mod input;
pub mod render;
pub mod scene;
pub mod surface;

pub use drag::{DragController, DragState};
pub use editor::{Editor, EditorConfig};
pub use element::{
    ElementId, FontFamily, FontSize, FontStyle, FontWeight, IdAllocator, TextDraft, TextElement,
    TextStyle,
};
pub use error::DraftError;
pub use history::{DEFAULT_HISTORY_LIMIT, History};
pub use hit_test::{hit_box, hit_test};
pub use input::{PointerBinding, PointerEvent, SurfaceMapper};
pub use render::{RenderStyle, render};
pub use scene::Scene;
pub use surface::Surface;

#[cfg(test)]
pub(crate) mod test_surface;
