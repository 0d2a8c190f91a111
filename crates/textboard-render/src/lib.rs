//! Textboard Render Library
//!
//! Drawing surface implementations for Textboard. The recording surface
//! paints into a command log and measures text with approximate metrics, for
//! headless sessions and tests.

mod metrics;
mod recording;

pub use metrics::{FontMetrics, ParsedFont};
pub use recording::{DrawCommand, RecordingSurface, TextRun};
