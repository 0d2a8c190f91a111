//! Surface that records draw calls instead of rasterizing them.

use crate::metrics::{FontMetrics, ParsedFont};
use kurbo::{Point, Size};
use peniko::Color;
use textboard_core::{Surface, TextStyle};

/// A single recorded drawing call.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Clear(Color),
    SetFont(String),
    SetFillColor(Color),
    FillText { text: String, position: Point },
}

/// A piece of text as painted in a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub position: Point,
    pub font: String,
}

/// Headless surface keeping a log of the current frame.
///
/// Clearing starts a new log. Font changes are recorded only when text is
/// painted with them, so fonts set just to measure text stay out of the log.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    commands: Vec<DrawCommand>,
    font: TextStyle,
    /// Last font string that parsed.
    font_name: String,
    /// Font last written to the log in this frame.
    recorded_font: Option<String>,
    frames: usize,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        let font = TextStyle::default();
        Self {
            size: Size::new(width, height),
            commands: Vec::new(),
            font_name: font.font_string(),
            font,
            recorded_font: None,
            frames: 0,
        }
    }

    /// Number of times the surface was cleared.
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    /// Commands since the last clear, including the clear itself.
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text painted in the last frame, back to front.
    pub fn text_runs(&self) -> Vec<TextRun> {
        let mut font = String::new();
        let mut runs = Vec::new();
        for command in self.last_frame() {
            match command {
                DrawCommand::SetFont(f) => font.clone_from(f),
                DrawCommand::FillText { text, position } => runs.push(TextRun {
                    text: text.clone(),
                    position: *position,
                    font: font.clone(),
                }),
                DrawCommand::Clear(_) | DrawCommand::SetFillColor(_) => {}
            }
        }
        runs
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, background: Color) {
        self.frames += 1;
        self.commands.clear();
        self.recorded_font = None;
        self.commands.push(DrawCommand::Clear(background));
    }

    fn set_font(&mut self, font: &str) {
        match ParsedFont::parse(font) {
            Some(ParsedFont(style)) => {
                self.font = style;
                self.font_name = font.to_string();
            }
            // Canvas keeps the previous font when given an invalid one.
            None => log::warn!("Ignoring unparsable font {:?}", font),
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    fn measure_text_width(&mut self, text: &str) -> f64 {
        FontMetrics::measure(&self.font, text)
    }

    fn fill_text(&mut self, text: &str, position: Point) {
        if self.recorded_font.as_deref() != Some(self.font_name.as_str()) {
            self.commands.push(DrawCommand::SetFont(self.font_name.clone()));
            self.recorded_font = Some(self.font_name.clone());
        }
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            position,
        });
    }
}
