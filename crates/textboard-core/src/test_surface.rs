//! Minimal surface for unit tests.

use crate::surface::Surface;
use kurbo::{Point, Size};
use peniko::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Clear,
    Font(String),
    Fill(String, Point),
}

/// Records calls and measures every glyph as half the font size wide.
pub struct TestSurface {
    pub size: Size,
    pub ops: Vec<Op>,
    font_px: f64,
}

impl TestSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            ops: Vec::new(),
            font_px: 10.0,
        }
    }

    pub fn frames(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Clear)).count()
    }
}

impl Surface for TestSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, _background: Color) {
        self.ops.push(Op::Clear);
    }

    fn set_font(&mut self, font: &str) {
        self.font_px = font
            .split_whitespace()
            .find_map(|token| token.strip_suffix("px")?.parse().ok())
            .unwrap_or(10.0);
        self.ops.push(Op::Font(font.to_string()));
    }

    fn set_fill_color(&mut self, _color: Color) {}

    fn measure_text_width(&mut self, text: &str) -> f64 {
        text.chars().count() as f64 * self.font_px * 0.5
    }

    fn fill_text(&mut self, text: &str, position: Point) {
        self.ops.push(Op::Fill(text.to_string(), position));
    }
}
