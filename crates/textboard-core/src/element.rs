//! Text element definitions.

use crate::error::DraftError;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a placed text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out monotonically increasing element ids.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdAllocator {
    /// Create an allocator starting at id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn next_id(&mut self) -> ElementId {
        let id = ElementId(self.next);
        self.next += 1;
        id
    }
}

/// Font family options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Arial,
    Verdana,
    Helvetica,
    TimesNewRoman,
    CourierNew,
    Georgia,
    PalatinoLinotype,
}

impl FontFamily {
    /// Get the font family name as used by the surface.
    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::Verdana => "Verdana",
            FontFamily::Helvetica => "Helvetica",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::CourierNew => "Courier New",
            FontFamily::Georgia => "Georgia",
            FontFamily::PalatinoLinotype => "Palatino Linotype",
        }
    }

    /// Get all available font families.
    pub fn all() -> &'static [FontFamily] {
        &[
            FontFamily::Arial,
            FontFamily::Verdana,
            FontFamily::Helvetica,
            FontFamily::TimesNewRoman,
            FontFamily::CourierNew,
            FontFamily::Georgia,
            FontFamily::PalatinoLinotype,
        ]
    }
}

impl FromStr for FontFamily {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FontFamily::all()
            .iter()
            .copied()
            .find(|family| family.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DraftError::UnknownFontFamily(s.to_string()))
    }
}

/// Font size in pixels, always within [`FontSize::MIN`, `FontSize::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct FontSize(u32);

impl FontSize {
    pub const MIN: u32 = 8;
    pub const MAX: u32 = 72;
    pub const DEFAULT: FontSize = FontSize(16);

    /// Create a font size, clamping into the allowed range.
    pub fn new(px: u32) -> Self {
        Self(px.clamp(Self::MIN, Self::MAX))
    }

    /// Size in pixels.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Size in pixels as a coordinate value.
    pub fn px(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for FontSize {
    fn from(px: u32) -> Self {
        Self::new(px)
    }
}

impl From<FontSize> for u32 {
    fn from(size: FontSize) -> Self {
        size.0
    }
}

impl FromStr for FontSize {
    type Err = DraftError;

    /// Parse a size typed into a number input. Out-of-range numbers are
    /// clamped; anything that is not an integer is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let px: i64 = s
            .trim()
            .parse()
            .map_err(|_| DraftError::InvalidFontSize(s.to_string()))?;
        let px = px.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        Ok(Self(px as u32))
    }
}

/// Font style options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    /// CSS keyword for this style.
    pub fn as_css(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

/// Font weight options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// CSS keyword for this weight.
    pub fn as_css(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

/// Font attributes of a text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: FontFamily,
    pub font_size: FontSize,
    pub font_style: FontStyle,
    pub font_weight: FontWeight,
}

impl TextStyle {
    /// Set the font family.
    pub fn with_font_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: FontSize) -> Self {
        self.font_size = size;
        self
    }

    /// Set the font style.
    pub fn with_font_style(mut self, style: FontStyle) -> Self {
        self.font_style = style;
        self
    }

    /// Set the font weight.
    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    /// Composed font string, `<style> <weight> <size>px <family>`.
    ///
    /// Painting and hit testing both go through this, so measured hit boxes
    /// match what is drawn.
    pub fn font_string(&self) -> String {
        format!(
            "{} {} {}px {}",
            self.font_style.as_css(),
            self.font_weight.as_css(),
            self.font_size.get(),
            self.font_family.name()
        )
    }
}

/// A text label placed on the surface.
///
/// Deserialized elements are validated like drafts: blank text is rejected
/// and the stored text is trimmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TextElementRecord")]
pub struct TextElement {
    pub(crate) id: ElementId,
    /// The text content (trimmed, never empty).
    pub text: String,
    /// Anchor: left edge and baseline.
    pub position: Point,
    pub style: TextStyle,
}

impl TextElement {
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Copy of this element anchored at `position`.
    pub fn moved_to(&self, position: Point) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }
}

#[derive(Deserialize)]
struct TextElementRecord {
    id: ElementId,
    text: String,
    position: Point,
    style: TextStyle,
}

impl TryFrom<TextElementRecord> for TextElement {
    type Error = DraftError;

    fn try_from(record: TextElementRecord) -> Result<Self, Self::Error> {
        TextDraft::new(record.text, record.style)
            .into_element(record.id, record.position)
    }
}

/// Text the user asked to add, before validation and id assignment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextDraft {
    pub text: String,
    pub style: TextStyle,
    /// Anchor to place the text at; `None` centers it on the surface.
    pub position: Option<Point>,
}

impl TextDraft {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            position: None,
        }
    }

    /// Place the text at an explicit anchor.
    pub fn at(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    /// Trimmed text, or `EmptyText` if nothing is left.
    pub fn validate(&self) -> Result<&str, DraftError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(DraftError::EmptyText);
        }
        Ok(text)
    }

    /// Build the element with the given id and fallback anchor.
    pub(crate) fn into_element(
        self,
        id: ElementId,
        fallback: Point,
    ) -> Result<TextElement, DraftError> {
        let text = self.validate()?.to_string();
        Ok(TextElement {
            id,
            text,
            position: self.position.unwrap_or(fallback),
            style: self.style,
        })
    }
}
