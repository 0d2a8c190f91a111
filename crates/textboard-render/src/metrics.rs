//! Approximate font metrics.

use textboard_core::{FontFamily, FontSize, FontStyle, FontWeight, TextStyle};

/// A composed font string broken back into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParsedFont(pub TextStyle);

impl ParsedFont {
    /// Parse `<style> <weight> <size>px <family>`.
    ///
    /// Style and weight keywords are optional. Returns `None` when there is
    /// no pixel size or the family is unknown.
    pub fn parse(font: &str) -> Option<Self> {
        let mut style = TextStyle::default();
        let mut tokens = font.split_whitespace();

        loop {
            let token = tokens.next()?;
            match token {
                "normal" => {}
                "italic" => style.font_style = FontStyle::Italic,
                "bold" => style.font_weight = FontWeight::Bold,
                _ => {
                    let px: u32 = token.strip_suffix("px")?.parse().ok()?;
                    style.font_size = FontSize::new(px);
                    break;
                }
            }
        }

        let family = tokens.collect::<Vec<_>>().join(" ");
        style.font_family = family.parse().ok()?;
        Some(Self(style))
    }
}

/// Average glyph advance per font, as a fraction of the font size.
pub struct FontMetrics;

impl FontMetrics {
    /// Approximate advance width of `text` set in `font`.
    pub fn measure(font: &TextStyle, text: &str) -> f64 {
        text.chars().count() as f64 * font.font_size.px() * Self::char_width_factor(font)
    }

    fn char_width_factor(font: &TextStyle) -> f64 {
        // Empirical averages for mixed-case Latin text.
        let base = match font.font_family {
            FontFamily::Arial | FontFamily::Helvetica => 0.52,
            FontFamily::Verdana => 0.58,
            FontFamily::TimesNewRoman => 0.46,
            FontFamily::CourierNew => 0.60,
            FontFamily::Georgia => 0.53,
            FontFamily::PalatinoLinotype => 0.50,
        };
        let weight = match (font.font_family, font.font_weight) {
            // Courier is monospaced in every weight.
            (FontFamily::CourierNew, _) | (_, FontWeight::Normal) => 0.0,
            (_, FontWeight::Bold) => 0.04,
        };
        base + weight
    }
}
