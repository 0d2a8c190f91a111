//! Scene painting.

use crate::scene::Scene;
use crate::surface::Surface;
use peniko::Color;

/// Colors used when painting a scene.
#[derive(Debug, Clone, Copy)]
pub struct RenderStyle {
    pub background: Color,
    pub text_color: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Color::from_rgba8(255, 255, 255, 255),
            text_color: Color::from_rgba8(0, 0, 0, 255),
        }
    }
}

/// Clear `surface` and paint every element of `scene` back to front.
pub fn render(surface: &mut dyn Surface, scene: &Scene, style: &RenderStyle) {
    surface.clear(style.background);
    surface.set_fill_color(style.text_color);
    for element in scene.iter() {
        surface.set_font(&element.style.font_string());
        surface.fill_text(&element.text, element.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementId, FontSize, TextDraft, TextStyle};
    use crate::test_surface::{Op, TestSurface};
    use kurbo::Point;

    #[test]
    fn test_render_paints_in_scene_order() {
        let first = TextDraft::new("back", TextStyle::default())
            .at(Point::new(10.0, 20.0))
            .into_element(ElementId(1), Point::ZERO)
            .unwrap();
        let second = TextDraft::new("front", TextStyle::default().with_font_size(FontSize::new(30)))
            .at(Point::new(12.0, 22.0))
            .into_element(ElementId(2), Point::ZERO)
            .unwrap();
        let scene = Scene::new().add_element(first).add_element(second);

        let mut surface = TestSurface::new(600.0, 400.0);
        render(&mut surface, &scene, &RenderStyle::default());

        let fills: Vec<_> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Fill(text, at) => Some((text.as_str(), *at)),
                _ => None,
            })
            .collect();
        assert_eq!(
            fills,
            vec![("back", Point::new(10.0, 20.0)), ("front", Point::new(12.0, 22.0))]
        );
        assert!(matches!(surface.ops.first(), Some(Op::Clear)));
        assert!(surface.ops.contains(&Op::Font("normal normal 30px Arial".to_string())));
    }

    #[test]
    fn test_render_empty_scene_only_clears() {
        let mut surface = TestSurface::new(100.0, 100.0);
        render(&mut surface, &Scene::new(), &RenderStyle::default());
        assert!(!surface.ops.iter().any(|op| matches!(op, Op::Fill(..))));
        assert!(matches!(surface.ops.first(), Some(Op::Clear)));
    }
}
