//! Scene: the ordered collection of placed text elements.

use crate::element::{ElementId, TextElement};
use crate::error::DraftError;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// An ordered sequence of text elements (back to front).
///
/// Scenes are values: every edit returns a new scene and leaves the receiver
/// untouched, so history snapshots can never alias the live scene.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "SceneRecord")]
pub struct Scene {
    elements: Vec<TextElement>,
}

#[derive(Deserialize)]
struct SceneRecord {
    elements: Vec<TextElement>,
}

impl TryFrom<SceneRecord> for Scene {
    type Error = DraftError;

    /// Loaded scenes obey the same id uniqueness as `add_element`, but a
    /// duplicate is an error rather than a silent skip.
    fn try_from(record: SceneRecord) -> Result<Self, Self::Error> {
        let mut scene = Scene::new();
        for element in record.elements {
            if scene.contains(element.id()) {
                return Err(DraftError::DuplicateId(element.id()));
            }
            scene.elements.push(element);
        }
        Ok(scene)
    }
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new scene with `element` appended on top.
    ///
    /// An element whose id is already present is refused.
    pub fn add_element(&self, element: TextElement) -> Scene {
        if self.contains(element.id()) {
            log::warn!("Refusing to add duplicate element {}", element.id());
            return self.clone();
        }
        let mut elements = self.elements.clone();
        elements.push(element);
        Scene { elements }
    }

    /// Return a new scene with the element `id` replaced by `patch`.
    ///
    /// The replacement keeps `id`. Unknown ids leave the scene unchanged.
    pub fn replace_element(&self, id: ElementId, patch: TextElement) -> Scene {
        let Some(index) = self.index_of(id) else {
            log::debug!("replace_element: {} not in scene", id);
            return self.clone();
        };
        let mut elements = self.elements.clone();
        elements[index] = TextElement { id, ..patch };
        Scene { elements }
    }

    /// Return a new scene with the element `id` anchored at `position`.
    pub fn move_element(&self, id: ElementId, position: Point) -> Scene {
        match self.get(id) {
            Some(element) => self.replace_element(id, element.moved_to(position)),
            None => self.clone(),
        }
    }

    /// Get an element by id.
    pub fn get(&self, id: ElementId) -> Option<&TextElement> {
        self.elements.iter().find(|element| element.id() == id)
    }

    /// Check whether an element with `id` exists.
    pub fn contains(&self, id: ElementId) -> bool {
        self.index_of(id).is_some()
    }

    /// Elements in paint order (back to front).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &TextElement> {
        self.elements.iter()
    }

    /// Element ids in paint order.
    pub fn ids(&self) -> Vec<ElementId> {
        self.elements.iter().map(TextElement::id).collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|element| element.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{TextDraft, TextStyle};

    fn element(id: u64, text: &str, x: f64, y: f64) -> TextElement {
        TextDraft::new(text, TextStyle::default())
            .at(Point::new(x, y))
            .into_element(ElementId(id), Point::ZERO)
            .unwrap()
    }

    #[test]
    fn test_add_element_keeps_insertion_order() {
        let scene = Scene::new()
            .add_element(element(1, "a", 0.0, 0.0))
            .add_element(element(2, "b", 0.0, 0.0));
        assert_eq!(scene.ids(), vec![ElementId(1), ElementId(2)]);
    }

    #[test]
    fn test_add_element_does_not_touch_original() {
        let empty = Scene::new();
        let one = empty.add_element(element(1, "a", 0.0, 0.0));
        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn test_add_duplicate_id_is_refused() {
        let scene = Scene::new().add_element(element(1, "a", 0.0, 0.0));
        let again = scene.add_element(element(1, "b", 5.0, 5.0));
        assert_eq!(again, scene);
    }

    #[test]
    fn test_replace_element() {
        let scene = Scene::new()
            .add_element(element(1, "a", 0.0, 0.0))
            .add_element(element(2, "b", 0.0, 0.0));
        let replaced = scene.replace_element(ElementId(1), element(99, "z", 10.0, 20.0));

        assert_eq!(replaced.ids(), vec![ElementId(1), ElementId(2)]);
        let patched = replaced.get(ElementId(1)).unwrap();
        assert_eq!(patched.text, "z");
        assert_eq!(patched.position, Point::new(10.0, 20.0));
        assert_eq!(scene.get(ElementId(1)).unwrap().text, "a");
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let scene = Scene::new().add_element(element(1, "a", 0.0, 0.0));
        let same = scene.replace_element(ElementId(42), element(42, "x", 1.0, 1.0));
        assert_eq!(same, scene);
    }

    #[test]
    fn test_deserialize_rejects_duplicate_ids() {
        let json = r#"{"elements": [
            {"id": 1, "text": "a", "position": {"x": 0.0, "y": 0.0}, "style": {"font_family": "Arial", "font_size": 16, "font_style": "Normal", "font_weight": "Normal"}},
            {"id": 1, "text": "b", "position": {"x": 5.0, "y": 5.0}, "style": {"font_family": "Arial", "font_size": 16, "font_style": "Normal", "font_weight": "Normal"}}
        ]}"#;
        let err = serde_json::from_str::<Scene>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate element id #1"));
    }

    #[test]
    fn test_deserialize_rejects_blank_text() {
        let json = r#"{"elements": [
            {"id": 1, "text": "  ", "position": {"x": 0.0, "y": 0.0}, "style": {"font_family": "Arial", "font_size": 16, "font_style": "Normal", "font_weight": "Normal"}}
        ]}"#;
        assert!(serde_json::from_str::<Scene>(json).is_err());
    }

    #[test]
    fn test_serialized_scene_loads_back() {
        let scene = Scene::new()
            .add_element(element(1, "a", 0.0, 0.0))
            .add_element(element(2, "b", 3.0, 4.0));
        let json = serde_json::to_string(&scene).unwrap();
        assert_eq!(serde_json::from_str::<Scene>(&json).unwrap(), scene);
    }

    #[test]
    fn test_move_element() {
        let scene = Scene::new().add_element(element(1, "a", 0.0, 0.0));
        let moved = scene.move_element(ElementId(1), Point::new(3.0, 4.0));
        assert_eq!(moved.get(ElementId(1)).unwrap().position, Point::new(3.0, 4.0));
        assert_eq!(scene.move_element(ElementId(9), Point::ZERO), scene);
    }
}
