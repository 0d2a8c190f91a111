//! Application configuration.

use crate::error::{AppResult, read_json};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use textboard_core::{DEFAULT_HISTORY_LIMIT, EditorConfig, RenderStyle};

/// Shell settings. Every field has a default, so a config file only needs
/// the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    /// Drawing surface width in pixels.
    pub width: u32,
    /// Drawing surface height in pixels.
    pub height: u32,
    /// Maximum undo depth; `null` keeps everything.
    pub history_limit: Option<usize>,
    /// Background as RGBA8.
    pub background: [u8; 4],
    /// Text color as RGBA8.
    pub text_color: [u8; 4],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Textboard".to_string(),
            width: 600,
            height: 400,
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
            background: [255, 255, 255, 255],
            text_color: [0, 0, 0, 255],
        }
    }
}

impl AppConfig {
    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let config: Self = read_json(path)?;
        log::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Editor settings derived from this config.
    pub fn editor_config(&self) -> EditorConfig {
        let [r, g, b, a] = self.background;
        let background = Color::from_rgba8(r, g, b, a);
        let [r, g, b, a] = self.text_color;
        let text_color = Color::from_rgba8(r, g, b, a);
        EditorConfig {
            history_limit: self.history_limit,
            render_style: RenderStyle {
                background,
                text_color,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{ "width": 800 }"#).unwrap();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 400);
        assert_eq!(config.title, "Textboard");
    }

    #[test]
    fn test_unbounded_history() {
        let config: AppConfig = serde_json::from_str(r#"{ "history_limit": null }"#).unwrap();
        assert_eq!(config.editor_config().history_limit, None);
    }

    #[test]
    fn test_editor_config_colors() {
        let config = AppConfig {
            text_color: [10, 20, 30, 255],
            ..AppConfig::default()
        };
        let rgba = config.editor_config().render_style.text_color.to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (10, 20, 30, 255));
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load(Path::new("/nonexistent/textboard.json")).unwrap_err();
        assert!(matches!(err, crate::AppError::Io { .. }));
    }
}
