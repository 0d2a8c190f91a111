//! Scripted editing sessions.

use crate::config::AppConfig;
use crate::error::{AppResult, read_json};
use crate::shortcuts::{Modifiers, ShortcutAction, ShortcutRegistry};
use kurbo::Point;
use serde::Deserialize;
use std::fmt::Write as _;
use std::path::Path;
use textboard_core::{
    Editor, FontFamily, FontSize, FontStyle, FontWeight, PointerEvent, TextStyle,
};
use textboard_render::RecordingSurface;

/// One recorded user action. Pointer coordinates are surface-local.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Replace the contents of the text input.
    Type { text: String },
    /// Pick a font family from the family select.
    FontFamily { value: String },
    /// Type into the font size number input.
    FontSize { value: String },
    /// Pick "normal" or "italic".
    FontStyle { value: String },
    /// Pick "normal" or "bold".
    FontWeight { value: String },
    /// Press the "Add Text" button.
    Add,
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Leave { x: f64, y: f64 },
    Undo,
    Redo,
    Key {
        key: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        shift: bool,
    },
}

/// Load a JSON array of steps.
pub fn load_steps(path: &Path) -> AppResult<Vec<Step>> {
    let steps: Vec<Step> = read_json(path)?;
    log::debug!("Loaded {} steps from {:?}", steps.len(), path);
    Ok(steps)
}

/// The text-entry form next to the surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    /// Pending input text.
    pub text: String,
    /// Style applied to the next added text.
    pub style: TextStyle,
}

/// An editor on a recording surface plus its entry form.
pub struct Session {
    editor: Editor<RecordingSurface>,
    form: FormState,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        let surface = RecordingSurface::new(f64::from(config.width), f64::from(config.height));
        Self {
            editor: Editor::with_config(surface, config.editor_config()),
            form: FormState::default(),
        }
    }

    pub fn editor(&self) -> &Editor<RecordingSurface> {
        &self.editor
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Apply every step in order.
    pub fn run(&mut self, steps: &[Step]) {
        for step in steps {
            self.apply(step);
        }
        log::info!(
            "Session finished with {} elements after {} steps",
            self.editor.scene().len(),
            steps.len()
        );
    }

    /// Apply one step.
    pub fn apply(&mut self, step: &Step) {
        match step {
            Step::Type { text } => self.form.text.clone_from(text),
            Step::FontFamily { value } => match value.parse::<FontFamily>() {
                Ok(family) => self.form.style.font_family = family,
                Err(e) => log::warn!("{}", e),
            },
            Step::FontSize { value } => match value.parse::<FontSize>() {
                Ok(size) => self.form.style.font_size = size,
                Err(e) => log::warn!("{}", e),
            },
            Step::FontStyle { value } => match value.as_str() {
                "normal" => self.form.style.font_style = FontStyle::Normal,
                "italic" => self.form.style.font_style = FontStyle::Italic,
                other => log::warn!("Unknown font style {:?}", other),
            },
            Step::FontWeight { value } => match value.as_str() {
                "normal" => self.form.style.font_weight = FontWeight::Normal,
                "bold" => self.form.style.font_weight = FontWeight::Bold,
                other => log::warn!("Unknown font weight {:?}", other),
            },
            Step::Add => self.add_from_form(),
            Step::Down { x, y } => {
                self.editor.handle_pointer(PointerEvent::Down(Point::new(*x, *y)));
            }
            Step::Move { x, y } => {
                self.editor.handle_pointer(PointerEvent::Move(Point::new(*x, *y)));
            }
            Step::Up { x, y } => {
                self.editor.handle_pointer(PointerEvent::Up(Point::new(*x, *y)));
            }
            Step::Leave { x, y } => {
                self.editor.handle_pointer(PointerEvent::Leave(Point::new(*x, *y)));
            }
            Step::Undo => {
                self.editor.undo();
            }
            Step::Redo => {
                self.editor.redo();
            }
            Step::Key { key, ctrl, shift } => {
                let modifiers = Modifiers {
                    ctrl: *ctrl,
                    shift: *shift,
                    meta: false,
                };
                match ShortcutRegistry::resolve(key, modifiers) {
                    Some(action) => self.perform(action),
                    None => log::debug!("Unbound key {:?}", key),
                }
            }
        }
    }

    fn perform(&mut self, action: ShortcutAction) {
        match action {
            ShortcutAction::AddText => self.add_from_form(),
            ShortcutAction::Undo => {
                self.editor.undo();
            }
            ShortcutAction::Redo => {
                self.editor.redo();
            }
        }
    }

    /// Add the pending text; the input is cleared only when something was
    /// added.
    fn add_from_form(&mut self) {
        if self.editor.add_text(&self.form.text, self.form.style).is_some() {
            self.form.text.clear();
        }
    }

    /// Human-readable description of the current frame.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} elements, undo {}, redo {}",
            self.editor.scene().len(),
            availability(self.editor.can_undo()),
            availability(self.editor.can_redo()),
        );
        for run in self.editor.surface().text_runs() {
            let _ = writeln!(
                out,
                "  {:?} [{}] at ({}, {})",
                run.text, run.font, run.position.x, run.position.y
            );
        }
        out
    }
}

fn availability(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}
