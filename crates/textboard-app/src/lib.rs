//! Textboard Application
//!
//! Shell around the core editor: configuration, keyboard shortcuts, the
//! text-entry form and scripted session replay.

mod config;
mod error;
mod session;
mod shortcuts;

pub use config::AppConfig;
pub use error::AppError;
pub use session::{FormState, Session, Step, load_steps};
pub use shortcuts::{Modifiers, Shortcut, ShortcutAction, ShortcutRegistry};
