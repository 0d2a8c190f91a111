//! Errors raised at the input boundary.

use crate::element::ElementId;
use thiserror::Error;

/// Reasons a user-supplied draft, style value or loaded element is rejected.
///
/// These never escape the editor's public operations; the editor treats a
/// rejected draft as a silent no-op. Shells can use them to explain why a
/// control is disabled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("text is empty")]
    EmptyText,
    #[error("invalid font size: {0:?}")]
    InvalidFontSize(String),
    #[error("unknown font family: {0:?}")]
    UnknownFontFamily(String),
    #[error("duplicate element id {0}")]
    DuplicateId(ElementId),
}
