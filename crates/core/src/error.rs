//! Editor error types

use thiserror::Error;

/// Conditions an editor reports to its host
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    /// The bound config holds template syntax the structured editor cannot show.
    /// The message is already localized.
    #[error("{message}")]
    NoTemplateEditorSupport { message: String },

    #[error("Unknown action type: {0}")]
    UnknownActionType(String),
}
