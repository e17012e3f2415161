//! action-editor: Structured GTK editor for automation script actions
//!
//! This library provides:
//! - GTK widgets that render the headless editors from `action-editor-core`
//! - A host widget that falls back to raw JSON editing when needed
//! - Application settings and action file handling

pub mod config;
pub mod ui;

// Re-export commonly used types
pub use action_editor_core::{ActionConfig, ActionEditor, EditorRegistry};
pub use config::AppConfig;
