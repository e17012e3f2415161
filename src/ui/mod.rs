//! UI components

mod action_editor_host;
mod action_editor_widget;
mod duration_input;
pub mod widget_builder;

pub use action_editor_host::ActionEditorHost;
pub use action_editor_widget::{ActionEditorWidget, SharedEditor};
pub use duration_input::{DurationCallback, DurationInput};
