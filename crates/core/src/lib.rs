//! action-editor-core: Headless editor logic for automation actions.
//!
//! This crate contains the `ActionEditor` trait, the delay action editor,
//! the parent/child event channel and the editor registry. Nothing here
//! touches GTK; the application crate renders the `EditorView` each editor
//! produces.

mod change;
mod delay;
mod editor;
mod error;
mod event;
pub mod localize;
mod registry;
mod view;

pub use change::ChangeTracker;
pub use delay::DelayActionEditor;
pub use editor::{ActionEditor, EditorContext, EditorType};
pub use error::EditorError;
pub use event::{ControlEvent, EditorEvent, EventSink};
pub use localize::{Localize, Translations};
pub use registry::{EditorFactory, EditorInfo, EditorRegistry};
pub use view::{Control, ControlId, DurationControl, EditorView, ToggleControl};

// Re-export types used in trait signatures for convenience
pub use action_editor_types::{ActionConfig, DelayValue, DurationData};
