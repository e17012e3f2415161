//! ActionEditor trait and related types

use crate::event::{ControlEvent, EventSink};
use crate::localize::Localize;
use crate::view::EditorView;
use action_editor_types::ActionConfig;
use std::rc::Rc;

/// Host environment handed to every editor
#[derive(Clone)]
pub struct EditorContext {
    localizer: Rc<dyn Localize>,
}

impl EditorContext {
    pub fn new(localizer: Rc<dyn Localize>) -> Self {
        Self { localizer }
    }

    pub fn localize(&self, key: &str) -> String {
        self.localizer.localize(key)
    }
}

/// Trait for all action editors
///
/// An editor is bound to one action config at a time. The host sets its
/// inputs, calls `render` to get the controls to show, forwards control
/// edits to `handle_control_event` and listens on `events` for the new
/// config.
pub trait ActionEditor {
    /// Action type this editor handles (e.g. "delay")
    fn action_type(&self) -> &str;

    /// Bind a config. Derived state is refreshed on the next `render`.
    fn set_action(&mut self, action: Rc<ActionConfig>);

    /// Currently bound config, if any
    fn action(&self) -> Option<&Rc<ActionConfig>>;

    fn set_disabled(&mut self, disabled: bool);

    fn disabled(&self) -> bool;

    /// Refresh derived state if the bound config changed, then describe the controls
    fn render(&mut self) -> EditorView;

    /// Apply an edit coming from one of this editor's controls
    fn handle_control_event(&self, event: ControlEvent);

    /// Channel to the host
    fn events(&self) -> &EventSink;
}

/// Concrete editor types that can be registered by type
pub trait EditorType: ActionEditor + 'static {
    const ACTION_TYPE: &'static str;

    fn create(context: EditorContext) -> Self;

    /// Config used when the user first picks this action type
    fn default_config() -> ActionConfig;
}
