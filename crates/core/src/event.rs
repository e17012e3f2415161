//! Events passed between an editor, its child controls and its host

use crate::error::EditorError;
use crate::view::ControlId;
use action_editor_types::{ActionConfig, DelayValue};
use std::cell::RefCell;
use std::rc::Rc;

/// Notification an editor sends to its host
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The user edited a field; `value` is the complete new config
    ValueChanged { value: ActionConfig },
    /// The structured editor cannot show the current config
    UiModeNotAvailable(EditorError),
}

impl EditorEvent {
    /// Event name as seen by hosts
    pub fn name(&self) -> &'static str {
        match self {
            EditorEvent::ValueChanged { .. } => "value-changed",
            EditorEvent::UiModeNotAvailable(_) => "ui-mode-not-available",
        }
    }
}

/// Edit emitted by one of an editor's child controls.
///
/// The editor consumes these; they never travel further than the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// A duration input produced a value. `None` while the input is mid-edit.
    DurationChanged {
        id: ControlId,
        value: Option<DelayValue>,
    },
    Toggled { id: ControlId, checked: bool },
}

type EventCallback = Rc<dyn Fn(EditorEvent)>;

/// Single-listener channel from an editor to its direct parent.
///
/// Clones share the same listener slot, so a widget can hold a clone and
/// emit through it while the host connects on the original.
#[derive(Clone, Default)]
pub struct EventSink {
    callback: Rc<RefCell<Option<EventCallback>>>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the parent's listener, replacing any previous one
    pub fn connect<F: Fn(EditorEvent) + 'static>(&self, callback: F) {
        *self.callback.borrow_mut() = Some(Rc::new(callback));
    }

    /// Drop the listener and break any reference cycle it holds
    pub fn disconnect(&self) {
        *self.callback.borrow_mut() = None;
    }

    pub fn is_connected(&self) -> bool {
        self.callback.borrow().is_some()
    }

    /// Deliver `event` to the parent. The listener may reconnect or
    /// disconnect this sink while it runs.
    pub fn emit(&self, event: EditorEvent) {
        let callback = self.callback.borrow().clone();
        match callback {
            Some(callback) => {
                log::debug!("Emitting {}", event.name());
                callback(event);
            }
            None => log::warn!("No listener for {} event, dropping it", event.name()),
        }
    }
}

impl std::fmt::Debug for EventSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventSink")
            .field("connected", &self.is_connected())
            .finish()
    }
}
