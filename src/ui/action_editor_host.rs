//! Host for one action editor
//!
//! Owns the current action config, shows the structured editor for it and
//! falls back to a raw JSON view when the editor reports that it cannot
//! show the config (for example because it contains templates).

use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{Button, Label, Orientation, ScrolledWindow, Stack, TextBuffer, TextView};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::ui::action_editor_widget::{ActionEditorWidget, SharedEditor};
use crate::ui::widget_builder::{create_hint_label, create_padded_box, DEFAULT_SPACING};
use action_editor_core::{ActionConfig, EditorContext, EditorError, EditorEvent, EditorRegistry};

const VISUAL_PAGE: &str = "visual";
const RAW_PAGE: &str = "raw";

/// Which editor is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditMode {
    Visual,
    Raw,
}

type ValueCallback = Box<dyn Fn(&ActionConfig)>;

struct HostInner {
    stack: Stack,
    editor_widget: ActionEditorWidget,
    raw_buffer: TextBuffer,
    raw_status: Label,
    action: RefCell<Rc<ActionConfig>>,
    mode: Cell<EditMode>,
    updating_raw: Cell<bool>,
    on_value_changed: RefCell<Option<ValueCallback>>,
}

/// Structured editor with raw JSON fallback
pub struct ActionEditorHost {
    inner: Rc<HostInner>,
}

impl ActionEditorHost {
    pub fn new(
        registry: &EditorRegistry,
        action_type: &str,
        context: EditorContext,
        action: ActionConfig,
        disabled: bool,
    ) -> Result<Self, EditorError> {
        let mut editor = registry.create(action_type, context)?;
        editor.set_disabled(disabled);
        let shared: SharedEditor = Rc::new(RefCell::new(editor));
        let editor_widget = ActionEditorWidget::new(shared.clone());

        let stack = Stack::new();
        stack.set_vexpand(true);

        // Visual page
        let visual_page = create_padded_box(Orientation::Vertical, 0);
        visual_page.append(editor_widget.widget());
        stack.add_named(&visual_page, Some(VISUAL_PAGE));

        // Raw JSON page
        let raw_page = create_padded_box(Orientation::Vertical, DEFAULT_SPACING);
        let raw_status = create_hint_label("");
        raw_page.append(&raw_status);

        let raw_view = TextView::new();
        raw_view.set_monospace(true);
        raw_view.set_editable(!disabled);
        let raw_buffer = raw_view.buffer();
        let scrolled = ScrolledWindow::new();
        scrolled.set_vexpand(true);
        scrolled.set_child(Some(&raw_view));
        raw_page.append(&scrolled);

        let visual_button = Button::with_label("Visual editor");
        visual_button.set_halign(gtk4::Align::End);
        raw_page.append(&visual_button);
        stack.add_named(&raw_page, Some(RAW_PAGE));

        let inner = Rc::new(HostInner {
            stack,
            editor_widget,
            raw_buffer,
            raw_status,
            action: RefCell::new(Rc::new(action)),
            mode: Cell::new(EditMode::Visual),
            updating_raw: Cell::new(false),
            on_value_changed: RefCell::new(None),
        });

        // Editor events are handled on idle so the emitting control's
        // handler has returned before the editor is re-bound and re-rendered.
        let weak = Rc::downgrade(&inner);
        shared.borrow().events().connect(move |event| {
            let weak = weak.clone();
            glib::idle_add_local_once(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.handle_event(event);
                }
            });
        });

        let weak = Rc::downgrade(&inner);
        inner.raw_buffer.connect_changed(move |_| {
            if let Some(inner) = weak.upgrade() {
                inner.raw_edited();
            }
        });

        let weak: Weak<HostInner> = Rc::downgrade(&inner);
        visual_button.connect_clicked(move |_| {
            if let Some(inner) = weak.upgrade() {
                inner.show_visual();
            }
        });

        inner.show_visual();
        Ok(Self { inner })
    }

    pub fn widget(&self) -> &Stack {
        &self.inner.stack
    }

    /// Current action config
    pub fn action(&self) -> ActionConfig {
        ActionConfig::clone(&self.inner.action.borrow())
    }

    /// Called with the full new config after every accepted edit
    pub fn set_on_value_changed<F: Fn(&ActionConfig) + 'static>(&self, callback: F) {
        *self.inner.on_value_changed.borrow_mut() = Some(Box::new(callback));
    }

    /// Cleanup method to break reference cycles
    pub fn cleanup(&self) {
        log::debug!("ActionEditorHost::cleanup() - breaking reference cycles");
        self.inner.editor_widget.editor().borrow().events().disconnect();
        self.inner.editor_widget.cleanup();
        *self.inner.on_value_changed.borrow_mut() = None;
    }
}

impl HostInner {
    fn handle_event(&self, event: EditorEvent) {
        match event {
            EditorEvent::ValueChanged { value } => {
                log::info!("Action changed: {}", value.to_value());
                *self.action.borrow_mut() = Rc::new(value);
                self.notify_value_changed();
                if self.mode.get() == EditMode::Visual {
                    self.bind_and_refresh();
                }
            }
            EditorEvent::UiModeNotAvailable(error) => {
                log::info!("Visual editor unavailable, switching to raw editing: {}", error);
                self.show_raw(&error.to_string());
            }
        }
    }

    fn bind_and_refresh(&self) {
        let action = self.action.borrow().clone();
        self.editor_widget.editor().borrow_mut().set_action(action);
        self.editor_widget.refresh();
    }

    fn show_visual(&self) {
        self.mode.set(EditMode::Visual);
        self.stack.set_visible_child_name(VISUAL_PAGE);
        // A fresh binding so the editor re-checks the config even if it was
        // not edited while in raw mode
        let rebound = Rc::new(ActionConfig::clone(&self.action.borrow()));
        *self.action.borrow_mut() = rebound;
        self.bind_and_refresh();
    }

    fn show_raw(&self, message: &str) {
        self.mode.set(EditMode::Raw);
        self.raw_status.set_text(message);
        self.fill_raw_text();
        self.stack.set_visible_child_name(RAW_PAGE);
    }

    fn fill_raw_text(&self) {
        let text = match serde_json::to_string_pretty(&**self.action.borrow()) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Failed to serialize action: {}", e);
                return;
            }
        };
        self.updating_raw.set(true);
        self.raw_buffer.set_text(&text);
        self.updating_raw.set(false);
    }

    fn raw_edited(&self) {
        if self.updating_raw.get() {
            return;
        }
        let (start, end) = self.raw_buffer.bounds();
        let text = self.raw_buffer.text(&start, &end, false);

        match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(value) => match ActionConfig::from_value(value) {
                Some(action) => {
                    self.raw_status.set_text("");
                    *self.action.borrow_mut() = Rc::new(action);
                    self.notify_value_changed();
                }
                None => self.raw_status.set_text("Action must be a JSON object"),
            },
            Err(e) => {
                log::debug!("Raw action text not valid yet: {}", e);
                self.raw_status.set_text(&format!("Invalid JSON: {}", e));
            }
        }
    }

    fn notify_value_changed(&self) {
        let action = self.action.borrow().clone();
        if let Some(callback) = self.on_value_changed.borrow().as_ref() {
            callback(&action);
        }
    }
}
