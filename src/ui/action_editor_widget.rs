//! GTK rendering of a headless action editor
//!
//! Each refresh asks the editor for its `EditorView` and reconciles the
//! container against it: existing controls are updated in place, new ones
//! are created at the right position and ones missing from the view are
//! removed from the container.

use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Label, Orientation, Switch, Widget};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::ui::duration_input::DurationInput;
use crate::ui::widget_builder::create_labeled_row;
use action_editor_core::{
    ActionEditor, Control, ControlEvent, ControlId, DelayValue, DurationControl, ToggleControl,
};

/// Shared handle to the editor a widget renders
pub type SharedEditor = Rc<RefCell<Box<dyn ActionEditor>>>;

struct ToggleRow {
    row: GtkBox,
    label: Label,
    switch: Switch,
}

enum MountedControl {
    Duration(DurationInput),
    Toggle(ToggleRow),
}

impl MountedControl {
    fn widget(&self) -> Widget {
        match self {
            MountedControl::Duration(input) => input.widget().clone().upcast(),
            MountedControl::Toggle(toggle) => toggle.row.clone().upcast(),
        }
    }
}

/// Container showing the controls of one editor
pub struct ActionEditorWidget {
    container: GtkBox,
    editor: SharedEditor,
    mounted: RefCell<HashMap<ControlId, MountedControl>>,
    updating: Rc<Cell<bool>>,
}

impl ActionEditorWidget {
    pub fn new(editor: SharedEditor) -> Self {
        let container = GtkBox::new(Orientation::Vertical, 0);
        Self {
            container,
            editor,
            mounted: RefCell::new(HashMap::new()),
            updating: Rc::new(Cell::new(false)),
        }
    }

    pub fn widget(&self) -> &GtkBox {
        &self.container
    }

    pub fn editor(&self) -> &SharedEditor {
        &self.editor
    }

    /// Re-render the editor and bring the widgets in line with its view
    pub fn refresh(&self) {
        let view = self.editor.borrow_mut().render();
        log::debug!(
            "Refreshing {} editor with {} controls",
            self.editor.borrow().action_type(),
            view.controls.len()
        );

        self.updating.set(true);
        let mut mounted = self.mounted.borrow_mut();

        let stale: Vec<ControlId> = mounted
            .keys()
            .filter(|id| !view.contains(**id))
            .copied()
            .collect();
        for id in stale {
            if let Some(control) = mounted.remove(&id) {
                if let MountedControl::Duration(input) = &control {
                    input.cleanup();
                }
                self.container.remove(&control.widget());
            }
        }

        let mut previous: Option<Widget> = None;
        for control in &view.controls {
            let id = control.id();
            let reused = match (control, mounted.get(&id)) {
                (Control::Duration(desc), Some(MountedControl::Duration(input))) => {
                    update_duration(input, desc);
                    true
                }
                (Control::Toggle(desc), Some(MountedControl::Toggle(toggle))) => {
                    update_toggle(toggle, desc);
                    true
                }
                _ => false,
            };
            if !reused {
                if let Some(old) = mounted.remove(&id) {
                    self.container.remove(&old.widget());
                }
                let created = self.create_control(control);
                self.container
                    .insert_child_after(&created.widget(), previous.as_ref());
                mounted.insert(id, created);
            }
            previous = mounted.get(&id).map(MountedControl::widget);
        }

        self.updating.set(false);
    }

    fn create_control(&self, control: &Control) -> MountedControl {
        match control {
            Control::Duration(desc) => {
                let input = DurationInput::new(&desc.label, desc.enable_millisecond);
                update_duration(&input, desc);

                let editor = self.editor.clone();
                let id = desc.id;
                input.set_on_change(move |data| {
                    editor
                        .borrow()
                        .handle_control_event(ControlEvent::DurationChanged {
                            id,
                            value: data.map(DelayValue::from),
                        });
                });
                MountedControl::Duration(input)
            }
            Control::Toggle(desc) => {
                let switch = Switch::new();
                switch.set_valign(gtk4::Align::Center);
                let (row, label) = create_labeled_row(&desc.label, &switch);
                let toggle = ToggleRow { row, label, switch };
                update_toggle(&toggle, desc);

                let editor = self.editor.clone();
                let updating = self.updating.clone();
                let id = desc.id;
                toggle.switch.connect_state_set(move |_, active| {
                    if !updating.get() {
                        editor
                            .borrow()
                            .handle_control_event(ControlEvent::Toggled { id, checked: active });
                    }
                    glib::Propagation::Proceed
                });
                MountedControl::Toggle(toggle)
            }
        }
    }

    /// Remove every control and drop their callbacks
    pub fn cleanup(&self) {
        for (_, control) in self.mounted.borrow_mut().drain() {
            if let MountedControl::Duration(input) = &control {
                input.cleanup();
            }
            self.container.remove(&control.widget());
        }
    }
}

fn update_duration(input: &DurationInput, desc: &DurationControl) {
    input.set_label(&desc.label);
    input.set_data(desc.data.as_ref());
    input.set_disabled(desc.disabled);
}

fn update_toggle(toggle: &ToggleRow, desc: &ToggleControl) {
    toggle.label.set_text(&desc.label);
    toggle.switch.set_active(desc.checked);
    toggle.row.set_sensitive(!desc.disabled);
}
