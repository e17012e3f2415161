//! Duration entry built from per-unit spin buttons

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Label, Orientation, SpinButton};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::ui::widget_builder::{create_unit_spin, ROW_BOTTOM_MARGIN, ROW_SPACING};
use action_editor_core::DurationData;

/// Callback invoked with the edited duration, or `None` while the edited unit is blank
pub type DurationCallback = Rc<RefCell<Option<Box<dyn Fn(Option<DurationData>)>>>>;

/// Hours / minutes / seconds (/ milliseconds) entry
pub struct DurationInput {
    widget: GtkBox,
    label: Label,
    spins: Vec<SpinButton>,
    updating: Rc<Cell<bool>>,
    on_change: DurationCallback,
}

impl DurationInput {
    pub fn new(label_text: &str, enable_millisecond: bool) -> Self {
        let widget = GtkBox::new(Orientation::Vertical, ROW_SPACING);
        widget.set_margin_bottom(ROW_BOTTOM_MARGIN);

        let label = Label::new(Some(label_text));
        label.set_halign(gtk4::Align::Start);
        widget.append(&label);

        let units_row = GtkBox::new(Orientation::Horizontal, ROW_SPACING);
        let mut spins = Vec::with_capacity(4);
        for (max, width, unit) in [(9999.0, 4, "h"), (59.0, 2, "m"), (59.0, 2, "s")] {
            let (cell, spin) = create_unit_spin(max, width, unit);
            units_row.append(&cell);
            spins.push(spin);
        }
        if enable_millisecond {
            let (cell, spin) = create_unit_spin(999.0, 3, "ms");
            units_row.append(&cell);
            spins.push(spin);
        }
        widget.append(&units_row);

        let updating = Rc::new(Cell::new(false));
        let on_change: DurationCallback = Rc::new(RefCell::new(None));

        for (index, spin) in spins.iter().enumerate() {
            let spins_clone = spins.clone();
            let updating_clone = updating.clone();
            let on_change_clone = on_change.clone();
            spin.connect_value_changed(move |_| {
                if updating_clone.get() {
                    return;
                }
                let units: Vec<Option<f64>> = spins_clone.iter().map(read_unit).collect();
                let value = compose_duration(&units, index, enable_millisecond);
                if let Some(callback) = on_change_clone.borrow().as_ref() {
                    callback(value);
                }
            });
        }

        Self {
            widget,
            label,
            spins,
            updating,
            on_change,
        }
    }

    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    pub fn set_label(&self, text: &str) {
        self.label.set_text(text);
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.widget.set_sensitive(!disabled);
    }

    /// Show `data` without notifying the change callback. `None` shows zero
    /// in every unit.
    pub fn set_data(&self, data: Option<&DurationData>) {
        self.updating.set(true);
        let n = data.map(DurationData::normalized).unwrap_or_default();
        let values = [n.hours, n.minutes, n.seconds, n.milliseconds];
        for (spin, value) in self.spins.iter().zip(values) {
            spin.set_value(value.unwrap_or(0.0));
            spin.update();
        }
        self.updating.set(false);
    }

    pub fn set_on_change<F: Fn(Option<DurationData>) + 'static>(&self, callback: F) {
        *self.on_change.borrow_mut() = Some(Box::new(callback));
    }

    /// Drop the change callback to break reference cycles
    pub fn cleanup(&self) {
        *self.on_change.borrow_mut() = None;
    }
}

fn read_unit(spin: &SpinButton) -> Option<f64> {
    if spin.text().trim().is_empty() {
        None
    } else {
        Some(spin.value())
    }
}

/// Build a duration from unit values in h/m/s/ms order, `None` meaning blank.
///
/// Only a blank `edited` unit yields `None`; other blank units count as zero.
fn compose_duration(
    units: &[Option<f64>],
    edited: usize,
    has_millis: bool,
) -> Option<DurationData> {
    units.get(edited).copied().flatten()?;
    let value = |i: usize| units.get(i).map(|v| v.unwrap_or(0.0));
    Some(DurationData {
        days: None,
        hours: value(0),
        minutes: value(1),
        seconds: value(2),
        milliseconds: if has_millis { value(3) } else { None },
    })
}
