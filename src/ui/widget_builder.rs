//! Widget builder helpers for consistent UI construction
//!
//! This module provides helper functions to reduce boilerplate when creating
//! the widget patterns shared by the editor widgets.

use gtk4::prelude::*;
use gtk4::{Adjustment, Box as GtkBox, Label, Orientation, SpinButton, Widget};

/// Default margin used for page containers
pub const DEFAULT_MARGIN: i32 = 12;

/// Default spacing used for vertical containers
pub const DEFAULT_SPACING: i32 = 12;

/// Default spacing used for horizontal label+control rows
pub const ROW_SPACING: i32 = 6;

/// Gap below each editor row
pub const ROW_BOTTOM_MARGIN: i32 = 24;

/// Creates a box with standard margins on all sides.
pub fn create_padded_box(orientation: Orientation, spacing: i32) -> GtkBox {
    let container = GtkBox::new(orientation, spacing);
    container.set_margin_start(DEFAULT_MARGIN);
    container.set_margin_end(DEFAULT_MARGIN);
    container.set_margin_top(DEFAULT_MARGIN);
    container.set_margin_bottom(DEFAULT_MARGIN);
    container
}

/// Creates a horizontal box containing a label and a widget.
///
/// Returns the row and the label so the label text can be updated later.
pub fn create_labeled_row<W: IsA<Widget>>(label_text: &str, widget: &W) -> (GtkBox, Label) {
    let row = GtkBox::new(Orientation::Horizontal, ROW_SPACING);
    let label = Label::new(Some(label_text));
    label.set_halign(gtk4::Align::Start);
    label.set_hexpand(true);
    row.append(&label);
    row.append(widget);
    row.set_margin_bottom(ROW_BOTTOM_MARGIN);
    (row, label)
}

/// Creates an integer spin button for one duration unit with a trailing unit label.
pub fn create_unit_spin(max: f64, width_chars: i32, unit: &str) -> (GtkBox, SpinButton) {
    let adjustment = Adjustment::new(0.0, 0.0, max, 1.0, 5.0, 0.0);
    let spin = SpinButton::new(Some(&adjustment), 1.0, 0);
    spin.set_width_chars(width_chars);
    spin.set_numeric(true);

    let cell = GtkBox::new(Orientation::Horizontal, 2);
    cell.append(&spin);
    let unit_label = Label::new(Some(unit));
    unit_label.add_css_class("dim-label");
    cell.append(&unit_label);
    (cell, spin)
}

/// Creates a dimmed, wrapping label for hints and errors.
pub fn create_hint_label(text: &str) -> Label {
    let label = Label::new(Some(text));
    label.set_halign(gtk4::Align::Start);
    label.set_wrap(true);
    label.add_css_class("dim-label");
    label
}
