//! Declarative output of an editor render

use action_editor_types::DurationData;

/// Identifies a control within an editor's view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Delay,
    MinimumDelay,
    Randomize,
}

/// Duration entry bound to structured duration data
#[derive(Debug, Clone, PartialEq)]
pub struct DurationControl {
    pub id: ControlId,
    pub label: String,
    /// `None` renders an empty input
    pub data: Option<DurationData>,
    pub disabled: bool,
    pub enable_millisecond: bool,
}

/// On/off switch
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleControl {
    pub id: ControlId,
    pub label: String,
    pub checked: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    Duration(DurationControl),
    Toggle(ToggleControl),
}

impl Control {
    pub fn id(&self) -> ControlId {
        match self {
            Control::Duration(c) => c.id,
            Control::Toggle(c) => c.id,
        }
    }
}

/// Controls an editor wants shown, in display order.
///
/// Controls not in the list are not mounted at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorView {
    pub controls: Vec<Control>,
}

impl EditorView {
    pub fn contains(&self, id: ControlId) -> bool {
        self.controls.iter().any(|c| c.id() == id)
    }

    pub fn duration(&self, id: ControlId) -> Option<&DurationControl> {
        self.controls.iter().find_map(|c| match c {
            Control::Duration(d) if d.id == id => Some(d),
            _ => None,
        })
    }

    pub fn toggle(&self, id: ControlId) -> Option<&ToggleControl> {
        self.controls.iter().find_map(|c| match c {
            Control::Toggle(t) if t.id == id => Some(t),
            _ => None,
        })
    }
}
