//! Editor for the "delay" action

use crate::change::ChangeTracker;
use crate::editor::{ActionEditor, EditorContext, EditorType};
use crate::error::EditorError;
use crate::event::{ControlEvent, EditorEvent, EventSink};
use crate::localize::keys;
use crate::view::{Control, ControlId, DurationControl, EditorView, ToggleControl};
use action_editor_types::{create_duration_data, ActionConfig, DelayValue, DurationData};
use std::rc::Rc;

/// Edits `delay`, `randomize` and, when randomizing, `minimum_delay`.
pub struct DelayActionEditor {
    context: EditorContext,
    disabled: bool,
    action: Option<Rc<ActionConfig>>,
    tracker: ChangeTracker<ActionConfig>,
    primary_data: Option<DurationData>,
    minimum_data: Option<DurationData>,
    derivations: u64,
    events: EventSink,
}

impl DelayActionEditor {
    pub fn new(context: EditorContext) -> Self {
        Self {
            context,
            disabled: false,
            action: None,
            tracker: ChangeTracker::new(),
            primary_data: None,
            minimum_data: None,
            derivations: 0,
            events: EventSink::new(),
        }
    }

    /// Duration data derived for the `delay` field
    pub fn primary_data(&self) -> Option<&DurationData> {
        self.primary_data.as_ref()
    }

    /// Duration data derived for the `minimum_delay` field
    pub fn minimum_data(&self) -> Option<&DurationData> {
        self.minimum_data.as_ref()
    }

    /// Number of times duration data has been derived
    pub fn derivation_count(&self) -> u64 {
        self.derivations
    }

    fn will_update(&mut self) {
        let Some(action) = self.action.clone() else {
            return;
        };
        if !self.tracker.changed(&action) {
            return;
        }

        if action.has_template() {
            log::info!("Delay action contains a template, structured editing unavailable");
            self.events
                .emit(EditorEvent::UiModeNotAvailable(EditorError::NoTemplateEditorSupport {
                    message: self.context.localize(keys::NO_TEMPLATE_EDITOR_SUPPORT),
                }));
            return;
        }

        self.primary_data = create_duration_data(action.delay().as_ref());
        self.minimum_data = create_duration_data(action.minimum_delay().as_ref());
        self.derivations += 1;
        log::debug!(
            "Derived delay durations: primary={:?} minimum={:?}",
            self.primary_data,
            self.minimum_data
        );
    }

    fn duration_control(
        &self,
        id: ControlId,
        label_key: &str,
        data: Option<&DurationData>,
    ) -> Control {
        Control::Duration(DurationControl {
            id,
            label: self.context.localize(label_key),
            data: data.cloned(),
            disabled: self.disabled,
            enable_millisecond: true,
        })
    }

    fn emit_value(&self, value: ActionConfig) {
        self.events.emit(EditorEvent::ValueChanged { value });
    }
}

impl ActionEditor for DelayActionEditor {
    fn action_type(&self) -> &str {
        Self::ACTION_TYPE
    }

    fn set_action(&mut self, action: Rc<ActionConfig>) {
        self.action = Some(action);
    }

    fn action(&self) -> Option<&Rc<ActionConfig>> {
        self.action.as_ref()
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn disabled(&self) -> bool {
        self.disabled
    }

    fn render(&mut self) -> EditorView {
        self.will_update();

        let Some(action) = self.action.as_ref() else {
            log::warn!("Rendering delay editor without an action");
            return EditorView::default();
        };

        let mut controls = vec![
            self.duration_control(ControlId::Delay, keys::DELAY_LABEL, self.primary_data.as_ref()),
            Control::Toggle(ToggleControl {
                id: ControlId::Randomize,
                label: self.context.localize(keys::RANDOMIZE_LABEL),
                checked: action.randomize(),
                disabled: self.disabled,
            }),
        ];
        if action.randomize() {
            controls.push(self.duration_control(
                ControlId::MinimumDelay,
                keys::MINIMUM_DELAY_LABEL,
                self.minimum_data.as_ref(),
            ));
        }

        EditorView { controls }
    }

    fn handle_control_event(&self, event: ControlEvent) {
        let Some(action) = self.action.as_ref() else {
            log::warn!("Ignoring {:?}: no action bound", event);
            return;
        };

        match event {
            ControlEvent::DurationChanged { id, value } => {
                // Inputs emit nothing usable while mid-edit
                let Some(value) = value.filter(|v| !v.is_empty()) else {
                    log::debug!("Ignoring empty value from {:?}", id);
                    return;
                };
                match id {
                    ControlId::Delay => self.emit_value(action.with_delay(value)),
                    ControlId::MinimumDelay => self.emit_value(action.with_minimum_delay(value)),
                    ControlId::Randomize => {
                        log::warn!("Duration change from non-duration control {:?}", id)
                    }
                }
            }
            ControlEvent::Toggled {
                id: ControlId::Randomize,
                checked,
            } => self.emit_value(action.with_randomize(checked)),
            ControlEvent::Toggled { id, .. } => {
                log::warn!("Toggle from non-toggle control {:?}", id)
            }
        }
    }

    fn events(&self) -> &EventSink {
        &self.events
    }
}

impl EditorType for DelayActionEditor {
    const ACTION_TYPE: &'static str = "delay";

    fn create(context: EditorContext) -> Self {
        Self::new(context)
    }

    fn default_config() -> ActionConfig {
        ActionConfig::new().with_delay(DelayValue::from(""))
    }
}
