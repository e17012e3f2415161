//! End-to-end delay editor scenarios driven through the registry

use action_editor_core::localize::keys;
use action_editor_core::{
    ActionConfig, ActionEditor, ControlEvent, ControlId, DelayValue, EditorContext, EditorError,
    EditorEvent, EditorRegistry, Translations,
};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

struct Harness {
    editor: Box<dyn ActionEditor>,
    events: Rc<RefCell<Vec<EditorEvent>>>,
}

impl Harness {
    fn new(translations: Translations) -> Self {
        let registry = EditorRegistry::with_defaults();
        let editor = registry
            .create("delay", EditorContext::new(Rc::new(translations)))
            .unwrap();
        let events = Rc::new(RefCell::new(Vec::new()));
        let events_clone = events.clone();
        editor
            .events()
            .connect(move |event| events_clone.borrow_mut().push(event));
        Self { editor, events }
    }

    fn bind(&mut self, value: serde_json::Value) {
        self.editor
            .set_action(Rc::new(ActionConfig::from_value(value).unwrap()));
    }

    fn take_events(&self) -> Vec<EditorEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    /// Feed emitted configs back in, the way a host does
    fn apply_last_value(&mut self) {
        let last = self.take_events().into_iter().rev().find_map(|e| match e {
            EditorEvent::ValueChanged { value } => Some(value),
            _ => None,
        });
        if let Some(value) = last {
            self.editor.set_action(Rc::new(value));
        }
    }
}

#[test]
fn set_primary_duration_on_default_config() {
    let registry = EditorRegistry::with_defaults();
    let mut h = Harness::new(Translations::new());
    h.editor
        .set_action(Rc::new(registry.default_config("delay").unwrap()));
    h.editor.render();

    h.editor.handle_control_event(ControlEvent::DurationChanged {
        id: ControlId::Delay,
        value: Some(DelayValue::from("00:00:30")),
    });

    assert_eq!(
        h.take_events(),
        vec![EditorEvent::ValueChanged {
            value: ActionConfig::from_value(json!({ "delay": "00:00:30" })).unwrap()
        }]
    );
}

#[test]
fn toggling_randomize_off_hides_minimum_delay() {
    let mut h = Harness::new(Translations::new());
    h.bind(json!({ "delay": "00:01:00", "randomize": true, "minimum_delay": "00:00:10" }));
    assert!(h.editor.render().contains(ControlId::MinimumDelay));

    h.editor.handle_control_event(ControlEvent::Toggled {
        id: ControlId::Randomize,
        checked: false,
    });
    let expected = ActionConfig::from_value(
        json!({ "delay": "00:01:00", "randomize": false, "minimum_delay": "00:00:10" }),
    )
    .unwrap();
    assert_eq!(
        h.take_events(),
        vec![EditorEvent::ValueChanged {
            value: expected.clone()
        }]
    );

    h.editor.set_action(Rc::new(expected));
    let view = h.editor.render();
    assert!(!view.contains(ControlId::MinimumDelay));

    // toggling back shows the retained minimum delay again
    h.editor.handle_control_event(ControlEvent::Toggled {
        id: ControlId::Randomize,
        checked: true,
    });
    h.apply_last_value();
    let view = h.editor.render();
    let minimum = view.duration(ControlId::MinimumDelay).unwrap();
    assert_eq!(minimum.data.as_ref().and_then(|d| d.seconds), Some(10.0));
}

#[test]
fn template_config_reports_ui_mode_not_available() {
    let mut translations = Translations::new();
    translations.insert(keys::NO_TEMPLATE_EDITOR_SUPPORT, "No templates here");
    let mut h = Harness::new(translations);
    h.bind(json!({ "delay": "{{ states('sensor.x') }}" }));

    let view = h.editor.render();

    assert_eq!(
        h.take_events(),
        vec![EditorEvent::UiModeNotAvailable(
            EditorError::NoTemplateEditorSupport {
                message: "No templates here".to_string()
            }
        )]
    );
    assert!(view
        .controls
        .iter()
        .filter_map(|c| match c {
            action_editor_core::Control::Duration(d) => Some(d),
            _ => None,
        })
        .all(|d| d.data.is_none()));
}

#[test]
fn unrelated_fields_survive_every_edit() {
    let mut h = Harness::new(Translations::new());
    h.bind(json!({
        "alias": "Pause",
        "enabled": true,
        "continue_on_error": false,
        "delay": { "hours": 0, "minutes": 0, "seconds": 5, "milliseconds": 0 },
    }));
    h.editor.render();

    h.editor.handle_control_event(ControlEvent::Toggled {
        id: ControlId::Randomize,
        checked: true,
    });
    h.apply_last_value();
    h.editor.render();
    h.editor.handle_control_event(ControlEvent::DurationChanged {
        id: ControlId::MinimumDelay,
        value: Some(DelayValue::from("00:00:02")),
    });
    h.apply_last_value();

    let action = h.editor.action().unwrap();
    assert_eq!(
        action.to_value(),
        json!({
            "alias": "Pause",
            "enabled": true,
            "continue_on_error": false,
            "delay": { "hours": 0, "minutes": 0, "seconds": 5, "milliseconds": 0 },
            "randomize": true,
            "minimum_delay": "00:00:02",
        })
    );
}

#[test]
fn labels_come_from_translations() {
    let mut translations = Translations::new();
    translations.insert(keys::DELAY_LABEL, "Wartezeit");
    let mut h = Harness::new(translations);
    h.bind(json!({ "delay": "1" }));

    let view = h.editor.render();
    assert_eq!(view.duration(ControlId::Delay).unwrap().label, "Wartezeit");
    assert_eq!(view.toggle(ControlId::Randomize).unwrap().label, "Randomize");
}
