//! Registry of action editors

use crate::delay::DelayActionEditor;
use crate::editor::{ActionEditor, EditorContext, EditorType};
use crate::error::EditorError;
use action_editor_types::ActionConfig;
use std::collections::HashMap;

/// Function that creates an editor
pub type EditorFactory = fn(EditorContext) -> Box<dyn ActionEditor>;

/// Registration entry for one action type
#[derive(Clone)]
pub struct EditorInfo {
    pub action_type: String,
    pub factory: EditorFactory,
    pub default_config: fn() -> ActionConfig,
}

/// Maps action type names to editor factories.
///
/// Owned by the application and built once at startup; there is no
/// process-wide instance.
#[derive(Clone, Default)]
pub struct EditorRegistry {
    editors: HashMap<String, EditorInfo>,
}

impl EditorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            editors: HashMap::new(),
        }
    }

    /// Registry with every built-in editor registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_defaults();
        registry
    }

    pub fn register_defaults(&mut self) {
        self.register_type::<DelayActionEditor>();
    }

    /// Register an editor, replacing any previous one for the same type
    pub fn register(
        &mut self,
        action_type: &str,
        factory: EditorFactory,
        default_config: fn() -> ActionConfig,
    ) {
        if self.editors.contains_key(action_type) {
            log::warn!("Replacing editor registration for '{}'", action_type);
        }
        self.editors.insert(
            action_type.to_string(),
            EditorInfo {
                action_type: action_type.to_string(),
                factory,
                default_config,
            },
        );
    }

    /// Register a concrete editor type under its `ACTION_TYPE`
    pub fn register_type<E: EditorType>(&mut self) {
        self.register(E::ACTION_TYPE, create_boxed::<E>, E::default_config);
    }

    /// Create an editor by action type
    pub fn create(
        &self,
        action_type: &str,
        context: EditorContext,
    ) -> Result<Box<dyn ActionEditor>, EditorError> {
        let info = self.info(action_type)?;
        Ok((info.factory)(context))
    }

    /// Starting config for a newly added action of this type
    pub fn default_config(&self, action_type: &str) -> Result<ActionConfig, EditorError> {
        let info = self.info(action_type)?;
        Ok((info.default_config)())
    }

    /// Find the registered type whose key appears in `config`
    pub fn detect_type<'a>(&self, config: &'a ActionConfig) -> Option<&'a str> {
        config
            .fields()
            .keys()
            .find(|key| self.editors.contains_key(key.as_str()))
            .map(String::as_str)
    }

    /// List all registered action types, sorted
    pub fn list(&self) -> Vec<String> {
        let mut types: Vec<String> = self.editors.keys().cloned().collect();
        types.sort();
        types
    }

    pub fn contains(&self, action_type: &str) -> bool {
        self.editors.contains_key(action_type)
    }

    fn info(&self, action_type: &str) -> Result<&EditorInfo, EditorError> {
        self.editors
            .get(action_type)
            .ok_or_else(|| EditorError::UnknownActionType(action_type.to_string()))
    }
}

fn create_boxed<E: EditorType>(context: EditorContext) -> Box<dyn ActionEditor> {
    Box::new(E::create(context))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localize::Translations;
    use serde_json::json;
    use std::rc::Rc;

    fn context() -> EditorContext {
        EditorContext::new(Rc::new(Translations::new()))
    }

    #[test]
    fn test_defaults_include_delay() {
        let registry = EditorRegistry::with_defaults();
        assert_eq!(registry.list(), vec!["delay".to_string()]);
        let editor = registry.create("delay", context()).unwrap();
        assert_eq!(editor.action_type(), "delay");
    }

    #[test]
    fn test_unknown_type() {
        let registry = EditorRegistry::with_defaults();
        assert_eq!(
            registry.create("wait_template", context()).err(),
            Some(EditorError::UnknownActionType("wait_template".to_string()))
        );
        assert!(registry.default_config("wait_template").is_err());
    }

    #[test]
    fn test_default_config() {
        let registry = EditorRegistry::with_defaults();
        assert_eq!(
            registry.default_config("delay").unwrap().to_value(),
            json!({ "delay": "" })
        );
    }

    #[test]
    fn test_detect_type() {
        let registry = EditorRegistry::with_defaults();
        let config = ActionConfig::from_value(json!({ "alias": "x", "delay": 3 })).unwrap();
        assert_eq!(registry.detect_type(&config), Some("delay"));

        let other = ActionConfig::from_value(json!({ "service": "light.turn_on" })).unwrap();
        assert_eq!(registry.detect_type(&other), None);
    }

    #[test]
    fn test_detected_type_outlives_registry() {
        let config = ActionConfig::from_value(json!({ "delay": "5" })).unwrap();
        let detected = {
            let registry = EditorRegistry::with_defaults();
            registry.detect_type(&config)
        };
        assert_eq!(detected, Some("delay"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = EditorRegistry::new();
        assert!(registry.list().is_empty());
        assert!(!registry.contains("delay"));
    }
}
