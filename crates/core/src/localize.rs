//! Localized strings looked up by fixed key

use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;

/// Translation keys used by the built-in editors
pub mod keys {
    pub const DELAY_LABEL: &str = "ui.panel.config.automation.editor.actions.type.delay.delay";
    pub const RANDOMIZE_LABEL: &str =
        "ui.panel.config.automation.editor.actions.type.delay.randomize";
    pub const MINIMUM_DELAY_LABEL: &str =
        "ui.panel.config.automation.editor.actions.type.delay.minimum_delay";
    pub const NO_TEMPLATE_EDITOR_SUPPORT: &str = "ui.errors.config.no_template_editor_support";
}

/// Host-provided string lookup
pub trait Localize {
    /// Resolve `key`; implementations return the key itself when unknown
    fn localize(&self, key: &str) -> String;
}

/// Flat key to string catalog with English defaults
#[derive(Debug, Clone)]
pub struct Translations {
    strings: HashMap<String, String>,
}

impl Translations {
    /// Catalog holding only the built-in English strings
    pub fn new() -> Self {
        let strings = [
            (keys::DELAY_LABEL, "Duration"),
            (keys::RANDOMIZE_LABEL, "Randomize"),
            (keys::MINIMUM_DELAY_LABEL, "Minimum duration"),
            (
                keys::NO_TEMPLATE_EDITOR_SUPPORT,
                "Templates not supported in visual editor",
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self { strings }
    }

    /// Built-in strings overridden by a JSON object of `"key": "text"` pairs
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut translations = Self::new();
        translations.extend_from_json(&content)?;
        log::info!("Loaded translations from {}", path.display());
        Ok(translations)
    }

    /// Merge string entries from a JSON object; non-string values are skipped
    pub fn extend_from_json(&mut self, json: &str) -> Result<()> {
        let parsed: HashMap<String, serde_json::Value> = serde_json::from_str(json)?;
        for (key, value) in parsed {
            match value {
                serde_json::Value::String(text) => {
                    self.strings.insert(key, text);
                }
                other => log::warn!("Skipping non-string translation {}: {}", key, other),
            }
        }
        Ok(())
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.strings.insert(key.into(), text.into());
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::new()
    }
}

impl Localize for Translations {
    fn localize(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let t = Translations::new();
        assert_eq!(t.localize(keys::RANDOMIZE_LABEL), "Randomize");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let t = Translations::new();
        assert_eq!(t.localize("some.unknown.key"), "some.unknown.key");
    }

    #[test]
    fn test_extend_from_json() {
        let mut t = Translations::new();
        t.extend_from_json(&format!(
            r#"{{ "{}": "Verzögerung", "count": 3 }}"#,
            keys::DELAY_LABEL
        ))
        .unwrap();
        assert_eq!(t.localize(keys::DELAY_LABEL), "Verzögerung");
        assert_eq!(t.localize("count"), "count");
        assert_eq!(t.localize(keys::RANDOMIZE_LABEL), "Randomize");
    }

    #[test]
    fn test_extend_rejects_non_object() {
        let mut t = Translations::new();
        assert!(t.extend_from_json("[1, 2]").is_err());
    }
}
