//! Reading and writing action configs as JSON files

use action_editor_core::ActionConfig;
use anyhow::{anyhow, Result};
use std::path::Path;

/// Load an action config; the file must hold a JSON object
pub fn load_action(path: &Path) -> Result<ActionConfig> {
    let content = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    ActionConfig::from_value(value)
        .ok_or_else(|| anyhow!("{} does not contain a JSON object", path.display()))
}

/// Write an action config as pretty JSON
pub fn save_action(path: &Path, action: &ActionConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(action)?;
    std::fs::write(path, content)?;
    log::debug!("Saved action to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("action-editor-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_save_then_load_keeps_field_order() {
        let path = temp_file("delay.json");
        let action = ActionConfig::from_value(json!({
            "alias": "Wait",
            "delay": "00:00:30",
            "randomize": false,
        }))
        .unwrap();

        save_action(&path, &action).unwrap();
        let loaded = load_action(&path).unwrap();
        let keys: Vec<&String> = loaded.fields().keys().collect();
        assert_eq!(keys, vec!["alias", "delay", "randomize"]);
        assert_eq!(loaded, action);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_non_object_file_is_rejected() {
        let path = temp_file("array.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(load_action(&path).is_err());
        let _ = std::fs::remove_file(path);
    }
}
