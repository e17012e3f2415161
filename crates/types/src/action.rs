//! Automation action configuration

use crate::duration::DurationData;
use crate::template::has_template;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DELAY_KEY: &str = "delay";
pub const MINIMUM_DELAY_KEY: &str = "minimum_delay";
pub const RANDOMIZE_KEY: &str = "randomize";

/// Persisted form of a `delay` or `minimum_delay` field.
///
/// Any of the three JSON shapes a script may use is accepted and written
/// back in the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DelayValue {
    /// `"HH:MM:SS"`, `"HH:MM:SS.fff"`, plain seconds text, or a template
    Text(String),
    /// Number of seconds
    Seconds(serde_json::Number),
    /// `{ days, hours, minutes, seconds, milliseconds }`
    Structured(DurationData),
}

impl DelayValue {
    /// Empty text is the only empty value
    pub fn is_empty(&self) -> bool {
        matches!(self, DelayValue::Text(s) if s.is_empty())
    }

    pub fn to_json(&self) -> Value {
        match self {
            DelayValue::Text(s) => Value::String(s.clone()),
            DelayValue::Seconds(n) => Value::Number(n.clone()),
            DelayValue::Structured(data) => {
                serde_json::to_value(data).unwrap_or_else(|_| Value::Object(Map::new()))
            }
        }
    }
}

impl From<&str> for DelayValue {
    fn from(s: &str) -> Self {
        DelayValue::Text(s.to_string())
    }
}

impl From<DurationData> for DelayValue {
    fn from(data: DurationData) -> Self {
        DelayValue::Structured(data)
    }
}

/// One step of an automation script, as an ordered JSON object.
///
/// Only `delay`, `minimum_delay` and `randomize` have typed accessors; every
/// other field is carried through untouched. The `with_*` builders return a
/// new config and leave the receiver as it was.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionConfig(Map<String, Value>);

impl ActionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value; returns `None` unless it is an object
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Primary delay, if present and of a recognized shape
    pub fn delay(&self) -> Option<DelayValue> {
        self.delay_field(DELAY_KEY)
    }

    pub fn minimum_delay(&self) -> Option<DelayValue> {
        self.delay_field(MINIMUM_DELAY_KEY)
    }

    /// Randomize flag, `false` when absent or not a boolean
    pub fn randomize(&self) -> bool {
        self.0
            .get(RANDOMIZE_KEY)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Whether any string field holds template syntax
    pub fn has_template(&self) -> bool {
        self.0.values().any(has_template)
    }

    pub fn with_delay(&self, value: DelayValue) -> Self {
        self.with_field(DELAY_KEY, value.to_json())
    }

    pub fn with_minimum_delay(&self, value: DelayValue) -> Self {
        self.with_field(MINIMUM_DELAY_KEY, value.to_json())
    }

    pub fn with_randomize(&self, randomize: bool) -> Self {
        self.with_field(RANDOMIZE_KEY, Value::Bool(randomize))
    }

    /// Copy of this config with one field replaced (or appended)
    pub fn with_field(&self, key: &str, value: Value) -> Self {
        let mut map = self.0.clone();
        map.insert(key.to_string(), value);
        Self(map)
    }

    fn delay_field(&self, key: &str) -> Option<DelayValue> {
        let value = self.0.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(delay) => Some(delay),
            Err(e) => {
                log::debug!("Ignoring {} with unexpected shape {}: {}", key, value, e);
                None
            }
        }
    }
}

impl From<Map<String, Value>> for ActionConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
