//! Detection of embedded template expressions in configuration values

use once_cell::sync::Lazy;
use serde_json::Value;

/// Opening tokens of a Jinja expression, statement or comment
static TEMPLATE_RE: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"\{[{%#]").expect("Invalid regex"));

/// Check whether a single string contains template syntax
pub fn is_template(text: &str) -> bool {
    TEMPLATE_RE.is_match(text)
}

/// Check whether any string anywhere in `value` contains template syntax.
///
/// Object values and array items are scanned recursively. Object keys are
/// not scanned.
pub fn has_template(value: &Value) -> bool {
    match value {
        Value::String(s) => is_template(s),
        Value::Array(items) => items.iter().any(has_template),
        Value::Object(map) => map.values().any(has_template),
        Value::Null | Value::Bool(_) | Value::Number(_) => false,
    }
}
