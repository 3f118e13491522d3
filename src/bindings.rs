//! Parameter coercion for Cypher bindings.
//!
//! The graph facility accepts only string-typed bindings, so every
//! caller-supplied value is rendered to text before execution. Coercion is
//! total: each JSON value variant has a string form.

use std::collections::HashMap;

use serde_json::Value;

/// Render a single parameter value as a binding string.
///
/// Strings pass through unchanged, so coercing an already-string value is
/// idempotent. Every other variant renders as its canonical compact JSON
/// text.
pub fn to_binding_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Coerce a full parameter mapping into the string bindings handed to the
/// graph facility. An empty mapping is a no-op.
pub fn coerce_parameters(parameters: &HashMap<String, Value>) -> HashMap<String, String> {
    parameters
        .iter()
        .map(|(name, value)| (name.clone(), to_binding_string(value)))
        .collect()
}
