use std::collections::BTreeMap;

use serde_json::Value;

/// Problem-type specific members, flattened next to the fixed ones on the wire
pub type ExtensionMembers = BTreeMap<String, Value>;

/// Member names owned by the fixed fields
pub const RESERVED_MEMBERS: [&str; 5] = ["type", "title", "status", "detail", "instance"];

/// Whether `key` names one of the fixed members
pub fn is_reserved(key: &str) -> bool {
    RESERVED_MEMBERS.contains(&key)
}

/// Short description of a JSON value's kind, used in error messages
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
