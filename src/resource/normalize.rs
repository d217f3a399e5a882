//! Response key normalization
//!
//! The InEngine.NET API returns Pascal-case field names; client consumers
//! expect camelCase. [`normalize`] rewrites every object key of a decoded
//! JSON value by lower-casing exactly its first character, recursively.

use serde_json::{Map, Value};

/// Normalize object keys of a decoded JSON value, to arbitrary depth.
///
/// Arrays are mapped element-wise, order preserved. Object keys of length
/// one (or less) are fully lower-cased; longer keys get only their first
/// character lower-cased, the remainder untouched. Values other than their
/// nested keys are untouched; scalars pass through unchanged.
///
/// The transform is pure (a new structure is returned) and idempotent:
/// keys that already start lower-case are unaffected.
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, value) in map {
                out.insert(lower_first(&key), normalize(value));
            }
            Value::Object(out)
        }
        scalar => scalar,
    }
}

fn lower_first(key: &str) -> String {
    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out: String = first.to_lowercase().collect();
    out.push_str(chars.as_str());
    out
}

/// JSON type name, for error messages.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
