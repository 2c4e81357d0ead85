// File: crates/dashboard/src/payload.rs
// Summary: Typed decoding of backend JSON bodies into serde payload structs.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::SchemaError;

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decode a response body into `T`. The body must be a JSON object; derived
/// struct impls would otherwise also accept a positional array.
pub(crate) fn decode<T: DeserializeOwned>(v: &Value) -> Result<T, SchemaError> {
    if !v.is_object() {
        return Err(SchemaError::NotAnObject { found: kind_of(v) });
    }
    Ok(T::deserialize(v)?)
}
