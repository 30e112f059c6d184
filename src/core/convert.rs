//! Conversions between Value and serde_json::Value.
//!
//! JSON-shaped data converts losslessly in both directions. Kinds JSON
//! cannot represent follow the serializer's rules: absent converts to
//! null, a token to its textual form, and a big-integer has no JSON form
//! at all (the conversion fails rather than silently losing precision).

use serde_json::Value as JsonValue;

use crate::collections::Map;
use crate::core::error::{ValueError, ValueResult};
use crate::core::value::Value;
use crate::serialize;

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::boolean(b),
            JsonValue::Number(n) => Value::number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Value::text(s),
            JsonValue::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            // preserve_order keeps the literal's key order
            JsonValue::Object(entries) => Value::Map(Map::from_entries(
                entries.into_iter().map(|(k, v)| (k, Value::from(v))),
            )),
        }
    }
}

impl TryFrom<&Value> for JsonValue {
    type Error = ValueError;

    fn try_from(value: &Value) -> ValueResult<Self> {
        match value {
            Value::Token(t) => Ok(JsonValue::String(t.to_string())),
            _ => {
                let mut seen = Vec::new();
                Ok(serialize::structural(value, &mut seen)?.unwrap_or(JsonValue::Null))
            }
        }
    }
}

impl TryFrom<Value> for JsonValue {
    type Error = ValueError;

    fn try_from(value: Value) -> ValueResult<Self> {
        JsonValue::try_from(&value)
    }
}
