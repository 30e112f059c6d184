//! Display implementation for Value.
//!
//! Scalars print their native textual form. Collections print their
//! canonical (cycle-safe) serialization, falling back to a short summary
//! when a nested value has no structural form.

use std::fmt;

use crate::core::value::Value;
use crate::serialize;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(t) => write!(f, "{t}"),
            Value::BigInt(b) => write!(f, "{b}"),
            Value::Token(t) => write!(f, "{t}"),
            Value::Sequence(seq) => match serialize::to_text(self) {
                Ok(text) => f.write_str(&text),
                Err(_) => write!(f, "{seq}"),
            },
            Value::Map(map) => match serialize::to_text(self) {
                Ok(text) => f.write_str(&text),
                Err(_) => write!(f, "{map}"),
            },
        }
    }
}
