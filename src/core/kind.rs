//! Value kinds and coercion-target tags.
//!
//! `ValueKind` is a lightweight classification for [`Value`]; `TargetKind`
//! is the closed set of kinds a value can be coerced *into*, parsed from a
//! case-insensitive text tag.
//!
//! Quick example:
//! ```rust
//! use lenient_value::{Value, ValueKind, TargetKind};
//!
//! let v = Value::from(3.14);
//! assert_eq!(v.kind(), ValueKind::Number);
//! assert_eq!(TargetKind::parse("BigInt").unwrap(), TargetKind::BigInt);
//! ```

use std::fmt::{self, Display, Formatter};

use crate::core::error::{ValueError, ValueResult};
use crate::core::value::Value;

/// Represents the kind/type of a Value
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Absent,
    Null,
    Boolean,
    Number,
    Text,
    #[serde(rename = "big-integer")]
    BigInt,
    #[serde(rename = "opaque-token")]
    Token,
    Sequence,
    Map,
}

impl ValueKind {
    /// Get all available kinds
    pub fn all() -> Vec<Self> {
        vec![
            Self::Absent,
            Self::Null,
            Self::Boolean,
            Self::Number,
            Self::Text,
            Self::BigInt,
            Self::Token,
            Self::Sequence,
            Self::Map,
        ]
    }

    /// Check if this kind is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Number | Self::BigInt)
    }

    /// Check if this kind is a collection
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Sequence | Self::Map)
    }

    /// Check if this kind is primitive (not a collection)
    pub const fn is_primitive(&self) -> bool {
        !self.is_collection()
    }

    /// Check if this kind represents a missing value
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Absent | Self::Null)
    }

    /// Get the kind from a Value
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Absent => Self::Absent,
            Value::Null => Self::Null,
            Value::Boolean(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::Text(_) => Self::Text,
            Value::BigInt(_) => Self::BigInt,
            Value::Token(_) => Self::Token,
            Value::Sequence(_) => Self::Sequence,
            Value::Map(_) => Self::Map,
        }
    }

    /// Get a descriptive name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::Text => "text",
            Self::BigInt => "big-integer",
            Self::Token => "opaque-token",
            Self::Sequence => "sequence",
            Self::Map => "map",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The closed set of kinds a value can be coerced into.
///
/// `absent` and `null` are value kinds but never coercion targets; a tag
/// naming them (or anything unrecognized) fails with
/// [`ValueError::InvalidTargetSpec`] before dispatch begins.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TargetKind {
    Text,
    Number,
    Boolean,
    BigInt,
    Token,
    Sequence,
    Map,
}

impl TargetKind {
    /// Parse a target tag, case-insensitively, accepting common aliases
    pub fn parse(tag: &str) -> ValueResult<Self> {
        match tag.trim().to_lowercase().as_str() {
            "text" | "string" | "str" => Ok(Self::Text),
            "number" | "num" | "float" => Ok(Self::Number),
            "bool" | "boolean" => Ok(Self::Boolean),
            "big-integer" | "big_integer" | "bigint" => Ok(Self::BigInt),
            "opaque-token" | "token" | "symbol" => Ok(Self::Token),
            "sequence" | "seq" | "array" | "list" => Ok(Self::Sequence),
            "map" | "object" | "dict" => Ok(Self::Map),
            _ => Err(ValueError::invalid_target_spec(tag)),
        }
    }

    /// Get a descriptive name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::BigInt => "big-integer",
            Self::Token => "opaque-token",
            Self::Sequence => "sequence",
            Self::Map => "map",
        }
    }
}

impl Display for TargetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
