//! Unified Value enum that combines all scalar and collection types
//!
//! This is the central type that represents any loosely-typed datum the
//! crate normalizes. Kind is inspected, never mutated.

use std::str::FromStr;

use num_bigint::BigInt;

use crate::collections::{Map, Sequence};
use crate::core::error::{ValueError, ValueResult};
use crate::core::kind::ValueKind;
use crate::scalar::{Float, Text, Token};

/// Unified value type
///
/// Scalars (`Boolean`, `Number`, `Text`, `BigInt`, `Token`) have value
/// semantics; collections (`Sequence`, `Map`) have shared-reference
/// semantics. `Absent` is the "no value at all" sentinel, distinct from
/// `Null`.
#[derive(Debug, Clone, PartialEq)]
#[derive(Default)]
pub enum Value {
    /// No value at all (serializes as `undefined`)
    Absent,

    /// Explicit null
    #[default]
    Null,

    /// Boolean value
    Boolean(bool),

    /// Floating point number (f64)
    Number(Float),

    /// UTF-8 text string
    Text(Text),

    /// Arbitrary precision integer
    BigInt(BigInt),

    /// Opaque, identity-unique atom
    Token(Token),

    /// Ordered sequence of values
    Sequence(Sequence),

    /// Insertion-ordered key-value map
    Map(Map),
}

impl Value {
    // ==================== Constructors ====================

    /// Create an absent value
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Create a null value
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value
    pub const fn boolean(v: bool) -> Self {
        Self::Boolean(v)
    }

    /// Create a number value
    pub const fn number(v: f64) -> Self {
        Self::Number(Float::new(v))
    }

    /// Create a number value from an integer
    pub const fn integer(v: i64) -> Self {
        Self::Number(Float::new(v as f64))
    }

    /// Create a text value from String or &str
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(Text::new(v.into()))
    }

    /// Create a big-integer value
    pub fn big_int(v: impl Into<BigInt>) -> Self {
        Self::BigInt(v.into())
    }

    /// Create a fresh opaque token value
    pub fn token() -> Self {
        Self::Token(Token::new())
    }

    /// Create an empty sequence value
    pub fn sequence_empty() -> Self {
        Self::Sequence(Sequence::new())
    }

    /// Create an empty map value
    pub fn map_empty() -> Self {
        Self::Map(Map::new())
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        ValueKind::from_value(self)
    }

    /// Check if this is absent
    #[inline]
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Check if this is null
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this is null or absent
    #[inline]
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Absent | Self::Null)
    }

    /// Check if this is a boolean
    #[inline]
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    /// Check if this is a number
    #[inline]
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Check if this is text
    #[inline]
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Check if this is a big-integer
    #[inline]
    #[must_use]
    pub fn is_big_int(&self) -> bool {
        matches!(self, Self::BigInt(_))
    }

    /// Check if this is an opaque token
    #[inline]
    #[must_use]
    pub fn is_token(&self) -> bool {
        matches!(self, Self::Token(_))
    }

    /// Check if this is a sequence
    #[inline]
    #[must_use]
    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Check if this is a map
    #[inline]
    #[must_use]
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Check if this is a collection (sequence or map)
    #[inline]
    #[must_use]
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::Sequence(_) | Self::Map(_))
    }

    // ==================== Accessors (as_*) ====================

    /// Try to get as boolean
    #[inline]
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as f64
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(n.value()),
            _ => None,
        }
    }

    /// Try to get as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t.as_str()),
            _ => None,
        }
    }

    /// Try to get as big-integer reference
    #[inline]
    #[must_use]
    pub fn as_big_int(&self) -> Option<&BigInt> {
        match self {
            Self::BigInt(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as token reference
    #[inline]
    #[must_use]
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(t) => Some(t),
            _ => None,
        }
    }

    /// Try to get as sequence reference
    #[inline]
    #[must_use]
    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Self::Sequence(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as map reference
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }
}

// ==================== From implementations ====================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::integer(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::integer(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::number(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::text(v)
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::BigInt(v)
    }
}

impl From<Float> for Value {
    fn from(v: Float) -> Self {
        Self::Number(v)
    }
}

impl From<Text> for Value {
    fn from(v: Text) -> Self {
        Self::Text(v)
    }
}

impl From<Token> for Value {
    fn from(v: Token) -> Self {
        Self::Token(v)
    }
}

impl From<Sequence> for Value {
    fn from(v: Sequence) -> Self {
        Self::Sequence(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Map(v)
    }
}

// ==================== FromStr Implementation ====================

impl FromStr for Value {
    type Err = ValueError;

    /// Parse a Value from a JSON structured literal
    ///
    /// ```
    /// use lenient_value::Value;
    ///
    /// let value: Value = "42".parse().unwrap();
    /// assert_eq!(value, Value::integer(42));
    ///
    /// let value: Value = r#"{"name": "Alice"}"#.parse().unwrap();
    /// assert!(value.is_map());
    /// ```
    fn from_str(s: &str) -> ValueResult<Self> {
        serde_json::from_str::<serde_json::Value>(s)
            .map(Value::from)
            .map_err(|e| ValueError::parse_error("structured literal", e.to_string()))
    }
}
