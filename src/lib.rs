//! Lenient normalization of loosely-typed runtime values into strict
//! target representations.
//!
//! Given an arbitrary [`Value`] (a scalar, a string with embedded
//! numeric-looking substrings, or an arbitrarily nested structure of
//! maps and sequences), this crate:
//!
//! - extracts and aggregates numeric content using a grammar tolerant of
//!   malformed decimal notation (`"10.5.25"`) and inline addition
//!   (`"20+5"`), in two aggregation modes ([`to_sum`] and the
//!   concatenate-then-parse mode behind [`to_number`]);
//! - dispatches value-to-value [`coerce`]ion across a closed set of
//!   target kinds (text, number, boolean, big-integer, opaque token,
//!   sequence, map);
//! - serializes any value [`to_text`], cycle-safely for self-referential
//!   structures.
//!
//! ```
//! use lenient_value::{Map, Value, coerce, to_sum};
//!
//! let order = Map::new();
//! order.insert("base", Value::integer(10));
//! order.insert("extra", Value::text("20+5"));
//! assert_eq!(to_sum(&Value::Map(order)).unwrap(), 35.0);
//!
//! let n = coerce(&Value::text("around 10.5.25 meters"), "number").unwrap();
//! assert_eq!(n, Value::number(10.525));
//! ```
//!
//! All operations are pure, synchronous, and request-scoped: each call
//! builds its own working state and discards it on return, so calls are
//! independently parallelizable.

pub mod coerce;
pub mod collections;
pub mod core;
pub mod numeric;
pub mod scalar;
pub mod serialize;

// Re-export core types
pub use crate::core::{
    TargetKind, Value, ValueError, ValueKind, ValueResult, add, invert,
};

// Re-export scalar and collection types
pub use collections::{Map, Sequence};
pub use scalar::{Float, Text, Token};

// Re-export the operation entry points
pub use coerce::coerce;
pub use numeric::{NumericOutcome, to_number, to_sum};
pub use serialize::to_text;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{TargetKind, Value, ValueError, ValueKind, ValueResult};
    pub use crate::{Float, Map, Sequence, Text, Token};
    pub use crate::{add, coerce, invert, to_number, to_sum, to_text};
}
