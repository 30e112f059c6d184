//! Numeric interpretation of values.
//!
//! Layered leaf-first: the classifier fast-paths well-formed literals, the
//! extractor handles lenient text, the flattener walks nested structures,
//! and [`to_number`]/[`to_sum`] are the entry points that decide which
//! extraction failure is an error for their caller.

pub(crate) mod classifier;
pub mod extract;
pub mod flatten;

pub use extract::{NumericOutcome, extract};
pub use flatten::{FlattenedSequence, aggregate_concat, aggregate_sum, flatten};

use num_traits::ToPrimitive;

use crate::core::error::{ValueError, ValueResult};
use crate::core::value::Value;

/// Interpret a value as a single number (concatenate aggregation).
///
/// Text goes through the lenient extractor; containers flatten and
/// concatenate their numeric content; numbers pass through unless NaN;
/// big-integers widen (precision capped at f64, by contract). Empty or
/// missing containers fail with [`ValueError::EmptyContainer`].
pub fn to_number(value: &Value) -> ValueResult<f64> {
    match value {
        Value::Number(n) => {
            if n.is_nan() {
                Err(ValueError::NotANumber)
            } else {
                Ok(n.value())
            }
        }
        Value::Text(t) => extract(t.as_str())
            .as_number()
            .ok_or_else(|| ValueError::no_digits(t.as_str())),
        Value::BigInt(b) => b.to_f64().ok_or(ValueError::NotANumber),
        Value::Sequence(seq) => {
            if seq.is_empty() {
                Err(ValueError::empty_container(value.kind().name()))
            } else {
                aggregate_concat(value)
            }
        }
        Value::Map(map) => {
            if map.is_empty() {
                Err(ValueError::empty_container(value.kind().name()))
            } else {
                aggregate_concat(value)
            }
        }
        Value::Absent | Value::Null => Err(ValueError::empty_container(value.kind().name())),
        Value::Boolean(_) | Value::Token(_) => Err(ValueError::unsupported_coercion(
            value.kind().name(),
            "number",
        )),
    }
}

/// Interpret a value as a single number (sum aggregation).
///
/// Containers flatten and arithmetic-sum their numeric content; an empty
/// container sums to `0`. Scalars behave exactly as in [`to_number`].
pub fn to_sum(value: &Value) -> ValueResult<f64> {
    match value {
        Value::Sequence(_) | Value::Map(_) => Ok(aggregate_sum(value)),
        Value::Absent | Value::Null => Err(ValueError::empty_container(value.kind().name())),
        _ => to_number(value),
    }
}
