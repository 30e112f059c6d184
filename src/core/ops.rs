//! Value operations built on the coercion core: addition and boolean
//! inversion.
//!
//! Addition is the lenient two-value operator: it asks the numeric
//! interpreters for both operands and falls back to text concatenation
//! exactly when one side has no digits. At this boundary a missing number
//! is a cue, not an error. NaN operands stay errors.

use tracing::trace;

use crate::core::error::{ValueError, ValueResult};
use crate::core::value::Value;
use crate::numeric::to_number;
use crate::serialize::to_text;

/// Add two values.
///
/// - number + number: arithmetic (NaN flows through, as native addition)
/// - text/number mixes: numeric addition via the lenient extractor,
///   falling back to text concatenation when either side has no digits
/// - sequence + sequence: concatenation into a fresh sequence
/// - map + map: shallow merge into a fresh map, right wins
///
/// ```
/// use lenient_value::{Value, add};
///
/// assert_eq!(add(&Value::text("1kg"), &Value::integer(2)).unwrap(), Value::integer(3));
/// assert_eq!(add(&Value::text("a"), &Value::text("b")).unwrap(), Value::text("ab"));
/// ```
pub fn add(left: &Value, right: &Value) -> ValueResult<Value> {
    trace!(
        left = left.kind().name(),
        right = right.kind().name(),
        "Adding values"
    );

    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(*a + *b)),
        (Value::Text(_) | Value::Number(_), Value::Text(_) | Value::Number(_)) => {
            add_numeric_or_concat(left, right)
        }
        (Value::Sequence(a), Value::Sequence(b)) => Ok(Value::Sequence(a.concat(b))),
        (Value::Map(a), Value::Map(b)) => Ok(Value::Map(a.merge(b))),
        _ => Err(ValueError::unsupported_operation(
            "add",
            format!("{} + {}", left.kind(), right.kind()),
        )),
    }
}

fn add_numeric_or_concat(left: &Value, right: &Value) -> ValueResult<Value> {
    match (to_number(left), to_number(right)) {
        (Ok(a), Ok(b)) => Ok(Value::number(a + b)),
        (Err(ValueError::NoDigits { .. }), _) | (_, Err(ValueError::NoDigits { .. })) => {
            Ok(Value::text(format!("{}{}", to_text(left)?, to_text(right)?)))
        }
        (Err(e), _) | (_, Err(e)) => Err(e),
    }
}

/// Invert a boolean value. Any other kind fails.
pub fn invert(value: &Value) -> ValueResult<Value> {
    match value {
        Value::Boolean(b) => Ok(Value::boolean(!b)),
        _ => Err(ValueError::unsupported_operation(
            "invert",
            value.kind().name(),
        )),
    }
}
