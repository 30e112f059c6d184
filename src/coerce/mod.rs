//! Type coercion dispatch.
//!
//! [`coerce`] routes a value to the serializer (text target), the numeric
//! interpreters (number / big-integer targets), or a direct structural
//! conversion. Dispatch is total over the closed kind set; combinations
//! with no listed conversion fail with
//! [`ValueError::UnsupportedCoercion`], naming both kinds. Coercion is a
//! pure function of its inputs: it either returns a fresh value (or the
//! same collection handle, for identity conversions) or fails whole, with
//! no retries and no partial application.

use num_bigint::BigInt;
use num_traits::FromPrimitive;
use tracing::trace;

use crate::collections::{Map, Sequence};
use crate::core::error::{ValueError, ValueResult};
use crate::core::kind::TargetKind;
use crate::core::value::Value;
use crate::numeric;
use crate::numeric::extract::parse_leading_float;
use crate::scalar::{Float, Text};
use crate::serialize;

/// Coerce a value to the kind named by `target_tag`.
///
/// The tag is case-normalized text; a tag that does not name a coercible
/// kind fails with [`ValueError::InvalidTargetSpec`] before dispatch
/// begins.
///
/// ```
/// use lenient_value::{Value, coerce};
///
/// let n = coerce(&Value::text("around 10.5.25 meters"), "number").unwrap();
/// assert_eq!(n, Value::number(10.525));
///
/// let b = coerce(&Value::text("  TRUE "), "boolean").unwrap();
/// assert_eq!(b, Value::boolean(true));
/// ```
pub fn coerce(value: &Value, target_tag: &str) -> ValueResult<Value> {
    let target = TargetKind::parse(target_tag)?;
    trace!(
        from = value.kind().name(),
        to = target.name(),
        "Dispatching coercion"
    );

    match target {
        TargetKind::Text => serialize::to_text(value).map(Value::text),
        TargetKind::Number => numeric::to_number(value).map(Value::number),
        TargetKind::Boolean => coerce_boolean(value),
        TargetKind::BigInt => coerce_big_int(value),
        TargetKind::Token => match value {
            Value::Token(_) => Ok(value.clone()),
            _ => Err(unsupported(value, target)),
        },
        TargetKind::Sequence => coerce_sequence(value),
        TargetKind::Map => coerce_map(value),
    }
}

fn unsupported(value: &Value, target: TargetKind) -> ValueError {
    ValueError::unsupported_coercion(value.kind().name(), target.name())
}

fn coerce_boolean(value: &Value) -> ValueResult<Value> {
    match value {
        Value::Boolean(_) => Ok(value.clone()),
        Value::Text(t) => {
            let normalized = t.trim().to_lowercase();
            match normalized.as_str() {
                "true" => Ok(Value::boolean(true)),
                "false" => Ok(Value::boolean(false)),
                _ => Err(ValueError::invalid_boolean_literal(t.as_str())),
            }
        }
        _ => Err(unsupported(value, TargetKind::Boolean)),
    }
}

fn coerce_big_int(value: &Value) -> ValueResult<Value> {
    match value {
        Value::BigInt(_) => Ok(value.clone()),
        Value::Number(n) => {
            if n.is_integral() {
                widen(n.value())
            } else {
                Err(ValueError::non_integer_value(n.to_string()))
            }
        }
        Value::Text(t) => {
            let parsed = parse_leading_float(t.as_str())
                .ok_or_else(|| ValueError::no_leading_digits(t.as_str()))?;
            if Float::new(parsed).is_integral() {
                widen(parsed)
            } else {
                Err(ValueError::non_integer_value(Float::new(parsed).to_string()))
            }
        }
        Value::Sequence(_) | Value::Map(_) => {
            let aggregated = numeric::to_number(value)?;
            if Float::new(aggregated).is_integral() {
                widen(aggregated)
            } else {
                Err(ValueError::non_integer_container(
                    value.kind().name(),
                    Float::new(aggregated).to_string(),
                ))
            }
        }
        _ => Err(unsupported(value, TargetKind::BigInt)),
    }
}

// Integrality is checked by every caller; NaN here means the check was
// bypassed, which still must not panic.
fn widen(v: f64) -> ValueResult<Value> {
    BigInt::from_f64(v)
        .map(Value::BigInt)
        .ok_or(ValueError::NotANumber)
}

fn coerce_sequence(value: &Value) -> ValueResult<Value> {
    match value {
        Value::Sequence(_) => Ok(value.clone()),
        Value::Text(t) => Ok(Value::Sequence(
            t.as_str()
                .chars()
                .map(|c| Value::Text(Text::from(c)))
                .collect(),
        )),
        Value::Map(map) => Ok(Value::Sequence(Sequence::from_vec(map.values()))),
        Value::Number(_) | Value::Boolean(_) | Value::BigInt(_) => {
            Ok(Value::Sequence(Sequence::from_vec(vec![value.clone()])))
        }
        _ => Err(unsupported(value, TargetKind::Sequence)),
    }
}

fn coerce_map(value: &Value) -> ValueResult<Value> {
    match value {
        Value::Map(_) => Ok(value.clone()),
        Value::Absent | Value::Null => Err(ValueError::null_to_map(value.kind().name())),
        Value::Text(t) => Ok(Value::Map(parse_map_literal(t.as_str()))),
        Value::Number(_) | Value::Boolean(_) | Value::BigInt(_) | Value::Token(_) => {
            let map = Map::new();
            map.insert(value.kind().name(), value.clone());
            Ok(Value::Map(map))
        }
        Value::Sequence(_) => Err(unsupported(value, TargetKind::Map)),
    }
}

// Structured-literal parse first; anything that is not a map literal falls
// back to a map keyed by character index.
fn parse_map_literal(text: &str) -> Map {
    if let Ok(Value::Map(map)) = text.parse::<Value>() {
        return map;
    }
    text.chars()
        .enumerate()
        .map(|(index, c)| (index.to_string(), Value::Text(Text::from(c))))
        .collect()
}
