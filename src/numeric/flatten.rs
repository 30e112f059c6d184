//! Recursive flattening of nested structures into numeric sequences.
//!
//! Traversal is depth-first in insertion/index order. Non-numeric text
//! inside a container is dropped silently: nested structures may carry
//! decorative text that must not abort the whole aggregation. That drop is
//! documented policy, not an error path.

use smallvec::SmallVec;

use crate::core::error::{ValueError, ValueResult};
use crate::core::value::Value;
use crate::numeric::extract::{NumericOutcome, collapse_dots, extract};
use crate::scalar::Float;

/// Ordered numeric content of a (possibly nested) value.
///
/// Order is the source structure's insertion/index order, never sorted;
/// the concatenation aggregation depends on it.
pub type FlattenedSequence = SmallVec<[f64; 8]>;

/// Flatten a value into its ordered numeric content.
///
/// Numbers are appended as-is (including NaN), text contributes its
/// extracted number or nothing, collections recurse, and every other kind
/// is skipped.
pub fn flatten(value: &Value) -> FlattenedSequence {
    let mut out = FlattenedSequence::new();
    flatten_into(value, &mut out);
    out
}

fn flatten_into(value: &Value, out: &mut FlattenedSequence) {
    match value {
        Value::Number(n) => out.push(n.value()),
        Value::Text(t) => {
            if let NumericOutcome::Number(v) = extract(t.as_str()) {
                out.push(v);
            }
        }
        Value::Sequence(seq) => {
            for item in seq.snapshot() {
                flatten_into(&item, out);
            }
        }
        Value::Map(map) => {
            for (_, entry) in map.entries() {
                flatten_into(&entry, out);
            }
        }
        _ => {}
    }
}

/// Sum aggregation: arithmetic sum of the flattened sequence.
///
/// An empty flattened sequence sums to `0`.
pub fn aggregate_sum(value: &Value) -> f64 {
    flatten(value).iter().sum()
}

/// Concatenate aggregation: join the flattened numbers' decimal text forms
/// with no separator, dot-collapse once across the joined string (each
/// extracted number may carry its own dot), and parse the result as a
/// single number. An unparseable concatenation yields NaN.
///
/// Fails with [`ValueError::NoDigits`] when the container flattens to
/// nothing numeric at all.
pub fn aggregate_concat(value: &Value) -> ValueResult<f64> {
    let flat = flatten(value);
    if flat.is_empty() {
        return Err(ValueError::no_digits(format!(
            "{} with no numeric content",
            value.kind().name()
        )));
    }

    let joined: String = flat.iter().map(|v| Float::new(*v).to_string()).collect();
    let collapsed = collapse_dots(&joined);
    Ok(collapsed.parse().unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::{Map, Sequence};

    fn nested_fixture() -> Value {
        // {a: 10, b: "20+5", c: {d: "abc", e: 3}}
        let inner = Map::new();
        inner.insert("d", Value::text("abc"));
        inner.insert("e", Value::integer(3));

        let map = Map::new();
        map.insert("a", Value::integer(10));
        map.insert("b", Value::text("20+5"));
        map.insert("c", Value::Map(inner));
        Value::Map(map)
    }

    #[test]
    fn test_flatten_order_and_drop() {
        let flat = flatten(&nested_fixture());
        assert_eq!(flat.as_slice(), &[10.0, 25.0, 3.0]);
    }

    #[test]
    fn test_sum_aggregation() {
        assert_eq!(aggregate_sum(&nested_fixture()), 38.0);
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        assert_eq!(aggregate_sum(&Value::map_empty()), 0.0);
        assert_eq!(aggregate_sum(&Value::sequence_empty()), 0.0);
    }

    #[test]
    fn test_skips_non_numeric_kinds() {
        let seq = Sequence::from_vec(vec![
            Value::Null,
            Value::Absent,
            Value::boolean(true),
            Value::integer(7),
        ]);
        assert_eq!(flatten(&Value::Sequence(seq)).as_slice(), &[7.0]);
    }

    #[test]
    fn test_concat_aggregation() {
        let seq = Sequence::from_vec(vec![Value::number(10.5), Value::integer(25)]);
        // "10.5" + "25" -> "10.525"
        assert_eq!(aggregate_concat(&Value::Sequence(seq)).unwrap(), 10.525);
    }

    #[test]
    fn test_concat_collapses_multiple_dots() {
        let seq = Sequence::from_vec(vec![Value::number(1.5), Value::number(2.5)]);
        // "1.5" + "2.5" -> "1.52.5" -> "1.525"
        assert_eq!(aggregate_concat(&Value::Sequence(seq)).unwrap(), 1.525);
    }

    #[test]
    fn test_concat_is_order_dependent() {
        let ab = Map::new();
        ab.insert("a", Value::text("12"));
        ab.insert("b", Value::text("34"));

        let ba = Map::new();
        ba.insert("b", Value::text("34"));
        ba.insert("a", Value::text("12"));

        assert_eq!(aggregate_concat(&Value::Map(ab)).unwrap(), 1234.0);
        assert_eq!(aggregate_concat(&Value::Map(ba)).unwrap(), 3412.0);
    }

    #[test]
    fn test_concat_with_nothing_numeric() {
        let map = Map::new();
        map.insert("note", Value::text("decorative"));
        let err = aggregate_concat(&Value::Map(map)).unwrap_err();
        assert_eq!(err.code(), "VALUE_NO_DIGITS");
    }
}
