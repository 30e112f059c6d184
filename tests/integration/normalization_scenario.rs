//! Integration test: normalizing a messy payload
//!
//! Exercises the crate the way a caller ingesting loosely-typed data
//! would: mixed scalars, decorative text, nested containers, and the
//! lenient add operator on top.

use lenient_value::{Map, Sequence, Value, add, coerce, to_number, to_sum, to_text};
use pretty_assertions::assert_eq;

/// A payload with every tolerated irregularity at once: numeric strings
/// with inline addition, digitless noise, missing values, booleans, and
/// nested containers.
fn messy_payload() -> Value {
    let items = Sequence::from_vec(vec![
        Value::integer(6),
        Value::text("7"),
        Value::text("bad"),
    ]);

    let inner = Map::new();
    inner.insert("l", Value::text("8+bad"));
    inner.insert("m", Value::integer(9));

    let nested = Map::new();
    nested.insert("e", Value::integer(4));
    nested.insert("f", Value::text("5"));
    nested.insert("g", Value::Null);
    nested.insert("h", Value::Absent);
    nested.insert("i", Value::Sequence(items));
    nested.insert("j", Value::boolean(true));
    nested.insert("k", Value::Map(inner));

    let payload = Map::new();
    payload.insert("a", Value::integer(1));
    payload.insert("b", Value::text("2+3"));
    payload.insert("c", Value::text("invalid"));
    payload.insert("d", Value::Map(nested));
    payload.insert("n", Value::boolean(false));
    payload.insert("o", Value::text("10"));
    payload.insert("p", Value::integer(11));
    Value::Map(payload)
}

#[test]
fn test_sum_aggregation_over_payload() {
    // 1 + 5 + 4 + 5 + 6 + 7 + 8 + 9 + 10 + 11
    assert_eq!(to_sum(&messy_payload()).unwrap(), 66.0);
}

#[test]
fn test_concatenate_aggregation_over_payload() {
    // digits concatenate in traversal order: "154567891011"
    assert_eq!(to_number(&messy_payload()).unwrap(), 154_567_891_011.0);
}

#[test]
fn test_fractional_contributions_collapse_to_one_decimal_point() {
    let inner = Map::new();
    inner.insert("d", Value::text("7.8.9"));
    inner.insert("e", Value::text("2.0.0+1.5.5"));

    let payload = Map::new();
    payload.insert("a", Value::text("10.5.25"));
    payload.insert("b", Value::text("5.2.1+3.1.4"));
    payload.insert("c", Value::Map(inner));
    let payload = Value::Map(payload);

    // flattened: [10.525, 8.35, 7.89, 3.55]
    assert_eq!(to_sum(&payload).unwrap(), 30.315);
    // joined "10.5258.357.893.55", collapsed to "10.525835789355"
    assert_eq!(to_number(&payload).unwrap(), 10.525_835_789_355);
}

#[test]
fn test_normalize_then_report() {
    let payload = messy_payload();

    // widen the aggregate for exact bookkeeping
    let total = coerce(&payload, "big-integer").unwrap();
    assert_eq!(total, Value::big_int(154_567_891_011_i64));

    // and render the payload for the log line
    let rendered = to_text(&payload).unwrap();
    assert!(rendered.starts_with('{'));
    assert!(rendered.contains(r#""c":"invalid""#));
    // absent entries vanish from the report
    assert!(!rendered.contains("\"h\""));
}

#[test]
fn test_add_operator_over_extracted_values() {
    // both sides numeric after extraction
    assert_eq!(
        add(&Value::text("12 apples"), &Value::text("30 oranges")).unwrap(),
        Value::integer(42)
    );

    // a digitless side turns addition into concatenation
    assert_eq!(
        add(&Value::text("order #"), &Value::integer(17)).unwrap(),
        Value::text("order #17")
    );

    // structural operands combine structurally
    let merged = add(
        &coerce(&Value::text(r#"{"a": 1}"#), "map").unwrap(),
        &coerce(&Value::text(r#"{"b": 2}"#), "map").unwrap(),
    )
    .unwrap();
    assert_eq!(merged.as_map().unwrap().keys(), vec!["a", "b"]);
}

#[test]
fn test_boolean_and_sequence_paths() {
    let flags = Map::new();
    flags.insert("enabled", Value::text("  True "));
    flags.insert("dry_run", Value::text("false"));

    let enabled = coerce(&flags.get("enabled").unwrap(), "boolean").unwrap();
    assert_eq!(enabled, Value::boolean(true));

    // a map's values become a sequence in insertion order
    let as_seq = coerce(&Value::Map(flags), "sequence").unwrap();
    assert_eq!(
        as_seq.as_sequence().unwrap().snapshot(),
        vec![Value::text("  True "), Value::text("false")]
    );
}
