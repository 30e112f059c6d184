//! Integration test: the coercion dispatch matrix
//!
//! Walks every meaningful source-kind/target-kind pair end to end, plus
//! the failure modes the dispatcher promises for unlisted pairs.

use lenient_value::{Map, Sequence, Value, ValueError, coerce, to_text};
use pretty_assertions::assert_eq;

fn sample_map() -> Value {
    let map = Map::new();
    map.insert("a", Value::integer(1));
    map.insert("b", Value::text("two"));
    Value::Map(map)
}

#[test]
fn test_text_target_serializes_everything() {
    assert_eq!(coerce(&Value::text("hi"), "text").unwrap(), Value::text("hi"));
    assert_eq!(coerce(&Value::Null, "text").unwrap(), Value::text("null"));
    assert_eq!(
        coerce(&Value::Absent, "text").unwrap(),
        Value::text("undefined")
    );
    assert_eq!(
        coerce(&Value::boolean(false), "text").unwrap(),
        Value::text("false")
    );
    assert_eq!(
        coerce(&Value::number(2.5), "text").unwrap(),
        Value::text("2.5")
    );
    assert_eq!(
        coerce(&Value::big_int(42), "text").unwrap(),
        Value::text("42")
    );
    assert_eq!(
        coerce(&sample_map(), "text").unwrap(),
        Value::text(r#"{"a":1,"b":"two"}"#)
    );
}

#[test]
fn test_text_coercion_is_idempotent() {
    for value in [
        Value::Null,
        Value::Absent,
        Value::boolean(true),
        Value::integer(42),
        Value::number(2.5),
        Value::text("already text"),
        Value::big_int(99),
        Value::token(),
    ] {
        let once = coerce(&value, "text").unwrap();
        let twice = coerce(&once, "text").unwrap();
        assert_eq!(once, twice, "for {value:?}");
    }
}

#[test]
fn test_number_target() {
    assert_eq!(
        coerce(&Value::text("10.5.25"), "number").unwrap(),
        Value::number(10.525)
    );
    assert_eq!(
        coerce(&Value::text("5.2.1+3.1.4"), "number").unwrap(),
        Value::number(8.35)
    );
    assert_eq!(
        coerce(&Value::integer(7), "number").unwrap(),
        Value::integer(7)
    );

    // containers use concatenate aggregation
    let seq = Sequence::from_vec(vec![Value::number(10.5), Value::integer(25)]);
    assert_eq!(
        coerce(&Value::Sequence(seq), "number").unwrap(),
        Value::number(10.525)
    );
}

#[test]
fn test_number_target_failures() {
    assert_eq!(
        coerce(&Value::text("no numerals"), "number").unwrap_err().code(),
        "VALUE_NO_DIGITS"
    );
    assert_eq!(
        coerce(&Value::number(f64::NAN), "number").unwrap_err(),
        ValueError::NotANumber
    );
    for empty in [Value::map_empty(), Value::sequence_empty(), Value::Null] {
        assert_eq!(
            coerce(&empty, "number").unwrap_err().code(),
            "VALUE_EMPTY_CONTAINER",
            "for {empty:?}"
        );
    }
    assert_eq!(
        coerce(&Value::boolean(true), "number").unwrap_err().code(),
        "VALUE_UNSUPPORTED_COERCION"
    );
}

#[test]
fn test_unsupported_errors_name_both_kinds() {
    let err = coerce(&Value::boolean(true), "number").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("boolean"), "{msg}");
    assert!(msg.contains("number"), "{msg}");
}

#[test]
fn test_big_int_round_trips_through_number() {
    let big = coerce(&Value::number(42.0), "big-integer").unwrap();
    assert_eq!(big, Value::big_int(42));

    let back = coerce(&big, "number").unwrap();
    assert_eq!(back, Value::integer(42));
}

#[test]
fn test_big_int_failures() {
    assert_eq!(
        coerce(&Value::number(42.5), "big-integer").unwrap_err().code(),
        "VALUE_NON_INTEGER"
    );
    assert_eq!(
        coerce(&Value::boolean(true), "big-integer")
            .unwrap_err()
            .code(),
        "VALUE_UNSUPPORTED_COERCION"
    );
}

#[test]
fn test_collection_targets_preserve_identity() {
    let seq = Value::sequence_empty();
    assert_eq!(coerce(&seq, "sequence").unwrap(), seq);

    let map = sample_map();
    assert_eq!(coerce(&map, "map").unwrap(), map);
}

#[test]
fn test_map_from_structured_literal_keeps_key_order() {
    let out = coerce(&Value::text(r#"{"z": 1, "a": 2}"#), "map").unwrap();
    assert_eq!(out.as_map().unwrap().keys(), vec!["z", "a"]);
}

#[test]
fn test_map_fallback_indexes_characters() {
    let out = coerce(&Value::text("not json"), "map").unwrap();
    let map = out.as_map().unwrap();
    assert_eq!(map.len(), 8);
    assert_eq!(map.get("0"), Some(Value::text("n")));
    assert_eq!(map.get("3"), Some(Value::text(" ")));
}

#[test]
fn test_cycle_safe_serialization_end_to_end() {
    let map = Map::new();
    map.insert("label", Value::text("root"));
    map.insert("this", Value::Map(map.clone()));

    let text = to_text(&Value::Map(map.clone())).unwrap();
    assert_eq!(text, r#"{"label":"root","this":"[Circular Reference]"}"#);

    // the same structure through the dispatcher
    let coerced = coerce(&Value::Map(map), "text").unwrap();
    assert_eq!(coerced, Value::text(text));
}

#[test]
fn test_every_target_tag_alias_dispatches() {
    let value = Value::integer(3);
    for tag in ["text", "string", "str"] {
        assert!(coerce(&value, tag).unwrap().is_text());
    }
    for tag in ["number", "num", "float"] {
        assert!(coerce(&value, tag).unwrap().is_number());
    }
    for tag in ["big-integer", "bigint", "big_integer"] {
        assert!(coerce(&value, tag).unwrap().is_big_int());
    }
    for tag in ["sequence", "seq", "array", "list"] {
        assert!(coerce(&value, tag).unwrap().is_sequence());
    }
    for tag in ["map", "object", "dict"] {
        assert!(coerce(&value, tag).unwrap().is_map());
    }
}
