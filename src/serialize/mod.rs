//! Canonical text serialization.
//!
//! Scalars serialize to their native textual form; maps and sequences get
//! a structural (JSON) serialization that is cycle-safe: collections
//! already entered on the active call path serialize as the literal
//! `"[Circular Reference]"` instead of recursing.

use serde_json::Value as JsonValue;
use tracing::trace;

use crate::core::error::{ValueError, ValueResult};
use crate::core::value::Value;

/// Marker substituted for a back-reference during structural serialization
pub const CIRCULAR_MARKER: &str = "[Circular Reference]";

// Identities of the collections on the active serialization path. Pushed
// on enter and popped on exit, so siblings sharing a substructure are not
// flagged, only actual ancestors. Lifetime is one top-level call.
type SeenSet = Vec<usize>;

/// Serialize any value to text.
///
/// - text passes through unchanged
/// - absent is the literal `undefined`, null the literal `null`
/// - maps/sequences serialize structurally (nested text is quoted)
/// - everything else uses its native textual form
///
/// Never fails on cycles. A nested big-integer has no structural form and
/// fails with [`ValueError::UnsupportedStructuralValue`], fatal for this
/// call only.
pub fn to_text(value: &Value) -> ValueResult<String> {
    match value {
        Value::Text(t) => Ok(t.as_str().to_owned()),
        Value::Absent => Ok("undefined".to_owned()),
        Value::Null => Ok("null".to_owned()),
        Value::Sequence(_) | Value::Map(_) => {
            trace!(kind = value.kind().name(), "Serializing structural value");
            let mut seen = SeenSet::new();
            let json = structural(value, &mut seen)?;
            Ok(json.unwrap_or(JsonValue::Null).to_string())
        }
        Value::Boolean(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::BigInt(b) => Ok(b.to_string()),
        Value::Token(t) => Ok(t.to_string()),
    }
}

/// Structural (nested) serialization of one value.
///
/// Returns `Ok(None)` for kinds that have no structural form but are
/// tolerated (absent, token): callers omit them from maps and render them
/// as `null` in sequences.
pub(crate) fn structural(value: &Value, seen: &mut SeenSet) -> ValueResult<Option<JsonValue>> {
    match value {
        Value::Absent | Value::Token(_) => Ok(None),
        Value::Null => Ok(Some(JsonValue::Null)),
        Value::Boolean(b) => Ok(Some(JsonValue::Bool(*b))),
        Value::Number(n) => Ok(Some(json_number(n.value()))),
        Value::Text(t) => Ok(Some(JsonValue::String(t.as_str().to_owned()))),
        Value::BigInt(_) => Err(ValueError::unsupported_structural_value(
            value.kind().name(),
        )),
        Value::Sequence(seq) => {
            let address = seq.address();
            if seen.contains(&address) {
                return Ok(Some(JsonValue::String(CIRCULAR_MARKER.to_owned())));
            }
            seen.push(address);
            let mut items = Vec::with_capacity(seq.len());
            for item in seq.snapshot() {
                items.push(structural(&item, seen)?.unwrap_or(JsonValue::Null));
            }
            seen.pop();
            Ok(Some(JsonValue::Array(items)))
        }
        Value::Map(map) => {
            let address = map.address();
            if seen.contains(&address) {
                return Ok(Some(JsonValue::String(CIRCULAR_MARKER.to_owned())));
            }
            seen.push(address);
            let mut object = serde_json::Map::new();
            for (key, entry) in map.entries() {
                if let Some(json) = structural(&entry, seen)? {
                    object.insert(key, json);
                }
            }
            seen.pop();
            Ok(Some(JsonValue::Object(object)))
        }
    }
}

// Integral numbers render without a trailing ".0"; non-finite numbers have
// no JSON form and render as null.
fn json_number(v: f64) -> JsonValue {
    const EXACT_INT: f64 = 9_007_199_254_740_992.0; // 2^53
    if v.is_finite() && v.fract() == 0.0 && v.abs() < EXACT_INT {
        JsonValue::Number((v as i64).into())
    } else {
        serde_json::Number::from_f64(v).map_or(JsonValue::Null, JsonValue::Number)
    }
}
