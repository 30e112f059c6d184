//! Lenient numeric extraction from text fragments.
//!
//! The extractor tolerates malformed decimal notation (`"10.5.25"`) and
//! inline addition (`"5+3"`), and never errors: absence of digits is a
//! sentinel, not a failure, so callers decide at their own boundary
//! whether a missing number is invalid.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::numeric::classifier::classify;

// parseFloat-style grammar: optional sign, digits with an optional dot
// (or a leading dot), optional exponent. Anchored at the start; trailing
// garbage is ignored.
static LEADING_FLOAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap());

/// Result of extracting numeric content from a text fragment.
///
/// `NoDigits` is a dedicated variant so it can never be conflated with an
/// extracted value of `0.0`; callers raise different errors for each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericOutcome {
    /// The fragment contained no digit characters at all
    NoDigits,
    /// The extracted (possibly NaN) numeric value
    Number(f64),
}

impl NumericOutcome {
    /// Check if this is the no-digits sentinel
    #[inline]
    #[must_use]
    pub fn is_no_digits(&self) -> bool {
        matches!(self, Self::NoDigits)
    }

    /// Get the extracted number, if any
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::NoDigits => None,
            Self::Number(v) => Some(*v),
        }
    }
}

/// Extract numeric content from a text fragment.
///
/// 1. Well-formed literals short-circuit through the classifier.
/// 2. A fragment with no digit characters is [`NumericOutcome::NoDigits`].
/// 3. Otherwise every character that is not a digit, dot, or `+` is
///    deleted, one trailing and one leading `+` are stripped, and the
///    remainder is split on `+` into segments. Each segment is
///    dot-collapsed (first dot kept, later dots deleted) and parsed by its
///    leading float; segment sums are arithmetic. A segment that still
///    fails to parse contributes NaN, so the whole extraction goes NaN
///    rather than erroring.
///
/// ```
/// use lenient_value::NumericOutcome;
/// use lenient_value::numeric::extract;
///
/// assert_eq!(extract("around 10.5.25 meters"), NumericOutcome::Number(10.525));
/// assert_eq!(extract("5.2.1+3.1.4"), NumericOutcome::Number(8.35));
/// assert_eq!(extract("no digits here"), NumericOutcome::NoDigits);
/// ```
pub fn extract(text: &str) -> NumericOutcome {
    if let Some(value) = classify(text) {
        return NumericOutcome::Number(value);
    }
    if !text.bytes().any(|b| b.is_ascii_digit()) {
        return NumericOutcome::NoDigits;
    }

    let mut cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '+')
        .collect();
    if cleaned.ends_with('+') {
        cleaned.pop();
    }
    if cleaned.starts_with('+') {
        cleaned.remove(0);
    }

    if !cleaned.contains('+') {
        let segment = collapse_dots(&cleaned);
        return NumericOutcome::Number(parse_leading_float(&segment).unwrap_or(f64::NAN));
    }

    let sum = cleaned
        .split('+')
        .map(|segment| {
            let segment = collapse_dots(segment);
            parse_leading_float(&segment).unwrap_or(f64::NAN)
        })
        .sum();
    NumericOutcome::Number(sum)
}

/// Collapse a multi-dot segment down to its first decimal point.
///
/// Everything up to and including the first dot is kept; every dot in the
/// remainder is deleted: `"10.5.25"` becomes `"10.525"`. A segment with no
/// dot is returned untouched.
pub(crate) fn collapse_dots(segment: &str) -> String {
    match segment.find('.') {
        None => segment.to_string(),
        Some(index) => {
            let (head, tail) = segment.split_at(index + 1);
            let mut collapsed = String::with_capacity(segment.len());
            collapsed.push_str(head);
            collapsed.extend(tail.chars().filter(|c| *c != '.'));
            collapsed
        }
    }
}

/// Parse the leading float of a string, `parseFloat`-style.
///
/// Skips leading whitespace, stops at the first character that cannot
/// extend a valid float, and returns `None` when nothing numeric leads
/// the input.
pub(crate) fn parse_leading_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    LEADING_FLOAT
        .find(trimmed)
        .and_then(|m| m.as_str().parse().ok())
}
