//! Whole-string numeric literal recognition.
//!
//! Well-formed literals (`1e3`, `0x1F`, `12.5`, ...) must be converted
//! directly: the lenient cleanup path would mangle radix prefixes like
//! `0x` into digit soup.

use once_cell::sync::Lazy;
use regex::Regex;

static EXPONENTIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+(?:\.\d+)?|\.\d+)[eE][+-]?\d+$").unwrap());
static BINARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0[bB][01]+$").unwrap());
static OCTAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0[oO][0-7]+$").unwrap());
static HEXADECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0[xX][0-9a-fA-F]+$").unwrap());
static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+\.\d+$").unwrap());
static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+$").unwrap());

/// Recognize a whole string as a numeric literal and convert it directly.
///
/// Tested in priority order: exponential, binary, octal, hexadecimal,
/// decimal (exactly one dot), integer. Returns `None` when the string is
/// not wholly a literal; the caller then falls through to lenient cleanup.
/// Signed radix literals (`-0x1F`) are not literals.
pub(crate) fn classify(text: &str) -> Option<f64> {
    if EXPONENTIAL.is_match(text) {
        return text.parse().ok();
    }
    if BINARY.is_match(text) {
        return Some(fold_radix(&text[2..], 2));
    }
    if OCTAL.is_match(text) {
        return Some(fold_radix(&text[2..], 8));
    }
    if HEXADECIMAL.is_match(text) {
        return Some(fold_radix(&text[2..], 16));
    }
    if DECIMAL.is_match(text) || INTEGER.is_match(text) {
        return text.parse().ok();
    }
    None
}

// Folding instead of `from_str_radix` keeps literals wider than the integer
// range convertible (precision degrades the way float conversion does).
fn fold_radix(digits: &str, radix: u32) -> f64 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d))
}
