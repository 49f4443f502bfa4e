//! Conversion of literal and identifier tokens into runtime values.
//!
//! The parser guarantees the lexical shape of each token, so conversion here
//! is total: a text that still fails to convert (e.g. an out-of-range digit
//! for its base) falls back to the zero value of its kind.

use num_complex::Complex64;

use crate::String;
use crate::parser::LitKind;
use crate::values::Value;

/// Convert a literal token into its runtime value.
pub fn literal_value<'a>(kind: LitKind, text: &'a str) -> Value<'a> {
    match kind {
        LitKind::Int => Value::Int(parse_int(text)),
        LitKind::Float => Value::Float(parse_float(text)),
        LitKind::Imag => Value::Complex(parse_imag(text)),
        LitKind::Str => Value::Str(trim_quotes(text)),
    }
}

/// Convert an identifier into a runtime value: boolean token spellings become
/// `Boolean`, anything else is a bare `String`.
pub fn ident_value<'a>(name: &'a str) -> Value<'a> {
    match parse_bool(name) {
        Some(b) => Value::Bool(b),
        None => Value::Str(name),
    }
}

/// The boolean token spellings accepted for identifiers.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Parse an integer literal, auto-detecting the base from its prefix:
/// `0x`/`0X` hexadecimal, `0o`/`0O` octal, `0b`/`0B` binary, a bare leading
/// zero legacy octal, decimal otherwise. `_` digit separators are ignored.
fn parse_int(text: &str) -> i64 {
    let digits: String = text.chars().filter(|&c| c != '_').collect();
    let (radix, rest) = match digits.as_bytes() {
        [b'0', b'x' | b'X', ..] => (16, &digits[2..]),
        [b'0', b'o' | b'O', ..] => (8, &digits[2..]),
        [b'0', b'b' | b'B', ..] => (2, &digits[2..]),
        [b'0', _, ..] => (8, &digits[1..]),
        _ => (10, digits.as_str()),
    };
    i64::from_str_radix(rest, radix).unwrap_or_default()
}

/// Parse a float literal. `_` digit separators are ignored.
fn parse_float(text: &str) -> f64 {
    let digits: String = text.chars().filter(|&c| c != '_').collect();
    digits.parse().unwrap_or_default()
}

/// Parse an imaginary literal (`2i`, `1.5i`) into a pure imaginary number.
fn parse_imag(text: &str) -> Complex64 {
    let digits = text.strip_suffix('i').unwrap_or(text);
    Complex64::new(0.0, parse_float(digits))
}

/// Strip the surrounding quote characters from a string literal. Quote runes
/// are trimmed from both ends; escape sequences are left untouched.
fn trim_quotes(text: &str) -> &str {
    text.trim_matches(|c| matches!(c, '\'' | '"' | '`'))
}
