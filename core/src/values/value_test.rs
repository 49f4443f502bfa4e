//! Unit tests for value kinds and conversions.

use num_complex::Complex64;
use pretty_assertions::assert_eq;

use crate::values::{Kind, Value};

#[test]
fn test_kind_is_numeric() {
    assert!(Kind::Integer.is_numeric());
    assert!(Kind::Float.is_numeric());
    assert!(Kind::Complex.is_numeric());
    assert!(!Kind::Boolean.is_numeric());
    assert!(!Kind::String.is_numeric());
    assert!(!Kind::Illegal.is_numeric());
}

#[test]
fn test_kind_of_value() {
    assert_eq!(Value::Bool(true).kind(), Kind::Boolean);
    assert_eq!(Value::Int(1).kind(), Kind::Integer);
    assert_eq!(Value::Float(1.5).kind(), Kind::Float);
    assert_eq!(Value::Complex(Complex64::new(1.0, 2.0)).kind(), Kind::Complex);
    assert_eq!(Value::Str("abc").kind(), Kind::String);
}

#[test]
fn test_accessors_match_kind() {
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Int(7).as_int(), Some(7));
    assert_eq!(Value::Float(2.5).as_float(), Some(2.5));
    assert_eq!(Value::Str("x").as_str(), Some("x"));
    assert_eq!(Value::Int(7).as_bool(), None);
    assert_eq!(Value::Bool(true).as_int(), None);
}

#[test]
fn test_widening_is_lossless() {
    assert_eq!(Value::Int(3).to_float(), 3.0);
    assert_eq!(Value::Int(3).to_complex(), Complex64::new(3.0, 0.0));
    assert_eq!(Value::Float(2.5).to_complex(), Complex64::new(2.5, 0.0));
}

#[test]
fn test_narrowing_truncates_toward_zero() {
    assert_eq!(Value::Float(2.9).to_int(), 2);
    assert_eq!(Value::Float(-2.9).to_int(), -2);
    assert_eq!(Value::Complex(Complex64::new(1.7, 9.0)).to_int(), 1);
    assert_eq!(Value::Complex(Complex64::new(1.7, 9.0)).to_float(), 1.7);
}

#[test]
fn test_display() {
    assert_eq!(Value::Bool(false).to_string(), "false");
    assert_eq!(Value::Int(42).to_string(), "42");
    assert_eq!(Value::Float(4.0).to_string(), "4");
    assert_eq!(Value::Float(0.4).to_string(), "0.4");
    assert_eq!(Value::Complex(Complex64::new(1.0, 2.0)).to_string(), "(1+2i)");
    assert_eq!(
        Value::Complex(Complex64::new(0.0, -1.0)).to_string(),
        "(0-1i)"
    );
    assert_eq!(Value::Str("abc").to_string(), "abc");
}
