//! String-level convenience API.
//!
//! Each function parses the given source, evaluates it with the numeric mode
//! that fits the requested result type, and narrows the value. Callers that
//! need custom options or want to reuse a parsed tree should drop down to
//! [`crate::parser::parse`] and [`crate::evaluator::Evaluator`] directly.
//!
//! # Example
//!
//! ```
//! use xpr_core::api;
//!
//! assert_eq!(api::eval_int("(2 + 2) * 4 / 4").unwrap(), 4);
//! assert_eq!(api::eval_float("10 * -5 + (-5.5)").unwrap(), -55.5);
//! assert_eq!(api::eval_bool("1 < 2 && 3 > 2").unwrap(), true);
//! ```

use core::fmt;

use bumpalo::Bump;
use num_complex::Complex64;

use crate::errors::Error;
use crate::evaluator::{EvalError, EvalOptions, Evaluator, ErrorKind, NumericMode};
use crate::parser;
use crate::values::{Kind, Value, value::format_complex};
use crate::{String, ToString, format};

/// An owned evaluation result, detached from the parse arena.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Complex(Complex64),
    Str(String),
}

impl AnyValue {
    pub fn kind(&self) -> Kind {
        match self {
            AnyValue::Bool(_) => Kind::Boolean,
            AnyValue::Int(_) => Kind::Integer,
            AnyValue::Float(_) => Kind::Float,
            AnyValue::Complex(_) => Kind::Complex,
            AnyValue::Str(_) => Kind::String,
        }
    }
}

impl From<Value<'_>> for AnyValue {
    fn from(value: Value<'_>) -> Self {
        match value {
            Value::Bool(b) => AnyValue::Bool(b),
            Value::Int(n) => AnyValue::Int(n),
            Value::Float(f) => AnyValue::Float(f),
            Value::Complex(c) => AnyValue::Complex(c),
            Value::Str(s) => AnyValue::Str(s.to_string()),
        }
    }
}

impl fmt::Display for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyValue::Bool(b) => write!(f, "{b}"),
            AnyValue::Int(n) => write!(f, "{n}"),
            AnyValue::Float(x) => write!(f, "{x}"),
            AnyValue::Complex(c) => format_complex(f, *c),
            AnyValue::Str(s) => f.write_str(s),
        }
    }
}

/// Evaluate `source` and return whatever kind it produces. e.g:
///   - `"1 < 2"` -> `true`
///   - `"2 + 2"` -> `4`
///   - `"2.2 + 2"` -> `4.2`
///   - `"(2+1i) + (2+2i)"` -> `(4+3i)`
///   - `"\"abc\""` -> `abc`
pub fn eval_any(source: &str) -> Result<AnyValue, Error> {
    let value = eval_with_options(source, EvalOptions::default())?;
    Ok(value)
}

/// Evaluate `source` with explicit options and return the owned result.
pub fn eval_with_options(source: &str, options: EvalOptions) -> Result<AnyValue, Error> {
    tracing::debug!(%source, mode = %options.numeric_mode, "evaluating expression");
    let arena = Bump::new();
    let parsed = parser::parse(&arena, source)?;
    let value = Evaluator::new(options).eval(parsed.expr)?;
    Ok(AnyValue::from(value))
}

/// Evaluate `source` into a boolean. e.g:
///   - `"1 < 2"` -> `true`
///   - `"true && !false"` -> `true`
///
/// A non-boolean result is an [`ErrorKind::ValueTypeMismatch`] error.
pub fn eval_bool(source: &str) -> Result<bool, Error> {
    match eval_with_options(source, EvalOptions::default())? {
        AnyValue::Bool(b) => Ok(b),
        value => Err(mismatch("boolean", &value)),
    }
}

/// Evaluate `source` into an integer, narrowing floats and complex numbers
/// per the usual truncation rules. Integer division by zero yields 0; use
/// [`eval_int_strict`] to make it an error. e.g:
///   - `"2 + 2"` -> `4`
///   - `"2.2 + 2"` -> `4`
///   - `"4 << 10"` -> `4096`
pub fn eval_int(source: &str) -> Result<i64, Error> {
    eval_int_with(source, true)
}

/// Like [`eval_int`], but integer division by zero is an
/// [`ErrorKind::IntegerDividedByZero`] error.
pub fn eval_int_strict(source: &str) -> Result<i64, Error> {
    eval_int_with(source, false)
}

fn eval_int_with(source: &str, allow_integer_divide_by_zero: bool) -> Result<i64, Error> {
    let options = EvalOptions {
        numeric_mode: NumericMode::Int,
        allow_integer_divide_by_zero,
    };
    match eval_with_options(source, options)? {
        AnyValue::Int(n) => Ok(n),
        AnyValue::Float(f) => Ok(f as i64),
        AnyValue::Complex(c) => Ok(c.re as i64),
        value => Err(mismatch("integer", &value)),
    }
}

/// Evaluate `source` into a float. e.g:
///   - `"2 + 2"` -> `4.0`
///   - `"10.0 % 2.6"` -> `2.2`
pub fn eval_float(source: &str) -> Result<f64, Error> {
    let options = EvalOptions {
        numeric_mode: NumericMode::Float,
        ..EvalOptions::default()
    };
    match eval_with_options(source, options)? {
        AnyValue::Float(f) => Ok(f),
        AnyValue::Int(n) => Ok(n as f64),
        AnyValue::Complex(c) => Ok(c.re),
        value => Err(mismatch("float", &value)),
    }
}

/// Evaluate `source` into a complex number. e.g:
///   - `"(2+1i) + (2+2i)"` -> `4+3i`
///   - `"2 + 2"` -> `4+0i`
pub fn eval_complex(source: &str) -> Result<Complex64, Error> {
    let options = EvalOptions {
        numeric_mode: NumericMode::Complex,
        ..EvalOptions::default()
    };
    match eval_with_options(source, options)? {
        AnyValue::Complex(c) => Ok(c),
        AnyValue::Float(f) => Ok(Complex64::new(f, 0.0)),
        AnyValue::Int(n) => Ok(Complex64::new(n as f64, 0.0)),
        value => Err(mismatch("complex", &value)),
    }
}

fn mismatch(expected: &str, value: &AnyValue) -> Error {
    Error::Eval(EvalError::new(
        ErrorKind::ValueTypeMismatch,
        format!("expected {expected} result, got {} \"{value}\"", value.kind()),
        0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_eval_any_keeps_kinds() {
        assert_eq!(eval_any("2").unwrap(), AnyValue::Int(2));
        assert_eq!(eval_any("\"2\"").unwrap(), AnyValue::Str("2".into()));
        assert_eq!(eval_any("2.5").unwrap(), AnyValue::Float(2.5));
        assert_eq!(eval_any("4 == 2").unwrap(), AnyValue::Bool(false));
        assert_eq!(eval_any("(2 + 2) * 10").unwrap(), AnyValue::Int(40));
        assert_eq!(
            eval_any("(10+5i) + (10+7i)").unwrap(),
            AnyValue::Complex(Complex64::new(20.0, 12.0))
        );
    }

    #[test]
    fn test_eval_any_reports_category() {
        let err = eval_any("2 && 2").unwrap_err();
        assert_eq!(err.as_eval().unwrap().kind, ErrorKind::LogicalOperation);
        let err = eval_any("1 + 1 + (4 == 2)").unwrap_err();
        assert_eq!(err.as_eval().unwrap().kind, ErrorKind::ArithmeticOperation);
    }

    #[test]
    fn test_eval_bool() {
        assert_eq!(eval_bool("2 < 1 && (1 + 1) > 1").unwrap(), false);
        assert_eq!(eval_bool("(1 < 2 && 3 > 4) || 1 == 1").unwrap(), true);
        let err = eval_bool("1").unwrap_err();
        assert_eq!(err.as_eval().unwrap().kind, ErrorKind::ValueTypeMismatch);
    }

    #[test]
    fn test_eval_int_narrowing_and_modes() {
        assert_eq!(eval_int("1 + 2 + 3 + 4 + 5").unwrap(), 15);
        assert_eq!(eval_int("((2 + 2) * 4 / 4) * 10 + 4.234567").unwrap(), 44);
        assert_eq!(eval_int("2.2 + 2").unwrap(), 4);
        assert_eq!(eval_int("10 / 0").unwrap(), 0);
        let err = eval_int_strict("10 / 0").unwrap_err();
        assert_eq!(
            err.as_eval().unwrap().kind,
            ErrorKind::IntegerDividedByZero
        );
    }

    #[test]
    fn test_eval_float() {
        assert_eq!(eval_float("2 + 2").unwrap(), 4.0);
        assert_eq!(eval_float("10 * -5 + (-5.5)").unwrap(), -55.5);
    }

    #[test]
    fn test_eval_complex() {
        assert_eq!(
            eval_complex("(2.2+1i) + 2").unwrap(),
            Complex64::new(4.2, 1.0)
        );
        assert_eq!(eval_complex("2 + 2").unwrap(), Complex64::new(4.0, 0.0));
    }

    #[test]
    fn test_parse_error_surfaces() {
        assert!(matches!(eval_any("(1 * 2))"), Err(Error::Parse(_))));
        assert!(matches!(eval_any("1 +"), Err(Error::Parse(_))));
    }
}
