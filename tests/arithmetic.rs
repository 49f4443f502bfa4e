//! End-to-end arithmetic through the string-level API.

use pretty_assertions::assert_eq;
use xpr::{AnyValue, Complex64, ErrorKind, eval_any, eval_float, eval_int};

#[test]
fn integer_chains_stay_integers() {
    assert_eq!(eval_any("4 - 2").unwrap(), AnyValue::Int(2));
    assert_eq!(eval_any("4 * 2").unwrap(), AnyValue::Int(8));
    assert_eq!(eval_any("4 / 2").unwrap(), AnyValue::Int(2));
    assert_eq!(eval_any("(2 + 2) * 10").unwrap(), AnyValue::Int(40));
    assert_eq!(eval_any("(2 * 2) * (8 + 2) * 2").unwrap(), AnyValue::Int(80));
    assert_eq!(eval_any("1 + 2 + 3 + 4 + 5").unwrap(), AnyValue::Int(15));
    assert_eq!(eval_any("0 / 10").unwrap(), AnyValue::Int(0));
    assert_eq!(eval_any("10 * -5").unwrap(), AnyValue::Int(-50));
    assert_eq!(eval_any("10 * (-5-5)").unwrap(), AnyValue::Int(-100));
    assert_eq!(eval_any("10 + (10 * -10)").unwrap(), AnyValue::Int(-90));
    assert_eq!(eval_any("10 + ((-5 * -10) * 10)").unwrap(), AnyValue::Int(510));
}

#[test]
fn floats_infect_the_result_kind() {
    assert_eq!(eval_any("2.5").unwrap(), AnyValue::Float(2.5));
    assert_eq!(
        eval_any("((2 * 2) * (8 + 2) * 2) + 1.5").unwrap(),
        AnyValue::Float(81.5)
    );
    assert_eq!(eval_any("10 * -5 + (-5.5)").unwrap(), AnyValue::Float(-55.5));
    assert_eq!(eval_any("2.0 + 2").unwrap(), AnyValue::Float(4.0));
}

#[test]
fn complex_arithmetic() {
    assert_eq!(
        eval_any("(10+5i) + (10+7i)").unwrap(),
        AnyValue::Complex(Complex64::new(20.0, 12.0))
    );
    assert_eq!(
        eval_any("(2+2i) / (2+2i)").unwrap(),
        AnyValue::Complex(Complex64::new(1.0, 0.0))
    );
}

#[test]
fn complex_remainder_is_an_arithmetic_error() {
    let err = eval_any("(1+1i) % (2+1i)").unwrap_err();
    assert_eq!(
        err.as_eval().expect("evaluation error").kind,
        ErrorKind::ArithmeticOperation
    );
}

#[test]
fn booleans_do_not_participate_in_arithmetic() {
    let err = eval_any("1 + 1 + (4 == 2)").unwrap_err();
    assert_eq!(
        err.as_eval().expect("evaluation error").kind,
        ErrorKind::ArithmeticOperation
    );
}

#[test]
fn typed_wrappers_narrow() {
    assert_eq!(eval_int("((2 + 2) * 4 / 4) * 10 + 2").unwrap(), 42);
    assert_eq!(eval_int("15 % 4").unwrap(), 3);
    assert_eq!(eval_float("(2 + 2) * 4 / 4").unwrap(), 4.0);
    assert_eq!(eval_float("10.0 % 2.6").unwrap(), 10.0 % 2.6);
}
