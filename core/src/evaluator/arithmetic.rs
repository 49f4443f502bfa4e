//! Arithmetic operators: `+ - * / %`.

use num_complex::Complex64;

use crate::evaluator::eval::Acc;
use crate::evaluator::{EvalError, EvalOptions, ErrorKind, coerce};
use crate::format;
use crate::parser::{BinaryOp, Expr};
use crate::syntax::format_expr;
use crate::values::{Kind, Value};

pub(super) fn eval_arithmetic<'a>(
    options: &EvalOptions,
    node: &Expr<'a>,
    x: Acc<'a>,
    y: Acc<'a>,
) -> Result<Value<'a>, EvalError> {
    let Expr::Binary {
        op, left, right, op_pos, ..
    } = node
    else {
        unreachable!("arithmetic dispatch expects a binary node")
    };

    if !x.value.kind().is_numeric() {
        return Err(non_numeric_error(left, x));
    }
    if !y.value.kind().is_numeric() {
        return Err(non_numeric_error(right, y));
    }

    match coerce::resolve(options.numeric_mode, x.value.kind(), y.value.kind()) {
        Kind::Integer => {
            calculate_int(options, *op, x.value.to_int(), y.value.to_int(), y.pos)
        }
        Kind::Float => Ok(calculate_float(*op, x.value.to_float(), y.value.to_float())),
        Kind::Complex => calculate_complex(*op, *op_pos, x.value.to_complex(), y.value.to_complex()),
        kind => unreachable!("coercion resolved to non-numeric kind {kind:?}"),
    }
}

fn non_numeric_error(operand: &Expr<'_>, acc: Acc<'_>) -> EvalError {
    EvalError::new(
        ErrorKind::ArithmeticOperation,
        format!(
            "result of \"{}\" is \"{}\" which is not a number",
            format_expr(operand),
            acc.value
        ),
        acc.pos,
    )
}

fn calculate_int<'a>(
    options: &EvalOptions,
    op: BinaryOp,
    x: i64,
    y: i64,
    y_pos: usize,
) -> Result<Value<'a>, EvalError> {
    let value = match op {
        BinaryOp::Add => x.wrapping_add(y),
        BinaryOp::Sub => x.wrapping_sub(y),
        BinaryOp::Mul => x.wrapping_mul(y),
        BinaryOp::Div => {
            if y == 0 {
                if options.allow_integer_divide_by_zero {
                    return Ok(Value::Int(0));
                }
                return Err(divide_by_zero_error("division", y_pos));
            }
            // wrapping_div covers i64::MIN / -1
            x.wrapping_div(y)
        }
        BinaryOp::Rem => {
            if y == 0 {
                if options.allow_integer_divide_by_zero {
                    return Ok(Value::Int(0));
                }
                return Err(divide_by_zero_error("remainder", y_pos));
            }
            x.wrapping_rem(y)
        }
        op => unreachable!("non-arithmetic operator {op:?}"),
    };
    Ok(Value::Int(value))
}

fn divide_by_zero_error(what: &str, pos: usize) -> EvalError {
    EvalError::new(
        ErrorKind::IntegerDividedByZero,
        format!("integer {what} by zero, allow_integer_divide_by_zero is disabled"),
        pos,
    )
}

fn calculate_float<'a>(op: BinaryOp, x: f64, y: f64) -> Value<'a> {
    // IEEE 754 throughout; division by zero yields inf/nan, never an error.
    let value = match op {
        BinaryOp::Add => x + y,
        BinaryOp::Sub => x - y,
        BinaryOp::Mul => x * y,
        BinaryOp::Div => x / y,
        BinaryOp::Rem => x % y,
        op => unreachable!("non-arithmetic operator {op:?}"),
    };
    Value::Float(value)
}

fn calculate_complex<'a>(
    op: BinaryOp,
    op_pos: usize,
    x: Complex64,
    y: Complex64,
) -> Result<Value<'a>, EvalError> {
    let value = match op {
        BinaryOp::Add => x + y,
        BinaryOp::Sub => x - y,
        BinaryOp::Mul => x * y,
        BinaryOp::Div => x / y,
        BinaryOp::Rem => {
            return Err(EvalError::new(
                ErrorKind::ArithmeticOperation,
                format!(
                    "operator \"{}\" is not supported to do arithmetic on complex number",
                    op.token()
                ),
                op_pos,
            ));
        }
        op => unreachable!("non-arithmetic operator {op:?}"),
    };
    Ok(Value::Complex(value))
}
