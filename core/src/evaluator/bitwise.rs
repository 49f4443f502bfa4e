//! Bitwise operators: `& | ^ &^ << >>`, defined only over integers.

use crate::evaluator::eval::Acc;
use crate::evaluator::{EvalError, EvalOptions, ErrorKind, NumericMode};
use crate::format;
use crate::parser::{BinaryOp, Expr};
use crate::syntax::format_expr;
use crate::values::Value;

pub(super) fn eval_bitwise<'a>(
    options: &EvalOptions,
    node: &Expr<'a>,
    x: Acc<'a>,
    y: Acc<'a>,
) -> Result<Value<'a>, EvalError> {
    let Expr::Binary {
        op, left, right, span, ..
    } = node
    else {
        unreachable!("bitwise dispatch expects a binary node")
    };

    // Bitwise operators are categorically unavailable when the numeric mode
    // forces every operand to float or complex.
    match options.numeric_mode {
        NumericMode::Float | NumericMode::Complex => {
            return Err(EvalError::new(
                ErrorKind::BitwiseOperation,
                format!(
                    "bitwise operation \"{}\" is not allowed when numeric mode is {}",
                    format_expr(node),
                    options.numeric_mode
                ),
                span.start(),
            ));
        }
        NumericMode::Auto | NumericMode::Int => {}
    }

    let x_int = exact_int(left, x)?;
    let y_int = exact_int(right, y)?;

    let value = match op {
        BinaryOp::And => x_int & y_int,
        BinaryOp::Or => x_int | y_int,
        BinaryOp::Xor => x_int ^ y_int,
        BinaryOp::AndNot => x_int & !y_int,
        BinaryOp::Shl => shift_left(x_int, y_int, right, y)?,
        BinaryOp::Shr => shift_right(x_int, y_int, right, y)?,
        op => unreachable!("non-bitwise operator {op:?}"),
    };
    Ok(Value::Int(value))
}

/// An operand is usable only if it is exactly integer-valued: integers always
/// pass, floats pass when truncation loses nothing, every other kind fails.
fn exact_int(operand: &Expr<'_>, acc: Acc<'_>) -> Result<i64, EvalError> {
    match acc.value {
        Value::Int(n) => Ok(n),
        Value::Float(f) if (f as i64) as f64 == f => Ok(f as i64),
        _ => Err(non_integer_error(operand, acc)),
    }
}

fn non_integer_error(operand: &Expr<'_>, acc: Acc<'_>) -> EvalError {
    EvalError::new(
        ErrorKind::BitwiseOperation,
        format!(
            "result value of \"{}\" is \"{}\" which is not an integer",
            format_expr(operand),
            acc.value
        ),
        operand.pos(),
    )
}

// Shift counts follow two's-complement conventions for 64-bit integers: a
// count past the width shifts everything out instead of wrapping around, and
// a negative count is an error.

fn shift_left(x: i64, count: i64, operand: &Expr<'_>, acc: Acc<'_>) -> Result<i64, EvalError> {
    if count < 0 {
        return Err(negative_shift_error(operand, acc));
    }
    if count >= 64 {
        return Ok(0);
    }
    Ok(x << count)
}

fn shift_right(x: i64, count: i64, operand: &Expr<'_>, acc: Acc<'_>) -> Result<i64, EvalError> {
    if count < 0 {
        return Err(negative_shift_error(operand, acc));
    }
    if count >= 64 {
        // Arithmetic shift: the sign bit fills the result.
        return Ok(x >> 63);
    }
    Ok(x >> count)
}

fn negative_shift_error(operand: &Expr<'_>, acc: Acc<'_>) -> EvalError {
    EvalError::new(
        ErrorKind::BitwiseOperation,
        format!(
            "result value of \"{}\" is \"{}\" which is a negative shift count",
            format_expr(operand),
            acc.value
        ),
        operand.pos(),
    )
}
