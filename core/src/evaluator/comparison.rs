//! Comparison operators: `== != > >= < <=`.
//!
//! Numeric operands are promoted to their widest common kind regardless of
//! the configured numeric mode. Complex numbers and booleans only support
//! equality; mismatched kind pairings are not comparable at all.

use num_complex::Complex64;

use crate::evaluator::eval::Acc;
use crate::evaluator::{EvalError, ErrorKind, coerce};
use crate::format;
use crate::parser::{BinaryOp, Expr};
use crate::syntax::format_expr;
use crate::values::{Kind, Value};

pub(super) fn eval_comparison<'a>(
    node: &Expr<'a>,
    x: Acc<'a>,
    y: Acc<'a>,
) -> Result<Value<'a>, EvalError> {
    let Expr::Binary { op, span, op_pos, .. } = node else {
        unreachable!("comparison dispatch expects a binary node")
    };

    let result = match (x.value, y.value) {
        (Value::Bool(a), Value::Bool(b)) => compare_bool(*op, *op_pos, a, b)?,
        (Value::Str(a), Value::Str(b)) => compare_str(*op, a, b),
        (a, b) if a.kind().is_numeric() && b.kind().is_numeric() => {
            match coerce::promote(a.kind(), b.kind()) {
                Kind::Integer => compare_int(*op, a.to_int(), b.to_int()),
                Kind::Float => compare_float(*op, a.to_float(), b.to_float()),
                Kind::Complex => compare_complex(*op, *op_pos, a.to_complex(), b.to_complex())?,
                kind => unreachable!("promotion resolved to non-numeric kind {kind:?}"),
            }
        }
        _ => {
            return Err(EvalError::new(
                ErrorKind::ComparisonOperation,
                format!("expression \"{}\" is not comparable", format_expr(node)),
                span.start(),
            ));
        }
    };
    Ok(Value::Bool(result))
}

fn compare_bool(op: BinaryOp, op_pos: usize, x: bool, y: bool) -> Result<bool, EvalError> {
    match op {
        BinaryOp::Eq => Ok(x == y),
        BinaryOp::Neq => Ok(x != y),
        op => Err(EvalError::new(
            ErrorKind::UnsupportedOperator,
            format!(
                "operator \"{}\" is not supported for comparing boolean values",
                op.token()
            ),
            op_pos,
        )),
    }
}

fn compare_str(op: BinaryOp, x: &str, y: &str) -> bool {
    match op {
        BinaryOp::Eq => x == y,
        BinaryOp::Neq => x != y,
        BinaryOp::Gt => x > y,
        BinaryOp::Geq => x >= y,
        BinaryOp::Lt => x < y,
        BinaryOp::Leq => x <= y,
        op => unreachable!("non-comparison operator {op:?}"),
    }
}

fn compare_int(op: BinaryOp, x: i64, y: i64) -> bool {
    match op {
        BinaryOp::Eq => x == y,
        BinaryOp::Neq => x != y,
        BinaryOp::Gt => x > y,
        BinaryOp::Geq => x >= y,
        BinaryOp::Lt => x < y,
        BinaryOp::Leq => x <= y,
        op => unreachable!("non-comparison operator {op:?}"),
    }
}

// IEEE 754 semantics: only NaNs satisfy x != x.
fn compare_float(op: BinaryOp, x: f64, y: f64) -> bool {
    match op {
        BinaryOp::Eq => x == y,
        BinaryOp::Neq => x != y,
        BinaryOp::Gt => x > y,
        BinaryOp::Geq => x >= y,
        BinaryOp::Lt => x < y,
        BinaryOp::Leq => x <= y,
        op => unreachable!("non-comparison operator {op:?}"),
    }
}

fn compare_complex(
    op: BinaryOp,
    op_pos: usize,
    x: Complex64,
    y: Complex64,
) -> Result<bool, EvalError> {
    match op {
        BinaryOp::Eq => Ok(x == y),
        BinaryOp::Neq => Ok(x != y),
        op => Err(EvalError::new(
            ErrorKind::UnsupportedOperator,
            format!(
                "operator \"{}\" is not supported for comparing complex numbers",
                op.token()
            ),
            op_pos,
        )),
    }
}
