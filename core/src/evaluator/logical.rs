//! Logical operators: `&& ||`.
//!
//! Both operands are evaluated before this module runs, so there is no
//! short-circuiting: only error propagation in the evaluator skips the right
//! subtree, never the left operand's truth value.

use crate::evaluator::eval::Acc;
use crate::evaluator::{EvalError, ErrorKind};
use crate::format;
use crate::parser::{BinaryOp, Expr};
use crate::syntax::format_expr;
use crate::values::Value;

pub(super) fn eval_logical<'a>(
    node: &Expr<'a>,
    x: Acc<'a>,
    y: Acc<'a>,
) -> Result<Value<'a>, EvalError> {
    let Expr::Binary { op, left, right, .. } = node else {
        unreachable!("logical dispatch expects a binary node")
    };

    let Some(a) = x.value.as_bool() else {
        return Err(non_boolean_error(left, x));
    };
    let Some(b) = y.value.as_bool() else {
        return Err(non_boolean_error(right, y));
    };

    let value = match op {
        BinaryOp::LogicalAnd => a && b,
        BinaryOp::LogicalOr => a || b,
        op => unreachable!("non-logical operator {op:?}"),
    };
    Ok(Value::Bool(value))
}

fn non_boolean_error(operand: &Expr<'_>, acc: Acc<'_>) -> EvalError {
    EvalError::new(
        ErrorKind::LogicalOperation,
        format!(
            "result of \"{}\" is \"{}\" which is not a boolean",
            format_expr(operand),
            acc.value
        ),
        acc.pos,
    )
}
