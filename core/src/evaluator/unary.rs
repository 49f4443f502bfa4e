//! Unary operators: `! + -`.

use crate::evaluator::eval::Acc;
use crate::evaluator::{EvalError, ErrorKind};
use crate::format;
use crate::parser::{Expr, UnaryOp};
use crate::syntax::format_expr;
use crate::values::Value;

pub(super) fn eval_unary<'a>(node: &Expr<'a>, x: Acc<'a>) -> Result<Value<'a>, EvalError> {
    let Expr::Unary { op, operand, .. } = node else {
        unreachable!("unary dispatch expects a unary node")
    };

    match op {
        UnaryOp::Not => match x.value.as_bool() {
            Some(b) => Ok(Value::Bool(!b)),
            None => Err(EvalError::new(
                ErrorKind::UnaryOperation,
                format!(
                    "could not do negation: result of \"{}\" is \"{}\" not a boolean",
                    format_expr(operand),
                    x.value
                ),
                x.pos,
            )),
        },
        // Identity on any already-evaluated value, numeric or not.
        UnaryOp::Pos => Ok(x.value),
        UnaryOp::Neg => match x.value {
            Value::Int(n) => Ok(Value::Int(n.wrapping_neg())),
            Value::Float(f) => Ok(Value::Float(-f)),
            Value::Complex(c) => Ok(Value::Complex(-c)),
            value => Err(EvalError::new(
                ErrorKind::UnaryOperation,
                format!(
                    "result of \"{}\" is \"{}\" which is not a number",
                    format_expr(operand),
                    value
                ),
                x.pos,
            )),
        },
    }
}
