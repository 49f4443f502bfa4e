//! Core evaluation logic.

use crate::evaluator::{
    EvalError, EvalOptions, arithmetic, bitwise, comparison, logical, unary,
};
use crate::parser::{Expr, OpFamily};
use crate::syntax::literal;
use crate::values::Value;

/// Transient state produced by evaluating one subtree: the resulting value
/// and the byte offset of the node that produced it. A fresh accumulator is
/// returned per recursive step; sibling subtrees never share state, so
/// independent evaluations of the same tree are safe to run concurrently.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Acc<'a> {
    pub value: Value<'a>,
    pub pos: usize,
}

/// Recursive tree-walking evaluator for plain expressions.
pub struct Evaluator {
    options: EvalOptions,
}

impl Evaluator {
    /// Create a new evaluator. If no specific behavior is needed,
    /// `EvalOptions::default()` gives auto numeric mode with integer
    /// division by zero allowed.
    pub fn new(options: EvalOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EvalOptions {
        &self.options
    }

    /// Evaluate an expression tree to a single value.
    ///
    /// Children are evaluated left to right; the first error aborts the walk
    /// and is returned unchanged, discarding partial results.
    pub fn eval<'a>(&self, expr: &Expr<'a>) -> Result<Value<'a>, EvalError> {
        tracing::trace!(options = ?self.options, "evaluating expression tree");
        self.eval_expr(expr).map(|acc| acc.value)
    }

    fn eval_expr<'a>(&self, expr: &Expr<'a>) -> Result<Acc<'a>, EvalError> {
        match expr {
            Expr::Literal { kind, text, span } => Ok(Acc {
                value: literal::literal_value(*kind, *text),
                pos: span.start(),
            }),
            Expr::Ident { name, span } => Ok(Acc {
                value: literal::ident_value(*name),
                pos: span.start(),
            }),
            // A parenthesized node adds nothing; its inner accumulator (and
            // position) flows through unchanged.
            Expr::Paren { inner, .. } => self.eval_expr(inner),
            Expr::Unary { operand, span, .. } => {
                let x = self.eval_expr(operand)?;
                let value = unary::eval_unary(expr, x)?;
                Ok(Acc {
                    value,
                    pos: span.start(),
                })
            }
            Expr::Binary {
                op,
                left,
                right,
                span,
                ..
            } => {
                // Left to right; an error in the left subtree suppresses the
                // right subtree entirely.
                let x = self.eval_expr(left)?;
                let y = self.eval_expr(right)?;

                let value = match op.family() {
                    OpFamily::Arithmetic => {
                        arithmetic::eval_arithmetic(&self.options, expr, x, y)
                    }
                    OpFamily::Bitwise => bitwise::eval_bitwise(&self.options, expr, x, y),
                    OpFamily::Comparison => comparison::eval_comparison(expr, x, y),
                    OpFamily::Logical => logical::eval_logical(expr, x, y),
                }?;
                Ok(Acc {
                    value,
                    pos: span.start(),
                })
            }
        }
    }
}
