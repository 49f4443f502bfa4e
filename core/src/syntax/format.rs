//! Reconstruct the source text of an expression node.
//!
//! Diagnostics embed the text of the offending sub-expression. The tree alone
//! is enough to rebuild it: literal and identifier nodes keep their token
//! text, and the gaps between node positions reproduce the original spacing.

use crate::parser::Expr;
use crate::{String, format};

/// Rebuild the source text of `expr`, including its original spacing.
pub fn format_expr(expr: &Expr<'_>) -> String {
    match expr {
        Expr::Literal { text, .. } => (*text).into(),
        Expr::Ident { name, .. } => (*name).into(),
        Expr::Paren { inner, span } => {
            let body = format_expr(inner);
            let lead = spacer(inner.pos().saturating_sub(span.start() + 1));
            let trail = spacer(
                (span.end().saturating_sub(1)).saturating_sub(inner.pos() + body.len()),
            );
            format!("({lead}{body}{trail})")
        }
        Expr::Unary { op, operand, span } => {
            let body = format_expr(operand);
            let gap = spacer(operand.pos().saturating_sub(span.start() + op.token().len()));
            format!("{}{gap}{body}", op.token())
        }
        Expr::Binary {
            op,
            left,
            right,
            op_pos,
            ..
        } => {
            let lhs = format_expr(left);
            let rhs = format_expr(right);
            let lead = spacer(op_pos.saturating_sub(left.pos() + lhs.len()));
            let trail = spacer(right.pos().saturating_sub(op_pos + op.token().len()));
            format!("{lhs}{lead}{}{trail}{rhs}", op.token())
        }
    }
}

fn spacer(n: usize) -> String {
    " ".repeat(n)
}
