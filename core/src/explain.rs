//! Step-by-step explanation of how an expression evaluates.
//!
//! Walks the tree bottom-up and records one step per operator application.
//! Each step shows the operation as written (children kept in their textual
//! form, parenthesized where needed) and, when different, the equivalent form
//! with the children replaced by their evaluated values.
//!
//! ```
//! use xpr_core::explain::explain;
//!
//! let steps = explain("1 + 2 + 3").unwrap();
//! assert_eq!(steps[0].equivalent_forms, ["1 + 2"]);
//! assert_eq!(steps[0].result, "3");
//! assert_eq!(steps[1].equivalent_forms, ["(1 + 2) + 3", "3 + 3"]);
//! assert_eq!(steps[1].result, "6");
//! ```

use bumpalo::Bump;

use crate::errors::Error;
use crate::evaluator::{EvalError, EvalOptions, Evaluator};
use crate::parser::{self, Expr};
use crate::syntax::format_expr;
use crate::{String, ToString, Vec, format, vec};

/// One evaluation step: the forms the step can be written in, from the
/// original shape to the most evaluated one, and the step's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub equivalent_forms: Vec<String>,
    pub result: String,
}

/// Explain the step-by-step evaluation of `source` under default options.
pub fn explain(source: &str) -> Result<Vec<Step>, Error> {
    let arena = Bump::new();
    let parsed = parser::parse(&arena, source)?;

    let mut transforms = Vec::new();
    walk(parsed.expr, &mut transforms)?;

    let steps = transforms
        .into_iter()
        .map(|t| {
            let mut forms = vec![t.segmented];
            if forms[0] != t.equivalent {
                forms.push(t.equivalent);
            }
            Step {
                equivalent_forms: forms,
                result: t.evaluated,
            }
        })
        .collect();
    Ok(steps)
}

struct Transform {
    segmented: String,
    equivalent: String,
    evaluated: String,
}

#[derive(PartialEq, Eq, Copy, Clone)]
enum Shape {
    Leaf,
    Paren,
    Unary,
    Binary,
}

/// Walk one node, appending its children's transforms then its own. Returns
/// the textual form the parent should splice in for this node.
fn walk(expr: &Expr<'_>, out: &mut Vec<Transform>) -> Result<(String, Shape), EvalError> {
    match expr {
        Expr::Literal { text, .. } => Ok(((*text).to_string(), Shape::Leaf)),
        Expr::Ident { name, .. } => Ok(((*name).to_string(), Shape::Leaf)),
        Expr::Paren { inner, .. } => {
            let (value, _) = walk(inner, out)?;
            Ok((format!("({value})"), Shape::Paren))
        }
        Expr::Unary { operand, .. } => {
            walk(operand, out)?;

            let evaluated = evaluate(expr)?;
            let written = format_expr(expr);
            out.push(Transform {
                segmented: written.clone(),
                equivalent: written,
                evaluated: evaluated.clone(),
            });
            Ok((evaluated, Shape::Unary))
        }
        Expr::Binary {
            op, left, right, ..
        } => {
            let (left_text, left_shape) = walk(left, out)?;
            let (right_text, right_shape) = walk(right, out)?;

            // Bare binary children read ambiguously when spliced into their
            // parent's form, so show them parenthesized as written.
            let left_text = match left_shape {
                Shape::Binary => format!("({})", format_expr(left)),
                _ => left_text,
            };
            let right_text = match right_shape {
                Shape::Binary => format!("({})", format_expr(right)),
                _ => right_text,
            };

            let evaluated = evaluate(expr)?;
            let equivalent = format!("{} {op} {}", evaluate(left)?, evaluate(right)?);
            out.push(Transform {
                segmented: format!("{left_text} {op} {right_text}"),
                equivalent: equivalent.clone(),
                evaluated,
            });
            Ok((equivalent, Shape::Binary))
        }
    }
}

fn evaluate(expr: &Expr<'_>) -> Result<String, EvalError> {
    Evaluator::new(EvalOptions::default())
        .eval(expr)
        .map(|value| value.to_string())
}
