//! Tree-walking evaluator for plain expressions.
//!
//! The evaluator interprets a parsed expression tree ([`crate::parser::Expr`])
//! and produces a runtime value ([`crate::values::Value`]) or an
//! [`EvalError`].
//!
//! ## Design Principles
//!
//! - **Never panic**: operand kind mismatches, division by zero and shift
//!   edge cases all surface as categorized errors
//! - **First error wins**: children evaluate left to right and the first
//!   error aborts the whole walk, with no recovery or aggregation
//! - **Pure**: evaluation has no side effects; re-evaluating the same tree
//!   with the same options is deterministic
//!
//! ## Example
//!
//! ```
//! use bumpalo::Bump;
//! use xpr_core::evaluator::{EvalOptions, Evaluator};
//! use xpr_core::parser;
//! use xpr_core::values::Value;
//!
//! let arena = Bump::new();
//! let parsed = parser::parse(&arena, "(2+2)*4/4 + 1.5").unwrap();
//! let value = Evaluator::new(EvalOptions::default()).eval(parsed.expr).unwrap();
//! assert_eq!(value, Value::Float(5.5));
//! ```

mod arithmetic;
mod bitwise;
mod coerce;
mod comparison;
mod error;
mod eval;
mod logical;
mod options;
mod unary;


pub use error::{ErrorKind, EvalError};
pub use eval::Evaluator;
pub use options::{EvalOptions, NumericMode};

use crate::parser::Expr;
use crate::values::Value;

/// Evaluate an expression tree with default options
/// (auto numeric mode, integer division by zero allowed).
pub fn eval<'a>(expr: &Expr<'a>) -> Result<Value<'a>, EvalError> {
    Evaluator::new(EvalOptions::default()).eval(expr)
}

/// Evaluate an expression tree with the given options.
pub fn eval_with_options<'a>(
    options: EvalOptions,
    expr: &Expr<'a>,
) -> Result<Value<'a>, EvalError> {
    Evaluator::new(options).eval(expr)
}
