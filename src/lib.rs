//! xpr - Evaluate arithmetic, boolean, comparison and bitwise expressions
//!
//! # Overview
//!
//! xpr evaluates small, pure expressions such as `"(2+2)*4/4 + 1.5"` into a
//! typed value (boolean, integer, float, complex or string) or a categorized,
//! position-carrying error. Common use cases include:
//!
//! - Config values computed from small formulas
//! - Validation rules and threshold checks
//! - Anything a user types where a full scripting language is too much
//!
//! # Quick Start
//!
//! ```
//! // One-shot helpers parse, evaluate and narrow in a single call:
//! assert_eq!(xpr::eval_int("(2 + 2) * 4 / 4").unwrap(), 4);
//! assert_eq!(xpr::eval_bool("1 < 2 && 3 > 2").unwrap(), true);
//! assert_eq!(xpr::eval_float("10 * -5 + (-5.5)").unwrap(), -55.5);
//! assert_eq!(xpr::eval_any("2 + 2.5").unwrap(), xpr::AnyValue::Float(4.5));
//! ```
//!
//! For control over options, or to evaluate one tree several times, parse
//! into an arena and drive the evaluator directly:
//!
//! ```
//! use xpr::{Bump, EvalOptions, Evaluator, NumericMode, Value};
//!
//! let arena = Bump::new();
//! let parsed = xpr::parse(&arena, "(2+2)*4/4 + 1.5").unwrap();
//!
//! let value = Evaluator::new(EvalOptions::default()).eval(parsed.expr).unwrap();
//! assert_eq!(value, Value::Float(5.5));
//!
//! let options = EvalOptions { numeric_mode: NumericMode::Int, ..EvalOptions::default() };
//! let value = Evaluator::new(options).eval(parsed.expr).unwrap();
//! assert_eq!(value, Value::Int(5));
//! ```
//!
//! # Numeric behavior
//!
//! Numeric operands promote along `integer < float < complex`: an operation
//! computes in the widest kind present, so `2 + 3` stays an integer while
//! `2 + 2.5` is a float. A [`NumericMode`] can force every operation to one
//! kind instead. Integer division by zero yields `0` unless
//! `allow_integer_divide_by_zero` is disabled, in which case it is an error;
//! float division by zero follows IEEE 754.
//!
//! # Errors
//!
//! Every evaluation error wraps a stable [`ErrorKind`] sentinel, a message
//! embedding the offending sub-expression's text and value, and the source
//! position. [`render_error`] pretty-prints any error against its source.
//!
//! # Supported operators
//!
//! - Comparison: `== != < <= > >=`
//! - Logical: `&& || !`
//! - Arithmetic: `+ - * / %` (`%` is undefined for complex numbers)
//! - Bitwise: `& | ^ &^ << >>` (integers only)

// Re-export public API from xpr-core
pub use xpr_core::api::{
    AnyValue, eval_any, eval_bool, eval_complex, eval_float, eval_int, eval_int_strict,
    eval_with_options,
};
pub use xpr_core::errors::Error;
pub use xpr_core::evaluator::{ErrorKind, EvalError, EvalOptions, Evaluator, NumericMode};
pub use xpr_core::parser::{
    self, BinaryOp, Expr, LitKind, ParseError, ParseErrorKind, ParsedExpr, Span, UnaryOp, parse,
    parse_with_max_depth,
};
pub use xpr_core::values::{Kind, Value};

// Variable substitution and step-by-step explanation
pub use xpr_core::bind::{self, BindError, BindValue, Binder, Ident};
pub use xpr_core::explain::{Step, explain};

// Commonly used external types
pub use bumpalo::Bump;
pub use xpr_core::Complex64;

mod error_renderer;
pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
