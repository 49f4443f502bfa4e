//! Runtime evaluation errors.
//!
//! Every error wraps one of a closed set of category sentinels
//! ([`ErrorKind`]) so callers can match on the category without parsing the
//! message. The message itself embeds the source text of the offending
//! sub-expression together with its evaluated value, and `pos` is the byte
//! offset the error is anchored to.

use thiserror::Error;

use crate::String;

/// Stable error categories. Matching on these is the supported way to react
/// to a specific failure programmatically.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The operator is not defined for the operand kinds it was applied to.
    #[error("unsupported operator")]
    UnsupportedOperator,
    /// A unary operation failed.
    #[error("unary operation")]
    UnaryOperation,
    /// An arithmetic operand was not a number.
    #[error("arithmetic operation")]
    ArithmeticOperation,
    /// Integer division (or remainder) by zero while
    /// `allow_integer_divide_by_zero` is disabled.
    #[error("integer divided by zero")]
    IntegerDividedByZero,
    /// A bitwise operand was not an exact integer, or bitwise operators are
    /// unavailable in the active numeric mode.
    #[error("bitwise operation")]
    BitwiseOperation,
    /// The operand kinds cannot be compared with each other.
    #[error("comparison operation")]
    ComparisonOperation,
    /// A logical operand was not a boolean.
    #[error("logical operation")]
    LogicalOperation,
    /// The evaluated result does not match the requested type.
    #[error("value type mismatch")]
    ValueTypeMismatch,
}

/// An evaluation error: category sentinel, self-contained message and the
/// source position it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} [pos: {pos}]: {kind}")]
pub struct EvalError {
    pub kind: ErrorKind,
    pub message: String,
    pub pos: usize,
}

impl EvalError {
    pub fn new(kind: ErrorKind, message: String, pos: usize) -> Self {
        Self { kind, message, pos }
    }
}
