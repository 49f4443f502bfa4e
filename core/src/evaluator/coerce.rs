//! Numeric coercion policy.
//!
//! Given two numeric operand kinds and the active [`NumericMode`], decides
//! the common kind an operation computes in. Non-numeric kinds are rejected
//! by the operator guards before this policy is consulted.

use crate::evaluator::NumericMode;
use crate::values::Kind;

/// The kind arithmetic computes in for the given mode and operand kinds.
///
/// Forced modes override the operands; `Auto` keeps the widest kind present,
/// so `integer op integer` stays `integer`.
pub(crate) fn resolve(mode: NumericMode, x: Kind, y: Kind) -> Kind {
    match mode {
        NumericMode::Complex => Kind::Complex,
        NumericMode::Float => Kind::Float,
        NumericMode::Int => Kind::Integer,
        NumericMode::Auto => promote(x, y),
    }
}

/// The widest kind present among two numeric operands, following the ranking
/// `Integer < Float < Complex`. Comparison always promotes this way,
/// independent of the configured mode.
pub(crate) fn promote(x: Kind, y: Kind) -> Kind {
    if x == Kind::Complex || y == Kind::Complex {
        Kind::Complex
    } else if x == Kind::Float || y == Kind::Float {
        Kind::Float
    } else {
        Kind::Integer
    }
}
