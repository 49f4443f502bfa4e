//! Configuration options for expression evaluation.

use core::fmt;

/// How numeric operands are treated during arithmetic.
///
/// In `Auto` mode the result kind follows the widest operand kind
/// (`integer < float < complex`); the other modes force every numeric
/// operand to one kind before computing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum NumericMode {
    /// `1 * 2 = 2`, `1 * 2.5 = 2.5`, `1 * (2+2i) = (2+2i)`
    #[default]
    Auto,
    /// `1 * 2 = 2`, `1 * 2.5 = 2` (narrowing truncates)
    Int,
    /// `1 * 2 = 2.0`, `1 * 2.5 = 2.5`
    Float,
    /// `1 * 2 = (2+0i)`, `(1+2i) * (2+2i) = (-2+6i)`
    Complex,
}

impl fmt::Display for NumericMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumericMode::Auto => "auto",
            NumericMode::Int => "int",
            NumericMode::Float => "float",
            NumericMode::Complex => "complex",
        };
        f.write_str(name)
    }
}

/// Options for one evaluation. Immutable for the duration of the call.
///
/// # Example
///
/// ```
/// use xpr_core::evaluator::{EvalOptions, NumericMode};
///
/// let options = EvalOptions {
///     numeric_mode: NumericMode::Int,
///     allow_integer_divide_by_zero: false,
/// };
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EvalOptions {
    /// Numeric mode used by the arithmetic and bitwise operators.
    ///
    /// Default: [`NumericMode::Auto`]
    pub numeric_mode: NumericMode,

    /// When true, integer `/` (and `%`) by zero yields `0` instead of an
    /// [`ErrorKind::IntegerDividedByZero`](super::ErrorKind) error.
    ///
    /// Default: `true`
    pub allow_integer_divide_by_zero: bool,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            numeric_mode: NumericMode::Auto,
            allow_integer_divide_by_zero: true,
        }
    }
}
