//! Top-level error type aggregating the parse and evaluation stages.

use thiserror::Error;

use crate::evaluator::EvalError;
use crate::parser::ParseError;

/// Any error the string-level API can produce.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// The evaluation error, if this is one.
    pub fn as_eval(&self) -> Option<&EvalError> {
        match self {
            Error::Eval(e) => Some(e),
            Error::Parse(_) => None,
        }
    }
}
