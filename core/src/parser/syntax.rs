// Common syntax structures shared by the parsed tree and the evaluator.

use core::fmt;
use core::ops::Range;

/// Byte range of a node in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }
    pub fn start(&self) -> usize {
        self.0.start
    }
    pub fn end(&self) -> usize {
        self.0.end
    }
    pub fn combine(a: &Span, b: &Span) -> Span {
        Span::new(a.0.start, b.0.end)
    }
    pub fn str_of<'a>(&self, source: &'a str) -> &'a str {
        &source[self.0.start..self.0.end]
    }
}

impl From<pest::Span<'_>> for Span {
    fn from(s: pest::Span<'_>) -> Self {
        Self(s.start()..s.end())
    }
}

/// Binary operator token.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    // arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    // bitwise
    And,
    Or,
    Xor,
    AndNot,
    Shl,
    Shr,
    // comparison
    Eq,
    Neq,
    Lt,
    Leq,
    Gt,
    Geq,
    // logical
    LogicalAnd,
    LogicalOr,
}

/// The operator module a binary operator dispatches to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpFamily {
    Arithmetic,
    Bitwise,
    Comparison,
    Logical,
}

impl BinaryOp {
    pub fn family(self) -> OpFamily {
        use BinaryOp::*;
        match self {
            Add | Sub | Mul | Div | Rem => OpFamily::Arithmetic,
            And | Or | Xor | AndNot | Shl | Shr => OpFamily::Bitwise,
            Eq | Neq | Lt | Leq | Gt | Geq => OpFamily::Comparison,
            LogicalAnd | LogicalOr => OpFamily::Logical,
        }
    }

    /// Source-text spelling of the operator.
    pub fn token(self) -> &'static str {
        use BinaryOp::*;
        match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Rem => "%",
            And => "&",
            Or => "|",
            Xor => "^",
            AndNot => "&^",
            Shl => "<<",
            Shr => ">>",
            Eq => "==",
            Neq => "!=",
            Lt => "<",
            Leq => "<=",
            Gt => ">",
            Geq => ">=",
            LogicalAnd => "&&",
            LogicalOr => "||",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Unary operator token.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Pos,
    Neg,
}

impl UnaryOp {
    /// Source-text spelling of the operator.
    pub fn token(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Pos => "+",
            UnaryOp::Neg => "-",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
