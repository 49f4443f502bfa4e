use crate::parser::{BinaryOp, Span, UnaryOp};

/// A parsed expression: the arena-allocated root node plus the source text
/// it was parsed from.
#[derive(Debug)]
pub struct ParsedExpr<'a> {
    pub expr: &'a Expr<'a>,
    pub source: &'a str,
}

/// Lexical kind of a literal token.
///
/// Literal nodes carry their raw text; conversion to a runtime value happens
/// during evaluation (see [`crate::syntax::literal`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LitKind {
    /// `12345`, `0x2A`, `0o52`, `0b101010`
    Int,
    /// `123.45`, `1e10`, `.5`
    Float,
    /// `2i`, `1.5i`
    Imag,
    /// `"abc"`, `'abc'`, `` `abc` ``
    Str,
}

/// An expression-tree node. Nodes are immutable, allocated in a
/// [`bumpalo::Bump`] arena, and borrow literal/identifier text directly from
/// the source string.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    Literal {
        kind: LitKind,
        text: &'a str,
        span: Span,
    },
    Ident {
        name: &'a str,
        span: Span,
    },
    Paren {
        inner: &'a Expr<'a>,
        span: Span,
    },
    Unary {
        op: UnaryOp,
        operand: &'a Expr<'a>,
        span: Span,
    },
    Binary {
        op: BinaryOp,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
        span: Span,
        /// Byte offset of the operator token, for operator-level diagnostics.
        op_pos: usize,
    },
}

impl<'a> Expr<'a> {
    pub fn span(&self) -> &Span {
        match self {
            Expr::Literal { span, .. }
            | Expr::Ident { span, .. }
            | Expr::Paren { span, .. }
            | Expr::Unary { span, .. }
            | Expr::Binary { span, .. } => span,
        }
    }

    /// Byte offset where this node starts in the source.
    pub fn pos(&self) -> usize {
        self.span().start()
    }
}
