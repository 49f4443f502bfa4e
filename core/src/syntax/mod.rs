//! Lexical helpers: literal-to-value conversion and reconstruction of source
//! text from expression nodes.

pub mod format;
pub mod literal;

pub use format::format_expr;
