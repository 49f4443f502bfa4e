//! pest-backed expression parser.
//!
//! The grammar (see `grammar.pest`) recognizes integer/float/imaginary/string
//! literals, identifiers, parenthesized groups, unary `! + -` and the binary
//! operator set with its usual precedence:
//!
//! 1. `* / % << >> & &^`
//! 2. `+ - | ^`
//! 3. `== != < <= > >=`
//! 4. `&&`
//! 5. `||`
//!
//! Nodes are allocated in a caller-provided arena and borrow their text from
//! the source string, so a [`ParsedExpr`] is cheap to hand around and the
//! whole tree is dropped with the arena.

use bumpalo::Bump;
use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest_derive::Parser;

use crate::ToString;
use crate::parser::error::convert_pest_error;
use crate::parser::{
    BinaryOp, Expr, LitKind, ParseError, ParseErrorKind, ParsedExpr, Span, UnaryOp,
};

#[derive(Parser)]
#[grammar = "parser/grammar.pest"]
pub struct ExpressionParser;

/// Default limit on expression tree depth.
pub const DEFAULT_MAX_DEPTH: usize = 500;

/// Parse `source` into an expression tree allocated in `arena`.
pub fn parse<'a>(arena: &'a Bump, source: &'a str) -> Result<ParsedExpr<'a>, ParseError> {
    parse_with_max_depth(arena, source, DEFAULT_MAX_DEPTH)
}

/// Parse with a custom limit on expression tree depth.
///
/// The limit bounds recursion in both the parser and any later walk of the
/// tree (evaluation, formatting), so deeply nested input fails with a
/// [`ParseErrorKind::MaxDepthExceeded`] instead of exhausting the stack.
pub fn parse_with_max_depth<'a>(
    arena: &'a Bump,
    source: &'a str,
    max_depth: usize,
) -> Result<ParsedExpr<'a>, ParseError> {
    tracing::trace!(len = source.len(), "parsing expression");

    // Reject pathological nesting before pest recurses into it.
    let (paren_depth, prefix_run) = scan_nesting(source);
    if paren_depth > max_depth || prefix_run > max_depth {
        return Err(ParseError::new(
            ParseErrorKind::MaxDepthExceeded { max_depth },
            Span::new(0, source.len()),
        ));
    }

    let mut pairs = ExpressionParser::parse(Rule::input, source)
        .map_err(|e| convert_pest_error(e, source))?;
    let input = pairs.next().ok_or_else(|| empty_parse(source))?;
    let expr_pair = input.into_inner().next().ok_or_else(|| empty_parse(source))?;

    let pratt = pratt();
    let expr = build_expr(arena, &pratt, expr_pair.into_inner());

    // Left-leaning operator chains nest without parentheses; measure the
    // built tree to keep later recursive walks within bounds.
    if depth_of(expr) > max_depth {
        return Err(ParseError::new(
            ParseErrorKind::MaxDepthExceeded { max_depth },
            Span::new(0, source.len()),
        ));
    }

    Ok(ParsedExpr { expr, source })
}

fn empty_parse(source: &str) -> ParseError {
    ParseError::new(
        ParseErrorKind::Other {
            message: "empty parse result".to_string(),
        },
        Span::new(0, source.len()),
    )
}

fn pratt() -> PrattParser<Rule> {
    PrattParser::new()
        .op(Op::infix(Rule::lor, Assoc::Left))
        .op(Op::infix(Rule::land, Assoc::Left))
        .op(Op::infix(Rule::eq, Assoc::Left)
            | Op::infix(Rule::neq, Assoc::Left)
            | Op::infix(Rule::lt, Assoc::Left)
            | Op::infix(Rule::leq, Assoc::Left)
            | Op::infix(Rule::gt, Assoc::Left)
            | Op::infix(Rule::geq, Assoc::Left))
        .op(Op::infix(Rule::add, Assoc::Left)
            | Op::infix(Rule::sub, Assoc::Left)
            | Op::infix(Rule::or, Assoc::Left)
            | Op::infix(Rule::xor, Assoc::Left))
        .op(Op::infix(Rule::mul, Assoc::Left)
            | Op::infix(Rule::div, Assoc::Left)
            | Op::infix(Rule::rem, Assoc::Left)
            | Op::infix(Rule::shl, Assoc::Left)
            | Op::infix(Rule::shr, Assoc::Left)
            | Op::infix(Rule::and, Assoc::Left)
            | Op::infix(Rule::and_not, Assoc::Left))
        .op(Op::prefix(Rule::not) | Op::prefix(Rule::pos) | Op::prefix(Rule::neg))
}

fn build_expr<'a>(
    arena: &'a Bump,
    pratt: &PrattParser<Rule>,
    pairs: Pairs<'a, Rule>,
) -> &'a Expr<'a> {
    pratt
        .map_primary(|primary| build_primary(arena, pratt, primary))
        .map_prefix(|op, operand: &'a Expr<'a>| {
            let start = op.as_span().start();
            let op = unary_op(op.as_rule());
            let span = Span::new(start, operand.span().end());
            &*arena.alloc(Expr::Unary { op, operand, span })
        })
        .map_infix(|left, op, right| {
            let op_pos = op.as_span().start();
            let op = binary_op(op.as_rule());
            let span = Span::combine(left.span(), right.span());
            &*arena.alloc(Expr::Binary {
                op,
                left,
                right,
                span,
                op_pos,
            })
        })
        .parse(pairs)
}

fn build_primary<'a>(
    arena: &'a Bump,
    pratt: &PrattParser<Rule>,
    pair: Pair<'a, Rule>,
) -> &'a Expr<'a> {
    let span = Span::from(pair.as_span());
    match pair.as_rule() {
        Rule::int => literal(arena, LitKind::Int, pair, span),
        Rule::float => literal(arena, LitKind::Float, pair, span),
        Rule::imag => literal(arena, LitKind::Imag, pair, span),
        Rule::string => literal(arena, LitKind::Str, pair, span),
        Rule::ident => arena.alloc(Expr::Ident {
            name: pair.as_str(),
            span,
        }),
        Rule::grouped => {
            let expr_pair = pair
                .into_inner()
                .next()
                .expect("grouped rule always wraps an expression");
            let inner = build_expr(arena, pratt, expr_pair.into_inner());
            arena.alloc(Expr::Paren { inner, span })
        }
        rule => unreachable!("unexpected primary rule: {rule:?}"),
    }
}

fn literal<'a>(arena: &'a Bump, kind: LitKind, pair: Pair<'a, Rule>, span: Span) -> &'a Expr<'a> {
    arena.alloc(Expr::Literal {
        kind,
        text: pair.as_str(),
        span,
    })
}

fn unary_op(rule: Rule) -> UnaryOp {
    match rule {
        Rule::not => UnaryOp::Not,
        Rule::pos => UnaryOp::Pos,
        Rule::neg => UnaryOp::Neg,
        rule => unreachable!("unexpected prefix rule: {rule:?}"),
    }
}

fn binary_op(rule: Rule) -> BinaryOp {
    match rule {
        Rule::add => BinaryOp::Add,
        Rule::sub => BinaryOp::Sub,
        Rule::mul => BinaryOp::Mul,
        Rule::div => BinaryOp::Div,
        Rule::rem => BinaryOp::Rem,
        Rule::and => BinaryOp::And,
        Rule::or => BinaryOp::Or,
        Rule::xor => BinaryOp::Xor,
        Rule::and_not => BinaryOp::AndNot,
        Rule::shl => BinaryOp::Shl,
        Rule::shr => BinaryOp::Shr,
        Rule::eq => BinaryOp::Eq,
        Rule::neq => BinaryOp::Neq,
        Rule::lt => BinaryOp::Lt,
        Rule::leq => BinaryOp::Leq,
        Rule::gt => BinaryOp::Gt,
        Rule::geq => BinaryOp::Geq,
        Rule::land => BinaryOp::LogicalAnd,
        Rule::lor => BinaryOp::LogicalOr,
        rule => unreachable!("unexpected infix rule: {rule:?}"),
    }
}

/// Maximum parenthesis nesting and longest run of prefix-operator characters,
/// skipping string literal contents. Both bound parser recursion.
fn scan_nesting(source: &str) -> (usize, usize) {
    let mut depth = 0usize;
    let mut max_depth = 0usize;
    let mut run = 0usize;
    let mut max_run = 0usize;
    let mut quote: Option<u8> = None;

    for &b in source.as_bytes() {
        if let Some(q) = quote {
            if b == q {
                quote = None;
            }
            continue;
        }
        match b {
            b'"' | b'\'' | b'`' => {
                quote = Some(b);
                run = 0;
            }
            b'(' => {
                depth += 1;
                max_depth = max_depth.max(depth);
                run = 0;
            }
            b')' => {
                depth = depth.saturating_sub(1);
                run = 0;
            }
            b'!' | b'+' | b'-' => {
                run += 1;
                max_run = max_run.max(run);
            }
            b' ' | b'\t' | b'\r' | b'\n' => {}
            _ => run = 0,
        }
    }

    (max_depth, max_run)
}

/// Depth of the built tree, computed without recursion.
fn depth_of(expr: &Expr<'_>) -> usize {
    let mut max = 0usize;
    let mut stack = crate::vec![(expr, 1usize)];
    while let Some((node, depth)) = stack.pop() {
        max = max.max(depth);
        match node {
            Expr::Literal { .. } | Expr::Ident { .. } => {}
            Expr::Paren { inner, .. } => stack.push((*inner, depth + 1)),
            Expr::Unary { operand, .. } => stack.push((*operand, depth + 1)),
            Expr::Binary { left, right, .. } => {
                stack.push((*left, depth + 1));
                stack.push((*right, depth + 1));
            }
        }
    }
    max
}
