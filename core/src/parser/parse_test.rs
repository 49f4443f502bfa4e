//! Unit tests for the parser: node shapes, spans and error cases.

use bumpalo::Bump;
use pretty_assertions::assert_eq;

use crate::parser::{self, BinaryOp, Expr, LitKind, ParseErrorKind, UnaryOp};

fn parse<'a>(arena: &'a Bump, source: &'a str) -> &'a Expr<'a> {
    parser::parse(arena, source).expect("parse failed").expr
}

#[test]
fn test_int_literal_forms() {
    let arena = Bump::new();
    for (source, kind) in [
        ("42", LitKind::Int),
        ("0x2A", LitKind::Int),
        ("0o52", LitKind::Int),
        ("0b101010", LitKind::Int),
        ("1_000", LitKind::Int),
        ("123.45", LitKind::Float),
        ("1e10", LitKind::Float),
        (".5", LitKind::Float),
        ("2i", LitKind::Imag),
        ("1.5i", LitKind::Imag),
        ("\"abc\"", LitKind::Str),
        ("'abc'", LitKind::Str),
        ("`abc`", LitKind::Str),
    ] {
        let expr = parse(&arena, source);
        let Expr::Literal {
            kind: parsed_kind,
            text,
            ..
        } = expr
        else {
            panic!("{source}: expected a literal, got {expr:?}")
        };
        assert_eq!(*parsed_kind, kind, "{source}");
        assert_eq!(*text, source, "{source}");
    }
}

#[test]
fn test_ident() {
    let arena = Bump::new();
    let expr = parse(&arena, "true");
    assert!(matches!(expr, Expr::Ident { name: "true", .. }));
    let expr = parse(&arena, "some_name");
    assert!(matches!(expr, Expr::Ident { name: "some_name", .. }));
}

#[test]
fn test_binary_structure_and_spans() {
    let arena = Bump::new();
    let expr = parse(&arena, "1 + 2");
    let Expr::Binary {
        op,
        left,
        right,
        span,
        op_pos,
    } = expr
    else {
        panic!("expected a binary node, got {expr:?}")
    };
    assert_eq!(*op, BinaryOp::Add);
    assert_eq!(*op_pos, 2);
    assert_eq!((span.start(), span.end()), (0, 5));
    assert!(matches!(left, Expr::Literal { text: "1", .. }));
    assert!(matches!(right, Expr::Literal { text: "2", .. }));
}

#[test]
fn test_paren_keeps_its_own_node() {
    let arena = Bump::new();
    let expr = parse(&arena, "(1 + 2) * 3");
    let Expr::Binary { op, left, .. } = expr else {
        panic!("expected a binary node, got {expr:?}")
    };
    assert_eq!(*op, BinaryOp::Mul);
    let Expr::Paren { inner, span } = left else {
        panic!("expected a paren node, got {left:?}")
    };
    assert_eq!((span.start(), span.end()), (0, 7));
    assert!(matches!(inner, Expr::Binary { op: BinaryOp::Add, .. }));
}

#[test]
fn test_unary_chain() {
    let arena = Bump::new();
    let expr = parse(&arena, "--5");
    let Expr::Unary { op, operand, span } = expr else {
        panic!("expected a unary node, got {expr:?}")
    };
    assert_eq!(*op, UnaryOp::Neg);
    assert_eq!((span.start(), span.end()), (0, 3));
    assert!(matches!(
        operand,
        Expr::Unary {
            op: UnaryOp::Neg,
            ..
        }
    ));
}

#[test]
fn test_multichar_operator_tokens() {
    let arena = Bump::new();
    for (source, op) in [
        ("1 << 2", BinaryOp::Shl),
        ("1 >> 2", BinaryOp::Shr),
        ("1 &^ 2", BinaryOp::AndNot),
        ("1 <= 2", BinaryOp::Leq),
        ("1 >= 2", BinaryOp::Geq),
        ("1 == 2", BinaryOp::Eq),
        ("1 != 2", BinaryOp::Neq),
        ("true && false", BinaryOp::LogicalAnd),
        ("true || false", BinaryOp::LogicalOr),
    ] {
        let expr = parse(&arena, source);
        let Expr::Binary { op: parsed, .. } = expr else {
            panic!("{source}: expected a binary node")
        };
        assert_eq!(*parsed, op, "{source}");
    }
}

#[test]
fn test_trailing_garbage_is_an_error() {
    let arena = Bump::new();
    assert!(parser::parse(&arena, "(1 * 2))").is_err());
    assert!(parser::parse(&arena, "1 +").is_err());
    assert!(parser::parse(&arena, "").is_err());
    assert!(parser::parse(&arena, "1 2").is_err());
}

#[test]
fn test_error_reports_span() {
    let arena = Bump::new();
    let err = parser::parse(&arena, "(1 * 2))").expect_err("expected an error");
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));
    assert_eq!(err.span.start(), 7);
}

#[test]
fn test_depth_limit_parens() {
    let arena = Bump::new();
    let deep = format!("{}1{}", "(".repeat(40), ")".repeat(40));
    assert!(parser::parse_with_max_depth(&arena, &deep, 64).is_ok());
    let err = parser::parse_with_max_depth(&arena, &deep, 16).expect_err("expected an error");
    assert!(matches!(
        err.kind,
        ParseErrorKind::MaxDepthExceeded { max_depth: 16 }
    ));
}

#[test]
fn test_depth_limit_operator_chain() {
    let arena = Bump::new();
    let mut chain = String::from("1");
    for _ in 0..64 {
        chain.push_str(" + 1");
    }
    assert!(parser::parse_with_max_depth(&arena, &chain, 128).is_ok());
    assert!(parser::parse_with_max_depth(&arena, &chain, 16).is_err());
}

#[test]
fn test_depth_limit_prefix_run() {
    let arena = Bump::new();
    let bangs = format!("{}true", "!".repeat(40));
    assert!(parser::parse_with_max_depth(&arena, &bangs, 64).is_ok());
    assert!(parser::parse_with_max_depth(&arena, &bangs, 16).is_err());
}
