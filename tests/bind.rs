//! Variable substitution feeding the evaluator.

use pretty_assertions::assert_eq;
use xpr::bind::{Binder, Ident, bind};
use xpr::{eval_any, eval_float, AnyValue};

#[test]
fn bound_expression_evaluates() {
    let source = bind(
        "{price} - ({price} * {discount-percentage})",
        &[("price", 100.into()), ("discount-percentage", 0.1.into())],
    )
    .unwrap();
    assert_eq!(source, "100 - (100 * 0.1)");
    assert_eq!(eval_float(&source).unwrap(), 90.0);
}

#[test]
fn string_values_are_quoted_for_the_parser() {
    let source = bind(
        "{name} == \"gopher\"",
        &[("name", "gopher".into())],
    )
    .unwrap();
    assert_eq!(source, "\"gopher\" == \"gopher\"");
    assert_eq!(eval_any(&source).unwrap(), AnyValue::Bool(true));
}

#[test]
fn custom_identifier() {
    let binder = Binder::new(Ident {
        prefix: ":".to_string(),
        suffix: ":".to_string(),
    });
    let source = binder
        .bind(":price: * :qty:", &[("price", 3.into()), ("qty", 4.into())])
        .unwrap();
    assert_eq!(source, "3 * 4");
    assert_eq!(eval_any(&source).unwrap(), AnyValue::Int(12));
}

#[test]
fn boolean_values_bind_into_logic() {
    let source = bind(
        "{enabled} && {count} > 0",
        &[("enabled", true.into()), ("count", 3.into())],
    )
    .unwrap();
    assert_eq!(source, "true && 3 > 0");
    assert_eq!(eval_any(&source).unwrap(), AnyValue::Bool(true));
}
