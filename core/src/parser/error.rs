use core::fmt;

use crate::parser::{Rule, Span};
use crate::{String, ToString, format};

/// Parser error with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// Specific kinds of parse errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Unexpected token
    UnexpectedToken { expected: String, found: String },
    /// Maximum nesting depth exceeded
    MaxDepthExceeded { max_depth: usize },
    /// Other parse errors (catch-all for pest errors we don't specifically handle)
    Other { message: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                write!(f, "expected {expected}, found {found}")?;
            }
            ParseErrorKind::MaxDepthExceeded { max_depth } => {
                write!(
                    f,
                    "expression nesting depth exceeds maximum of {max_depth} levels"
                )?;
            }
            ParseErrorKind::Other { message } => {
                write!(f, "{message}")?;
            }
        }
        write!(f, " [span: {}..{}]", self.span.start(), self.span.end())
    }
}

impl core::error::Error for ParseError {}

/// Convert a pest error to a human-readable [`ParseError`].
pub(super) fn convert_pest_error(err: pest::error::Error<Rule>, source: &str) -> ParseError {
    use pest::error::ErrorVariant;

    let span = match err.location {
        pest::error::InputLocation::Pos(pos) => Span::new(pos, pos),
        pest::error::InputLocation::Span((start, end)) => Span::new(start, end),
    };

    let kind = match err.variant {
        ErrorVariant::ParsingError { positives, .. } => ParseErrorKind::UnexpectedToken {
            expected: format_expected_rules(&positives),
            found: describe_found(source, span.start()),
        },
        ErrorVariant::CustomError { message } => ParseErrorKind::Other { message },
    };

    ParseError::new(kind, span)
}

/// Group expected rules into higher-level concepts.
fn format_expected_rules(rules: &[Rule]) -> String {
    let mut concepts: crate::Vec<&str> = crate::Vec::new();

    for rule in rules {
        let concept = match rule {
            Rule::int | Rule::float | Rule::imag | Rule::string => "literal",
            Rule::ident => "identifier",
            Rule::grouped | Rule::expr | Rule::not | Rule::pos | Rule::neg => "expression",
            Rule::EOI => "end of input",
            _ => "operator",
        };
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }

    if concepts.is_empty() {
        return "something else".to_string();
    }
    if concepts.len() == 1 {
        return concepts[0].to_string();
    }
    let last = concepts.pop().unwrap_or("something else");
    format!("{} or {}", concepts.join(", "), last)
}

fn describe_found(source: &str, pos: usize) -> String {
    match source[pos.min(source.len())..].chars().next() {
        Some(c) => format!("'{c}'"),
        None => "end of input".to_string(),
    }
}
