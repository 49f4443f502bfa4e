//! Error rendering using ariadne
//!
//! This module renders parse and evaluation errors with source snippets and
//! labeled spans. Errors only carry positions, so the source string they were
//! produced from must be supplied alongside.

use crate::Error;
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;
use std::ops::Range;

/// Render an error against its source to stderr.
///
/// # Example
/// ```no_run
/// use xpr::{eval_any, render_error};
///
/// let source = "1 + true";
/// if let Err(e) = eval_any(source) {
///     render_error(source, &e);
/// }
/// ```
pub fn render_error(source: &str, error: &Error) {
    render_error_to_writer(source, error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer.
pub fn render_error_to(source: &str, error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(source, error, writer, true)
}

/// Render an error to a String (useful for tests, web UIs, etc.)
pub fn render_error_to_string(source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without ANSI color codes, making the output
/// easier to compare in tests.
pub fn render_error_to_string_no_color(source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    source: &str,
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let (span, message) = match error {
        Error::Parse(e) => (e.span.0.clone(), e.to_string()),
        Error::Eval(e) => (anchor(source, e.pos), e.message.clone()),
    };

    let mut colors = ColorGenerator::new();
    let mut report = Report::build(ReportKind::Error, ("<expr>", span.clone()))
        .with_message(&message)
        .with_config(ariadne::Config::default().with_color(use_color));

    if let Error::Eval(e) = error {
        report = report.with_code(format!("{}", e.kind));
    }

    report = report.with_label(
        Label::new(("<expr>", span))
            .with_message(&message)
            .with_color(colors.next()),
    );

    report
        .finish()
        .write(("<expr>", Source::from(source)), writer)
}

/// Widen a bare byte offset into a one-character span, clamped to the source.
fn anchor(source: &str, pos: usize) -> Range<usize> {
    let start = pos.min(source.len());
    let end = source[start..]
        .chars()
        .next()
        .map(|c| start + c.len_utf8())
        .unwrap_or(start);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval_any;

    #[test]
    fn test_render_parse_error() {
        let source = "1 + + + ";
        let err = eval_any(source).expect_err("expected an error");
        let output = render_error_to_string_no_color(source, &err);
        assert!(output.contains("Error") || output.contains("error"));
    }

    #[test]
    fn test_render_eval_error_shows_source() {
        let source = "1 + true";
        let err = eval_any(source).expect_err("expected an error");
        let output = render_error_to_string_no_color(source, &err);
        assert!(output.contains("1 + true"));
        assert!(output.contains("not a number"));
    }
}
