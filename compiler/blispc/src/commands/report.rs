//! Reader error rendering with ariadne.

use ariadne::{Config, Label, Report, ReportKind, Source};
use blisp_reader::ReadError;

/// Print `err` to stderr with a source excerpt.
pub fn report_read_error(name: &str, source: &str, err: &ReadError) {
    if let Err(io_err) = build(name, err, true).eprint((name, Source::from(source))) {
        tracing::debug!(error = %io_err, "could not render report");
        let (line, column) = err.position(source);
        eprintln!("error: {name}:{line}:{column}: {err}");
    }
}

/// Render `err` without colors, for logs and tests.
pub fn render_read_error(name: &str, source: &str, err: &ReadError) -> String {
    let mut out = Vec::new();
    if build(name, err, false)
        .write((name, Source::from(source)), &mut out)
        .is_err()
    {
        let (line, column) = err.position(source);
        return format!("error: {name}:{line}:{column}: {err}");
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn build<'a>(name: &'a str, err: &ReadError, color: bool) -> Report<'a, (&'a str, std::ops::Range<usize>)> {
    let span = err.span();
    Report::build(ReportKind::Error, name, span.start)
        .with_config(Config::default().with_color(color))
        .with_message(err.to_string())
        .with_label(Label::new((name, span)).with_message(label(err)))
        .finish()
}

fn label(err: &ReadError) -> &'static str {
    match err {
        ReadError::UnexpectedChar { .. } => "not part of any token",
        ReadError::UnterminatedString { .. } => "string starts here",
        ReadError::UnclosedDelimiter { .. } => "opened here",
        ReadError::UnexpectedCloser { .. } => "nothing to close",
    }
}
