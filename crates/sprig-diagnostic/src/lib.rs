//! Diagnostic and error reporting for Sprig.
//!
//! Diagnostics are plain values collected by the lexer and parser. This crate
//! renders them with ariadne.

mod codes;
mod diagnostic;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, DiagnosticKind, Label};

use std::io;

use ariadne::{Config, Label as AriadneLabel, Report, ReportKind, Source};

/// Render a diagnostic to a string without colors.
pub fn render(source: &str, filename: &str, diagnostic: &Diagnostic) -> io::Result<String> {
    let mut buf = Vec::new();
    build_report(filename, diagnostic).write((filename, Source::from(source)), &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn build_report<'a>(
    filename: &'a str,
    diagnostic: &Diagnostic,
) -> Report<'a, (&'a str, std::ops::Range<usize>)> {
    let offset = usize::from(diagnostic.span.start);
    let mut report = Report::build(ReportKind::Error, filename, offset)
        .with_config(Config::default().with_color(false))
        .with_message(&diagnostic.message);

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    for label in &diagnostic.labels {
        let ariadne_label =
            AriadneLabel::new((filename, label.span.range())).with_message(&label.message);
        report = report.with_label(ariadne_label);
    }

    for note in &diagnostic.notes {
        report = report.with_note(note);
    }

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report.finish()
}
