//! Diagnostic types and builders.

use crate::ErrorCode;
use sprig_common::{Position, Span};

/// Which front-end phase produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Lexer,
    Parser,
}

/// A labeled span within a diagnostic.
#[derive(Debug, Clone)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// An error message with optional labels, notes, and help.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub code: Option<ErrorCode>,
    pub message: String,
    pub span: Span,
    /// Line/column of `span.start`, when the producer knows it.
    pub position: Option<Position>,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(kind: DiagnosticKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: None,
            message: message.into(),
            span,
            position: None,
            labels: vec![],
            notes: vec![],
            help: None,
        }
    }

    /// Attach an error code. Its suggestion, if any, becomes the help text.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self.help = code.suggestion().map(str::to_owned);
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}
