//! Parse errors and the reporter seam.

use std::fmt;

use sprig_common::Position;
use sprig_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use sprig_lexer::{Token, TokenKind};
use thiserror::Error;

/// A fatal problem with the token sequence itself.
///
/// These are precondition violations, not syntax errors: the parser cannot
/// start at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("cannot parse an empty token sequence")]
    EmptyInput,

    #[error("token sequence must end with end of input, found {found}")]
    MissingEndOfInput { found: Token },
}

/// What the parser was looking for when it found something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// One specific token.
    Token(TokenKind),
    /// `:=` or `(` after the identifier that starts a command.
    AssignOrCall,
    Command,
    Declaration,
    Expression,
    Parameter,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{}", kind),
            Expected::AssignOrCall => f.write_str("`:=` or `(`"),
            Expected::Command => f.write_str("a command"),
            Expected::Declaration => f.write_str("`is` or `:`"),
            Expected::Expression => f.write_str("an expression"),
            Expected::Parameter => f.write_str("`in`, `out` or `)`"),
        }
    }
}

/// A recoverable syntax error: the parser wanted `expected` and saw `found`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found}")]
pub struct SyntaxError {
    pub expected: Expected,
    pub found: Token,
}

impl SyntaxError {
    pub fn new(expected: Expected, found: Token) -> Self {
        Self { expected, found }
    }

    /// Where the offending token starts.
    pub fn position(&self) -> Position {
        self.found.position
    }

    pub fn code(&self) -> ErrorCode {
        match self.expected {
            Expected::Token(TokenKind::Eof) => ErrorCode::TrailingInput,
            Expected::Token(_) | Expected::AssignOrCall => ErrorCode::UnexpectedToken,
            Expected::Command => ErrorCode::ExpectedCommand,
            Expected::Declaration => ErrorCode::ExpectedDeclaration,
            Expected::Expression => ErrorCode::ExpectedExpression,
            Expected::Parameter => ErrorCode::ExpectedParameter,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let span = self.found.span;
        let position = self.position();
        Diagnostic::error(DiagnosticKind::Parser, span, self.to_string())
            .with_code(self.code())
            .with_position(position)
            .with_label(Label::new(span, format!("expected {} here", self.expected)))
            .with_note(format!(
                "at line {}, column {}",
                position.line, position.column
            ))
    }
}

impl From<SyntaxError> for Diagnostic {
    fn from(error: SyntaxError) -> Self {
        error.to_diagnostic()
    }
}

/// Receives syntax errors in the order the parser discovers them.
///
/// The parser calls [`report`](Self::report) once per error and never
/// inspects what the reporter does with it.
pub trait Reporter {
    fn report(&mut self, error: SyntaxError);
}

impl Reporter for Vec<SyntaxError> {
    fn report(&mut self, error: SyntaxError) {
        self.push(error);
    }
}

impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, error: SyntaxError) {
        self.push(error.into());
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, error: SyntaxError) {
        (**self).report(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_common::Span;

    fn found() -> Token {
        Token::new(
            TokenKind::RBrace,
            "}",
            Position::new(2, 4),
            Span::from_usize(7, 8),
        )
    }

    #[test]
    fn test_syntax_error_message() {
        let err = SyntaxError::new(Expected::Token(TokenKind::Becomes), found());
        assert_eq!(err.to_string(), "expected `:=`, found `}`");
        assert_eq!(err.code(), ErrorCode::UnexpectedToken);
    }

    #[test]
    fn test_diagnostic_carries_position() {
        let diag: Diagnostic = SyntaxError::new(Expected::Command, found()).into();
        assert_eq!(diag.kind, DiagnosticKind::Parser);
        assert_eq!(diag.code, Some(ErrorCode::ExpectedCommand));
        assert_eq!(diag.position, Some(Position::new(2, 4)));
        assert_eq!(diag.span, Span::from_usize(7, 8));
        assert_eq!(diag.notes, vec!["at line 2, column 4".to_string()]);
    }

    fn report_twice<R: Reporter>(mut reporter: R) {
        reporter.report(SyntaxError::new(Expected::Expression, found()));
        reporter.report(SyntaxError::new(Expected::Parameter, found()));
    }

    #[test]
    fn test_reporter_through_mut_ref() {
        let mut errors: Vec<SyntaxError> = Vec::new();
        report_twice(&mut errors);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[1].expected, Expected::Parameter);
    }
}
