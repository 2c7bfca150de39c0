//! The Sprig lexer.

use crate::token::{Token, TokenKind};
use logos::Logos;
use sprig_common::{LineIndex, Span};
use sprig_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};

/// The Sprig lexer.
///
/// Converts source code into a sequence of tokens terminated by exactly one
/// [`TokenKind::Eof`]. Unrecognized input becomes a [`TokenKind::Error`]
/// token plus a diagnostic, so the token stream stays complete and the parser
/// decides how to recover.
pub struct Lexer<'src> {
    source: &'src str,
    lines: LineIndex<'src>,
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            lines: LineIndex::new(source),
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire source and return tokens and diagnostics.
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let source = self.source;
        let mut tokens = Vec::new();

        for (result, range) in TokenKind::lexer(source).spanned() {
            let span = Span::from_usize(range.start, range.end);
            let text = source.get(range).unwrap_or_default();
            let kind = match result {
                Ok(kind) => kind,
                Err(()) => {
                    self.error_unexpected_char(text, span);
                    TokenKind::Error
                }
            };
            let position = self.lines.position(span.start);
            tokens.push(Token::new(kind, text, position, span));
        }

        let end = source.len();
        tokens.push(Token::eof(self.lines.position(end), end));

        tracing::debug!(
            tokens = tokens.len(),
            errors = self.diagnostics.len(),
            "tokenized source"
        );

        (tokens, self.diagnostics)
    }

    /// Report an unexpected character error.
    fn error_unexpected_char(&mut self, text: &str, span: Span) {
        let position = self.lines.position(span.start);
        self.diagnostics.push(
            Diagnostic::error(
                DiagnosticKind::Lexer,
                span,
                format!("unexpected character: '{}'", text),
            )
            .with_code(ErrorCode::UnexpectedCharacter)
            .with_position(position)
            .with_label(Label::new(span, "unexpected character here")),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let (tokens, _) = Lexer::new(source).tokenize();
        tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_keywords_win_over_identifiers() {
        assert_eq!(
            kinds("if iffy in out"),
            vec![
                TokenKind::If,
                TokenKind::Identifier,
                TokenKind::In,
                TokenKind::Out,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_becomes_is_one_token() {
        assert_eq!(
            kinds("x := y : T"),
            vec![
                TokenKind::Identifier,
                TokenKind::Becomes,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::Identifier,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_comment_runs_to_end_of_line() {
        assert_eq!(
            kinds("a ! ignored := 1\nb"),
            vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_unexpected_character() {
        let (tokens, diags) = Lexer::new("x # y").tokenize();
        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert_eq!(tokens[1].text, "#");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(ErrorCode::UnexpectedCharacter));
    }

    #[test]
    fn test_eof_position() {
        let (tokens, _) = Lexer::new("a\nbc").tokenize();
        let eof = tokens.last().unwrap();
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!((eof.position.line, eof.position.column), (2, 3));
        assert!(eof.span.is_empty());
    }
}
