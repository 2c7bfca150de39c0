//! Read cursor over a pre-built token sequence.

use sprig_common::Position;
use sprig_lexer::{Token, TokenKind};

use crate::ParseError;

/// A read cursor over tokens that end in [`TokenKind::Eof`].
///
/// The final token is sticky: once reached, [`advance`](Self::advance) is a
/// no-op, and reads past it return it again. The cursor never indexes out of
/// bounds.
#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenCursor {
    /// Wrap `tokens`, which must be non-empty and end with end of input.
    pub fn new(tokens: Vec<Token>) -> Result<Self, ParseError> {
        match tokens.last() {
            None => return Err(ParseError::EmptyInput),
            Some(last) if last.kind != TokenKind::Eof => {
                return Err(ParseError::MissingEndOfInput {
                    found: last.clone(),
                });
            }
            Some(_) => {}
        }
        Ok(Self { tokens, pos: 0 })
    }

    /// Wrap `tokens`, appending an end-of-input token at the last token's
    /// position when the sequence does not already end with one.
    pub fn terminated(mut tokens: Vec<Token>) -> Self {
        if tokens.last().is_none_or(|last| last.kind != TokenKind::Eof) {
            let (position, offset) = tokens
                .last()
                .map_or((Position::START, 0), |last| (last.position, usize::from(last.span.end)));
            tokens.push(Token::eof(position, offset));
        }
        Self { tokens, pos: 0 }
    }

    fn last_index(&self) -> usize {
        self.tokens.len() - 1
    }

    pub fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.last_index())]
    }

    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    pub fn current_position(&self) -> Position {
        self.current().position
    }

    /// The token `n` places after the current one, without consuming
    /// anything. `peek(0)` is the current token.
    pub fn peek(&self, n: usize) -> &Token {
        let index = self.pos.saturating_add(n).min(self.last_index());
        &self.tokens[index]
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    pub fn advance(&mut self) {
        if self.pos < self.last_index() {
            self.pos += 1;
        }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.last_index()
    }

    /// Zero-based index of the current token.
    pub fn index(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_common::Span;

    fn token(kind: TokenKind, text: &str, column: u32) -> Token {
        let start = column as usize - 1;
        Token::new(
            kind,
            text,
            Position::new(1, column),
            Span::from_usize(start, start + text.len()),
        )
    }

    fn tokens() -> Vec<Token> {
        vec![
            token(TokenKind::Identifier, "x", 1),
            token(TokenKind::Semicolon, ";", 2),
            Token::eof(Position::new(1, 3), 2),
        ]
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(TokenCursor::new(vec![]).unwrap_err(), ParseError::EmptyInput);
    }

    #[test]
    fn test_missing_eof_is_rejected() {
        let err = TokenCursor::new(vec![token(TokenKind::Identifier, "x", 1)]).unwrap_err();
        assert!(matches!(err, ParseError::MissingEndOfInput { .. }));
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut cursor = TokenCursor::new(tokens()).unwrap();
        for _ in 0..10 {
            cursor.advance();
        }
        assert!(cursor.at_end());
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.current_kind(), TokenKind::Eof);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let cursor = TokenCursor::new(tokens()).unwrap();
        assert_eq!(cursor.peek(1).kind, TokenKind::Semicolon);
        assert_eq!(cursor.peek(99).kind, TokenKind::Eof);
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.current_kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_terminated_appends_missing_eof() {
        let cursor = TokenCursor::terminated(vec![]);
        assert!(cursor.at_end());
        assert_eq!(cursor.current_position(), Position::START);

        let mut cursor = TokenCursor::terminated(vec![token(TokenKind::Identifier, "x", 1)]);
        cursor.advance();
        assert!(cursor.at_end());
        assert_eq!(cursor.current().span, Span::point(1));
    }

    #[test]
    fn test_terminated_keeps_existing_eof() {
        let mut cursor = TokenCursor::terminated(tokens());
        cursor.advance();
        cursor.advance();
        assert!(cursor.at_end());
        assert_eq!(cursor.index(), 2);
    }
}
