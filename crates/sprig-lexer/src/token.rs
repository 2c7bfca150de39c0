//! Token definitions for Sprig.

use std::fmt;

use logos::Logos;
use sprig_common::{Position, Span};

/// A token with its kind, source text and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
            span,
        }
    }

    /// The end-of-input token placed at `offset`.
    pub fn eof(position: Position, offset: usize) -> Self {
        Self::new(TokenKind::Eof, "", position, Span::point(offset))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("end of input"),
            TokenKind::IntLiteral
            | TokenKind::CharLiteral
            | TokenKind::Identifier
            | TokenKind::Operator
            | TokenKind::Error => write!(f, "{} `{}`", self.kind, self.text),
            _ => write!(f, "{}", self.kind),
        }
    }
}

/// The kind of a token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"![^\n]*")]
pub enum TokenKind {
    // Literals
    #[regex("[0-9]+")]
    IntLiteral,
    #[regex(r"'[^\r\n]'")]
    CharLiteral,

    #[regex("[A-Za-z][A-Za-z0-9_]*")]
    Identifier,
    #[regex(r"[+\-*/<>=\\&@%^?]+")]
    Operator,

    // Keywords
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("then")]
    Then,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("let")]
    Let,
    #[token("in")]
    In,
    #[token("out")]
    Out,
    #[token("with")]
    With,
    #[token("done")]
    Done,
    #[token("unless")]
    Unless,
    #[token("begin")]
    Begin,
    #[token("end")]
    End,
    #[token("is")]
    Is,

    // Punctuation
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(":=")]
    Becomes,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Special
    Eof,
    Error,
}

impl TokenKind {
    /// How the token is written in source, or a description for token kinds
    /// without fixed spelling.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::IntLiteral => "integer literal",
            TokenKind::CharLiteral => "character literal",
            TokenKind::Identifier => "identifier",
            TokenKind::Operator => "operator",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::Then => "`then`",
            TokenKind::While => "`while`",
            TokenKind::Do => "`do`",
            TokenKind::Let => "`let`",
            TokenKind::In => "`in`",
            TokenKind::Out => "`out`",
            TokenKind::With => "`with`",
            TokenKind::Done => "`done`",
            TokenKind::Unless => "`unless`",
            TokenKind::Begin => "`begin`",
            TokenKind::End => "`end`",
            TokenKind::Is => "`is`",
            TokenKind::Colon => "`:`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Becomes => "`:=`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Eof => "end of input",
            TokenKind::Error => "invalid token",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
