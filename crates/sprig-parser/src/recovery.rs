//! Token sets that drive recovery decisions.

use sprig_lexer::TokenKind;

/// Tokens that may directly follow an empty command.
///
/// A command slot holding one of these is the empty command, with nothing
/// consumed. Any other token that cannot start a command is an error.
pub const COMMAND_FOLLOW: &[TokenKind] = &[
    TokenKind::Semicolon,
    TokenKind::RBrace,
    TokenKind::End,
    TokenKind::Else,
    TokenKind::Done,
    TokenKind::Eof,
];

/// Check if an empty command may end right before this token.
pub fn ends_command(kind: TokenKind) -> bool {
    COMMAND_FOLLOW.contains(&kind)
}

/// Whether a `;` followed by `next` continues a declaration list.
///
/// Otherwise the `;` belongs to the enclosing command.
pub fn continues_declarations(next: TokenKind) -> bool {
    next == TokenKind::Identifier
}
