//! Parser for Sprig.
//!
//! This crate provides a recursive descent parser that converts
//! tokens into an abstract syntax tree.
//!
//! ## Error Recovery
//!
//! The parser never stops at a syntax error. A mismatched token is reported
//! and skipped, and a construct that cannot start at the current token
//! becomes an error placeholder node. Every such path consumes at least one
//! token, so parsing always terminates and every error in a program is
//! reported in a single pass.

mod cursor;
mod error;
mod parser;
mod recovery;

pub use cursor::TokenCursor;
pub use error::{Expected, ParseError, Reporter, SyntaxError};
pub use parser::Parser;
pub use recovery::{COMMAND_FOLLOW, continues_declarations, ends_command};

use sprig_diagnostic::Diagnostic;
use sprig_lexer::{Lexer, Token};
use sprig_syntax::Program;

/// Parse source code into an AST.
///
/// Lexer diagnostics come first, followed by parser diagnostics in source
/// order.
pub fn parse(source: &str) -> (Program, Vec<Diagnostic>) {
    let lexer = Lexer::new(source);
    let (tokens, mut diagnostics) = lexer.tokenize();

    let mut parser = Parser::from_cursor(TokenCursor::terminated(tokens), Vec::<Diagnostic>::new());
    let program = parser.parse_program();

    diagnostics.extend(parser.into_reporter());
    (program, diagnostics)
}

/// Parse an already tokenized program.
///
/// Fails only if `tokens` breaks the token stream contract (empty, or not
/// terminated by end of input); syntax errors are returned alongside the tree.
pub fn parse_tokens(tokens: Vec<Token>) -> Result<(Program, Vec<SyntaxError>), ParseError> {
    let mut parser = Parser::new(tokens)?;
    let program = parser.parse_program();
    Ok((program, parser.errors()))
}
