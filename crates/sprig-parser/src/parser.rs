//! The Sprig parser.

use sprig_common::Position;
use sprig_lexer::{Token, TokenKind};
use sprig_syntax::*;

use crate::cursor::TokenCursor;
use crate::error::{Expected, ParseError, Reporter, SyntaxError};
use crate::recovery::{continues_declarations, ends_command};

/// The Sprig parser.
///
/// Every `parse_*` method recognizes one nonterminal and always returns a
/// node. Syntax errors go to the reporter and show up in the tree as error
/// placeholders; they never abort the parse.
pub struct Parser<R = Vec<SyntaxError>> {
    cursor: TokenCursor,
    reporter: R,
    error_count: usize,
}

impl Parser {
    /// Create a parser that collects syntax errors into a `Vec`.
    pub fn new(tokens: Vec<Token>) -> Result<Self, ParseError> {
        Self::with_reporter(tokens, Vec::new())
    }

    pub fn errors(self) -> Vec<SyntaxError> {
        self.reporter
    }
}

impl<R: Reporter> Parser<R> {
    pub fn with_reporter(tokens: Vec<Token>, reporter: R) -> Result<Self, ParseError> {
        Ok(Self::from_cursor(TokenCursor::new(tokens)?, reporter))
    }

    pub fn from_cursor(cursor: TokenCursor, reporter: R) -> Self {
        Self {
            cursor,
            reporter,
            error_count: 0,
        }
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Number of syntax errors reported so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn cursor(&self) -> &TokenCursor {
        &self.cursor
    }

    /// Parse a complete program: one command, then end of input.
    ///
    /// A token left over after the command is reported and skipped, and
    /// parsing resumes after it, so the root sequence keeps every command
    /// that follows.
    pub fn parse_program(&mut self) -> Program {
        let position = self.current_position();
        let first = self.parse_single_command();
        let mut rest = Vec::new();
        self.parse_more_commands(&mut rest);

        while !self.cursor.at_end() {
            self.error(Expected::Token(TokenKind::Eof));
            self.advance();
            if self.check(TokenKind::Semicolon) {
                self.parse_more_commands(&mut rest);
            } else if !ends_command(self.current_kind()) {
                rest.push(self.parse_single_command());
                self.parse_more_commands(&mut rest);
            }
        }

        tracing::debug!(
            tokens = self.cursor.index() + 1,
            errors = self.error_count,
            "parsed program"
        );

        Program::new(Command::sequence(first, rest), position)
    }

    // ========== Commands ==========

    /// `Command := SingleCommand (';' SingleCommand)*`
    pub fn parse_command(&mut self) -> Command {
        let first = self.parse_single_command();
        let mut rest = Vec::new();
        self.parse_more_commands(&mut rest);
        Command::sequence(first, rest)
    }

    /// `(';' SingleCommand)*`, appended to `commands`.
    fn parse_more_commands(&mut self, commands: &mut Vec<Command>) {
        while self.eat(TokenKind::Semicolon) {
            commands.push(self.parse_single_command());
        }
    }

    pub fn parse_single_command(&mut self) -> Command {
        let start = self.current_position();

        match self.current_kind() {
            TokenKind::Identifier => self.parse_assign_or_call(),
            TokenKind::LBrace => self.parse_block(TokenKind::RBrace),
            TokenKind::Begin => self.parse_block(TokenKind::End),
            TokenKind::Let => {
                self.advance();
                let declaration = self.parse_declaration();
                self.expect(TokenKind::In);
                let body = self.parse_single_command();
                Command::new(
                    CommandKind::Let {
                        declaration,
                        body: Box::new(body),
                    },
                    start,
                )
            }
            TokenKind::If => self.parse_if(),
            TokenKind::While => {
                self.advance();
                let condition = self.parse_condition();
                self.expect(TokenKind::Do);
                let body = self.parse_command();
                Command::new(
                    CommandKind::While {
                        condition,
                        body: Box::new(body),
                    },
                    start,
                )
            }
            TokenKind::With => {
                self.advance();
                let declaration = self.parse_declaration();
                self.expect(TokenKind::Do);
                let body = self.parse_command();
                self.expect(TokenKind::Done);
                Command::new(
                    CommandKind::With {
                        declaration,
                        body: Box::new(body),
                    },
                    start,
                )
            }
            kind if ends_command(kind) => Command::empty(start),
            _ => {
                self.error(Expected::Command);
                self.advance();
                Command::error(start)
            }
        }
    }

    fn parse_assign_or_call(&mut self) -> Command {
        let name = self.parse_identifier();
        let start = name.position;

        match self.current_kind() {
            TokenKind::Becomes => {
                self.advance();
                let value = self.parse_expression();
                Command::new(
                    CommandKind::Assign {
                        target: name,
                        value,
                    },
                    start,
                )
            }
            TokenKind::LParen => {
                self.advance();
                let argument = self.parse_parameter();
                self.expect(TokenKind::RParen);
                Command::new(CommandKind::Call { name, argument }, start)
            }
            _ => {
                // The identifier was consumed, so the cursor has moved on.
                self.error(Expected::AssignOrCall);
                Command::error(start)
            }
        }
    }

    /// `{ Command }` or `begin Command end`. The inner command is returned
    /// as-is.
    fn parse_block(&mut self, closing: TokenKind) -> Command {
        self.advance(); // { or begin
        let inner = self.parse_command();
        self.expect(closing);
        inner
    }

    fn parse_if(&mut self) -> Command {
        let start = self.current_position();
        self.advance(); // if

        let condition = self.parse_condition();
        let unless = if self.eat(TokenKind::Unless) {
            Some(self.parse_condition())
        } else {
            None
        };
        self.eat(TokenKind::Then);

        let then_branch = Box::new(self.parse_command());
        self.expect(TokenKind::Else);
        let else_branch = Box::new(self.parse_single_command());

        let kind = match unless {
            Some(unless) => CommandKind::IfUnless {
                condition,
                unless,
                then_branch,
                else_branch,
            },
            None => CommandKind::If {
                condition,
                then_branch,
                else_branch,
            },
        };
        Command::new(kind, start)
    }

    /// `( Expression )`
    fn parse_condition(&mut self) -> Expression {
        self.expect(TokenKind::LParen);
        let condition = self.parse_expression();
        self.expect(TokenKind::RParen);
        condition
    }

    // ========== Declarations ==========

    /// `Declaration := SingleDeclaration (';' SingleDeclaration)*`
    ///
    /// A `;` is only taken when the token after it is an identifier;
    /// otherwise it is left for the enclosing command.
    pub fn parse_declaration(&mut self) -> Declaration {
        let first = self.parse_single_declaration();
        let mut rest = Vec::new();
        while self.check(TokenKind::Semicolon) && continues_declarations(self.cursor.peek(1).kind)
        {
            self.advance(); // ;
            rest.push(self.parse_single_declaration());
        }
        Declaration::sequence(first, rest)
    }

    pub fn parse_single_declaration(&mut self) -> Declaration {
        let start = self.current_position();
        let name = self.parse_identifier();

        match self.current_kind() {
            TokenKind::Is => {
                self.advance();
                let value = self.parse_expression();
                Declaration::new(DeclarationKind::Const { name, value }, start)
            }
            TokenKind::Colon => {
                self.advance();
                let ty = self.parse_type_denoter();
                Declaration::new(DeclarationKind::Var { name, ty }, start)
            }
            _ => {
                let position = self.current_position();
                self.error(Expected::Declaration);
                self.advance();
                Declaration::error(position)
            }
        }
    }

    pub fn parse_type_denoter(&mut self) -> TypeDenoter {
        TypeDenoter::new(self.parse_identifier())
    }

    // ========== Expressions ==========

    /// `Expression := PrimaryExpression (Operator PrimaryExpression)*`
    ///
    /// All operators share one level and group left to right, so
    /// `1 + 2 * 3` is `(1 + 2) * 3`.
    pub fn parse_expression(&mut self) -> Expression {
        let mut left = self.parse_primary_expression();

        while self.check(TokenKind::Operator) {
            let op = self.parse_operator();
            let right = self.parse_primary_expression();
            left = Expression::binary(left, op, right);
        }

        left
    }

    pub fn parse_primary_expression(&mut self) -> Expression {
        let start = self.current_position();

        match self.current_kind() {
            TokenKind::IntLiteral => {
                let literal = self.parse_integer_literal();
                Expression::new(ExprKind::Integer(literal), start)
            }
            TokenKind::CharLiteral => {
                let literal = self.parse_character_literal();
                Expression::new(ExprKind::Character(literal), start)
            }
            TokenKind::Identifier => {
                let ident = self.parse_identifier();
                Expression::new(ExprKind::Identifier(ident), start)
            }
            TokenKind::Operator => {
                // Prefix chains are collected in a loop and folded from the
                // innermost operator outwards.
                let mut ops = Vec::new();
                while self.check(TokenKind::Operator) {
                    ops.push(self.parse_operator());
                }
                let operand = self.parse_primary_expression();
                ops.into_iter()
                    .rev()
                    .fold(operand, |operand, op| Expression::unary(op, operand))
            }
            TokenKind::LParen => {
                self.advance(); // (
                let inner = self.parse_expression();
                self.expect(TokenKind::RParen);
                inner
            }
            _ => {
                self.error(Expected::Expression);
                self.advance();
                Expression::error(start)
            }
        }
    }

    // ========== Parameters ==========

    /// The single argument between a call's parentheses. A `)` is left for
    /// the caller.
    pub fn parse_parameter(&mut self) -> Parameter {
        let start = self.current_position();

        match self.current_kind() {
            TokenKind::RParen => Parameter::new(ParamKind::Blank, start),
            TokenKind::In => {
                self.advance();
                let value = self.parse_expression();
                Parameter::new(ParamKind::Value(value), start)
            }
            TokenKind::Out => {
                self.advance();
                let name = self.parse_identifier();
                Parameter::new(ParamKind::Var(name), start)
            }
            _ => {
                self.error(Expected::Parameter);
                self.advance();
                Parameter::error(start)
            }
        }
    }

    // ========== Leaves ==========

    /// On a mismatch the identifier comes back with empty text.
    pub fn parse_identifier(&mut self) -> Identifier {
        let (text, position) = self.expect_leaf(TokenKind::Identifier);
        Identifier::new(text, position)
    }

    pub fn parse_operator(&mut self) -> Operator {
        let (text, position) = self.expect_leaf(TokenKind::Operator);
        Operator::new(text, position)
    }

    pub fn parse_integer_literal(&mut self) -> IntegerLiteral {
        let (text, position) = self.expect_leaf(TokenKind::IntLiteral);
        IntegerLiteral::new(text, position)
    }

    pub fn parse_character_literal(&mut self) -> CharacterLiteral {
        let (text, position) = self.expect_leaf(TokenKind::CharLiteral);
        CharacterLiteral::new(text, position)
    }

    /// Consume a leaf token and return its text and position. On a mismatch
    /// the text is empty and the position is the offending token's.
    fn expect_leaf(&mut self, kind: TokenKind) -> (String, Position) {
        let token = self.cursor.current();
        let position = token.position;
        let text = if token.kind == kind {
            token.text.clone()
        } else {
            String::new()
        };
        self.expect(kind);
        (text, position)
    }

    // ========== Token Helpers ==========

    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    fn current_position(&self) -> Position {
        self.cursor.current_position()
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    fn advance(&mut self) {
        self.cursor.advance();
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `kind`. On a mismatch, report it and skip the unexpected
    /// token anyway so the parse always makes progress.
    fn expect(&mut self, kind: TokenKind) {
        if !self.eat(kind) {
            self.error(Expected::Token(kind));
            self.advance();
        }
    }

    fn error(&mut self, expected: Expected) {
        let found = self.cursor.current().clone();
        self.error_count += 1;
        self.reporter.report(SyntaxError::new(expected, found));
    }
}
