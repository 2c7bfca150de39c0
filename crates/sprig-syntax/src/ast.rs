//! Top-level AST definitions and leaf nodes.

use std::fmt;

use crate::Command;
use sprig_common::Position;

/// A complete program: exactly one root command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub command: Command,
    pub position: Position,
}

impl Program {
    pub fn new(command: Command, position: Position) -> Self {
        Self { command, position }
    }

    /// Number of error placeholders anywhere in the tree.
    pub fn error_count(&self) -> usize {
        self.command.error_count()
    }
}

/// An identifier as written in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub text: String,
    pub position: Position,
}

impl Identifier {
    pub fn new(text: impl Into<String>, position: Position) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// An operator symbol such as `+` or `<=`.
///
/// Operators carry no precedence; the spelling is all there is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub text: String,
    pub position: Position,
}

impl Operator {
    pub fn new(text: impl Into<String>, position: Position) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// An integer literal, kept as its source digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteral {
    pub text: String,
    pub position: Position,
}

impl IntegerLiteral {
    pub fn new(text: impl Into<String>, position: Position) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }

    /// The numeric value, or `None` if it does not fit in an `i64`.
    pub fn value(&self) -> Option<i64> {
        self.text.parse().ok()
    }
}

/// A character literal, kept with its quotes: `'a'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterLiteral {
    pub text: String,
    pub position: Position,
}

impl CharacterLiteral {
    pub fn new(text: impl Into<String>, position: Position) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }

    /// The character between the quotes.
    pub fn value(&self) -> Option<char> {
        let inner = self.text.strip_prefix('\'')?.strip_suffix('\'')?;
        let mut chars = inner.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_value() {
        assert_eq!(IntegerLiteral::new("42", Position::START).value(), Some(42));
        assert_eq!(
            IntegerLiteral::new("99999999999999999999", Position::START).value(),
            None
        );
    }

    #[test]
    fn test_character_value() {
        assert_eq!(CharacterLiteral::new("'a'", Position::START).value(), Some('a'));
        assert_eq!(CharacterLiteral::new("'''", Position::START).value(), Some('\''));
        assert_eq!(CharacterLiteral::new("a", Position::START).value(), None);
    }
}
