//! Error codes for Sprig diagnostics.

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lexer errors (E0001 - E0099)
    UnexpectedCharacter,

    // Parser errors (E0100 - E0199)
    UnexpectedToken,
    ExpectedExpression,
    ExpectedCommand,
    ExpectedDeclaration,
    ExpectedParameter,
    TrailingInput,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::UnexpectedCharacter => "E0001",

            // Parser
            ErrorCode::UnexpectedToken => "E0100",
            ErrorCode::ExpectedExpression => "E0101",
            ErrorCode::ExpectedCommand => "E0106",
            ErrorCode::ExpectedDeclaration => "E0107",
            ErrorCode::ExpectedParameter => "E0108",
            ErrorCode::TrailingInput => "E0109",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::ExpectedDeclaration => {
                Some("declare a constant with `name is value` or a variable with `name : Type`")
            }
            ErrorCode::ExpectedParameter => {
                Some("pass a value with `in expr`, a variable with `out name`, or nothing")
            }
            ErrorCode::TrailingInput => Some("separate commands with `;` or wrap them in `{ }`"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_grouped_by_phase() {
        assert!(ErrorCode::UnexpectedCharacter.as_str().starts_with("E00"));
        for code in [
            ErrorCode::UnexpectedToken,
            ErrorCode::ExpectedExpression,
            ErrorCode::ExpectedCommand,
            ErrorCode::ExpectedDeclaration,
            ErrorCode::ExpectedParameter,
            ErrorCode::TrailingInput,
        ] {
            assert!(code.as_str().starts_with("E01"), "{:?}", code);
        }
    }
}
