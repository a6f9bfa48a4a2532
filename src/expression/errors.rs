use thiserror::Error;

/// Syntax errors raised while parsing an arithmetic expression.
///
/// Positions are indices into the expression after whitespace has been removed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { found: char, position: usize },
    #[error("Mismatched parentheses at position {position}")]
    MismatchedParentheses { position: usize },
    #[error("Unexpected character at end of expression (position {position})")]
    TrailingInput { position: usize },
    #[error("Invalid number literal: {0}")]
    InvalidNumber(String),
    #[error("Parentheses nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
