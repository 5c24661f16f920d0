use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that cannot appear at this point of an expression.
    #[error("Error at position {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token in the input.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    #[error("Error: Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at position {position}: Expected closing parenthesis ')' for this '(' but none found.")]
    ExpectedClosingParen {
        /// Byte offset of the unmatched opening parenthesis.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Error at position {position}: Extra tokens after expression, starting with: {token}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of the first extra token.
        position: usize,
    },
    /// Parentheses, `^`, `log` or negations are nested deeper than
    /// [`MAX_NESTING_DEPTH`](crate::interpreter::parser::core::MAX_NESTING_DEPTH).
    #[error("Error at position {position}: Expression is nested too deeply.")]
    NestingTooDeep {
        /// Byte offset of the token that exceeded the limit.
        position: usize,
    },
    /// The input holds no tokens at all.
    #[error("Error: Empty expression.")]
    EmptyExpression,
}

impl ParseError {
    /// Byte offset in the input the error points at, if the error has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::ExpectedClosingParen { position }
            | Self::NestingTooDeep { position }
            | Self::UnexpectedTrailingTokens { position, .. } => Some(*position),
            Self::UnexpectedEndOfInput | Self::EmptyExpression => None,
        }
    }
}
