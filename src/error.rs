/// Lexing errors.
///
/// Defines the failures that can occur while turning source text into
/// tokens: characters outside the language and malformed number literals.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building an expression tree
/// from tokens, such as missing operands, unbalanced parentheses or tokens
/// left over after a complete expression.
pub mod parse_error;

use thiserror::Error;

pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any failure of a single evaluation.
///
/// Evaluation itself cannot fail, every arithmetic outcome including infinity
/// and NaN is a value, so the only errors come from the front end. The
/// variants keep the phase that rejected the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The input contains text that is not a token.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form a single expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl EvalError {
    /// Returns the byte offset in the input the error points at, if any.
    ///
    /// # Example
    /// ```
    /// use calcup::evaluate;
    ///
    /// let err = evaluate("1 + x").unwrap_err();
    /// assert_eq!(err.position(), Some(4));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.position()),
            Self::Parse(e) => e.position(),
        }
    }
}
