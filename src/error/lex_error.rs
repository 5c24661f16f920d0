use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Found a character that does not start any token.
    #[error("Error at position {position}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
    /// A run of digits and separators is not a valid number.
    #[error("Error at position {position}: Malformed number '{literal}'.")]
    MalformedNumber {
        /// The text of the rejected literal.
        literal:  String,
        /// Byte offset where the literal starts.
        position: usize,
    },
}

impl LexError {
    /// Byte offset in the input where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. } | Self::MalformedNumber { position, .. } => {
                *position
            },
        }
    }
}
