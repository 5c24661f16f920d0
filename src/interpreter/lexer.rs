use std::fmt;

use log::trace;
use logos::Logos;

use crate::{config::DecimalSeparator, error::LexError};

pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFailure)]
#[logos(skip r"[ \n]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5` or `2`.
    ///
    /// The regex accepts both separators so that a literal written with the
    /// wrong one is reported where the foreign character sits.
    #[regex(r"[0-9.,]+", parse_number)]
    Number(f64),
    /// `log`, the natural logarithm prefix operator.
    #[token("log")]
    Log,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Log => f.write_str("log"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Caret => f.write_str("^"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexerExtras {
    /// The separator accepted inside number literals.
    pub separator: DecimalSeparator,
}

/// Why logos rejected a slice. Turned into a [`LexError`] by [`tokenize`],
/// which knows the slice position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LexFailure {
    /// No token starts here.
    #[default]
    Unrecognized,
    /// A number literal contains the separator that is not configured, at
    /// the given offset inside the literal.
    ForeignSeparator(usize),
    /// More than one separator, or no digit at all.
    MalformedNumber,
}

/// Parses a number literal written with the configured separator.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(LexFailure)`: If the slice uses the other separator, uses the
///   separator twice or has no digits.
fn parse_number(lex: &mut logos::Lexer<Token>) -> Result<f64, LexFailure> {
    let slice = lex.slice();
    let separator = lex.extras.separator.as_char();

    if let Some(offset) = slice.find(|c: char| !c.is_ascii_digit() && c != separator) {
        return Err(LexFailure::ForeignSeparator(offset));
    }
    if slice.matches(separator).count() > 1 || !slice.bytes().any(|b| b.is_ascii_digit()) {
        return Err(LexFailure::MalformedNumber);
    }

    slice.replace(separator, ".")
         .parse()
         .map_err(|_| LexFailure::MalformedNumber)
}

/// Converts source text into tokens paired with their byte offsets.
///
/// Spaces and newlines between tokens are skipped. The first character that
/// cannot start a token aborts lexing; no partial token list is returned.
///
/// # Errors
/// - `LexError::UnexpectedCharacter` for a character outside the language,
///   including the decimal separator that is not configured.
/// - `LexError::MalformedNumber` for a literal with several separators or no
///   digits.
///
/// # Example
/// ```
/// use calcup::{
///     config::DecimalSeparator,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("log 2,5", DecimalSeparator::Comma).unwrap();
/// assert_eq!(tokens, vec![(Token::Log, 0), (Token::Number(2.5), 4)]);
/// ```
pub fn tokenize(source: &str, separator: DecimalSeparator) -> LexResult<Vec<(Token, usize)>> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { separator });
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(failure) => return Err(lex_error(source, lexer.slice(), position, &failure)),
        }
    }

    trace!("lexed {} tokens from {source:?}", tokens.len());
    Ok(tokens)
}

/// Builds the public error for a failure at `position`.
fn lex_error(source: &str, slice: &str, position: usize, failure: &LexFailure) -> LexError {
    let character_at = |offset: usize| {
        let position = position + offset;
        LexError::UnexpectedCharacter { character: source[position..].chars()
                                                                     .next()
                                                                     .unwrap_or_default(),
                                        position }
    };

    match failure {
        LexFailure::Unrecognized => character_at(0),
        LexFailure::ForeignSeparator(offset) => character_at(*offset),
        LexFailure::MalformedNumber => LexError::MalformedNumber { literal: slice.to_string(),
                                                                   position },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source, DecimalSeparator::Point).unwrap()
                                                 .into_iter()
                                                 .map(|(tok, _)| tok)
                                                 .collect()
    }

    #[test]
    fn operators_and_parens() {
        assert_eq!(kinds("+-*/^()"),
                   vec![Token::Plus,
                        Token::Minus,
                        Token::Star,
                        Token::Slash,
                        Token::Caret,
                        Token::LParen,
                        Token::RParen]);
    }

    #[test]
    fn whitespace_is_skipped_and_positions_kept() {
        let tokens = tokenize(" 12 +\n3.5 ", DecimalSeparator::Point).unwrap();
        assert_eq!(tokens,
                   vec![(Token::Number(12.0), 1), (Token::Plus, 4), (Token::Number(3.5), 6)]);
    }

    #[test]
    fn blank_input_yields_no_tokens() {
        assert!(kinds("").is_empty());
        assert!(kinds("  \n ").is_empty());
    }

    #[test]
    fn leading_and_trailing_separator() {
        assert_eq!(kinds(".5"), vec![Token::Number(0.5)]);
        assert_eq!(kinds("5."), vec![Token::Number(5.0)]);
    }

    #[test]
    fn log_needs_no_word_boundary() {
        assert_eq!(kinds("log2"), vec![Token::Log, Token::Number(2.0)]);
        assert_eq!(kinds("loglog"), vec![Token::Log, Token::Log]);
        assert_eq!(tokenize("logx", DecimalSeparator::Point),
                   Err(LexError::UnexpectedCharacter { character: 'x',
                                                       position:  3, }));
    }

    #[test]
    fn log_is_case_sensitive() {
        assert_eq!(tokenize("LOG 2", DecimalSeparator::Point),
                   Err(LexError::UnexpectedCharacter { character: 'L',
                                                       position:  0, }));
    }

    #[test]
    fn unexpected_characters() {
        assert_eq!(tokenize("1 + a", DecimalSeparator::Point),
                   Err(LexError::UnexpectedCharacter { character: 'a',
                                                       position:  4, }));
        assert_eq!(tokenize("2\t+ 2", DecimalSeparator::Point),
                   Err(LexError::UnexpectedCharacter { character: '\t',
                                                       position:  1, }));
        assert_eq!(tokenize("2 ÷ 2", DecimalSeparator::Point),
                   Err(LexError::UnexpectedCharacter { character: '÷',
                                                       position:  2, }));
    }

    #[test]
    fn comma_separator() {
        let tokens = tokenize("3,25*2", DecimalSeparator::Comma).unwrap();
        assert_eq!(tokens,
                   vec![(Token::Number(3.25), 0), (Token::Star, 4), (Token::Number(2.0), 5)]);
    }

    #[test]
    fn foreign_separator_is_rejected_where_it_sits() {
        assert_eq!(tokenize("3.25", DecimalSeparator::Comma),
                   Err(LexError::UnexpectedCharacter { character: '.',
                                                       position:  1, }));
        assert_eq!(tokenize("1 + 3,25", DecimalSeparator::Point),
                   Err(LexError::UnexpectedCharacter { character: ',',
                                                       position:  5, }));
    }

    #[test]
    fn malformed_numbers() {
        assert_eq!(tokenize("1.2.3", DecimalSeparator::Point),
                   Err(LexError::MalformedNumber { literal:  "1.2.3".to_string(),
                                                   position: 0, }));
        assert_eq!(tokenize("2 * .", DecimalSeparator::Point),
                   Err(LexError::MalformedNumber { literal:  ".".to_string(),
                                                   position: 4, }));
    }
}
