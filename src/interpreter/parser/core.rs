use std::iter::Peekable;

use log::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How many parentheses, `^` operators, `log` prefixes and negations may
/// enclose one another. Each level costs a bounded number of stack frames in
/// the parser and evaluator; sums and products of any length do not count.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `depth`: Nesting depth of the enclosing constructs, `0` at top level.
///
/// # Returns
/// The parsed expression node. Tokens after the expression are left in the
/// iterator.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, depth)
}

/// Parses a whole token sequence as exactly one expression.
///
/// # Errors
/// - `EmptyExpression` if there are no tokens.
/// - `UnexpectedTrailingTokens` if tokens remain after a complete expression.
/// - `NestingTooDeep` if constructs nest deeper than [`MAX_NESTING_DEPTH`].
/// - Any error from [`parse_expression`].
///
/// # Example
/// ```
/// use calcup::{
///     config::DecimalSeparator,
///     error::ParseError,
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let tokens = tokenize("2 + 3 * 4", DecimalSeparator::Point).unwrap();
/// assert_eq!(parse(&tokens).unwrap().to_string(), "(2 + (3 * 4))");
///
/// let tokens = tokenize("2 3", DecimalSeparator::Point).unwrap();
/// assert!(matches!(parse(&tokens),
///                  Err(ParseError::UnexpectedTrailingTokens { position: 2, .. })));
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                          position: *position, });
    }

    trace!("parsed {expr}");
    Ok(expr)
}

/// Returns the depth one level below `depth`, for a construct that starts at
/// `position`.
pub(in crate::interpreter::parser) const fn descend(depth: usize,
                                                    position: usize)
                                                    -> ParseResult<usize> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { position });
    }
    Ok(depth + 1)
}

/// Consumes the next token, failing at the end of input.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>)
                                                          -> ParseResult<&'a (Token, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next().ok_or(ParseError::UnexpectedEndOfInput)
}
