use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_power,
            core::{ParseResult, descend, expect_token, parse_expression},
        },
    },
};

/// Parses a `log` expression.
///
/// `log` is a prefix operator that binds looser than `^` and tighter than
/// `*`: `log 2^3` is `log(8)` and `log 2 * 3` is `log(2) * 3`. Its argument is
/// a power expression, which cannot itself start with `log`; nested
/// logarithms need parentheses.
///
/// Grammar:
/// ```text
///     log := "log" power
///          | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth; the argument sits one level deeper.
///
/// # Returns
/// An [`Expr::UnaryOp`] with [`UnaryOperator::Ln`], or the power expression.
pub(crate) fn parse_log<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::Log, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let argument = parse_power(tokens, descend(depth, position)?)?;
        return Ok(Expr::UnaryOp { op: UnaryOperator::Ln,
                                  expr: Box::new(argument),
                                  position });
    }

    parse_power(tokens, depth)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - number literals
/// - negations (`-x`)
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "-" negatable
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match expect_token(tokens)? {
        (Token::Number(value), position) => Ok(Expr::Literal { value:    *value,
                                                               position: *position, }),
        (Token::Minus, position) => parse_negation(tokens, descend(depth, *position)?, *position),
        (Token::LParen, position) => parse_grouping(tokens, descend(depth, *position)?, *position),
        (tok, position) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                             position: *position, }),
    }
}

/// Parses the operand of a unary minus and wraps it in a negation.
///
/// Only a number, a parenthesized expression or a `log` expression can be
/// negated. A second minus (`--2`) is rejected; write `-(-2)` instead.
///
/// Grammar:
/// ```text
///     negatable := NUMBER
///                | "(" expression ")"
///                | log
/// ```
/// Since this sits at the primary level, negation binds tighter than `^`:
/// `-2^2` is `(-2)^2`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the `-`.
/// - `depth`: Nesting depth of the operand.
/// - `position`: Position of the `-` token.
///
/// # Errors
/// - `UnexpectedEndOfInput` if nothing follows the minus.
/// - `UnexpectedToken` if the operand is not negatable.
fn parse_negation<'a, I>(tokens: &mut Peekable<I>,
                        depth: usize,
                        position: usize)
                        -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let operand = match tokens.peek() {
        Some((Token::Log, _)) => parse_log(tokens, depth)?,
        Some((Token::Number(_) | Token::LParen, _)) => parse_primary(tokens, depth)?,
        Some((tok, at)) => {
            return Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                     position: *at, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput),
    };

    Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                       expr: Box::new(operand),
                       position })
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The opening parenthesis has already been consumed. The function parses
/// the enclosed expression and then requires a closing `)`. Failure to find
/// the closing parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `(`.
/// - `depth`: Nesting depth of the enclosed expression.
/// - `position`: Position of the `(` token.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         depth: usize,
                         position: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(tokens, depth)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { position }),
    }
}
