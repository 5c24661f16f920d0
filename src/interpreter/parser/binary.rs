use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Operand},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, descend},
            unary::{parse_log, parse_primary},
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `depth`: Nesting depth of the operands.
///
/// # Returns
/// An `Expr::Chain` of the operands, or the single operand when no operator
/// follows it.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_associative(tokens,
                           depth,
                           parse_multiplicative,
                           &[BinaryOperator::Add, BinaryOperator::Sub])
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`. Operands are `log`
/// expressions, so `log 2 * 3` is `(log 2) * 3`.
///
/// The rule is: `multiplicative := log (("*" | "/") log)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// An `Expr::Chain` combining log-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_associative(tokens,
                           depth,
                           parse_log,
                           &[BinaryOperator::Mul, BinaryOperator::Div])
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`.
/// The exponent is itself a power expression, so it may be negated
/// (`2 ^ -1`) but may not start with `log`. Every `^` nests one level deeper.
///
/// The rule is: `power := primary ("^" power)?`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Nesting depth of the base.
///
/// # Errors
/// `NestingTooDeep` at the `^` that exceeds the nesting limit.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let base = parse_primary(tokens, depth)?;

    if let Some((Token::Caret, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let exponent = parse_power(tokens, descend(depth, position)?)?;
        return Ok(Expr::BinaryOp { left: Box::new(base),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(exponent),
                                   position });
    }

    Ok(base)
}

/// Collects `operand (op operand)*` into one flat [`Expr::Chain`], for the
/// operators listed in `operators`.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 depth: usize,
                                 parse_operand: fn(&mut Peekable<I>, usize) -> ParseResult<Expr>,
                                 operators: &[BinaryOperator])
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let first = parse_operand(tokens, depth)?;
    let mut rest = Vec::new();
    loop {
        let Some((token, position)) = tokens.peek() else {
            break;
        };
        let position = *position;
        match token_to_binary_operator(token) {
            Some(op) if operators.contains(&op) => {
                tokens.next();
                let expr = parse_operand(tokens, depth)?;
                rest.push(Operand { op, expr, position });
            },
            _ => break,
        }
    }

    if rest.is_empty() {
        return Ok(first);
    }
    Ok(Expr::Chain { first: Box::new(first),
                     rest })
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, `^`), otherwise `None`.
///
/// # Example
/// ```
/// use calcup::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Log), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
