//! # calcup
//!
//! calcup is an arithmetic expression evaluator written in Rust.
//! It tokenizes an expression, parses it against a five-tier precedence
//! grammar and reduces it to a single double precision number.
//!
//! ```text
//! expr      := term (('+' | '-') term)*
//! term      := logexpr (('*' | '/') logexpr)*
//! logexpr   := 'log' powexpr | powexpr
//! powexpr   := primary ('^' powexpr)?
//! primary   := NUMBER | '-' negatable | '(' expr ')'
//! negatable := NUMBER | '(' expr ')' | 'log' powexpr
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::trace;

use crate::{
    config::Config,
    error::EvalError,
    interpreter::{evaluator::core::eval, lexer::tokenize, parser::core::parse},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The tree is built by the parser and walked by the
/// evaluator.
pub mod ast;
/// Evaluation settings.
///
/// Holds the decimal separator used by the lexer and by result formatting,
/// and the number of fractional digits printed. Settings are passed
/// explicitly; nothing is read from process-wide locale state during an
/// evaluation.
pub mod config;
/// Provides unified error types for lexing and parsing.
///
/// Errors carry the byte offset they refer to, so callers can point at the
/// offending part of the input.
pub mod error;
/// Orchestrates the lexing, parsing and evaluation phases.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive prompt.
///
/// Reads expressions line by line, prints each result or a fixed error
/// message, and stops at `exit`.
pub mod repl;
/// General helpers used by the prompt, such as result formatting.
pub mod util;

/// Evaluates an expression with the default configuration.
///
/// The decimal separator is `.`. See [`evaluate_with`].
///
/// # Examples
/// ```
/// use calcup::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
/// assert_eq!(evaluate("2^3^2"), Ok(512.0));
/// assert_eq!(evaluate("1/0"), Ok(f64::INFINITY));
/// assert!(evaluate("(2+3").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, EvalError> {
    evaluate_with(source, &Config::default())
}

/// Evaluates one expression and returns its value.
///
/// The input is tokenized with the configured decimal separator, parsed into
/// a tree and reduced. Every intermediate structure is owned by this call
/// and released before it returns, on success and on failure alike.
///
/// # Errors
/// Returns `EvalError::Lex` for text that is not a token and
/// `EvalError::Parse` for tokens that do not form exactly one expression.
///
/// # Examples
/// ```
/// use calcup::{
///     config::{Config, DecimalSeparator},
///     error::{EvalError, LexError},
///     evaluate_with,
/// };
///
/// let config = Config::default().with_separator(DecimalSeparator::Comma);
/// assert_eq!(evaluate_with("0,5 * 4", &config), Ok(2.0));
/// assert_eq!(evaluate_with("0.5 * 4", &config),
///            Err(EvalError::Lex(LexError::UnexpectedCharacter { character: '.',
///                                                               position:  1, })));
/// ```
pub fn evaluate_with(source: &str, config: &Config) -> Result<f64, EvalError> {
    let tokens = tokenize(source, config.decimal_separator)?;
    let expr = parse(&tokens)?;
    let value = eval(&expr);

    trace!("{source:?} = {value}");
    Ok(value)
}
