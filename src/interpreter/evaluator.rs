/// Binary operator evaluation logic.
///
/// Handles the arithmetic operators `+`, `-`, `*`, `/` and `^`.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements negation and the natural logarithm.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the tree walk that reduces an expression to a single number.
pub mod core;
