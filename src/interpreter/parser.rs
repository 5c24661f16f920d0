/// Binary operator parsing.
///
/// Implements the additive, multiplicative and power tiers of the grammar,
/// including associativity handling.
pub mod binary;

/// Core parsing logic.
///
/// Contains the main entry points for expression parsing and the check that
/// the whole token sequence forms one expression.
pub mod core;

/// Unary and primary parsing.
///
/// Handles the `log` prefix, unary minus, number literals and parenthesized
/// groups.
pub mod unary;
