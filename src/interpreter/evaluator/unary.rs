use crate::ast::UnaryOperator;

/// Applies a prefix operator to a number.
///
/// `log` is the natural logarithm. Zero gives negative infinity and a
/// negative or NaN argument gives NaN, which is returned like any other
/// result.
///
/// # Example
/// ```
/// use calcup::{ast::UnaryOperator, interpreter::evaluator::unary::eval_unary};
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, 5.0), -5.0);
/// assert_eq!(eval_unary(UnaryOperator::Ln, 1.0), 0.0);
/// assert!(eval_unary(UnaryOperator::Ln, -1.0).is_nan());
/// ```
#[must_use]
pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
    match op {
        UnaryOperator::Negate => -value,
        UnaryOperator::Ln => value.ln(),
    }
}
