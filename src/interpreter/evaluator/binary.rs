use crate::ast::BinaryOperator;

/// Applies a binary arithmetic operator to two numbers.
///
/// All operators follow IEEE 754 double precision semantics; there are no
/// error cases. `^` uses [`f64::powf`], so `0 ^ 0` is `1` and a negative base
/// with a fractional exponent is NaN.
///
/// # Example
/// ```
/// use calcup::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Sub, 7.0, 2.0), 5.0);
/// assert_eq!(eval_binary(BinaryOperator::Pow, 2.0, 10.0), 1024.0);
/// assert!(eval_binary(BinaryOperator::Div, 0.0, 0.0).is_nan());
/// ```
#[must_use]
pub fn eval_binary(op: BinaryOperator, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinaryOperator::Add => lhs + rhs,
        BinaryOperator::Sub => lhs - rhs,
        BinaryOperator::Mul => lhs * rhs,
        BinaryOperator::Div => lhs / rhs,
        BinaryOperator::Pow => lhs.powf(rhs),
    }
}
