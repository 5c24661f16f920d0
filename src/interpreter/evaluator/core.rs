use crate::{
    ast::{Expr, Operand},
    interpreter::evaluator::{binary::eval_binary, unary::eval_unary},
};

/// Evaluates an expression tree and returns its value.
///
/// Operands are evaluated before their operator (post-order), left operand
/// first. Evaluation cannot fail: division by zero, logarithms of
/// non-positive numbers and similar cases produce infinities or NaN, which
/// propagate through the rest of the computation like any other value.
///
/// A [`Expr::Chain`] is folded in a loop, so only nesting adds stack frames.
///
/// # Example
/// ```
/// use calcup::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::core::eval,
/// };
///
/// let expr = Expr::BinaryOp { left:     Box::new(Expr::Literal { value:    1.0,
///                                                                position: 0, }),
///                             op:       BinaryOperator::Div,
///                             right:    Box::new(Expr::Literal { value:    0.0,
///                                                                position: 2, }),
///                             position: 1, };
///
/// assert_eq!(eval(&expr), f64::INFINITY);
/// ```
#[must_use]
pub fn eval(expr: &Expr) -> f64 {
    match expr {
        Expr::Literal { value, .. } => *value,
        Expr::UnaryOp { op, expr, .. } => eval_unary(*op, eval(expr)),
        Expr::BinaryOp { left, op, right, .. } => {
            let lhs = eval(left);
            let rhs = eval(right);
            eval_binary(*op, lhs, rhs)
        },
        Expr::Chain { first, rest } => {
            rest.iter()
                .fold(eval(first), |acc, Operand { op, expr, .. }| eval_binary(*op, acc, eval(expr)))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::DecimalSeparator,
        interpreter::{lexer::tokenize, parser::core::parse},
    };

    fn run(source: &str) -> f64 {
        eval(&parse(&tokenize(source, DecimalSeparator::Point).unwrap()).unwrap())
    }

    #[test]
    fn arithmetic() {
        assert_eq!(run("2+3"), 5.0);
        assert_eq!(run("2*3+4"), 10.0);
        assert_eq!(run("2+3*4"), 14.0);
        assert_eq!(run("10-4-3"), 3.0);
        assert_eq!(run("64/4/2"), 8.0);
        assert_eq!(run("(2+3)*4"), 20.0);
    }

    #[test]
    fn powers() {
        assert_eq!(run("2^3^2"), 512.0);
        assert_eq!(run("-2^2"), 4.0);
        assert_eq!(run("2^-1"), 0.5);
        assert_eq!(run("0^0"), 1.0);
        assert!(run("-8^(1/3)").is_nan());
    }

    #[test]
    fn logarithms() {
        assert!((run("log2.718281828") - 1.0).abs() < 1e-9);
        assert!((run("-log2") + std::f64::consts::LN_2).abs() < 1e-15);
        assert_eq!(run("log 1"), 0.0);
        assert_eq!(run("log 0"), f64::NEG_INFINITY);
        assert!(run("log(0-1)").is_nan());
        assert!(run("log(0-1) + 1").is_nan());
    }

    #[test]
    fn long_chains_fold_left_to_right() {
        let sum = format!("{}1", "1+".repeat(100_000));
        assert_eq!(run(&sum), 100_001.0);

        let alternating = format!("{}1", "1-1+".repeat(50_000));
        assert_eq!(run(&alternating), 1.0);

        let halving = format!("1024{}", "/2".repeat(10));
        assert_eq!(run(&halving), 1.0);
    }

    #[test]
    fn division_by_zero_is_a_value() {
        assert_eq!(run("1/0"), f64::INFINITY);
        assert_eq!(run("-1/0"), f64::NEG_INFINITY);
        assert!(run("0/0").is_nan());
    }
}
