use std::fmt;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node owns its children, so dropping the root releases the whole
/// tree. Each variant records the byte offset of the token that introduced
/// it, which is what error messages and debug output point at.
///
/// Left-associative runs (`1 - 2 + 3`) are stored flat in a [`Expr::Chain`],
/// so the depth of a tree only grows with parentheses, `^`, `log` and
/// negation, never with the length of a sum or product.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number literal.
    Literal {
        /// The constant value.
        value:    f64,
        /// Byte offset in the source.
        position: usize,
    },
    /// A prefix operation (negation or `log`).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// A left-associative run of operators of one precedence tier, such as
    /// `a + b - c` or `a * b / c`, applied left to right.
    Chain {
        /// Leftmost operand.
        first: Box<Self>,
        /// The operators and right operands, in source order. Never empty.
        rest:  Vec<Operand>,
    },
    /// A binary operation, used for the right-associative `^`.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use calcup::ast::Expr;
    ///
    /// let expr = Expr::Literal { value:    1.0,
    ///                            position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. } => *position,
            Self::Chain { first, rest } => match rest.first() {
                Some(operand) => operand.position,
                None => first.position(),
            },
        }
    }
}

/// One `op operand` step of an [`Expr::Chain`].
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    /// The operator applied to the running value and `expr`.
    pub op:       BinaryOperator,
    /// The right operand.
    pub expr:     Expr,
    /// Byte offset of the operator.
    pub position: usize,
}

/// Fully parenthesized rendering, one pair of parentheses per operation.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op} {expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::Chain { first, rest } => {
                for _ in rest {
                    f.write_str("(")?;
                }
                write!(f, "{first}")?;
                for Operand { op, expr, .. } in rest {
                    write!(f, " {op} {expr})")?;
                }
                Ok(())
            },
        }
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-x`
    Negate,
    /// `log x`, the natural logarithm.
    Ln,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Negate => "-",
                        Self::Ln => "log",
                    })
    }
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`, right-associative.
    Pow,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Add => "+",
                        Self::Sub => "-",
                        Self::Mul => "*",
                        Self::Div => "/",
                        Self::Pow => "^",
                    })
    }
}
