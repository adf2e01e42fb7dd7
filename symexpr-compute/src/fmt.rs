//! Textual notations of expressions.
//!
//! - The [`Display`] implementation of [`Expr`] writes the **flat** form: every node in post-order,
//!   separated by spaces, without parentheses (`x 2 +`).
//! - [`Expr::prefix`] writes the fully-parenthesized prefix form (`(+ x 2)`).
//! - [`Expr::postfix`] writes the fully-parenthesized postfix form (`(x 2 +)`).
//!
//! Constants are written with the shortest representation that parses back to the same `f64`.

use crate::expr::Expr;
use std::fmt::{Display, Formatter, Result};

/// Writes a leaf or the symbol of an operation.
fn fmt_node(expr: &Expr, f: &mut Formatter) -> Result {
    match expr {
        Expr::Const(value) => write!(f, "{}", value),
        Expr::Var(var) => write!(f, "{}", var),
        Expr::Op(op) => write!(f, "{}", op.kind()),
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let mut iter = self.post_order_iter();
        if let Some(node) = iter.next() {
            fmt_node(node, f)?;
            for node in iter {
                write!(f, " ")?;
                fmt_node(node, f)?;
            }
        }
        Ok(())
    }
}

/// A wrapper type that implements [`Display`] by writing the prefix form of an [`Expr`].
pub struct Prefix<'a>(&'a Expr);

impl Display for Prefix<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self.0 {
            Expr::Op(op) => {
                write!(f, "({}", op.kind())?;
                for operand in op.operands() {
                    write!(f, " {}", Prefix(operand))?;
                }
                write!(f, ")")
            },
            leaf => fmt_node(leaf, f),
        }
    }
}

/// A wrapper type that implements [`Display`] by writing the postfix form of an [`Expr`].
pub struct Postfix<'a>(&'a Expr);

impl Display for Postfix<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self.0 {
            Expr::Op(op) => {
                write!(f, "(")?;
                for operand in op.operands() {
                    write!(f, "{} ", Postfix(operand))?;
                }
                write!(f, "{})", op.kind())
            },
            leaf => fmt_node(leaf, f),
        }
    }
}

impl Expr {
    /// Wraps the expression in a [`Prefix`], which implements [`Display`].
    pub fn as_prefix(&self) -> Prefix<'_> {
        Prefix(self)
    }

    /// Wraps the expression in a [`Postfix`], which implements [`Display`].
    pub fn as_postfix(&self) -> Postfix<'_> {
        Postfix(self)
    }

    /// Returns the flat form of the expression. Same as [`ToString::to_string`].
    pub fn flat(&self) -> String {
        self.to_string()
    }

    /// Returns the prefix form of the expression.
    pub fn prefix(&self) -> String {
        self.as_prefix().to_string()
    }

    /// Returns the postfix form of the expression.
    pub fn postfix(&self) -> String {
        self.as_postfix().to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::{Expr, Var};
    use pretty_assertions::assert_eq;

    fn sample() -> Expr {
        // (softmax (- x 2.5) (negate -3) y)
        Expr::softmax(vec![
            Expr::subtract(Expr::Var(Var::X), Expr::Const(2.5)),
            Expr::negate(Expr::Const(-3.0)),
            Expr::Var(Var::Y),
        ]).unwrap()
    }

    #[test]
    fn flat() {
        assert_eq!(sample().flat(), "x 2.5 - -3 negate y softmax");
        assert_eq!(Expr::Const(1e-7).flat(), "0.0000001");
    }

    #[test]
    fn prefix() {
        assert_eq!(sample().prefix(), "(softmax (- x 2.5) (negate -3) y)");
        assert_eq!(Expr::Var(Var::W).prefix(), "w");
    }

    #[test]
    fn postfix() {
        assert_eq!(sample().postfix(), "((x 2.5 -) (-3 negate) y softmax)");
        assert_eq!(Expr::Const(42.0).postfix(), "42");
    }

    #[test]
    fn display_adapters() {
        let expr = Expr::arc_tan2(Expr::Var(Var::U), Expr::Var(Var::V));
        assert_eq!(format!("{}", expr.as_prefix()), "(atan2 u v)");
        assert_eq!(format!("{}", expr.as_postfix()), "(u v atan2)");
        assert_eq!(format!("{}", expr), "u v atan2");
    }
}
