use super::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current expression in the stack and marks it as the last visited expression.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given expression matches the last visited expression.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, expr),
            None => false,
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            match expr.operands().last() {
                // leaves, or an operation whose last operand was just visited
                None => return self.visit(),
                Some(last) if self.is_last_visited(last) => return self.visit(),
                Some(_) => {
                    for operand in expr.operands().iter().rev() {
                        self.stack.push(operand);
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::{Expr, Var};

    #[test]
    fn post_order() {
        // (* (+ x 1) (negate y))
        let expr = Expr::multiply(
            Expr::add(Expr::Var(Var::X), Expr::Const(1.0)),
            Expr::negate(Expr::Var(Var::Y)),
        );
        let visited = expr.post_order_iter()
            .map(|node| match node {
                Expr::Const(value) => value.to_string(),
                Expr::Var(var) => var.to_string(),
                Expr::Op(op) => op.kind().to_string(),
            })
            .collect::<Vec<_>>();
        assert_eq!(visited, ["x", "1", "+", "y", "negate", "*"]);
    }

    #[test]
    fn single_leaf() {
        let expr = Expr::Const(4.0);
        assert_eq!(expr.post_order_iter().collect::<Vec<_>>(), vec![&expr]);
    }
}
