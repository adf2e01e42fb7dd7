use std::ops::Range;
use super::{error::kind, group::arity_mismatch, leaf::{operator, parse_leaf}, Parser, MAX_DEPTH};
use symexpr_compute::{expr::{Arity, ArityError}, Expr};
use symexpr_error::Error;

impl Parser<'_> {
    /// Parses the remaining tokens as an expression in flat postfix notation, using a stack.
    ///
    /// Numbers and variables are pushed onto the stack. An operator with a fixed arity of `n`
    /// pops the top `n` values, while `sumexp` and `softmax` pop every value on the stack. The
    /// stack must contain exactly one value at the end.
    ///
    /// As with parenthesized groups, operations may be nested at most [`MAX_DEPTH`] levels deep.
    pub fn parse_stack(&mut self) -> Result<Expr, Error> {
        // each value is paired with the region of the source code it was parsed from, and the
        // number of operations nested in it
        let mut stack: Vec<(Expr, Range<usize>, usize)> = Vec::new();

        while let Some(token) = self.current_token().cloned() {
            self.next_token()?;

            if token.kind.is_paren() {
                return Err(Error::new(vec![token.span], kind::UnexpectedToken {
                    expected: "an operand or an operator",
                    found: token.lexeme.to_owned(),
                }));
            }

            let Some(op) = operator(&token) else {
                stack.push((parse_leaf(&token)?, token.span, 0));
                continue;
            };

            let take = match op.arity() {
                Arity::Exactly(n) => n,
                Arity::AtLeastOne => stack.len(),
            };
            let start = stack.get(stack.len().saturating_sub(take))
                .map_or(token.span.start, |(_, span, _)| span.start);
            let span = start..token.span.end;

            if take == 0 || take > stack.len() {
                let err = ArityError { op, found: stack.len() };
                return Err(arity_mismatch(err, token.span, span));
            }

            let popped = stack.split_off(stack.len() - take);
            let depth = popped.iter().map(|(_, _, depth)| depth + 1).max().unwrap_or(1);
            if depth > MAX_DEPTH {
                return Err(Error::new(vec![token.span], kind::NestingTooDeep { limit: MAX_DEPTH }));
            }

            let operands = popped.into_iter()
                .map(|(operand, _, _)| operand)
                .collect();
            let expr = Expr::op(op, operands)
                .map_err(|err| arity_mismatch(err, token.span.clone(), span.clone()))?;
            stack.push((expr, span, depth));
        }

        if let Some((_, span, _)) = stack.get(1) {
            return Err(Error::new(vec![span.start..self.source.len()], kind::ExpectedEof));
        }

        stack.pop()
            .map(|(expr, _, _)| expr)
            .ok_or_else(|| self.error(kind::UnexpectedEof))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use symexpr_compute::{OpKind, Var};

    fn flat(source: &str) -> Result<Expr, Error> {
        Parser::new(source).parse_stack()
    }

    #[test]
    fn fixed_arity() {
        assert_eq!(
            flat("x 2 + y negate /").unwrap(),
            Expr::divide(
                Expr::add(Expr::Var(Var::X), Expr::Const(2.0)),
                Expr::negate(Expr::Var(Var::Y)),
            ),
        );
    }

    #[test]
    fn variadic_takes_whole_stack() {
        assert_eq!(
            flat("x y 1 softmax").unwrap(),
            Expr::softmax(vec![Expr::Var(Var::X), Expr::Var(Var::Y), Expr::Const(1.0)]).unwrap(),
        );
        assert_eq!(
            flat("x sumexp y *").unwrap(),
            Expr::multiply(Expr::sumexp(vec![Expr::Var(Var::X)]).unwrap(), Expr::Var(Var::Y)),
        );
    }

    #[test]
    fn printed_form_parses_back() {
        let expr = Expr::arc_tan2(
            Expr::subtract(Expr::Var(Var::U), Expr::Const(-0.5)),
            Expr::multiply(Expr::Var(Var::V), Expr::Var(Var::W)),
        );
        assert_eq!(flat(&expr.to_string()).unwrap(), expr);
    }

    #[test]
    fn stack_underflow() {
        let err = flat("x +").unwrap_err();
        assert_eq!(
            err.downcast_ref::<kind::ArityMismatch>(),
            Some(&kind::ArityMismatch { op: OpKind::Add, expected: Arity::Exactly(2), found: 1 }),
        );
        assert_eq!(err.spans, vec![2..3, 0..3]);

        let err = flat("sumexp").unwrap_err();
        assert!(err.is::<kind::ArityMismatch>());
        assert_eq!(err.spans, vec![0..6, 0..6]);
    }

    #[test]
    fn leftover_values() {
        let err = flat("x y z +").unwrap_err();
        assert!(err.is::<kind::ExpectedEof>());
        assert_eq!(err.index(), 2);
    }

    #[test]
    fn parentheses_are_rejected() {
        let err = flat("x (y) +").unwrap_err();
        assert!(err.is::<kind::UnexpectedToken>());
        assert_eq!(err.index(), 2);
    }
}
