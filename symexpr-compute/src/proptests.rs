//! Property-based tests for evaluation, differentiation, and simplification.

use proptest::prelude::*;

use crate::expr::{Expr, Var};
use crate::{derivative, eval, simplify};

/// Strategy for generating small constants, including zero and one so that the simplification
/// identities get exercised.
fn constant() -> impl Strategy<Value = Expr> {
    (-6i32..6).prop_map(|n| Expr::Const(f64::from(n) / 2.0))
}

fn variable() -> impl Strategy<Value = Expr> {
    prop::sample::select(Var::ALL.to_vec()).prop_map(Expr::Var)
}

/// Builds operations on top of the given leaves.
fn tree(leaf: BoxedStrategy<Expr>) -> impl Strategy<Value = Expr> {
    leaf.prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            inner.clone().prop_map(Expr::negate),
            inner.clone().prop_map(Expr::arc_tan),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::add(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::subtract(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::multiply(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::divide(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::arc_tan2(a, b)),
            prop::collection::vec(inner.clone(), 1..4)
                .prop_map(|operands| Expr::sumexp(operands).unwrap()),
            prop::collection::vec(inner, 1..4)
                .prop_map(|operands| Expr::softmax(operands).unwrap()),
        ]
    })
}

fn any_expr() -> impl Strategy<Value = Expr> {
    tree(prop_oneof![constant(), variable()].boxed())
}

fn constant_expr() -> impl Strategy<Value = Expr> {
    tree(constant().boxed())
}

fn bindings() -> impl Strategy<Value = [f64; 6]> {
    prop::array::uniform6(-3.0f64..3.0)
}

/// Float equality that treats every `NaN` as equal to every other `NaN`.
fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

proptest! {
    #[test]
    fn eval_is_deterministic(expr in any_expr(), env in bindings()) {
        prop_assert!(same_value(eval(&expr, &env), eval(&expr, &env)));
    }

    #[test]
    fn derivative_is_linear(a in any_expr(), b in any_expr(), env in bindings()) {
        let var = Var::X;
        let sum = derivative(&Expr::add(a.clone(), b.clone()), var);
        let separately = eval(&derivative(&a, var), &env) + eval(&derivative(&b, var), &env);
        prop_assert!(same_value(eval(&sum, &env), separately));
    }

    #[test]
    fn simplify_is_idempotent(expr in any_expr()) {
        let once = simplify(&expr);
        let twice = simplify(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn constant_trees_fold(expr in constant_expr(), env in bindings()) {
        prop_assert_eq!(simplify(&expr), Expr::Const(eval(&expr, &env)));
    }

    #[test]
    fn simplify_never_grows(expr in any_expr()) {
        prop_assert!(simplify(&expr).node_count() <= expr.node_count());
    }
}
