//! Printing an expression and parsing it back must give the same tree.

use proptest::prelude::*;
use crate::{parse_flat, parse_postfix, parse_prefix};
use symexpr_compute::{Expr, Var};

/// Finite constants, including negative ones and ones that need many digits.
fn constant() -> impl Strategy<Value = Expr> {
    prop_oneof![
        (-100i32..100).prop_map(|n| Expr::Const(f64::from(n))),
        (-1e6f64..1e6).prop_map(Expr::Const),
        (-1e-6f64..1e-6).prop_map(Expr::Const),
    ]
}

fn leaf() -> impl Strategy<Value = Expr> {
    prop_oneof![
        constant(),
        prop::sample::select(Var::ALL.to_vec()).prop_map(Expr::Var),
    ]
}

/// Trees that only use fixed-arity operators.
fn fixed_arity_expr() -> impl Strategy<Value = Expr> {
    leaf().prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Expr::negate),
            inner.clone().prop_map(Expr::arc_tan),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::add(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::subtract(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::multiply(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::divide(a, b)),
            (inner.clone(), inner).prop_map(|(a, b)| Expr::arc_tan2(a, b)),
        ]
    })
}

/// Trees that may also use `sumexp` and `softmax`.
fn any_expr() -> impl Strategy<Value = Expr> {
    leaf().prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            inner.clone().prop_map(Expr::negate),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::subtract(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::arc_tan2(a, b)),
            prop::collection::vec(inner.clone(), 1..4)
                .prop_map(|operands| Expr::sumexp(operands).unwrap()),
            prop::collection::vec(inner, 1..4)
                .prop_map(|operands| Expr::softmax(operands).unwrap()),
        ]
    })
}

proptest! {
    #[test]
    fn prefix_round_trip(expr in any_expr()) {
        prop_assert_eq!(parse_prefix(&expr.prefix()).unwrap(), expr);
    }

    #[test]
    fn postfix_round_trip(expr in any_expr()) {
        prop_assert_eq!(parse_postfix(&expr.postfix()).unwrap(), expr);
    }

    #[test]
    fn flat_round_trip(expr in fixed_arity_expr()) {
        prop_assert_eq!(parse_flat(&expr.flat()).unwrap(), expr);
    }

    #[test]
    fn garbage_never_panics(source in "[()xyz0-9+*/. -]{0,24}") {
        let _ = parse_prefix(&source);
        let _ = parse_postfix(&source);
        let _ = parse_flat(&source);
    }

    #[test]
    fn error_index_is_within_source(source in "[()a-z0-9+*/. -]{0,24}") {
        if let Err(err) = parse_prefix(&source) {
            prop_assert!(err.index() <= source.len());
            prop_assert!(err.caret().starts_with(source.as_str()));
        }
    }
}
