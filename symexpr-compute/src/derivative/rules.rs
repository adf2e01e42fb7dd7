//! Derivative rules of each operator.
//!
//! Each rule receives the operands of the operation `a`, and their derivatives `da` (with
//! `da[i]` the derivative of `a[i]`), and builds the derivative of the operation. The operand
//! slices always have the length required by the operator's arity.

use crate::expr::{Expr, OpKind, Operation};

/// `(-a)' = -a'`
pub fn negate(_: &[Expr], da: &[Expr]) -> Expr {
    Expr::negate(da[0].clone())
}

/// `(a + b)' = a' + b'`
pub fn add(_: &[Expr], da: &[Expr]) -> Expr {
    Expr::add(da[0].clone(), da[1].clone())
}

/// `(a - b)' = a' - b'`
pub fn subtract(_: &[Expr], da: &[Expr]) -> Expr {
    Expr::subtract(da[0].clone(), da[1].clone())
}

/// `(a * b)' = a' * b + a * b'`
pub fn multiply(a: &[Expr], da: &[Expr]) -> Expr {
    Expr::add(
        Expr::multiply(da[0].clone(), a[1].clone()),
        Expr::multiply(a[0].clone(), da[1].clone()),
    )
}

/// `(a / b)' = (a' * b - a * b') / (b * b)`
pub fn divide(a: &[Expr], da: &[Expr]) -> Expr {
    Expr::divide(
        Expr::subtract(
            Expr::multiply(da[0].clone(), a[1].clone()),
            Expr::multiply(a[0].clone(), da[1].clone()),
        ),
        Expr::multiply(a[1].clone(), a[1].clone()),
    )
}

/// `atan(a)' = a' / (1 + a * a)`
pub fn arc_tan(a: &[Expr], da: &[Expr]) -> Expr {
    Expr::divide(
        da[0].clone(),
        Expr::add(Expr::Const(1.0), Expr::multiply(a[0].clone(), a[0].clone())),
    )
}

/// `atan2(a, b)' = (a' * b - b' * a) / (a * a + b * b)`
pub fn arc_tan2(a: &[Expr], da: &[Expr]) -> Expr {
    Expr::divide(
        Expr::subtract(
            Expr::multiply(da[0].clone(), a[1].clone()),
            Expr::multiply(da[1].clone(), a[0].clone()),
        ),
        Expr::add(
            Expr::multiply(a[0].clone(), a[0].clone()),
            Expr::multiply(a[1].clone(), a[1].clone()),
        ),
    )
}

/// `exp(a)`, written as a single-operand `sumexp`.
fn exp(a: &Expr) -> Expr {
    Expr::Op(Operation::new_unchecked(OpKind::Sumexp, vec![a.clone()]))
}

/// `sumexp(a1, ..., an)' = exp(a1) * a1' + ... + exp(an) * an'`
pub fn sumexp(a: &[Expr], da: &[Expr]) -> Expr {
    a.iter()
        .zip(da)
        .map(|(a, da)| Expr::multiply(exp(a), da.clone()))
        .reduce(Expr::add)
        .unwrap_or(Expr::Const(0.0))
}

/// With `s = sumexp(a1, ..., an)`:
///
/// `softmax(a1, ..., an)' = (exp(a1) * a1' * s - exp(a1) * s') / (s * s)`
pub fn softmax(a: &[Expr], da: &[Expr]) -> Expr {
    let total = Expr::Op(Operation::new_unchecked(OpKind::Sumexp, a.to_vec()));
    Expr::divide(
        Expr::subtract(
            Expr::multiply(
                Expr::multiply(exp(&a[0]), da[0].clone()),
                total.clone(),
            ),
            Expr::multiply(exp(&a[0]), sumexp(a, da)),
        ),
        Expr::multiply(total.clone(), total),
    )
}
