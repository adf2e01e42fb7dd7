//! Symbolic differentiation.
//!
//! Every operator carries its own derivative rule in its [`OpInfo`](crate::expr::OpInfo) entry.
//! [`derivative`] walks the tree, differentiates the operands first, then hands both the operands
//! and their derivatives to the rule of the operator.

pub(crate) mod rules;

use crate::expr::{Expr, Var};

/// Computes the derivative of the given expression with respect to `var`.
///
/// The result is built by applying the derivative rule of each operator (see
/// [`OpInfo::derive`](crate::expr::OpInfo::derive)) and is **not** simplified; pass it to
/// [`simplify`](crate::simplify()) to clean it up.
pub fn derivative(f: &Expr, var: Var) -> Expr {
    match f {
        Expr::Const(_) => Expr::Const(0.0),
        Expr::Var(v) => Expr::Const(if *v == var { 1.0 } else { 0.0 }),
        Expr::Op(op) => {
            let operands = op.operands();
            let derivatives = operands.iter()
                .map(|operand| derivative(operand, var))
                .collect::<Vec<_>>();
            (op.kind().info().derive)(operands, &derivatives)
        },
    }
}
