//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which reduces an expression to a simpler,
//! equivalent one. The tree is simplified bottom-up in a single pass: the operands of each
//! operation are simplified first, then
//!
//! 1. if every simplified operand is a constant, the operation is replaced by its value
//!    (constant folding);
//! 2. otherwise, the identities of the operator are tried (see [`rules`]), such as `(+ a 0) = a`
//!    or `(* 0 a) = 0`.
//!
//! Because every rule returns either an already-simplified operand, a constant, or a new node
//! whose operands are already simplified and not all constant, the result is a fixed point:
//! simplifying it again returns the same tree.
//!
//! ```
//! use symexpr_compute::{expr::{Expr, Var}, simplify};
//!
//! let expr = Expr::multiply(Expr::Const(0.0), Expr::Var(Var::X));
//! assert_eq!(simplify(&expr), Expr::Const(0.0));
//! ```

pub mod rules;
pub mod step;

use crate::{expr::{Expr, Operation}, step_collector::StepCollector};
use log::debug;
use step::Step;

/// Base implementation of the simplification algorithm.
fn inner_simplify(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let op = match expr {
        Expr::Const(_) | Expr::Var(_) => return expr.clone(),
        Expr::Op(op) => op,
    };

    let info = op.kind().info();
    let operands = op.operands()
        .iter()
        .map(|operand| inner_simplify(operand, step_collector))
        .collect::<Vec<_>>();

    let values = operands.iter().map(Expr::as_const).collect::<Option<Vec<_>>>();
    if let Some(values) = values {
        step_collector.push(Step::ConstantFold);
        return Expr::Const((info.eval)(&values));
    }

    if let Some(rule) = info.simplify {
        if let Some(rewritten) = rule(&operands, step_collector) {
            return rewritten;
        }
    }

    Expr::Op(Operation::new_unchecked(op.kind(), operands))
}

/// Simplify the given expression.
pub fn simplify(expr: &Expr) -> Expr {
    inner_simplify(expr, &mut ())
}

/// Simplify the given expression. The steps taken by the simplifier will also be collected and
/// returned, in the order they were applied (innermost operations first). This is useful for
/// debugging, and also for displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = inner_simplify(expr, &mut steps);
    debug!(
        "simplified {} nodes into {} nodes in {} steps",
        expr.node_count(),
        simplified.node_count(),
        steps.len(),
    );
    (simplified, steps)
}
