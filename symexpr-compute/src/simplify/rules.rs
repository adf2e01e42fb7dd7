//! Algebraic identities of each operator.
//!
//! Each rule in this module receives the already-simplified operands of an operation, at least
//! one of which is not a constant, and returns `Some(expr)` with the rewritten expression if an
//! identity applies, or `None` if the operation should be kept as is.

use crate::{expr::Expr, step_collector::StepCollector};
use super::step::Step;

/// `(+ a 0) = a`
/// `(+ 0 a) = a`
pub fn add(operands: &[Expr], step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (a, b) = (&operands[0], &operands[1]);
    let result = if b.is_zero() {
        a.clone()
    } else if a.is_zero() {
        b.clone()
    } else {
        return None;
    };

    step_collector.push(Step::AddZero);
    Some(result)
}

/// `(- a 0) = a`
/// `(- 0 a) = (negate a)`
pub fn subtract(operands: &[Expr], step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (a, b) = (&operands[0], &operands[1]);
    if b.is_zero() {
        step_collector.push(Step::SubtractZero);
        Some(a.clone())
    } else if a.is_zero() {
        step_collector.push(Step::SubtractFromZero);
        Some(Expr::negate(b.clone()))
    } else {
        None
    }
}

/// `(* a 0) = 0`
/// `(* 0 a) = 0`
/// `(* 1 a) = a`
/// `(* a 1) = a`
pub fn multiply(operands: &[Expr], step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (a, b) = (&operands[0], &operands[1]);
    if a.is_zero() || b.is_zero() {
        step_collector.push(Step::MultiplyZero);
        Some(Expr::Const(0.0))
    } else if a.is_one() {
        step_collector.push(Step::MultiplyOne);
        Some(b.clone())
    } else if b.is_one() {
        step_collector.push(Step::MultiplyOne);
        Some(a.clone())
    } else {
        None
    }
}

/// `(/ 0 a) = 0`
/// `(/ a 1) = a`
pub fn divide(operands: &[Expr], step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (a, b) = (&operands[0], &operands[1]);
    if a.is_zero() {
        step_collector.push(Step::DivideZero);
        Some(Expr::Const(0.0))
    } else if b.is_one() {
        step_collector.push(Step::DivideOne);
        Some(a.clone())
    } else {
        None
    }
}

/// `(atan2 0 a) = 0`, for `a` other than the constant `0`
/// `(atan2 a 1) = (atan a)`
pub fn arc_tan2(operands: &[Expr], step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (a, b) = (&operands[0], &operands[1]);
    if a.is_zero() && !b.is_zero() {
        step_collector.push(Step::Atan2Zero);
        Some(Expr::Const(0.0))
    } else if b.is_one() {
        step_collector.push(Step::Atan2One);
        Some(Expr::arc_tan(a.clone()))
    } else {
        None
    }
}
