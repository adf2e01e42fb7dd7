//! Expression trees over six variables, with numeric evaluation, symbolic differentiation,
//! algebraic simplification, and conversion to text.
//!
//! # Expression representation
//!
//! Expressions are represented as a tree of [`Expr`] nodes: constants, variables (`x`, `y`, `z`,
//! `u`, `v`, `w`), and operations. The operators and their metadata (symbol, arity, numeric
//! function, derivative rule, simplification rule) are listed in a static table reachable from
//! [`OpKind::info`](expr::OpKind::info).
//!
//! Trees are usually produced by the `symexpr-parser` crate, but can be built directly:
//!
//! ```
//! use symexpr_compute::{derivative, eval, simplify, expr::{Expr, Var}};
//!
//! // (* x (+ y 1))
//! let expr = Expr::multiply(
//!     Expr::Var(Var::X),
//!     Expr::add(Expr::Var(Var::Y), Expr::Const(1.0)),
//! );
//! assert_eq!(eval(&expr, &[2.0, 3.0, 0.0, 0.0, 0.0, 0.0]), 8.0);
//!
//! // d/dx = (+ (* 1 (+ y 1)) (* x (+ 0 0))), which simplifies to (+ y 1)
//! let dx = simplify(&derivative(&expr, Var::X));
//! assert_eq!(dx.prefix(), "(+ y 1)");
//! assert_eq!(dx.postfix(), "(y 1 +)");
//! assert_eq!(dx.to_string(), "y 1 +");
//! ```
//!
//! All of these operations are pure functions of the tree; none of them can fail.

pub mod derivative;
pub mod eval;
pub mod expr;
pub mod fmt;
pub mod simplify;
pub mod step_collector;

#[cfg(test)]
mod proptests;

pub use derivative::derivative;
pub use eval::eval;
pub use expr::{ArityError, Expr, OpKind, Var};
pub use simplify::{simplify, simplify_with_steps, step::Step};
pub use step_collector::StepCollector;
