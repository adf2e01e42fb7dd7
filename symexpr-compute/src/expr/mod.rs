//! The expression tree.
//!
//! An [`Expr`] is an immutable tree of constants, variables, and operations. Every transformation
//! in this crate ([`eval`](crate::eval()), [`derivative`](crate::derivative()),
//! [`simplify`](crate::simplify())) borrows a tree and, where it produces a tree, builds a new
//! one. Nothing is ever mutated in place, so subtrees can be freely cloned into new trees.
//!
//! # Arity
//!
//! Each [`Operation`] holds exactly as many operands as its [`OpKind`] accepts (see
//! [`OpKind::arity`]). The fields of [`Operation`] are private, and the only public way to build
//! one is [`Operation::new`], which checks the operand count. The shorthand constructors on
//! [`Expr`] for fixed-arity operators take their operands as separate arguments and so cannot
//! fail.
//!
//! ```
//! use symexpr_compute::expr::{Expr, OpKind, Operation, Var};
//!
//! let sum = Expr::add(Expr::Var(Var::X), Expr::Const(2.0));
//! assert_eq!(sum.eval(&[3.0, 0.0, 0.0, 0.0, 0.0, 0.0]), 5.0);
//!
//! assert!(Operation::new(OpKind::Add, vec![Expr::Const(1.0)]).is_err());
//! assert!(Expr::sumexp(Vec::new()).is_err());
//! ```

mod iter;
pub mod op;

pub use iter::ExprIter;
use std::fmt;

pub use op::{Arity, OpInfo, OpKind};

/// One of the six variables an expression can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Var {
    X,
    Y,
    Z,
    U,
    V,
    W,
}

impl Var {
    /// Every variable, ordered by its index in the binding vector.
    pub const ALL: [Var; 6] = [Self::X, Self::Y, Self::Z, Self::U, Self::V, Self::W];

    /// Returns the index of this variable in the binding vector passed to [`Expr::eval`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the name of this variable.
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::U => "u",
            Self::V => "v",
            Self::W => "w",
        }
    }

    /// Returns the variable with the given name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|var| var.name() == name)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An operation was given the wrong number of operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArityError {
    /// The operator that was being built.
    pub op: OpKind,

    /// The number of operands that were given.
    pub found: usize,
}

impl fmt::Display for ArityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` expects {}, but {} were given",
            self.op,
            self.op.arity(),
            self.found,
        )
    }
}

impl std::error::Error for ArityError {}

/// An operator applied to an ordered list of operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    kind: OpKind,
    operands: Vec<Expr>,
}

impl Operation {
    /// Creates a new operation, checking that the number of operands matches the arity of the
    /// operator.
    pub fn new(kind: OpKind, operands: Vec<Expr>) -> Result<Self, ArityError> {
        if kind.arity().accepts(operands.len()) {
            Ok(Self { kind, operands })
        } else {
            Err(ArityError { op: kind, found: operands.len() })
        }
    }

    /// Creates a new operation whose operand count is already known to be valid.
    pub(crate) fn new_unchecked(kind: OpKind, operands: Vec<Expr>) -> Self {
        debug_assert!(kind.arity().accepts(operands.len()));
        Self { kind, operands }
    }

    /// Returns the operator.
    pub fn kind(&self) -> OpKind {
        self.kind
    }

    /// Returns the operands, in order.
    pub fn operands(&self) -> &[Expr] {
        &self.operands
    }

    /// Consumes the operation, returning the operator and its operands.
    pub fn into_parts(self) -> (OpKind, Vec<Expr>) {
        (self.kind, self.operands)
    }
}

/// A node of an expression tree.
///
/// Equality is structural. Constants compare numerically, except that `NaN` is equal to `NaN`,
/// so that a tree that folds to `NaN` still equals itself after printing and parsing it back.
#[derive(Debug, Clone)]
pub enum Expr {
    /// A number, such as `2` or `-0.5`.
    Const(f64),

    /// A variable, such as `x`.
    Var(Var),

    /// An operator applied to operands, such as `(+ x 2)`.
    Op(Operation),
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Const(a), Self::Const(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Var(a), Self::Var(b)) => a == b,
            (Self::Op(a), Self::Op(b)) => a == b,
            _ => false,
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Const(value)
    }
}

impl From<Var> for Expr {
    fn from(var: Var) -> Self {
        Self::Var(var)
    }
}

impl From<Operation> for Expr {
    fn from(op: Operation) -> Self {
        Self::Op(op)
    }
}

impl Expr {
    /// Builds an operation, checking the number of operands.
    pub fn op(kind: OpKind, operands: Vec<Expr>) -> Result<Self, ArityError> {
        Operation::new(kind, operands).map(Self::Op)
    }

    fn unary(kind: OpKind, a: Expr) -> Self {
        Self::Op(Operation::new_unchecked(kind, vec![a]))
    }

    fn binary(kind: OpKind, a: Expr, b: Expr) -> Self {
        Self::Op(Operation::new_unchecked(kind, vec![a, b]))
    }

    /// `(negate a)`
    pub fn negate(a: Expr) -> Self {
        Self::unary(OpKind::Negate, a)
    }

    /// `(+ a b)`
    pub fn add(a: Expr, b: Expr) -> Self {
        Self::binary(OpKind::Add, a, b)
    }

    /// `(- a b)`
    pub fn subtract(a: Expr, b: Expr) -> Self {
        Self::binary(OpKind::Subtract, a, b)
    }

    /// `(* a b)`
    pub fn multiply(a: Expr, b: Expr) -> Self {
        Self::binary(OpKind::Multiply, a, b)
    }

    /// `(/ a b)`
    pub fn divide(a: Expr, b: Expr) -> Self {
        Self::binary(OpKind::Divide, a, b)
    }

    /// `(atan a)`
    pub fn arc_tan(a: Expr) -> Self {
        Self::unary(OpKind::ArcTan, a)
    }

    /// `(atan2 a b)`
    pub fn arc_tan2(a: Expr, b: Expr) -> Self {
        Self::binary(OpKind::ArcTan2, a, b)
    }

    /// `(sumexp a1 a2 ...)`. Fails if `operands` is empty.
    pub fn sumexp(operands: Vec<Expr>) -> Result<Self, ArityError> {
        Self::op(OpKind::Sumexp, operands)
    }

    /// `(softmax a1 a2 ...)`. Fails if `operands` is empty.
    pub fn softmax(operands: Vec<Expr>) -> Result<Self, ArityError> {
        Self::op(OpKind::Softmax, operands)
    }

    /// Returns the value of this expression if it is a [`Expr::Const`].
    pub fn as_const(&self) -> Option<f64> {
        match self {
            Self::Const(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if this expression is the constant `0`.
    pub fn is_zero(&self) -> bool {
        self.as_const() == Some(0.0)
    }

    /// Returns true if this expression is the constant `1`.
    pub fn is_one(&self) -> bool {
        self.as_const() == Some(1.0)
    }

    /// Returns the direct children of this node.
    pub fn operands(&self) -> &[Expr] {
        match self {
            Self::Op(op) => op.operands(),
            Self::Const(_) | Self::Var(_) => &[],
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first). Operands are visited before the operation that owns them.
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns true if the tree has no variables, meaning it evaluates to the same value under
    /// any bindings.
    pub fn is_constant(&self) -> bool {
        self.post_order_iter().all(|node| !matches!(node, Self::Var(_)))
    }

    /// Evaluates the expression. See [`crate::eval()`].
    pub fn eval(&self, bindings: &[f64; 6]) -> f64 {
        crate::eval::eval(self, bindings)
    }

    /// Differentiates the expression. See [`crate::derivative()`].
    pub fn derivative(&self, var: Var) -> Expr {
        crate::derivative::derivative(self, var)
    }

    /// Simplifies the expression. See [`crate::simplify()`].
    pub fn simplify(&self) -> Expr {
        crate::simplify::simplify(self)
    }
}
