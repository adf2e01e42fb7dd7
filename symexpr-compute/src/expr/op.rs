//! The operators that can appear in an [`Operation`](super::Operation), and the static table of
//! metadata describing each of them.

use crate::{derivative::rules as derive, simplify::{rules as simplify, step::Step}};
use crate::step_collector::StepCollector;
use std::fmt;
use super::Expr;

/// The number of operands an operator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many operands.
    Exactly(usize),

    /// Any number of operands, as long as there is at least one.
    AtLeastOne,
}

impl Arity {
    /// Returns true if `count` operands satisfy this arity.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exactly(n) => count == n,
            Self::AtLeastOne => count >= 1,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(1) => write!(f, "1 argument"),
            Self::Exactly(n) => write!(f, "{} arguments", n),
            Self::AtLeastOne => write!(f, "at least 1 argument"),
        }
    }
}

/// Numeric function over already-evaluated operands.
pub type EvalFn = fn(&[f64]) -> f64;

/// Derivative rule: receives the operands and their derivatives (in the same order), and builds
/// the derivative of the whole operation.
pub type DeriveFn = fn(&[Expr], &[Expr]) -> Expr;

/// Simplification rule: receives the already-simplified operands, and returns the rewritten
/// expression if any identity applies.
pub type SimplifyFn = fn(&[Expr], &mut dyn StepCollector<Step>) -> Option<Expr>;

/// Static metadata of an operator.
pub struct OpInfo {
    /// The symbol used to write the operator in all notations.
    pub symbol: &'static str,

    /// The number of operands the operator accepts.
    pub arity: Arity,

    /// Computes the value of the operation.
    pub eval: EvalFn,

    /// Builds the derivative of the operation.
    pub derive: DeriveFn,

    /// Algebraic identities of the operator, if it has any beyond constant folding.
    pub simplify: Option<SimplifyFn>,
}

impl fmt::Debug for OpInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpInfo")
            .field("symbol", &self.symbol)
            .field("arity", &self.arity)
            .field("simplify", &self.simplify.is_some())
            .finish_non_exhaustive()
    }
}

/// The kind of operation performed by an [`Operation`](super::Operation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Negate,
    Add,
    Subtract,
    Multiply,
    Divide,
    ArcTan,
    ArcTan2,
    Sumexp,
    Softmax,
}

impl OpKind {
    /// Every operator, in declaration order.
    pub const ALL: [OpKind; 9] = [
        Self::Negate,
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::ArcTan,
        Self::ArcTan2,
        Self::Sumexp,
        Self::Softmax,
    ];

    /// Returns the static metadata of this operator.
    pub fn info(self) -> &'static OpInfo {
        match self {
            Self::Negate => &NEGATE,
            Self::Add => &ADD,
            Self::Subtract => &SUBTRACT,
            Self::Multiply => &MULTIPLY,
            Self::Divide => &DIVIDE,
            Self::ArcTan => &ARC_TAN,
            Self::ArcTan2 => &ARC_TAN2,
            Self::Sumexp => &SUMEXP,
            Self::Softmax => &SOFTMAX,
        }
    }

    /// Returns the symbol of this operator.
    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    /// Returns the arity of this operator.
    pub fn arity(self) -> Arity {
        self.info().arity
    }

    /// Returns the operator written with the given symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `exp(a1) + exp(a2) + ...`
fn sum_exp(values: &[f64]) -> f64 {
    values.iter().map(|v| v.exp()).sum()
}

static NEGATE: OpInfo = OpInfo {
    symbol: "negate",
    arity: Arity::Exactly(1),
    eval: |v| -v[0],
    derive: derive::negate,
    simplify: None,
};

static ADD: OpInfo = OpInfo {
    symbol: "+",
    arity: Arity::Exactly(2),
    eval: |v| v[0] + v[1],
    derive: derive::add,
    simplify: Some(simplify::add),
};

static SUBTRACT: OpInfo = OpInfo {
    symbol: "-",
    arity: Arity::Exactly(2),
    eval: |v| v[0] - v[1],
    derive: derive::subtract,
    simplify: Some(simplify::subtract),
};

static MULTIPLY: OpInfo = OpInfo {
    symbol: "*",
    arity: Arity::Exactly(2),
    eval: |v| v[0] * v[1],
    derive: derive::multiply,
    simplify: Some(simplify::multiply),
};

static DIVIDE: OpInfo = OpInfo {
    symbol: "/",
    arity: Arity::Exactly(2),
    eval: |v| v[0] / v[1],
    derive: derive::divide,
    simplify: Some(simplify::divide),
};

static ARC_TAN: OpInfo = OpInfo {
    symbol: "atan",
    arity: Arity::Exactly(1),
    eval: |v| v[0].atan(),
    derive: derive::arc_tan,
    simplify: None,
};

static ARC_TAN2: OpInfo = OpInfo {
    symbol: "atan2",
    arity: Arity::Exactly(2),
    eval: |v| v[0].atan2(v[1]),
    derive: derive::arc_tan2,
    simplify: Some(simplify::arc_tan2),
};

static SUMEXP: OpInfo = OpInfo {
    symbol: "sumexp",
    arity: Arity::AtLeastOne,
    eval: sum_exp,
    derive: derive::sumexp,
    simplify: None,
};

// the first operand is the numerator term
static SOFTMAX: OpInfo = OpInfo {
    symbol: "softmax",
    arity: Arity::AtLeastOne,
    eval: |v| v[0].exp() / sum_exp(v),
    derive: derive::softmax,
    simplify: None,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for op in OpKind::ALL {
            assert_eq!(OpKind::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(OpKind::from_symbol("x"), None);
        assert_eq!(OpKind::from_symbol("neg"), None);
    }

    #[test]
    fn arities() {
        assert_eq!(OpKind::Negate.arity(), Arity::Exactly(1));
        assert_eq!(OpKind::ArcTan.arity(), Arity::Exactly(1));
        assert_eq!(OpKind::ArcTan2.arity(), Arity::Exactly(2));
        assert_eq!(OpKind::Divide.arity(), Arity::Exactly(2));
        assert_eq!(OpKind::Sumexp.arity(), Arity::AtLeastOne);
        assert!(Arity::AtLeastOne.accepts(7));
        assert!(!Arity::AtLeastOne.accepts(0));
        assert!(!Arity::Exactly(2).accepts(3));
    }

    #[test]
    fn softmax_uses_first_operand() {
        let eval = OpKind::Softmax.info().eval;
        let expected = 1f64.exp() / (1f64.exp() + 2f64.exp());
        assert_eq!(eval(&[1.0, 2.0]), expected);
        assert_eq!(eval(&[3.0]), 1.0);
    }
}
