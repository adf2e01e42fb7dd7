use ariadne::Fmt;
use symexpr_attrs::ErrorKind;
use symexpr_compute::expr::{Arity, OpKind};
use symexpr_error::{ErrorKind, EXPR};

/// Lists every operator symbol, for help messages.
fn operator_list() -> String {
    OpKind::ALL
        .iter()
        .map(|op| format!("`{}`", op.symbol()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The source code contained no characters at all.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty input",
    labels = [format!("I expected an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyInput;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
    help = "the input must contain exactly one expression",
)]
pub struct ExpectedEof;

/// A word that is neither a variable, an operator, nor a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown token `{}`", self.found),
    labels = ["here"],
    help = format!(
        "operands are numbers or one of the variables {}",
        "x, y, z, u, v, w".fg(EXPR),
    ),
)]
pub struct UnknownToken {
    /// The lexeme that could not be recognized.
    pub found: String,
}

/// An operator symbol appeared where an operand was expected.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected operator `{}`", self.found),
    labels = ["an operand was expected here"],
    help = "every operator application must be wrapped in its own parentheses",
)]
pub struct UnexpectedOperator {
    /// The operator that was found.
    pub found: OpKind,
}

/// The head of a parenthesized group was not an operator symbol.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expected operator, found `{}`", self.found),
    labels = ["I expected an operator here"],
    help = format!("the operators are: {}", operator_list()),
)]
pub struct ExpectedOperator {
    /// The lexeme that was found instead.
    pub found: String,
}

/// A word that looks like a number could not be read as one.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("malformed number `{}`", self.lexeme),
    labels = ["this number"],
    help = format!("numbers look like {}", "12, -3.5, or 1e-7".fg(EXPR)),
)]
pub struct MalformedNumber {
    /// The offending lexeme.
    pub lexeme: String,
}

/// A parenthesis was not matched by a corresponding parenthesis.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if self.opening {
        format!("add a closing parenthesis {} somewhere after this", ")".fg(EXPR))
    } else {
        format!("add an opening parenthesis {} somewhere before this", "(".fg(EXPR))
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// An operator was applied to the wrong number of operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("wrong number of operands for `{}`", self.op),
    labels = [
        format!("this operator expects {}", self.expected),
        format!(
            "but this group has {} operand{}",
            self.found,
            if self.found == 1 { "" } else { "s" },
        ),
    ],
)]
pub struct ArityMismatch {
    /// The operator being applied.
    pub op: OpKind,

    /// The number of operands the operator takes.
    pub expected: Arity,

    /// The number of operands that were given.
    pub found: usize,
}

/// A parenthesized group has no operator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing operator",
    labels = ["this group has no operator"],
    help = format!("the operators are: {}", operator_list()),
)]
pub struct MissingOperator;

/// A token that cannot appear at this position.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected `{}`", self.found),
    labels = [format!("I expected {} here", self.expected)],
)]
pub struct UnexpectedToken {
    /// What was expected, with an article, such as "a closing parenthesis".
    pub expected: &'static str,

    /// The lexeme that was found.
    pub found: String,
}

/// Parenthesized groups were nested deeper than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression nested too deeply",
    labels = [format!("this group is nested more than {} levels deep", self.limit)],
    help = "split the expression into smaller pieces",
)]
pub struct NestingTooDeep {
    /// The maximum nesting depth.
    pub limit: usize,
}
