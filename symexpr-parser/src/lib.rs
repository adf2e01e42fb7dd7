//! Parser for arithmetic expressions over the variables `x`, `y`, `z`, `u`, `v`, and `w`.
//!
//! Three notations are accepted (see [`Notation`]):
//!
//! - fully-parenthesized prefix, such as `(* (+ x 1) y)`, with [`parse_prefix`];
//! - fully-parenthesized postfix, such as `((x 1 +) y *)`, with [`parse_postfix`];
//! - flat postfix without parentheses, such as `x 1 + y *`, with [`parse_flat`].
//!
//! Tokens are separated by any amount of whitespace; parentheses need no whitespace around them.
//! A `-` immediately followed by a digit starts a negative number, while a `-` on its own is the
//! subtraction operator.
//!
//! ```
//! use symexpr_parser::parse_prefix;
//!
//! let expr = parse_prefix("(/ x (* y z))").unwrap();
//! assert_eq!(expr.eval(&[1.0, 2.0, 4.0, 0.0, 0.0, 0.0]), 0.125);
//! assert_eq!(expr.postfix(), "(x (y z *) /)");
//! ```
//!
//! When parsing fails, the returned [`ParseError`] describes the problem and where it is:
//!
//! ```
//! use symexpr_parser::{parse_prefix, parser::error::kind::ArityMismatch};
//!
//! let err = parse_prefix("(+ x)").unwrap_err();
//! assert!(err.is::<ArityMismatch>());
//! assert_eq!(err.index(), 1);
//! assert_eq!(err.caret(), "(+ x)\n ^");
//! ```

pub mod parser;
pub mod tokenizer;

#[cfg(test)]
mod proptests;

pub use parser::{
    error::ParseError,
    parse,
    parse_flat,
    parse_postfix,
    parse_prefix,
    Notation,
    Parser,
};
