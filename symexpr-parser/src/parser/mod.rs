pub mod error;
pub mod group;
pub mod leaf;
pub mod stack;

use error::{kind, ParseError};
use log::debug;
use std::{fmt, ops::Range, str::FromStr};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use symexpr_compute::Expr;
use symexpr_error::{Error, ErrorKind};

/// The textual notations that the parser accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Fully-parenthesized prefix notation, such as `(+ x 2)`.
    #[default]
    Prefix,

    /// Fully-parenthesized postfix notation, such as `(x 2 +)`.
    Postfix,

    /// Parenthesis-free postfix notation, such as `x 2 +`. Fixed-arity operators take their
    /// operands from the top of the stack; `sumexp` and `softmax` take the whole stack.
    Flat,
}

impl Notation {
    /// All notations, in the order they are usually listed.
    pub const ALL: [Notation; 3] = [Notation::Prefix, Notation::Postfix, Notation::Flat];

    /// Returns the name of the notation.
    pub fn name(self) -> &'static str {
        match self {
            Notation::Prefix => "prefix",
            Notation::Postfix => "postfix",
            Notation::Flat => "flat",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The given string is not the name of a [`Notation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNotation(pub String);

impl fmt::Display for UnknownNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown notation `{}` (expected prefix, postfix, or flat)", self.0)
    }
}

impl std::error::Error for UnknownNotation {}

impl FromStr for Notation {
    type Err = UnknownNotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Notation::ALL
            .into_iter()
            .find(|notation| notation.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownNotation(s.to_owned()))
    }
}

/// The maximum number of operations an expression may nest inside each other.
pub const MAX_DEPTH: usize = 256;

/// A high-level parser for expressions. This is the type to use to parse an arbitrary piece of
/// source code into an [`Expr`].
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The source code being parsed.
    source: &'source str,

    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The number of groups currently being parsed.
    depth: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            tokens: tokenize_complete(source),
            cursor: 0,
            depth: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.source.len()..self.source.len()
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Advances the cursor past any whitespace tokens.
    fn skip_whitespace(&mut self) {
        while self.tokens.get(self.cursor).is_some_and(Token::is_whitespace) {
            self.cursor += 1;
        }
    }

    /// Returns the current non-whitespace token. Whitespace before it is consumed, but the token
    /// itself is not. Returns [`None`] if the cursor is at the end of the stream.
    pub fn current_token(&mut self) -> Option<&Token<'source>> {
        self.skip_whitespace();
        self.tokens.get(self.cursor)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        self.skip_whitespace();
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            None => Err(self.error(kind::UnexpectedEof)),
        }
    }

    /// Parses the whole source code as a single expression written in the given notation.
    ///
    /// Parsing fails if the source code is empty, or if anything other than whitespace follows
    /// the expression.
    pub fn parse_full(&mut self, notation: Notation) -> Result<Expr, ParseError> {
        self.parse_all(notation).map_err(|err| {
            debug!(
                "failed to parse {:?} as {} notation: {} at {:?}",
                self.source,
                notation,
                err.message(),
                err.spans,
            );
            ParseError::new(err, self.source)
        })
    }

    fn parse_all(&mut self, notation: Notation) -> Result<Expr, Error> {
        if self.source.is_empty() {
            return Err(self.error(kind::EmptyInput));
        }

        let expr = match notation {
            Notation::Prefix | Notation::Postfix => self.parse_expr(notation)?,
            Notation::Flat => return self.parse_stack(),
        };

        match self.current_token().map(|token| token.kind) {
            None => Ok(expr),
            Some(TokenKind::CloseParen) => {
                Err(self.error(kind::UnclosedParenthesis { opening: false }))
            },
            Some(_) => Err(Error::new(vec![self.span().start..self.source.len()], kind::ExpectedEof)),
        }
    }
}

/// Parses an expression written in fully-parenthesized prefix notation, such as `(+ x 2)`.
///
/// ```
/// use symexpr_parser::parse_prefix;
///
/// let expr = parse_prefix("(* (+ x 1) y)").unwrap();
/// assert_eq!(expr.eval(&[2.0, 4.0, 0.0, 0.0, 0.0, 0.0]), 12.0);
/// ```
pub fn parse_prefix(source: &str) -> Result<Expr, ParseError> {
    Parser::new(source).parse_full(Notation::Prefix)
}

/// Parses an expression written in fully-parenthesized postfix notation, such as `(x 2 +)`.
///
/// ```
/// use symexpr_parser::parse_postfix;
///
/// let expr = parse_postfix("((x 1 +) y *)").unwrap();
/// assert_eq!(expr.prefix(), "(* (+ x 1) y)");
/// ```
pub fn parse_postfix(source: &str) -> Result<Expr, ParseError> {
    Parser::new(source).parse_full(Notation::Postfix)
}

/// Parses an expression written in flat postfix notation, such as `x 2 +`. This is the format
/// produced by the [`Display`](std::fmt::Display) implementation of [`Expr`].
///
/// ```
/// use symexpr_parser::parse_flat;
///
/// let expr = parse_flat("x 1 + y *").unwrap();
/// assert_eq!(expr.prefix(), "(* (+ x 1) y)");
/// ```
pub fn parse_flat(source: &str) -> Result<Expr, ParseError> {
    Parser::new(source).parse_full(Notation::Flat)
}

/// Parses an expression written in the given notation.
pub fn parse(source: &str, notation: Notation) -> Result<Expr, ParseError> {
    Parser::new(source).parse_full(notation)
}
