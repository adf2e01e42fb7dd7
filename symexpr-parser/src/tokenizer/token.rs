use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    /// A run of Unicode whitespace, including vertical tabs and no-break spaces.
    #[regex(r"\s+")]
    Whitespace,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    /// A decimal number, optionally negative, with an optional fraction and exponent. A `-`
    /// directly followed by a digit is part of the number.
    #[regex(r"-?[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", priority = 3)]
    Number,

    /// Any other run of characters up to the next whitespace or parenthesis: variable names,
    /// operator symbols, special float values such as `inf`, and garbage such as `12abc`.
    #[regex(r"[^\s()]+", priority = 1)]
    Word,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    /// Returns true if the token is a parenthesis.
    pub fn is_paren(self) -> bool {
        matches!(self, TokenKind::OpenParen | TokenKind::CloseParen)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
