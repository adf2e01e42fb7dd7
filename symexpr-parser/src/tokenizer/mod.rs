pub mod token;

use log::trace;
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer, whitespace
/// included. This allows the parser to backtrack and to point at any region of the input.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        // every character is either whitespace, a parenthesis, or part of a word
        let kind = result.unwrap_or(TokenKind::Word);
        trace!("token {:?} {:?} at {:?}", kind, lexer.slice(), lexer.span());
        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn prefix_expr() {
        compare_tokens(
            "(+ x 2)",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Word, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Word, "x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "2"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn negative_numbers_and_minus() {
        compare_tokens(
            "(- -3 x) - 3",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Word, "-"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "-3"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Word, "x"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Word, "-"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "3"),
            ],
        );
    }

    #[test]
    fn numbers() {
        compare_tokens(
            "2.5 1e-7 3. -0.25E+2",
            [
                (TokenKind::Number, "2.5"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "1e-7"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "3."),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "-0.25E+2"),
            ],
        );
    }

    #[test]
    fn garbage_is_one_word() {
        compare_tokens(
            "12abc\t1.2.3\n$",
            [
                (TokenKind::Word, "12abc"),
                (TokenKind::Whitespace, "\t"),
                (TokenKind::Word, "1.2.3"),
                (TokenKind::Whitespace, "\n"),
                (TokenKind::Word, "$"),
            ],
        );
    }

    #[test]
    fn unicode_whitespace() {
        compare_tokens(
            "(+\u{A0}x\u{0B}2\u{2003})",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Word, "+"),
                (TokenKind::Whitespace, "\u{A0}"),
                (TokenKind::Word, "x"),
                (TokenKind::Whitespace, "\u{0B}"),
                (TokenKind::Number, "2"),
                (TokenKind::Whitespace, "\u{2003}"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn complete_keeps_spans() {
        let tokens = tokenize_complete("(x  atan)");
        let spans = tokens.iter().map(|token| token.span.clone()).collect::<Vec<_>>();
        assert_eq!(spans, vec![0..1, 1..2, 2..4, 4..8, 8..9]);
        assert_eq!(tokens[3].lexeme, "atan");
    }
}
