use std::ops::Range;
use super::{error::kind, leaf::{operator, parse_leaf}, Notation, Parser, MAX_DEPTH};
use crate::tokenizer::{Token, TokenKind};
use symexpr_compute::{expr::ArityError, Expr, OpKind};
use symexpr_error::Error;

/// The pieces of a parenthesized group, before the operator is applied to its operands.
#[derive(Debug, Clone, PartialEq)]
struct Group {
    /// The operator of the group.
    op: OpKind,

    /// The region of the source code containing the operator symbol.
    op_span: Range<usize>,

    /// The operands, in source order.
    operands: Vec<Expr>,

    /// The region of the source code containing the whole group, parentheses included.
    span: Range<usize>,
}

/// Creates an error pointing at an opening parenthesis that was never closed.
fn unclosed(open: &Token) -> Error {
    Error::new(vec![open.span.clone()], kind::UnclosedParenthesis { opening: true })
}

/// Converts an [`ArityError`] into an error pointing at the operator and its group.
pub(crate) fn arity_mismatch(err: ArityError, op_span: Range<usize>, span: Range<usize>) -> Error {
    Error::new(vec![op_span, span], kind::ArityMismatch {
        op: err.op,
        expected: err.op.arity(),
        found: err.found,
    })
}

impl<'source> Parser<'source> {
    /// Parses a single expression in the given parenthesized notation: a number, a variable, or a
    /// parenthesized group.
    pub fn parse_expr(&mut self, notation: Notation) -> Result<Expr, Error> {
        let token = self.next_token()?;
        match token.kind {
            TokenKind::OpenParen => self.parse_group(&token, notation),
            TokenKind::CloseParen => {
                Err(Error::new(vec![token.span], kind::UnclosedParenthesis { opening: false }))
            },
            _ => parse_leaf(&token),
        }
    }

    /// Parses the rest of a group whose opening parenthesis has already been consumed, then
    /// applies the operator, checking its arity.
    ///
    /// Groups may be nested at most [`MAX_DEPTH`] levels deep.
    fn parse_group(&mut self, open: &Token<'source>, notation: Notation) -> Result<Expr, Error> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::new(vec![open.span.clone()], kind::NestingTooDeep { limit: MAX_DEPTH }));
        }

        self.depth += 1;
        let group = match notation {
            Notation::Postfix => self.parse_postfix_group(open),
            _ => self.parse_prefix_group(open),
        };
        self.depth -= 1;
        let group = group?;

        Expr::op(group.op, group.operands)
            .map_err(|err| arity_mismatch(err, group.op_span, group.span))
    }

    /// Parses `op operand*)`.
    fn parse_prefix_group(&mut self, open: &Token<'source>) -> Result<Group, Error> {
        let head = self.next_token().map_err(|_| unclosed(open))?;
        if head.kind == TokenKind::CloseParen {
            return Err(Error::new(vec![open.span.start..head.span.end], kind::MissingOperator));
        }

        let op = operator(&head).ok_or_else(|| {
            Error::new(vec![head.span.clone()], kind::ExpectedOperator {
                found: head.lexeme.to_owned(),
            })
        })?;

        let mut operands = Vec::new();
        loop {
            match self.current_token().map(|token| token.kind) {
                None => return Err(unclosed(open)),
                Some(TokenKind::CloseParen) => break,
                Some(_) => operands.push(self.parse_expr(Notation::Prefix)?),
            }
        }

        let close = self.next_token()?;
        Ok(Group {
            op,
            op_span: head.span,
            operands,
            span: open.span.start..close.span.end,
        })
    }

    /// Parses `operand* op)`.
    fn parse_postfix_group(&mut self, open: &Token<'source>) -> Result<Group, Error> {
        let mut operands = Vec::new();
        loop {
            let Some(token) = self.current_token().cloned() else {
                return Err(unclosed(open));
            };

            if token.kind == TokenKind::CloseParen {
                return Err(Error::new(vec![open.span.start..token.span.end], kind::MissingOperator));
            }

            let Some(op) = operator(&token) else {
                operands.push(self.parse_expr(Notation::Postfix)?);
                continue;
            };

            // the operator must be the last thing in the group
            self.next_token()?;
            return match self.next_token() {
                Ok(close) if close.kind == TokenKind::CloseParen => Ok(Group {
                    op,
                    op_span: token.span,
                    operands,
                    span: open.span.start..close.span.end,
                }),
                Ok(other) => Err(Error::new(vec![other.span], kind::UnexpectedToken {
                    expected: "a closing parenthesis",
                    found: other.lexeme.to_owned(),
                })),
                Err(_) => Err(unclosed(open)),
            };
        }
    }
}
