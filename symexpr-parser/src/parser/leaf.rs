use super::error::kind;
use crate::tokenizer::{Token, TokenKind};
use symexpr_compute::{Expr, OpKind, Var};
use symexpr_error::Error;

/// Returns the operator whose symbol is the lexeme of the given token, if any.
pub fn operator(token: &Token) -> Option<OpKind> {
    match token.kind {
        TokenKind::Word => OpKind::from_symbol(token.lexeme),
        _ => None,
    }
}

/// Returns true if the lexeme starts the way a number does, so that a failure to read it is
/// reported as a malformed number rather than an unknown token.
fn looks_numeric(lexeme: &str) -> bool {
    let unsigned = lexeme.strip_prefix(['-', '+']).unwrap_or(lexeme);
    unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

/// Converts a number or word token into a constant or a variable.
///
/// Words are matched against the variable names first, then read as an `f64`, which also
/// accepts the special values written by the printer (`inf`, `-inf`, `NaN`).
pub fn parse_leaf(token: &Token) -> Result<Expr, Error> {
    if let Some(var) = Var::from_name(token.lexeme) {
        return Ok(Expr::Var(var));
    }

    let spans = vec![token.span.clone()];
    if let Some(op) = operator(token) {
        return Err(Error::new(spans, kind::UnexpectedOperator { found: op }));
    }

    match token.lexeme.parse::<f64>() {
        Ok(value) => Ok(Expr::Const(value)),
        Err(_) if looks_numeric(token.lexeme) => {
            Err(Error::new(spans, kind::MalformedNumber { lexeme: token.lexeme.to_owned() }))
        },
        Err(_) => Err(Error::new(spans, kind::UnknownToken { found: token.lexeme.to_owned() })),
    }
}
