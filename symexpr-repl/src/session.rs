use crate::error::{CommandError, Error};
use log::{debug, info};
use std::fmt::Write;
use symexpr_compute::{simplify, Expr, Var};
use symexpr_parser::{parse, Notation};

/// Writes the expression in the given notation.
fn render(expr: &Expr, notation: Notation) -> String {
    match notation {
        Notation::Prefix => expr.prefix(),
        Notation::Postfix => expr.postfix(),
        Notation::Flat => expr.flat(),
    }
}

/// The state kept between lines of input.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// The notation used to read expressions.
    notation: Notation,

    /// The values of the variables, used for evaluation.
    bindings: [f64; 6],

    /// The variable to differentiate with respect to, or [`None`] for every variable.
    derive_by: Option<Var>,
}

impl Session {
    /// Creates a new session.
    pub fn new(notation: Notation, bindings: [f64; 6]) -> Self {
        Self { notation, bindings, derive_by: None }
    }

    /// Processes one line of input, returning the text to print.
    ///
    /// Lines starting with `:` are commands; any other line is an expression.
    pub fn process(&mut self, line: &str) -> Result<String, Error> {
        let line = line.trim();
        match line.strip_prefix(':') {
            Some(command) => Ok(self.command(command)?),
            None => self.expression(line),
        }
    }

    /// Runs a `:` command.
    fn command(&mut self, command: &str) -> Result<String, CommandError> {
        let mut words = command.split_whitespace();
        let name = words.next().unwrap_or_default();
        let arg = words.next();

        match name {
            "mode" => {
                let arg = arg.ok_or(CommandError::MissingArgument(":mode <prefix|postfix|flat>"))?;
                self.notation = arg.parse().map_err(CommandError::UnknownNotation)?;
                info!("switched to {} notation", self.notation);
                Ok(format!("reading {} notation", self.notation))
            },
            "d" => {
                let arg = arg.ok_or(CommandError::MissingArgument(":d <x|y|z|u|v|w|all>"))?;
                self.derive_by = match arg {
                    "all" => None,
                    name => Some(
                        Var::from_name(name)
                            .ok_or_else(|| CommandError::UnknownVariable(name.to_owned()))?
                    ),
                };
                Ok(match self.derive_by {
                    Some(var) => format!("differentiating with respect to {}", var),
                    None => "differentiating with respect to every variable".to_owned(),
                })
            },
            other => Err(CommandError::Unknown(other.to_owned())),
        }
    }

    /// Parses the expression, then describes it: its value, its three notations, and its
    /// simplified derivatives.
    fn expression(&self, source: &str) -> Result<String, Error> {
        let expr = parse(source, self.notation)?;
        debug!("parsed {} nodes", expr.node_count());

        let mut out = String::new();
        // writing to a `String` cannot fail
        let _ = writeln!(out, "value:   {}", expr.eval(&self.bindings));
        let _ = writeln!(out, "flat:    {}", expr);
        let _ = writeln!(out, "prefix:  {}", expr.as_prefix());
        let _ = write!(out, "postfix: {}", expr.as_postfix());

        let vars = match self.derive_by {
            Some(var) => vec![var],
            None => Var::ALL.to_vec(),
        };
        for var in vars {
            let derivative = simplify(&expr.derivative(var));
            let _ = write!(out, "\nd/d{}:    {}", var, render(&derivative, self.notation));
        }

        Ok(out)
    }
}
