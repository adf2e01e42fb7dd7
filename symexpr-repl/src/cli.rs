use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use symexpr_compute::Var;
use symexpr_parser::Notation;

/// Parse, evaluate, differentiate, and simplify arithmetic expressions.
#[derive(Debug, Parser)]
#[command(
    name = "symexpr",
    version,
    after_help = r#"
Commands (interactive mode or one per line of input):
  :mode <prefix|postfix|flat>  Switch the notation used to read expressions
  :d <x|y|z|u|v|w|all>         Choose which derivatives are printed

Environment Variables:
  SYMEXPR_NOTATION=postfix     Notation used to read expressions
  SYMEXPR_VARS=x=1,y=2         Values of the variables used for evaluation
  SYMEXPR_LOG=debug            Set log level (error, warn, info, debug, trace)
"#
)]
pub struct Cli {
    /// Notation used to read expressions
    #[arg(short, long, value_enum, env = "SYMEXPR_NOTATION", default_value = "prefix")]
    pub notation: NotationArg,

    /// Values of the variables used for evaluation, such as `x=1,y=2`; unset variables are 0
    #[arg(long, env = "SYMEXPR_VARS", value_parser = parse_bindings)]
    pub vars: Option<[f64; 6]>,

    /// Set log level
    #[arg(long, value_enum, env = "SYMEXPR_LOG", default_value = "warn")]
    pub log_level: LogLevel,

    /// File to read expressions from, one per line (reads stdin when it is not a terminal)
    pub input: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum NotationArg {
    Prefix,
    Postfix,
    Flat,
}

impl From<NotationArg> for Notation {
    fn from(notation: NotationArg) -> Self {
        match notation {
            NotationArg::Prefix => Notation::Prefix,
            NotationArg::Postfix => Notation::Postfix,
            NotationArg::Flat => Notation::Flat,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Parses variable bindings of the form `x=1,y=-2.5`.
pub fn parse_bindings(s: &str) -> Result<[f64; 6], String> {
    let mut bindings = [0.0; 6];

    for binding in s.split(',').map(str::trim).filter(|binding| !binding.is_empty()) {
        let (name, value) = binding
            .split_once('=')
            .ok_or_else(|| format!("expected `name=value`, found `{}`", binding))?;
        let var = Var::from_name(name.trim())
            .ok_or_else(|| format!("unknown variable `{}`", name.trim()))?;
        bindings[var.index()] = value
            .trim()
            .parse()
            .map_err(|err| format!("invalid value for `{}`: {}", var, err))?;
    }

    Ok(bindings)
}
