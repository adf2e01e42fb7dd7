use std::{fmt, io};
use symexpr_parser::{parser::UnknownNotation, ParseError};

/// A `:` command could not be understood.
#[derive(Debug)]
pub enum CommandError {
    /// The command name is not known.
    Unknown(String),

    /// The command needs an argument that was not given.
    MissingArgument(&'static str),

    /// The argument of `:d` is not a variable.
    UnknownVariable(String),

    /// The argument of `:mode` is not a notation.
    UnknownNotation(UnknownNotation),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(name) => write!(f, "unknown command `:{}` (expected `:d` or `:mode`)", name),
            Self::MissingArgument(usage) => write!(f, "missing argument, usage: {}", usage),
            Self::UnknownVariable(name) => {
                write!(f, "unknown variable `{}` (expected x, y, z, u, v, w, or all)", name)
            },
            Self::UnknownNotation(err) => write!(f, "{}", err),
        }
    }
}

/// Utility enum to package errors that can occur while processing input.
#[derive(Debug)]
pub enum Error {
    /// The input could not be parsed.
    Parse(ParseError),

    /// A `:` command was malformed.
    Command(CommandError),

    /// The input could not be read.
    Io(io::Error),
}

impl Error {
    /// Report this error to stderr.
    ///
    /// Parse errors are rendered as a full report pointing into the input.
    pub fn report_to_stderr(&self) {
        match self {
            Self::Parse(err) => {
                if err.report_to_stderr().is_err() {
                    eprintln!("{}", err);
                }
            },
            Self::Command(err) => eprintln!("error: {}", err),
            Self::Io(err) => eprintln!("error: {}", err),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<CommandError> for Error {
    fn from(err: CommandError) -> Self {
        Self::Command(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
