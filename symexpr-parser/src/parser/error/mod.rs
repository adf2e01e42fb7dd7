pub mod kind;

use std::{fmt, io};
use symexpr_error::{Error, ErrorKind};

/// An error produced while parsing a piece of source code.
///
/// The error keeps a copy of the source code it refers to, so that it can point at the offending
/// position on its own, either with a plain caret line ([`ParseError::caret`]) or with a full
/// report ([`ParseError::report_to_stderr`]).
#[derive(Debug)]
pub struct ParseError {
    /// The underlying error, holding the kind and the highlighted regions.
    error: Error,

    /// The source code that failed to parse.
    source: String,
}

impl ParseError {
    /// Creates a new parse error for the given source code.
    pub fn new(error: Error, source: &str) -> Self {
        Self { error, source: source.to_owned() }
    }

    /// Returns the underlying [`Error`].
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// Returns the message of the error kind.
    pub fn message(&self) -> String {
        self.error.message()
    }

    /// Returns the 0-based byte index into the source code where the error is located. The index
    /// is equal to the length of the source code if the error occurred at the end of the input.
    pub fn index(&self) -> usize {
        self.error.index()
    }

    /// Returns the source code that failed to parse.
    pub fn source_code(&self) -> &str {
        &self.source
    }

    /// Returns true if the error kind is of type `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.error.is::<K>()
    }

    /// Returns the error kind as a `K`, if it is one.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.error.downcast_ref::<K>()
    }

    /// Returns the source code, followed by a line with a caret `^` under the error position.
    ///
    /// ```
    /// use symexpr_parser::parse_prefix;
    ///
    /// let err = parse_prefix("(+ x q)").unwrap_err();
    /// assert_eq!(err.caret(), "(+ x q)\n     ^");
    /// ```
    pub fn caret(&self) -> String {
        let index = self.index().min(self.source.len());
        let column = self.source
            .char_indices()
            .take_while(|(i, _)| *i < index)
            .count();
        format!("{}\n{}^", self.source, " ".repeat(column))
    }

    /// Renders the full report of this error into a string.
    pub fn render(&self) -> String {
        self.error.render("input", &self.source)
    }

    /// Report this error to stderr.
    pub fn report_to_stderr(&self) -> io::Result<()> {
        self.error.report_to_stderr("input", &self.source)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at index {}\n{}", self.message(), self.index(), self.caret())
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
