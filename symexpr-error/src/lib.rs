//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that ties an [`ErrorKind`] to regions of source code.

// lets `#[derive(ErrorKind)]` resolve `symexpr_error::EXPR` inside this crate
extern crate self as symexpr_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug, Display}, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
///
/// Implementations are usually derived with `#[derive(ErrorKind)]` from the `symexpr-attrs`
/// crate.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns `self` as [`Any`], so that callers can inspect the concrete error kind.
    fn as_any(&self) -> &dyn Any;

    /// The short, human-readable message describing this error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from. There is always at least
    /// one span; the first one is the primary location of the error.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    ///
    /// If `spans` is empty, the error points at the start of the source code.
    pub fn new(mut spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        if spans.is_empty() {
            spans.push(0..0);
        }
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns the message of the error kind.
    pub fn message(&self) -> String {
        self.kind.message()
    }

    /// Returns the 0-based index into the source code where the error is located.
    pub fn index(&self) -> usize {
        self.spans[0].start
    }

    /// Returns true if the error kind is of type `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the error kind as a `K`, if it is one.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Renders the report of this error against the given source code into a string.
    pub fn render(&self, src_id: &str, input: &str) -> String {
        let mut buf = Vec::new();
        match self.build_report(src_id).write((src_id, Source::from(input)), &mut buf) {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.message(),
        }
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at index {})", self.message(), self.index())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use symexpr_attrs::ErrorKind;

    #[derive(Debug, ErrorKind, PartialEq)]
    #[error(
        message = format!("unknown word `{}`", self.word),
        labels = ["this word"],
        help = "try something else",
    )]
    struct UnknownWord {
        word: String,
    }

    #[derive(Debug, ErrorKind, PartialEq)]
    #[error(message = "nothing here")]
    struct Nothing;

    #[test]
    fn message_and_index() {
        let err = Error::new(vec![4..7], UnknownWord { word: "foo".to_string() });
        assert_eq!(err.message(), "unknown word `foo`");
        assert_eq!(err.index(), 4);
        assert_eq!(err.to_string(), "unknown word `foo` (at index 4)");
    }

    #[test]
    fn downcast() {
        let err = Error::new(vec![0..1], Nothing);
        assert!(err.is::<Nothing>());
        assert!(!err.is::<UnknownWord>());
        assert_eq!(err.downcast_ref::<Nothing>(), Some(&Nothing));
    }

    #[test]
    fn empty_spans_point_at_start() {
        let err = Error::new(Vec::new(), Nothing);
        assert_eq!(err.spans, vec![0..0]);
        assert_eq!(err.index(), 0);
    }

    #[test]
    fn render_report() {
        let input = "(+ x foo)";
        let err = Error::new(vec![5..8], UnknownWord { word: "foo".to_string() });
        let rendered = strip_ansi_escapes::strip(err.render("input", input));
        let rendered = String::from_utf8(rendered).unwrap();
        assert!(rendered.contains("unknown word `foo`"));
        assert!(rendered.contains("this word"));
        assert!(rendered.contains("try something else"));
    }
}
