//! Console error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong talking to the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConsoleErrorKind {
    /// The input stream reached end of file.
    #[display("input stream closed")]
    InputClosed,
    /// Reading or writing failed.
    #[display("I/O failure: {_0}")]
    Io(String),
    /// A validated value does not fit in a `usize`.
    #[display("value {_0} does not fit in a size")]
    Overflow(i64),
}

/// Console error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", kind, file, line)]
pub struct ConsoleError {
    /// Error category.
    pub kind: ConsoleErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConsoleErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// True when the user closed the input stream.
    pub fn is_input_closed(&self) -> bool {
        self.kind == ConsoleErrorKind::InputClosed
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(ConsoleErrorKind::Io(err.to_string()))
    }
}
