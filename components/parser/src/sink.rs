//! Destinations for lexical error reports

use crate::error::LexError;

/// Receives every lexical error as it happens.
///
/// Reporting never unwinds; the lexer still returns the error to its caller
/// after the sink has seen it.
pub trait ErrorSink {
    /// Called once per lexical error
    fn report(&mut self, error: &LexError);
}

/// Writes `Lexical Analysis Error: <message>` to standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl ErrorSink for StderrSink {
    fn report(&mut self, error: &LexError) {
        eprintln!("Lexical Analysis Error: {}", error);
    }
}

/// Keeps every reported error for later inspection.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    errors: Vec<LexError>,
}

impl CollectingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors reported so far, oldest first
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Remove and return the collected errors
    pub fn take(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.errors)
    }
}

impl ErrorSink for CollectingSink {
    fn report(&mut self, error: &LexError) {
        self.errors.push(error.clone());
    }
}

impl<F> ErrorSink for F
where
    F: FnMut(&LexError),
{
    fn report(&mut self, error: &LexError) {
        self(error)
    }
}
