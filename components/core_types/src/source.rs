//! Source position tracking for diagnostics.

use std::fmt;

/// Represents a position in source code.
///
/// The lexer tracks lines only; tokens and instructions carry the line on
/// which they began.
///
/// # Examples
///
/// ```
/// use core_types::SourcePosition;
///
/// let pos = SourcePosition::new(10);
/// assert_eq!(pos.line, 10);
/// assert_eq!(pos.to_string(), "line 10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourcePosition {
    /// Line number (1-based)
    pub line: u32,
}

impl SourcePosition {
    /// Create a position on the given line
    pub fn new(line: u32) -> Self {
        Self { line }
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self { line: 1 }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.line)
    }
}
