//! Parser error types

use thiserror::Error;

use crate::token::TokenKind;

/// Lexical errors. The offending run has been consumed when one of these is
/// returned, so the next call starts on fresh input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Identifier run longer than the identifier buffer
    #[error("identifier on line {line} exceeds {limit} characters")]
    IdentifierTooLong {
        /// Line the identifier began on
        line: u32,
        /// Buffer capacity
        limit: usize,
    },

    /// Name longer than a name token can carry
    #[error("name {name:?} on line {line} exceeds {limit} characters")]
    NameTooLong {
        /// The rejected name
        name: String,
        /// Line the name began on
        line: u32,
        /// Maximum name length
        limit: usize,
    },

    /// Digit run longer than the literal buffer
    #[error("numeric literal on line {line} exceeds {limit} digits")]
    NumberTooLong {
        /// Line the literal began on
        line: u32,
        /// Buffer capacity
        limit: usize,
    },
}

impl LexError {
    /// Line on which the offending token began
    pub fn line(&self) -> u32 {
        match self {
            LexError::IdentifierTooLong { line, .. }
            | LexError::NameTooLong { line, .. }
            | LexError::NumberTooLong { line, .. } => *line,
        }
    }
}

/// Errors raised while compiling a statement
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The lexer could not produce a token
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A token that cannot appear here
    #[error("line {line}: expected {expected}, found {found}")]
    UnexpectedToken {
        /// What the grammar wanted
        expected: &'static str,
        /// What was actually there
        found: TokenKind,
        /// Line of the offending token
        line: u32,
    },

    /// Names are lexed but there are no variables to bind them to
    #[error("line {line}: unsupported name {name:?}")]
    UnsupportedName {
        /// The name as written
        name: String,
        /// Line of the name
        line: u32,
    },

    /// Parentheses or prefix operators nested past the compiler's limit
    #[error("line {line}: expression nested more than {limit} levels deep")]
    NestingTooDeep {
        /// Line where the limit was crossed
        line: u32,
        /// Maximum nesting depth
        limit: usize,
    },
}

impl CompileError {
    /// Line on which the error was detected
    pub fn line(&self) -> u32 {
        match self {
            CompileError::Lex(e) => e.line(),
            CompileError::UnexpectedToken { line, .. }
            | CompileError::UnsupportedName { line, .. }
            | CompileError::NestingTooDeep { line, .. } => *line,
        }
    }
}

/// Create an unexpected token error
pub fn unexpected_token(expected: &'static str, found: TokenKind, line: u32) -> CompileError {
    CompileError::UnexpectedToken {
        expected,
        found,
        line,
    }
}
