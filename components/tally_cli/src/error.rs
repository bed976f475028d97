//! Error types for the CLI

use parser::CompileError;
use thiserror::Error;

use interpreter::VmError;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Source could not be compiled
    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),

    /// Execution stopped with an error
    #[error("Runtime error: {0}")]
    Vm(#[from] VmError),

    /// A statement needs a deeper operand stack than the VM has
    #[error("Runtime error: statement needs {needed} stack slots, limit is {capacity}")]
    StackLimit {
        /// Depth the statement reaches
        needed: usize,
        /// Configured capacity
        capacity: usize,
    },

    /// File I/O error
    #[error("File error: {0}")]
    IoError(#[from] std::io::Error),

    /// REPL error
    #[error("REPL error: {0}")]
    ReplError(String),
}

impl CliError {
    /// Whether the error has already been shown to the user.
    ///
    /// Lexical errors are printed by the lexer's error sink as they happen.
    pub fn already_reported(&self) -> bool {
        matches!(self, CliError::Compile(CompileError::Lex(_)))
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
