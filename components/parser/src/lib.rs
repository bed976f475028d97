//! Tally Parser Component
//!
//! Provides the context-sensitive lexer and the statement compiler that
//! turns tokens into bytecode.
//!
//! # Overview
//!
//! - [`Lexer`] - Tokenizes a [`CharSource`], one token per call
//! - [`Token`] - Token kind, optional payload and source line
//! - [`ErrorSink`] - Where lexical errors are reported
//! - [`Compiler`] - Precedence-climbing compiler producing one
//!   [`BytecodeChunk`](bytecode_system::BytecodeChunk) per statement
//!
//! # Example
//!
//! ```
//! use parser::{compile_source, CollectingSink, Compiler, Lexer};
//!
//! let statements = compile_source("print 1 + 2; 3 * 4;").unwrap();
//! assert_eq!(statements.len(), 2);
//!
//! let lexer = Lexer::with_sink("sine(1);".chars(), CollectingSink::new());
//! let mut compiler = Compiler::new(lexer);
//! assert!(compiler.compile_statement().is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compiler;
pub mod error;
pub mod lexer;
pub mod sink;
pub mod token;

pub use compiler::{compile_source, Compiler, Statement, MAX_NESTING_DEPTH};
pub use error::{CompileError, LexError};
pub use lexer::{CharSource, Lexer, MAX_IDENTIFIER_LEN, MAX_NAME_LEN, MAX_NUMBER_LEN};
pub use sink::{CollectingSink, ErrorSink, StderrSink};
pub use token::{Category, Literal, Token, TokenKind};
