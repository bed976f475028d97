//! Tally Runtime CLI Library
//!
//! Provides the Runtime struct and supporting modules for the `tally`
//! binary: argument parsing, file and inline execution, and the REPL.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod logging;
pub mod repl;
pub mod runtime;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use logging::{init_logging, DEFAULT_FILTER};
pub use runtime::Runtime;
