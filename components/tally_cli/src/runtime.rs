//! Runtime orchestration for tally execution
//!
//! The Runtime ties the components together: the lexer and compiler turn
//! source into statements, and a persistent VM runs each statement as soon
//! as it is compiled.

use std::io::{self, Write};

use core_types::Value;
use interpreter::{VmConfig, VM};
use parser::{Compiler, Lexer, Statement};
use tracing::debug;

use crate::cli::Cli;
use crate::error::{CliError, CliResult};

/// Main runtime that orchestrates compilation and execution
#[derive(Debug)]
pub struct Runtime {
    /// Whether to print bytecode before execution
    print_bytecode: bool,
    /// Whether to print the token stream before compiling
    print_tokens: bool,
    /// Persistent VM instance, owned for the runtime's lifetime
    vm: VM,
}

impl Runtime {
    /// Create a new runtime with the given VM limits
    ///
    /// # Example
    /// ```
    /// use interpreter::VmConfig;
    /// use tally_cli::Runtime;
    ///
    /// let runtime = Runtime::new(VmConfig::default());
    /// assert_eq!(runtime.vm().depth(), 0);
    /// ```
    pub fn new(config: VmConfig) -> Self {
        Self {
            print_bytecode: false,
            print_tokens: false,
            vm: VM::with_config(config),
        }
    }

    /// Create a runtime configured from command-line arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(cli.vm_config())
            .with_print_bytecode(cli.print_bytecode)
            .with_print_tokens(cli.print_tokens)
    }

    /// Enable bytecode printing
    pub fn with_print_bytecode(mut self, enabled: bool) -> Self {
        self.print_bytecode = enabled;
        self
    }

    /// Enable token printing
    pub fn with_print_tokens(mut self, enabled: bool) -> Self {
        self.print_tokens = enabled;
        self
    }

    /// Check if bytecode printing is enabled
    pub fn is_print_bytecode_enabled(&self) -> bool {
        self.print_bytecode
    }

    /// Check if token printing is enabled
    pub fn is_print_tokens_enabled(&self) -> bool {
        self.print_tokens
    }

    /// Get the VM
    pub fn vm(&self) -> &VM {
        &self.vm
    }

    /// Get mutable access to the VM
    pub fn vm_mut(&mut self) -> &mut VM {
        &mut self.vm
    }

    /// Execute a source file, writing `print` output to standard output
    ///
    /// # Errors
    /// Returns `CliError` if the file cannot be read or a statement fails
    ///
    /// # Example
    /// ```no_run
    /// use interpreter::VmConfig;
    /// use tally_cli::Runtime;
    ///
    /// let mut runtime = Runtime::new(VmConfig::default());
    /// runtime.execute_file("example.tl").unwrap();
    /// ```
    pub fn execute_file(&mut self, path: &str) -> CliResult<Option<Value>> {
        let source = std::fs::read_to_string(path)?;
        self.execute_string(&source)
    }

    /// Execute source text, writing `print` output to standard output
    pub fn execute_string(&mut self, source: &str) -> CliResult<Option<Value>> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.execute_to(source, &mut out)
    }

    /// Execute source text, writing `print` output and diagnostics to `out`
    ///
    /// Statements run in order as they are compiled; execution stops at the
    /// first error. Returns the value of the final statement, unless that
    /// statement printed it already.
    ///
    /// # Example
    /// ```
    /// use interpreter::VmConfig;
    /// use tally_cli::Runtime;
    ///
    /// let mut runtime = Runtime::new(VmConfig::default());
    /// let mut out = Vec::new();
    /// let last = runtime.execute_to("print 1 + 1; 2 * 3", &mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "2\n");
    /// assert_eq!(last.unwrap().to_string(), "6");
    /// ```
    pub fn execute_to<W: Write>(&mut self, source: &str, out: &mut W) -> CliResult<Option<Value>> {
        if self.print_tokens {
            dump_tokens(source, out)?;
        }

        let mut last = None;
        let compiler = Compiler::new(Lexer::new(source.chars()));
        for statement in compiler {
            let statement = statement?;
            let value = self.execute_statement(&statement, out)?;
            last = if statement.print { None } else { value };
        }
        Ok(last)
    }

    /// Run one compiled statement and take its result off the stack
    pub fn execute_statement<W: Write>(
        &mut self,
        statement: &Statement,
        out: &mut W,
    ) -> CliResult<Option<Value>> {
        if self.print_bytecode {
            write!(out, "{}", statement.code)?;
        }

        let capacity = self.vm.config().stack_capacity;
        let needed = statement.code.max_stack_depth().unwrap_or(usize::MAX);
        if needed.saturating_add(self.vm.depth()) > capacity {
            return Err(CliError::StackLimit { needed, capacity });
        }

        if let Err(e) = self.vm.execute(&statement.code) {
            self.vm.clear();
            return Err(e.into());
        }

        let value = self.vm.pop_result();
        debug!(result = ?value, print = statement.print, "statement finished");
        if statement.print {
            if let Some(value) = &value {
                writeln!(out, "{}", value)?;
            }
        }
        Ok(value)
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(VmConfig::default())
    }
}

/// Write one line per token: source line, then the token.
fn dump_tokens<W: Write>(source: &str, out: &mut W) -> io::Result<()> {
    for token in Lexer::new(source.chars()).flatten() {
        writeln!(out, "{:>4}  {}", token.position.line, token)?;
    }
    Ok(())
}
