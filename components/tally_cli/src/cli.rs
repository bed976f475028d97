//! Command-line argument definitions

use clap::Parser as ClapParser;
use interpreter::{VmConfig, DEFAULT_STACK_CAPACITY};

/// Fixed-point calculator language
#[derive(ClapParser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tally", version)]
pub struct Cli {
    /// Source file to execute
    #[arg(short, long)]
    pub file: Option<String>,

    /// Source text to evaluate
    #[arg(short, long)]
    pub eval: Option<String>,

    /// Start the interactive REPL
    #[arg(short, long)]
    pub repl: bool,

    /// Print the bytecode of every statement before running it
    #[arg(long)]
    pub print_bytecode: bool,

    /// Print the token stream before compiling
    #[arg(long)]
    pub print_tokens: bool,

    /// Operand stack capacity
    #[arg(long, default_value_t = DEFAULT_STACK_CAPACITY, value_parser = parse_stack_size)]
    pub stack_size: usize,

    /// Stop any statement that runs more than this many instructions
    #[arg(long)]
    pub max_instructions: Option<u64>,
}

impl Cli {
    /// Arguments equivalent to running with no flags
    pub fn new() -> Self {
        Self {
            file: None,
            eval: None,
            repl: false,
            print_bytecode: false,
            print_tokens: false,
            stack_size: DEFAULT_STACK_CAPACITY,
            max_instructions: None,
        }
    }

    /// Arguments for running a file
    pub fn with_file(file: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            ..Self::new()
        }
    }

    /// Arguments for evaluating inline source
    pub fn with_eval(source: impl Into<String>) -> Self {
        Self {
            eval: Some(source.into()),
            ..Self::new()
        }
    }

    /// Arguments for the REPL
    pub fn with_repl() -> Self {
        Self {
            repl: true,
            ..Self::new()
        }
    }

    /// VM limits requested on the command line
    pub fn vm_config(&self) -> VmConfig {
        VmConfig {
            stack_capacity: self.stack_size,
            instruction_budget: self.max_instructions,
        }
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_stack_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("stack size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
