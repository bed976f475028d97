//! Tally CLI
//!
//! Entry point for the tally runtime. Parses CLI arguments and delegates to
//! the Runtime for execution.

use std::process::ExitCode;

use clap::Parser as ClapParser;
use tally_cli::{init_logging, repl, Cli, CliResult, Runtime};

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    let mut runtime = Runtime::from_cli(&cli);

    match run(&cli, &mut runtime) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !e.already_reported() {
                eprintln!("{}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, runtime: &mut Runtime) -> CliResult<()> {
    if let Some(file) = &cli.file {
        runtime.execute_file(file)?;
    } else if let Some(code) = &cli.eval {
        if let Some(value) = runtime.execute_string(code)? {
            println!("{}", value);
        }
    } else if cli.repl {
        repl::run_repl(runtime)?;
    } else {
        // Default: show usage
        println!("tally v{}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Usage:");
        println!("  tally --file <FILE>     Execute a source file");
        println!("  tally --eval <CODE>     Evaluate inline source");
        println!("  tally --repl            Start interactive REPL");
        println!();
        println!("Run 'tally --help' for more options.");
    }
    Ok(())
}
