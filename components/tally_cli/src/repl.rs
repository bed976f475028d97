//! REPL (Read-Eval-Print Loop) implementation

use std::io;

use crate::error::{CliError, CliResult};
use crate::runtime::Runtime;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// What the loop should do after a dot-command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Continue,
    Exit,
}

/// Run the interactive REPL
///
/// Each complete line is compiled and executed on the runtime's VM. The
/// value of a final statement that did not print is echoed.
pub fn run_repl(runtime: &mut Runtime) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::ReplError(format!("Failed to initialize editor: {}", e)))?;

    println!("tally v{}", env!("CARGO_PKG_VERSION"));
    println!("Type .help for commands, .exit to quit.");
    println!();

    let mut line_buffer = String::new();

    loop {
        let prompt = if line_buffer.is_empty() { "> " } else { "... " };

        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if line_buffer.is_empty() && trimmed.starts_with('.') {
                    if handle_repl_command(trimmed, runtime) == Control::Exit {
                        break;
                    }
                    continue;
                }

                if !line_buffer.is_empty() {
                    line_buffer.push('\n');
                }
                line_buffer.push_str(&line);

                if !is_input_complete(&line_buffer) {
                    continue;
                }

                let _ = editor.add_history_entry(line_buffer.as_str());

                let mut stdout = io::stdout();
                match runtime.execute_to(&line_buffer, &mut stdout) {
                    Ok(Some(value)) => println!("{}", value),
                    Ok(None) => {}
                    Err(e) if e.already_reported() => {}
                    Err(e) => eprintln!("{}", e),
                }

                line_buffer.clear();
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                if line_buffer.is_empty() {
                    println!("Press Ctrl-D or type .exit to quit");
                } else {
                    println!("^C");
                    line_buffer.clear();
                }
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                println!();
                break;
            }
            Err(err) => {
                return Err(CliError::ReplError(format!("Readline error: {}", err)));
            }
        }
    }

    Ok(())
}

/// Handle special REPL commands
fn handle_repl_command(command: &str, runtime: &mut Runtime) -> Control {
    match command {
        ".help" => {
            println!("REPL Commands:");
            println!("  .help     - Show this help message");
            println!("  .stack    - Show the VM operand stack");
            println!("  .clear    - Empty the VM operand stack");
            println!("  .exit     - Exit the REPL");
        }
        ".stack" => {
            println!("{}", format_stack(runtime.vm().stack()));
        }
        ".clear" => {
            runtime.vm_mut().clear();
        }
        ".exit" => return Control::Exit,
        _ => {
            println!("Unknown command: {}", command);
            println!("Type .help for available commands");
        }
    }
    Control::Continue
}

/// Input is complete once its parentheses balance. Comments are ignored.
fn is_input_complete(input: &str) -> bool {
    let mut depth = 0i32;
    for line in input.lines() {
        let code = line.split('#').next().unwrap_or_default();
        for c in code.chars() {
            match c {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => {}
            }
        }
    }
    depth <= 0
}

/// Render the operand stack, bottom first
fn format_stack(values: &[core_types::Value]) -> String {
    if values.is_empty() {
        return "(empty)".to_string();
    }
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
