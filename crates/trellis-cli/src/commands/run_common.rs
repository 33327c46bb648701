//! Shared logic for parse, trace and gss.

use std::path::Path;

use trellis_compiler::Program;

use super::grammar_loader::{load_program, read_input};

/// Loads and compiles the grammar, exiting on failure.
pub fn prepare_program(grammar_path: &Path) -> Program {
    load_program(grammar_path).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}

/// Input text from `-s`, a file, or stdin.
pub fn load_source(
    source_text: Option<&str>,
    source_path: Option<&Path>,
    grammar_path: &Path,
) -> String {
    if let Some(text) = source_text {
        return text.to_owned();
    }
    let Some(path) = source_path else {
        eprintln!("error: input is required: use positional argument or -s/--source");
        std::process::exit(1);
    };
    if path.as_os_str() == "-" && grammar_path.as_os_str() == "-" {
        eprintln!("error: grammar and input cannot both be from stdin");
        std::process::exit(1);
    }
    read_input(path).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}
