//! Grammar input: file or stdin, decoded and compiled.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use trellis_compiler::{LowerError, Program};
use trellis_core::grammar::{Grammar, GrammarError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    Lower(#[from] LowerError),
}

/// Reads `path` (`-` for stdin) as grammar.json and compiles it.
pub fn load_program(path: &Path) -> Result<Program, LoadError> {
    let json = read_input(path)?;
    compile_json(&json)
}

pub fn compile_json(json: &str) -> Result<Program, LoadError> {
    let grammar = Grammar::from_json(json)?;
    Ok(Program::compile(&grammar)?)
}

/// Reads a file, or stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String, LoadError> {
    let read_error = |source| LoadError::Read {
        path: path.to_owned(),
        source,
    };
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_error)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(read_error)
}
