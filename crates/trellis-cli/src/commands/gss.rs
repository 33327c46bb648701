//! Export the graph-structured stack of a parse as Graphviz DOT.

use std::fs;
use std::path::PathBuf;

use trellis_vm::{Engine, GssPrinter};

use super::run_common::{load_source, prepare_program};

pub struct GssArgs {
    pub grammar_path: PathBuf,
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub output: Option<PathBuf>,
    pub fuel: u32,
}

pub fn run(args: GssArgs) {
    let input = load_source(
        args.source_text.as_deref(),
        args.source_path.as_deref(),
        &args.grammar_path,
    );
    let program = prepare_program(&args.grammar_path);

    // The stack is exported whatever the verdict; only exhausted fuel aborts.
    let mut engine = Engine::builder(&program).exec_fuel(args.fuel).build();
    if let Err(e) = engine.parse(&input) {
        eprintln!("runtime error: {}", e);
        std::process::exit(2);
    }

    let dot = GssPrinter::new(&program, engine.state()).dump();
    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, dot) {
                eprintln!("error: failed to write '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => print!("{dot}"),
    }
}
