//! Trace engine execution for debugging.

use std::path::PathBuf;

use trellis_core::Colors;
use trellis_vm::{Engine, PrintTracer, Verbosity};

use super::run_common::{load_source, prepare_program};

pub struct TraceArgs {
    pub grammar_path: PathBuf,
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub verbosity: Verbosity,
    pub fuel: u32,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let input = load_source(
        args.source_text.as_deref(),
        args.source_path.as_deref(),
        &args.grammar_path,
    );
    let program = prepare_program(&args.grammar_path);
    let colors = Colors::new(args.color);

    let mut engine = Engine::builder(&program).exec_fuel(args.fuel).build();
    let mut tracer = PrintTracer::new(&program, args.verbosity, colors);

    let accepted = match engine.parse_with(&input, &mut tracer) {
        Ok(accepted) => {
            tracer.print();
            accepted
        }
        Err(e) => {
            tracer.print();
            eprintln!("runtime error: {}", e);
            std::process::exit(2);
        }
    };

    println!("{}---{}", colors.dim, colors.reset);
    if accepted {
        println!("{}accepted{}", colors.green, colors.reset);
    } else {
        println!("{}rejected{}", colors.red, colors.reset);
        std::process::exit(1);
    }
}
