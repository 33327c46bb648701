//! Parse input and report whether the grammar accepts it.

use std::path::PathBuf;

use trellis_core::Colors;
use trellis_vm::{Engine, ForestPrinter};

use super::run_common::{load_source, prepare_program};

pub struct ParseArgs {
    pub grammar_path: PathBuf,
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub forest: bool,
    pub fuel: u32,
    pub color: bool,
}

pub fn run(args: ParseArgs) {
    let input = load_source(
        args.source_text.as_deref(),
        args.source_path.as_deref(),
        &args.grammar_path,
    );
    let program = prepare_program(&args.grammar_path);
    let colors = Colors::new(args.color);

    let mut engine = Engine::builder(&program).exec_fuel(args.fuel).build();
    let accepted = match engine.parse(&input) {
        Ok(accepted) => accepted,
        Err(e) => {
            eprintln!("runtime error: {}", e);
            std::process::exit(2);
        }
    };

    if !accepted {
        println!("{}rejected{}", colors.red, colors.reset);
        std::process::exit(1);
    }

    println!("{}accepted{}", colors.green, colors.reset);
    if args.forest
        && let Some(root) = engine.root()
    {
        let forest = ForestPrinter::new(&program, engine.forest(), root).with_colors(colors);
        print!("{}", forest.dump());
    }
}
