use std::path::PathBuf;

use trellis_core::Colors;

use super::run_common::prepare_program;

pub struct DumpArgs {
    pub grammar_path: PathBuf,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let program = prepare_program(&args.grammar_path);
    print!("{}", program.dump(Colors::new(args.color)));
}
