//! Command builders for the CLI.
//!
//! parse/trace/gss accept each other's flags, with the ones they ignore
//! hidden from `--help`.

use clap::Command;

use super::args::*;

/// Add hidden input args (for commands that don't parse).
fn with_hidden_source_args(cmd: Command) -> Command {
    cmd.arg(source_path_arg().hide(true))
        .arg(source_text_arg().hide(true))
}

/// Add hidden runtime args (for commands that don't run the engine).
fn with_hidden_runtime_args(cmd: Command) -> Command {
    cmd.arg(fuel_arg().hide(true))
}

/// Add hidden trace args (for commands that don't trace).
fn with_hidden_trace_args(cmd: Command) -> Command {
    cmd.arg(verbose_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("trellis")
        .about("GLL parser for tree-sitter grammar.json files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(dump_command())
        .subcommand(parse_command())
        .subcommand(trace_command())
        .subcommand(gss_command())
}

/// Show the compiled program.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the compiled program")
        .override_usage("  trellis dump <GRAMMAR>")
        .after_help(
            r#"EXAMPLES:
  trellis dump grammar.json          # slots grouped by nonterminal
  trellis dump - < grammar.json      # grammar from stdin"#,
        )
        .arg(grammar_path_arg())
        .arg(color_arg());

    with_hidden_trace_args(with_hidden_runtime_args(with_hidden_source_args(cmd)))
        .arg(forest_arg().hide(true))
        .arg(output_file_arg().hide(true))
}

/// Parse input and report the verdict.
pub fn parse_command() -> Command {
    let cmd = Command::new("parse")
        .about("Parse input against a grammar")
        .override_usage(
            "\
  trellis parse <GRAMMAR> <SOURCE>
  trellis parse <GRAMMAR> -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  trellis parse grammar.json input.txt        # accepted / rejected
  trellis parse grammar.json -s '(())'        # inline input
  trellis parse grammar.json -s 'aa' --forest # also print the parse forest"#,
        )
        .arg(grammar_path_arg())
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(forest_arg())
        .arg(fuel_arg())
        .arg(color_arg());

    with_hidden_trace_args(cmd).arg(output_file_arg().hide(true))
}

/// Trace engine execution.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace engine execution for debugging")
        .override_usage(
            "\
  trellis trace <GRAMMAR> <SOURCE>
  trellis trace <GRAMMAR> -s <TEXT> [-v|-vv]",
        )
        .after_help(
            r#"EXAMPLES:
  trellis trace grammar.json -s 'aa'          # generations, shifts, pops
  trellis trace grammar.json -s 'aa' -v       # also descriptors and pushes
  trellis trace grammar.json -s 'aa' -vv      # also dedup hits"#,
        )
        .arg(grammar_path_arg())
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(verbose_arg())
        .arg(fuel_arg())
        .arg(color_arg());

    cmd.arg(forest_arg().hide(true))
        .arg(output_file_arg().hide(true))
}

/// Export the graph-structured stack.
pub fn gss_command() -> Command {
    let cmd = Command::new("gss")
        .about("Export the graph-structured stack as Graphviz DOT")
        .override_usage(
            "\
  trellis gss <GRAMMAR> <SOURCE> [-o <FILE>]
  trellis gss <GRAMMAR> -s <TEXT> [-o <FILE>]",
        )
        .after_help(
            r#"EXAMPLES:
  trellis gss grammar.json -s 'aa' | dot -Tsvg > gss.svg
  trellis gss grammar.json input.txt -o gss.dot"#,
        )
        .arg(grammar_path_arg())
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(output_file_arg())
        .arg(fuel_arg())
        .arg(color_arg());

    with_hidden_trace_args(cmd).arg(forest_arg().hide(true))
}
