//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs hold what a command reads, populated from clap
//! - `from_matches()` extractors skip the hidden flags a command ignores
//! - `Into<*Args>` impls bridge dispatch and the command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use trellis_vm::Verbosity;

use super::ColorChoice;
use super::args::DEFAULT_FUEL;
use crate::commands::dump::DumpArgs;
use crate::commands::gss::GssArgs;
use crate::commands::parse::ParseArgs;
use crate::commands::trace::TraceArgs;

pub struct DumpParams {
    pub grammar_path: PathBuf,
    pub color: ColorChoice,
    // Note: source, fuel, verbose, forest and output are parsed but not
    // extracted (unified flags)
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: grammar_path(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ParseParams {
    pub grammar_path: PathBuf,
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub forest: bool,
    pub fuel: u32,
    pub color: ColorChoice,
}

impl ParseParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: grammar_path(m),
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            forest: m.get_flag("forest"),
            fuel: parse_fuel(m),
            color: parse_color(m),
        }
    }
}

impl From<ParseParams> for ParseArgs {
    fn from(p: ParseParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            source_path: p.source_path,
            source_text: p.source_text,
            forest: p.forest,
            fuel: p.fuel,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub grammar_path: PathBuf,
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub verbose: u8,
    pub fuel: u32,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: grammar_path(m),
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            verbose: m.get_count("verbose"),
            fuel: parse_fuel(m),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            grammar_path: p.grammar_path,
            source_path: p.source_path,
            source_text: p.source_text,
            verbosity,
            fuel: p.fuel,
            color: p.color.should_colorize(),
        }
    }
}

pub struct GssParams {
    pub grammar_path: PathBuf,
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub output: Option<PathBuf>,
    pub fuel: u32,
}

impl GssParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: grammar_path(m),
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            fuel: parse_fuel(m),
        }
    }
}

impl From<GssParams> for GssArgs {
    fn from(p: GssParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            source_path: p.source_path,
            source_text: p.source_text,
            output: p.output,
            fuel: p.fuel,
        }
    }
}

/// The grammar positional is required, so clap guarantees it is present.
fn grammar_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("grammar_path")
        .cloned()
        .unwrap_or_default()
}

fn parse_fuel(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("fuel").copied().unwrap_or(DEFAULT_FUEL)
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
