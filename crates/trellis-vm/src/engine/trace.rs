//! Tracing infrastructure for debugging engine execution.
//!
//! # Design: Zero-Cost Abstraction
//!
//! The engine is generic over its tracer. With `NoopTracer` every hook is an
//! `#[inline(always)]` empty function, so tracing compiles away together with
//! the arguments computed for it. No tracing state lives in the engine.
//!
//! `PrintTracer` resolves labels and nonterminals through the program and
//! collects one line per event, filtered by `Verbosity`.

use trellis_compiler::{Instruction, Program};
use trellis_core::{Colors, Label, NonterminalId, Position};

use super::gss::StackId;
use super::sppf::{IntermediateId, Span, SymbolId};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Token advances, shifts, pops of nonterminals, accepts.
    #[default]
    Default,
    /// Verbose (-v): also descriptors, pushes and terminal tests.
    Verbose,
    /// Very verbose (-vv): also dedup hits and re-delivered results.
    VeryVerbose,
}

/// Engine instrumentation hooks.
///
/// Hooks receive the raw ids the engine already has; naming and formatting
/// are up to the implementation.
pub trait Tracer {
    /// A new generation begins at `position`.
    fn trace_advance(&mut self, position: Position);

    /// A `Continue` descriptor is about to run.
    fn trace_descriptor(&mut self, label: Label, caller: StackId, prefix: IntermediateId);

    /// `caller` was linked under `frame`. `linked` is false when the link existed.
    fn trace_push(&mut self, frame: StackId, label: Label, origin: u32, caller: StackId, linked: bool);

    /// The terminal at `label` was tested against the current position.
    fn trace_terminal(&mut self, label: Label, position: Position, matched: bool);

    /// A staged terminal derivation fires against `frame`.
    fn trace_shift(&mut self, frame: StackId, position: Position);

    /// `frame` delivers `result`. `fresh` is false when it was already delivered.
    fn trace_pop(
        &mut self,
        frame: StackId,
        result: SymbolId,
        nonterminal: Option<NonterminalId>,
        span: Span,
        fresh: bool,
    );

    /// A result recorded before `caller` linked in is replayed for it.
    fn trace_redeliver(&mut self, frame: StackId, result: SymbolId, caller: StackId);

    /// `schedule_now` hit its dedup set.
    fn trace_skip_now(&mut self, label: Label, caller: StackId);

    /// `schedule_later` hit its dedup set.
    fn trace_skip_later(&mut self, frame: StackId);

    /// The start symbol was recognized over `span`.
    fn trace_accept(&mut self, span: Span);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_advance(&mut self, _position: Position) {}

    #[inline(always)]
    fn trace_descriptor(&mut self, _label: Label, _caller: StackId, _prefix: IntermediateId) {}

    #[inline(always)]
    fn trace_push(
        &mut self,
        _frame: StackId,
        _label: Label,
        _origin: u32,
        _caller: StackId,
        _linked: bool,
    ) {
    }

    #[inline(always)]
    fn trace_terminal(&mut self, _label: Label, _position: Position, _matched: bool) {}

    #[inline(always)]
    fn trace_shift(&mut self, _frame: StackId, _position: Position) {}

    #[inline(always)]
    fn trace_pop(
        &mut self,
        _frame: StackId,
        _result: SymbolId,
        _nonterminal: Option<NonterminalId>,
        _span: Span,
        _fresh: bool,
    ) {
    }

    #[inline(always)]
    fn trace_redeliver(&mut self, _frame: StackId, _result: SymbolId, _caller: StackId) {}

    #[inline(always)]
    fn trace_skip_now(&mut self, _label: Label, _caller: StackId) {}

    #[inline(always)]
    fn trace_skip_later(&mut self, _frame: StackId) {}

    #[inline(always)]
    fn trace_accept(&mut self, _span: Span) {}
}

/// Tracer that collects a human-readable execution log.
pub struct PrintTracer<'p> {
    program: &'p Program,
    verbosity: Verbosity,
    lines: Vec<String>,
    colors: Colors,
}

impl<'p> PrintTracer<'p> {
    pub fn new(program: &'p Program, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            program,
            verbosity,
            lines: Vec::new(),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined, without a trailing newline.
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }

    fn shows(&self, level: Verbosity) -> bool {
        match level {
            Verbosity::Default => true,
            Verbosity::Verbose => self.verbosity != Verbosity::Default,
            Verbosity::VeryVerbose => self.verbosity == Verbosity::VeryVerbose,
        }
    }

    fn terminal_text(&self, label: Label) -> String {
        match &self.program.slot(label).instruction {
            Instruction::Terminal(matcher) => matcher.to_string(),
            _ => "?".to_owned(),
        }
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_advance(&mut self, position: Position) {
        let c = self.colors;
        if !self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.lines.push(format!("{}{}{}", c.blue, position, c.reset));
    }

    fn trace_descriptor(&mut self, label: Label, caller: StackId, prefix: IntermediateId) {
        if !self.shows(Verbosity::Verbose) {
            return;
        }
        let c = self.colors;
        let item = self.program.item(label, c);
        self.lines.push(format!(
            "  {}{label}{}  {item}  {}{caller} {prefix}{}",
            c.dim, c.reset, c.dim, c.reset
        ));
    }

    fn trace_push(&mut self, frame: StackId, label: Label, origin: u32, caller: StackId, linked: bool) {
        let level = if linked {
            Verbosity::Verbose
        } else {
            Verbosity::VeryVerbose
        };
        if !self.shows(level) {
            return;
        }
        let known = if linked { "" } else { " (known)" };
        self.lines
            .push(format!("    push {frame} {label}@{origin} <- {caller}{known}"));
    }

    fn trace_terminal(&mut self, label: Label, _position: Position, matched: bool) {
        if !self.shows(Verbosity::Verbose) {
            return;
        }
        let c = self.colors;
        let terminal = self.terminal_text(label);
        let line = if matched {
            format!("    {}match{} {terminal}", c.green, c.reset)
        } else {
            format!("    {}mismatch{} {terminal}", c.red, c.reset)
        };
        self.lines.push(line);
    }

    fn trace_shift(&mut self, frame: StackId, position: Position) {
        let c = self.colors;
        self.lines
            .push(format!("  shift {frame} {}{position}{}", c.green, c.reset));
    }

    fn trace_pop(
        &mut self,
        frame: StackId,
        _result: SymbolId,
        nonterminal: Option<NonterminalId>,
        span: Span,
        fresh: bool,
    ) {
        let level = match (fresh, nonterminal) {
            (false, _) => Verbosity::VeryVerbose,
            (true, None) => Verbosity::Verbose,
            (true, Some(_)) => Verbosity::Default,
        };
        if !self.shows(level) {
            return;
        }
        let c = self.colors;
        let what = match nonterminal {
            Some(nt) => format!("{}{}{} ", c.blue, self.program.nonterminal_name(nt), c.reset),
            None => String::new(),
        };
        let again = if fresh { "" } else { " (again)" };
        self.lines
            .push(format!("  pop {frame} {what}{}{span}{}{again}", c.dim, c.reset));
    }

    fn trace_redeliver(&mut self, _frame: StackId, result: SymbolId, caller: StackId) {
        if !self.shows(Verbosity::VeryVerbose) {
            return;
        }
        self.lines.push(format!("    redeliver {result} -> {caller}"));
    }

    fn trace_skip_now(&mut self, label: Label, caller: StackId) {
        if !self.shows(Verbosity::VeryVerbose) {
            return;
        }
        self.lines.push(format!("    skip {label} {caller}"));
    }

    fn trace_skip_later(&mut self, frame: StackId) {
        if !self.shows(Verbosity::VeryVerbose) {
            return;
        }
        self.lines.push(format!("    skip shift {frame}"));
    }

    fn trace_accept(&mut self, span: Span) {
        let c = self.colors;
        self.lines
            .push(format!("  {}accept{} {span}", c.green, c.reset));
    }
}
