//! Graphviz export of the graph-structured stack.
//!
//! ```text
//! digraph gss {
//!   node [shape=box];
//!   g0 [label="⊥"];
//!   g1 [label="L0@0 accept"];
//!   g1 -> g0 [label="[0,0)"];
//! }
//! ```

use std::fmt::Write;

use trellis_compiler::Program;
use trellis_core::Colors;

use crate::engine::{NodeId, Stack, State};

pub struct GssPrinter<'a> {
    program: &'a Program,
    state: &'a State,
    spans: bool,
}

impl<'a> GssPrinter<'a> {
    pub fn new(program: &'a Program, state: &'a State) -> Self {
        Self {
            program,
            state,
            spans: true,
        }
    }

    /// Label edges with the span of the prefix they carry.
    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let gss = self.state.gss();
        writeln!(w, "digraph gss {{")?;
        writeln!(w, "  node [shape=box];")?;

        for (id, stack) in gss.iter() {
            let (label, origin) = match stack {
                Stack::Initial => {
                    writeln!(w, "  {id} [label=\"⊥\"];")?;
                    continue;
                }
                Stack::Frame { label, origin, .. } => (*label, *origin),
            };
            let item = self.program.item(label, Colors::OFF);
            writeln!(w, "  {id} [label=\"{}\"];", escape(&format!("{label}@{origin} {item}")))?;

            for link in gss.links(id) {
                if self.spans {
                    let span = self.state.forest().span(NodeId::Intermediate(link.prefix));
                    writeln!(w, "  {id} -> {} [label=\"{span}\"];", link.caller)?;
                } else {
                    writeln!(w, "  {id} -> {};", link.caller)?;
                }
            }
        }

        writeln!(w, "}}")
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '"' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
