//! Indented text view of a parse forest.
//!
//! ```text
//! S [0,2) ::= 'a' S
//!   'a' [0,1)
//!   S [1,2) ::= 'a'
//!     'a' [1,2)
//! ```
//!
//! The forest is a graph, the view is a tree. A nonterminal derivation
//! reachable along more than one path is printed in full once, tagged `#n`;
//! later occurrences print the tag and `(see above)`. This also cuts cycles.

use std::collections::{HashMap, HashSet};
use std::fmt::Write;

use trellis_compiler::Program;
use trellis_core::{Colors, Position};

use crate::engine::{Forest, Intermediate, IntermediateId, NodeId, SymbolDerivation, SymbolId};

pub struct ForestPrinter<'a> {
    program: &'a Program,
    forest: &'a Forest,
    root: SymbolId,
    colors: Colors,
}

/// Tagging state for one dump.
struct Walk {
    shared: HashSet<SymbolId>,
    tags: HashMap<SymbolId, usize>,
}

impl<'a> ForestPrinter<'a> {
    pub fn new(program: &'a Program, forest: &'a Forest, root: SymbolId) -> Self {
        Self {
            program,
            forest,
            root,
            colors: Colors::OFF,
        }
    }

    pub fn with_colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let shared = self
            .count_references()
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(id, _)| id)
            .collect();
        let mut walk = Walk {
            shared,
            tags: HashMap::new(),
        };
        self.format_symbol(w, &mut walk, self.root, 0)
    }

    /// Counts references to each symbol along the same paths `format` takes:
    /// every nonterminal is expanded once, prefixes are walked per expansion.
    fn count_references(&self) -> HashMap<SymbolId, u32> {
        let mut refs = HashMap::from([(self.root, 1)]);
        let mut pending = vec![self.root];
        let mut prefixes = Vec::new();

        while let Some(node) = pending.pop() {
            prefixes.extend(self.forest.alternatives(node).map(|unary| unary.child));
            while let Some(prefix) = prefixes.pop() {
                for binary in self.forest.children(prefix) {
                    let count = refs.entry(binary.rhs).or_insert(0);
                    *count += 1;
                    if *count == 1 {
                        pending.push(binary.rhs);
                    }
                    prefixes.push(binary.lhs);
                }
            }
        }
        refs
    }

    fn format_symbol(
        &self,
        w: &mut impl Write,
        walk: &mut Walk,
        id: SymbolId,
        depth: usize,
    ) -> std::fmt::Result {
        let c = self.colors;
        let indent = "  ".repeat(depth);
        let span = self.forest.span(NodeId::Symbol(id));

        let nonterminal = match self.forest.symbol(id) {
            SymbolDerivation::Terminal { symbol } => {
                return writeln!(
                    w,
                    "{indent}{}{}{} {}{span}{}",
                    c.green,
                    terminal_text(*symbol),
                    c.reset,
                    c.dim,
                    c.reset
                );
            }
            SymbolDerivation::Nonterminal { nonterminal, .. } => *nonterminal,
        };

        let mut head = format!(
            "{indent}{}{}{} {}{span}{}",
            c.blue,
            self.program.nonterminal_name(nonterminal),
            c.reset,
            c.dim,
            c.reset
        );
        if walk.shared.contains(&id) {
            if let Some(tag) = walk.tags.get(&id) {
                return writeln!(w, "{head} #{tag} (see above)");
            }
            let tag = walk.tags.len() + 1;
            walk.tags.insert(id, tag);
            write!(head, " #{tag}")?;
        }

        let mut alternatives = self.forest.alternatives(id);
        match (alternatives.next(), alternatives.next()) {
            (None, _) => writeln!(w, "{head}"),
            (Some(unary), None) => {
                writeln!(w, "{head} ::= {}", self.rhs(unary.child))?;
                self.format_prefix(w, walk, unary.child, depth + 1)
            }
            _ => {
                writeln!(w, "{head} {}ambiguous{}", c.red, c.reset)?;
                for unary in self.forest.alternatives(id) {
                    writeln!(w, "{indent}  ::= {}", self.rhs(unary.child))?;
                    self.format_prefix(w, walk, unary.child, depth + 2)?;
                }
                Ok(())
            }
        }
    }

    /// Prints the symbols of a prefix at one level, left to right.
    fn format_prefix(
        &self,
        w: &mut impl Write,
        walk: &mut Walk,
        prefix: IntermediateId,
        depth: usize,
    ) -> std::fmt::Result {
        let mut symbols = Vec::new();
        let mut current = prefix;
        let ambiguous = loop {
            let mut children = self.forest.children(current);
            match (children.next(), children.next()) {
                (None, _) => break None,
                (Some(binary), None) => {
                    symbols.push(binary.rhs);
                    current = binary.lhs;
                }
                _ => break Some(current),
            }
        };

        if let Some(node) = ambiguous {
            let c = self.colors;
            let indent = "  ".repeat(depth);
            let span = self.forest.span(NodeId::Intermediate(node));
            writeln!(
                w,
                "{indent}prefix {}{span}{} {}ambiguous{}",
                c.dim, c.reset, c.red, c.reset
            )?;
            for binary in self.forest.children(node) {
                writeln!(w, "{indent}  split {}", binary.split.offset())?;
                self.format_prefix(w, walk, binary.lhs, depth + 2)?;
                self.format_symbol(w, walk, binary.rhs, depth + 2)?;
            }
        }

        for &symbol in symbols.iter().rev() {
            self.format_symbol(w, walk, symbol, depth)?;
        }
        Ok(())
    }

    /// Production a complete prefix spells out.
    fn rhs(&self, child: IntermediateId) -> String {
        match self.forest.intermediate(child) {
            Intermediate::Empty { .. } => "ε".to_owned(),
            Intermediate::Cons { label, .. } => self.program.rhs(*label, self.colors),
        }
    }
}

fn terminal_text(position: Position) -> String {
    match position.ch() {
        Some(ch) => format!("{ch:?}"),
        None => position.to_string(),
    }
}
