//! Program listing.
//!
//! ```text
//! start S
//!   L0  accept
//!
//! S
//!   L1  S ::= · '(' S ')'
//!   L2  S ::= '(' · S ')'
//! ```

use std::fmt::Write as _;

use trellis_core::{Colors, Label};

use crate::program::{Instruction, Program};

impl Program {
    /// Renders every slot, grouped by nonterminal.
    pub fn dump(&self, colors: Colors) -> String {
        let c = colors;
        let width = label_width(self);
        let mut out = String::new();

        writeln!(
            out,
            "start {}{}{}",
            c.blue,
            self.nonterminal_name(self.start()),
            c.reset
        )
        .expect("String write never fails");
        write_slot(&mut out, Program::ACCEPT, "accept", width, c);

        for nonterminal in self.nonterminals() {
            out.push('\n');
            writeln!(out, "{}{}{}", c.blue, self.nonterminal_name(nonterminal), c.reset)
                .expect("String write never fails");
            for &entry in self.alternatives(nonterminal) {
                let mut label = entry;
                loop {
                    write_slot(&mut out, label, &self.item(label, c), width, c);
                    if matches!(self.slot(label).instruction, Instruction::Return(_)) {
                        break;
                    }
                    label = Label::new(label.as_u32() + 1);
                }
            }
        }

        out
    }

    /// Dotted item of a slot, e.g. `S ::= S · 'a'`.
    pub fn item(&self, label: Label, colors: Colors) -> String {
        let c = colors;
        let slot = self.slot(label);
        let Some(nonterminal) = slot.nonterminal else {
            return "accept".to_owned();
        };

        let mut out = format!("{}{}{} ::=", c.blue, self.nonterminal_name(nonterminal), c.reset);
        let symbols = self.alternative_of(label);
        for (dot, symbol) in symbols.iter().enumerate() {
            if dot as u32 == slot.dot {
                write!(out, " {}·{}", c.dim, c.reset).expect("String write never fails");
            }
            match &symbol.instruction {
                Instruction::Terminal(matcher) => {
                    write!(out, " {}{}{}", c.green, matcher, c.reset)
                }
                Instruction::Call(callee) => {
                    write!(out, " {}{}{}", c.blue, self.nonterminal_name(*callee), c.reset)
                }
                Instruction::Accept | Instruction::Return(_) => Ok(()),
            }
            .expect("String write never fails");
        }
        if slot.dot as usize == symbols.len() {
            write!(out, " {}·{}", c.dim, c.reset).expect("String write never fails");
        }
        out
    }

    /// Right-hand side of the alternative `label` lies in, e.g. `'a' S`; `ε`
    /// when it is empty.
    pub fn rhs(&self, label: Label, colors: Colors) -> String {
        let c = colors;
        let symbols = self.alternative_of(label);
        if symbols.is_empty() {
            return "ε".to_owned();
        }
        let mut parts = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            match &symbol.instruction {
                Instruction::Terminal(matcher) => {
                    parts.push(format!("{}{}{}", c.green, matcher, c.reset));
                }
                Instruction::Call(callee) => {
                    parts.push(format!("{}{}{}", c.blue, self.nonterminal_name(*callee), c.reset));
                }
                Instruction::Accept | Instruction::Return(_) => {}
            }
        }
        parts.join(" ")
    }
}

fn label_width(program: &Program) -> usize {
    let last = program.slot_count().saturating_sub(1) as u32;
    Label::new(last).to_string().len()
}

fn write_slot(out: &mut String, label: Label, text: &str, width: usize, c: Colors) {
    let label = label.to_string();
    writeln!(out, "  {}{label:<width$}{}  {text}", c.dim, c.reset).expect("String write never fails");
}
