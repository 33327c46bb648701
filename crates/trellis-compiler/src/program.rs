//! Slot programs.
//!
//! Every alternative `X ::= x1 .. xn` occupies `n + 1` consecutive slots. Slot
//! `k` is the dotted item `X ::= x1 .. xk · xk+1 .. xn` and carries the
//! instruction for `xk+1`, or `Return` once the dot reaches the end. A slot's
//! index is its call-site label.
//!
//! Slot 0 is reserved for `Accept`, the continuation of the start call.

use std::fmt;

use trellis_core::grammar::Grammar;
use trellis_core::{Interner, Label, NonterminalId, Symbol};

use crate::Pattern;
use crate::lower::Lowering;

/// Terminal test applied to the current code point.
#[derive(Clone, Debug)]
pub enum Matcher {
    Char(char),
    Pattern(Pattern),
}

impl Matcher {
    #[inline]
    pub fn matches(&self, ch: char) -> bool {
        match self {
            Self::Char(expected) => *expected == ch,
            Self::Pattern(pattern) => pattern.matches(ch),
        }
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(ch) => write!(f, "{ch:?}"),
            Self::Pattern(pattern) => write!(f, "{pattern}"),
        }
    }
}

/// What the engine does when a descriptor reaches a slot.
#[derive(Clone, Debug)]
pub enum Instruction {
    /// The start symbol has been recognized. No further work.
    Accept,
    /// Match the current token and resume at the next slot.
    Terminal(Matcher),
    /// Call a nonterminal; the next slot is the return label.
    Call(NonterminalId),
    /// The alternative is complete.
    Return(NonterminalId),
}

#[derive(Clone, Debug)]
pub struct Slot {
    /// Owning nonterminal; `None` only for the accept slot.
    pub nonterminal: Option<NonterminalId>,
    /// Number of symbols before the dot.
    pub dot: u32,
    pub instruction: Instruction,
}

/// Alternatives lowered to plain symbol strings.
#[derive(Clone, Debug)]
pub(crate) enum Atom {
    Terminal(Matcher),
    Nonterminal(NonterminalId),
}

/// A compiled grammar, ready for the engine.
#[derive(Clone, Debug)]
pub struct Program {
    names: Interner,
    /// Name of each nonterminal, indexed by id.
    symbols: Vec<Symbol>,
    /// Entry slot of each alternative, per nonterminal.
    alternatives: Vec<Vec<Label>>,
    slots: Vec<Slot>,
    start: NonterminalId,
    /// Nonterminals at or past this index were introduced by lowering.
    rule_count: u32,
}

impl Program {
    /// Label of the accept slot.
    pub const ACCEPT: Label = Label::new(0);

    pub fn compile(grammar: &Grammar) -> crate::Result<Self> {
        let lowered = Lowering::new(grammar)?.run()?;
        Ok(Self::layout(lowered))
    }

    fn layout(lowered: crate::lower::Lowered) -> Self {
        let mut slots = vec![Slot {
            nonterminal: None,
            dot: 0,
            instruction: Instruction::Accept,
        }];
        let mut alternatives = Vec::with_capacity(lowered.productions.len());

        for (index, production) in lowered.productions.into_iter().enumerate() {
            let nonterminal = NonterminalId::new(index as u32);
            let mut entries = Vec::with_capacity(production.len());
            for alternative in production {
                entries.push(Label::new(slots.len() as u32));
                let len = alternative.len() as u32;
                for (dot, atom) in alternative.into_iter().enumerate() {
                    let instruction = match atom {
                        Atom::Terminal(matcher) => Instruction::Terminal(matcher),
                        Atom::Nonterminal(callee) => Instruction::Call(callee),
                    };
                    slots.push(Slot {
                        nonterminal: Some(nonterminal),
                        dot: dot as u32,
                        instruction,
                    });
                }
                slots.push(Slot {
                    nonterminal: Some(nonterminal),
                    dot: len,
                    instruction: Instruction::Return(nonterminal),
                });
            }
            alternatives.push(entries);
        }

        Self {
            names: lowered.names,
            symbols: lowered.symbols,
            alternatives,
            slots,
            start: lowered.start,
            rule_count: lowered.rule_count,
        }
    }

    #[inline]
    pub fn start(&self) -> NonterminalId {
        self.start
    }

    /// # Panics
    /// Panics if the label does not belong to this program.
    #[inline]
    pub fn slot(&self, label: Label) -> &Slot {
        &self.slots[label.as_usize()]
    }

    pub fn slots(&self) -> impl Iterator<Item = (Label, &Slot)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| (Label::new(i as u32), slot))
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Entry labels of the alternatives of `nonterminal`, in grammar order.
    #[inline]
    pub fn alternatives(&self, nonterminal: NonterminalId) -> &[Label] {
        &self.alternatives[nonterminal.as_usize()]
    }

    /// The symbols of the alternative that `label` lies in, dot excluded.
    pub fn alternative_of(&self, label: Label) -> &[Slot] {
        let slot = self.slot(label);
        if slot.nonterminal.is_none() {
            return &[];
        }
        let entry = label.as_usize() - slot.dot as usize;
        let mut end = entry;
        while !matches!(self.slots[end].instruction, Instruction::Return(_)) {
            end += 1;
        }
        &self.slots[entry..end]
    }

    pub fn nonterminal_count(&self) -> usize {
        self.alternatives.len()
    }

    pub fn nonterminals(&self) -> impl Iterator<Item = NonterminalId> {
        (0..self.alternatives.len() as u32).map(NonterminalId::new)
    }

    pub fn nonterminal_name(&self, nonterminal: NonterminalId) -> &str {
        self.names.resolve(self.symbols[nonterminal.as_usize()])
    }

    /// Looks up a grammar rule by name. Auxiliary nonterminals are not found.
    pub fn nonterminal(&self, name: &str) -> Option<NonterminalId> {
        let sym = self.names.get(name)?;
        self.symbols[..self.rule_count as usize]
            .iter()
            .position(|&s| s == sym)
            .map(|i| NonterminalId::new(i as u32))
    }

    /// Whether the nonterminal was introduced for a nested choice or repeat.
    pub fn is_auxiliary(&self, nonterminal: NonterminalId) -> bool {
        nonterminal.as_u32() >= self.rule_count
    }
}
