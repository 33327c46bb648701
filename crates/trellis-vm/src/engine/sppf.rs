//! Shared packed parse forest.
//!
//! Two append-only arenas addressed by typed indices:
//!
//! - symbol derivations: terminals (one input symbol) and nonterminals
//!   (packed `Unary` alternatives, one per production that derived the span)
//! - intermediates: recognized prefixes of a right-hand side, either empty or
//!   a `Cons` of packed `Binary` children (shorter prefix + one more symbol)
//!
//! Nodes never move and children hold indices only, so the forest may contain
//! cycles (`S ::= S | 'a'`). Canonicalization by key happens one level up, in
//! the scheduler's caches; the arenas themselves only store.

use std::fmt;

use indexmap::IndexSet;
use trellis_core::{Label, NonterminalId, Position};

use super::error::AmbiguityError;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct SymbolId(u32);

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct IntermediateId(u32);

impl SymbolId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl IntermediateId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.0)
    }
}

impl fmt::Display for IntermediateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i{}", self.0)
    }
}

/// Either kind of forest node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NodeId {
    Symbol(SymbolId),
    Intermediate(IntermediateId),
}

/// Half-open range of input offsets.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn len(self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{})", self.start, self.end)
    }
}

/// Packed child of a `Cons`: `lhs` derives `[first, split)`, `rhs` derives
/// `[split, last)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Binary {
    pub label: Label,
    pub split: Position,
    pub lhs: IntermediateId,
    pub rhs: SymbolId,
}

/// Packed alternative of a nonterminal: the complete right-hand side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Unary {
    pub child: IntermediateId,
}

#[derive(Clone, Debug)]
pub enum SymbolDerivation {
    Terminal {
        symbol: Position,
    },
    Nonterminal {
        nonterminal: NonterminalId,
        first: Position,
        last: Position,
        alternatives: IndexSet<Unary>,
    },
}

#[derive(Clone, Debug)]
pub enum Intermediate {
    Empty {
        at: Position,
    },
    Cons {
        label: Label,
        first: Position,
        last: Position,
        children: IndexSet<Binary>,
    },
}

#[derive(Debug, Default)]
pub struct Forest {
    symbols: Vec<SymbolDerivation>,
    intermediates: Vec<Intermediate>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_terminal(&mut self, symbol: Position) -> SymbolId {
        self.push_symbol(SymbolDerivation::Terminal { symbol })
    }

    pub(crate) fn add_nonterminal(
        &mut self,
        nonterminal: NonterminalId,
        first: Position,
        last: Position,
    ) -> SymbolId {
        self.push_symbol(SymbolDerivation::Nonterminal {
            nonterminal,
            first,
            last,
            alternatives: IndexSet::new(),
        })
    }

    pub(crate) fn add_empty(&mut self, at: Position) -> IntermediateId {
        self.push_intermediate(Intermediate::Empty { at })
    }

    pub(crate) fn add_cons(&mut self, label: Label, first: Position, last: Position) -> IntermediateId {
        self.push_intermediate(Intermediate::Cons {
            label,
            first,
            last,
            children: IndexSet::new(),
        })
    }

    /// Packs `binary` under `cons`. Returns false if it was already there.
    ///
    /// # Panics
    /// Panics if `cons` is an `Empty` node.
    pub(crate) fn add_binary(&mut self, cons: IntermediateId, binary: Binary) -> bool {
        match &mut self.intermediates[cons.0 as usize] {
            Intermediate::Cons { children, .. } => children.insert(binary),
            Intermediate::Empty { .. } => unreachable!("binary child on empty prefix {cons}"),
        }
    }

    /// Packs `unary` under `nonterminal`. Returns false if it was already there.
    ///
    /// # Panics
    /// Panics if `nonterminal` is a terminal derivation.
    pub(crate) fn add_unary(&mut self, nonterminal: SymbolId, unary: Unary) -> bool {
        match &mut self.symbols[nonterminal.0 as usize] {
            SymbolDerivation::Nonterminal { alternatives, .. } => alternatives.insert(unary),
            SymbolDerivation::Terminal { .. } => {
                unreachable!("alternative on terminal derivation {nonterminal}")
            }
        }
    }

    fn push_symbol(&mut self, node: SymbolDerivation) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(node);
        id
    }

    fn push_intermediate(&mut self, node: Intermediate) -> IntermediateId {
        let id = IntermediateId(self.intermediates.len() as u32);
        self.intermediates.push(node);
        id
    }

    #[inline]
    pub fn symbol(&self, id: SymbolId) -> &SymbolDerivation {
        &self.symbols[id.0 as usize]
    }

    #[inline]
    pub fn intermediate(&self, id: IntermediateId) -> &Intermediate {
        &self.intermediates[id.0 as usize]
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn intermediate_count(&self) -> usize {
        self.intermediates.len()
    }

    pub fn symbols(&self) -> impl Iterator<Item = (SymbolId, &SymbolDerivation)> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, node)| (SymbolId(i as u32), node))
    }

    pub fn intermediates(&self) -> impl Iterator<Item = (IntermediateId, &Intermediate)> {
        self.intermediates
            .iter()
            .enumerate()
            .map(|(i, node)| (IntermediateId(i as u32), node))
    }

    /// Left boundary of a symbol derivation.
    pub fn symbol_first(&self, id: SymbolId) -> Position {
        match self.symbol(id) {
            SymbolDerivation::Terminal { symbol } => *symbol,
            SymbolDerivation::Nonterminal { first, .. } => *first,
        }
    }

    /// Left boundary of a prefix.
    pub fn intermediate_first(&self, id: IntermediateId) -> Position {
        match self.intermediate(id) {
            Intermediate::Empty { at } => *at,
            Intermediate::Cons { first, .. } => *first,
        }
    }

    pub fn span(&self, node: NodeId) -> Span {
        match node {
            NodeId::Symbol(id) => match self.symbol(id) {
                SymbolDerivation::Terminal { symbol } => {
                    Span::new(symbol.offset(), symbol.offset() + 1)
                }
                SymbolDerivation::Nonterminal { first, last, .. } => {
                    Span::new(first.offset(), last.offset())
                }
            },
            NodeId::Intermediate(id) => match self.intermediate(id) {
                Intermediate::Empty { at } => Span::new(at.offset(), at.offset()),
                Intermediate::Cons { first, last, .. } => Span::new(first.offset(), last.offset()),
            },
        }
    }

    /// More than one packed child.
    pub fn is_ambiguous(&self, node: NodeId) -> bool {
        match node {
            NodeId::Symbol(id) => self.alternative_count(id) > 1,
            NodeId::Intermediate(id) => self.child_count(id) > 1,
        }
    }

    /// Packed alternatives of a nonterminal derivation; none for terminals.
    pub fn alternatives(&self, id: SymbolId) -> impl Iterator<Item = Unary> + '_ {
        let packed = match self.symbol(id) {
            SymbolDerivation::Nonterminal { alternatives, .. } => Some(alternatives),
            SymbolDerivation::Terminal { .. } => None,
        };
        packed.into_iter().flatten().copied()
    }

    pub fn alternative_count(&self, id: SymbolId) -> usize {
        match self.symbol(id) {
            SymbolDerivation::Nonterminal { alternatives, .. } => alternatives.len(),
            SymbolDerivation::Terminal { .. } => 0,
        }
    }

    /// Packed children of a prefix; none for the empty prefix.
    pub fn children(&self, id: IntermediateId) -> impl Iterator<Item = Binary> + '_ {
        let packed = match self.intermediate(id) {
            Intermediate::Cons { children, .. } => Some(children),
            Intermediate::Empty { .. } => None,
        };
        packed.into_iter().flatten().copied()
    }

    pub fn child_count(&self, id: IntermediateId) -> usize {
        match self.intermediate(id) {
            Intermediate::Cons { children, .. } => children.len(),
            Intermediate::Empty { .. } => 0,
        }
    }

    /// The symbols a prefix was built from, left to right.
    ///
    /// Fails on the first prefix along the chain that packs more than one
    /// derivation.
    pub fn subderivations(&self, id: IntermediateId) -> Result<Vec<SymbolId>, AmbiguityError> {
        let mut symbols = Vec::new();
        let mut current = id;
        loop {
            let binary = match self.intermediate(current) {
                Intermediate::Empty { .. } => break,
                Intermediate::Cons { children, .. } if children.len() == 1 => children[0],
                Intermediate::Cons { children, .. } => {
                    return Err(AmbiguityError {
                        node: current,
                        count: children.len(),
                    });
                }
            };
            symbols.push(binary.rhs);
            current = binary.lhs;
        }
        symbols.reverse();
        Ok(symbols)
    }
}
