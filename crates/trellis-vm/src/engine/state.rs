//! Descriptor scheduler state.
//!
//! The parse advances one token per generation. Within a generation, work is
//! drained from the active queue until it is empty; terminal matches stage a
//! `Shift` for the next generation instead. Two dedup sets bound every unit
//! of work to one execution per generation:
//!
//! - `Continue` items by (label, caller); the prefix is implied, since every
//!   prefix handed to a caller at a label starts at the caller's origin and
//!   ends at the current token
//! - `Shift` items by caller frame; the derivation is always the terminal of
//!   the token the frame was created on
//!
//! Frames and forest nodes are canonical per generation through the caches,
//! which `advance` clears in place.

use std::collections::{HashMap, HashSet, VecDeque};

use indexmap::IndexSet;
use trellis_core::{Label, NonterminalId, Position};

use super::cache::Cache;
use super::error::RuntimeError;
use super::gss::{Gss, Link, StackId};
use super::sppf::{Binary, Forest, IntermediateId, NodeId, Span, SymbolDerivation, SymbolId, Unary};
use super::trace::Tracer;

/// Schedulable unit of work.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum WorkItem {
    /// Run the grammar at `label` for `caller`, with `prefix` recognized so far.
    Continue {
        label: Label,
        caller: StackId,
        prefix: IntermediateId,
    },
    /// Deliver a terminal derivation staged by the previous generation.
    Shift {
        caller: StackId,
        derivation: SymbolId,
    },
}

#[derive(Debug)]
pub struct State {
    forest: Forest,
    gss: Gss,

    // Parse-wide.
    start: NonterminalId,
    first: Option<Position>,
    root: Option<SymbolId>,
    /// Linear index the next `advance` assigns.
    next_index: u32,
    finished: bool,

    // Current generation.
    current: Position,
    terminal: Option<SymbolId>,
    empty: Option<IntermediateId>,
    active: VecDeque<WorkItem>,
    future: Vec<WorkItem>,
    dead_now: HashSet<(Label, StackId)>,
    dead_later: HashSet<StackId>,
    frames: Cache<(Label, u32), StackId>,
    popped: HashMap<StackId, IndexSet<SymbolId>>,
    conses: Cache<(Label, Position), IntermediateId>,
    nonterminals: Cache<(NonterminalId, Position), SymbolId>,
}

impl State {
    pub fn new(start: NonterminalId) -> Self {
        Self {
            forest: Forest::new(),
            gss: Gss::new(),
            start,
            first: None,
            root: None,
            next_index: 0,
            finished: false,
            current: Position::BeforeInput,
            terminal: None,
            empty: None,
            active: VecDeque::new(),
            future: Vec::new(),
            dead_now: HashSet::new(),
            dead_later: HashSet::new(),
            frames: Cache::new(),
            popped: HashMap::new(),
            conses: Cache::new(),
            nonterminals: Cache::new(),
        }
    }

    // ------------------------------------------------------------------
    // Generation boundary
    // ------------------------------------------------------------------

    /// Opens the generation for `symbol`, or for end-of-input on `None`.
    ///
    /// Staged shifts become active, every per-generation table is cleared,
    /// and the root handle is re-anchored at the new position. The current
    /// generation must be drained first.
    pub fn advance<T: Tracer>(&mut self, symbol: Option<char>, tracer: &mut T) -> Result<(), RuntimeError> {
        if self.finished {
            return Err(RuntimeError::AdvancePastEnd);
        }
        if !self.active.is_empty() {
            return Err(RuntimeError::UndrainedWork(self.active.len()));
        }

        self.active.extend(self.future.drain(..));

        self.dead_now.clear();
        self.dead_later.clear();
        self.frames.clear();
        self.popped.clear();

        self.conses.clear();
        self.nonterminals.clear();
        self.empty = None;

        let index = self.next_index;
        self.next_index += 1;
        self.current = match symbol {
            Some(ch) => Position::symbol(ch, index),
            None => Position::after_input(index),
        };
        self.terminal = symbol.map(|_| self.forest.add_terminal(self.current));
        self.finished = symbol.is_none();
        let first = *self.first.get_or_insert(self.current);

        let (start, current) = (self.start, self.current);
        self.root = Some(
            self.nonterminals
                .get_or_insert_with((start, first), || self.forest.add_nonterminal(start, first, current)),
        );

        tracer.trace_advance(self.current);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Scheduling
    // ------------------------------------------------------------------

    /// Enqueues a descriptor unless (label, caller) already ran or waits in
    /// this generation. Returns whether it was enqueued.
    pub fn schedule_now<T: Tracer>(
        &mut self,
        label: Label,
        caller: StackId,
        prefix: IntermediateId,
        tracer: &mut T,
    ) -> bool {
        if !self.dead_now.insert((label, caller)) {
            tracer.trace_skip_now(label, caller);
            return false;
        }
        self.active.push_back(WorkItem::Continue {
            label,
            caller,
            prefix,
        });
        true
    }

    /// Stages a terminal delivery for the next generation unless `caller`
    /// already has one. Returns whether it was staged.
    pub fn schedule_later<T: Tracer>(
        &mut self,
        caller: StackId,
        derivation: SymbolId,
        tracer: &mut T,
    ) -> bool {
        if !self.dead_later.insert(caller) {
            tracer.trace_skip_later(caller);
            return false;
        }
        self.future.push(WorkItem::Shift { caller, derivation });
        true
    }

    pub(crate) fn next_work(&mut self) -> Option<WorkItem> {
        self.active.pop_front()
    }

    /// Items waiting in the current generation.
    pub fn pending(&self) -> impl Iterator<Item = &WorkItem> {
        self.active.iter()
    }

    /// Items staged for the next generation.
    pub fn staged(&self) -> impl Iterator<Item = &WorkItem> {
        self.future.iter()
    }

    // ------------------------------------------------------------------
    // Graph-structured stack
    // ------------------------------------------------------------------

    /// Links `caller` under the frame for (label, origin), creating the frame
    /// on first use in this generation.
    ///
    /// Results the frame already delivered in this generation are replayed
    /// through the new link, so late callers lose nothing.
    pub fn push<T: Tracer>(
        &mut self,
        label: Label,
        caller: StackId,
        origin: u32,
        prefix: IntermediateId,
        tracer: &mut T,
    ) -> StackId {
        let frame = self
            .frames
            .get_or_insert_with((label, origin), || self.gss.add_frame(label, origin));
        let link = Link { caller, prefix };
        let linked = self.gss.add_link(frame, link);
        tracer.trace_push(frame, label, origin, caller, linked);
        if !linked {
            return frame;
        }

        let replay = self.popped.get(&frame).map_or(0, IndexSet::len);
        for i in 0..replay {
            let result = self.popped[&frame][i];
            tracer.trace_redeliver(frame, result, caller);
            link.schedule(self, result, label, tracer);
        }
        frame
    }

    /// Delivers `result` to every caller of `frame` and records it for callers
    /// that link in later during this generation.
    pub fn pop<T: Tracer>(&mut self, frame: StackId, result: SymbolId, tracer: &mut T) {
        let Some(label) = self.gss.label(frame) else {
            return;
        };

        let fresh = self.popped.entry(frame).or_default().insert(result);
        let nonterminal = match self.forest.symbol(result) {
            SymbolDerivation::Nonterminal { nonterminal, .. } => Some(*nonterminal),
            SymbolDerivation::Terminal { .. } => None,
        };
        let span = self.forest.span(NodeId::Symbol(result));
        tracer.trace_pop(frame, result, nonterminal, span, fresh);
        if !fresh {
            return;
        }

        for i in 0..self.gss.link_count(frame) {
            let link = self.gss.link(frame, i);
            link.schedule(self, result, label, tracer);
        }
    }

    // ------------------------------------------------------------------
    // Forest
    // ------------------------------------------------------------------

    /// Zero-length prefix at the current position.
    pub fn empty(&mut self) -> IntermediateId {
        match self.empty {
            Some(empty) => empty,
            None => {
                let empty = self.forest.add_empty(self.current);
                self.empty = Some(empty);
                empty
            }
        }
    }

    /// Extends prefix `lhs` by `rhs`, yielding the canonical prefix for
    /// (label, lhs.first) ending at the current position.
    pub fn append(&mut self, label: Label, lhs: IntermediateId, rhs: SymbolId) -> IntermediateId {
        let first = self.forest.intermediate_first(lhs);
        let current = self.current;
        let cons = self
            .conses
            .get_or_insert_with((label, first), || self.forest.add_cons(label, first, current));
        let split = self.forest.symbol_first(rhs);
        self.forest.add_binary(
            cons,
            Binary {
                label,
                split,
                lhs,
                rhs,
            },
        );
        cons
    }

    /// Canonical derivation of `nonterminal` over `[first, current)`, with
    /// `unary` packed in as one of its alternatives.
    pub fn create_nonterminal_derivation(
        &mut self,
        nonterminal: NonterminalId,
        first: Position,
        unary: Unary,
    ) -> SymbolId {
        let current = self.current;
        let node = self.nonterminals.get_or_insert_with((nonterminal, first), || {
            self.forest.add_nonterminal(nonterminal, first, current)
        });
        self.forest.add_unary(node, unary);
        node
    }

    /// Terminal derivation of the current token; `None` at end of input.
    pub fn create_terminal_derivation(&self) -> Option<SymbolId> {
        self.terminal
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[inline]
    pub fn current(&self) -> Position {
        self.current
    }

    /// Linear index of the current token.
    #[inline]
    pub fn index(&self) -> u32 {
        self.current.offset()
    }

    pub fn start(&self) -> NonterminalId {
        self.start
    }

    /// Derivation of the start nonterminal from the first position to the
    /// current one.
    pub fn root(&self) -> Option<SymbolId> {
        self.root
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// True once end of input was reached and the root derives all of it.
    pub fn is_accepted(&self) -> bool {
        let Some(root) = self.root.filter(|_| self.finished) else {
            return false;
        };
        self.forest.alternative_count(root) > 0
            && self.forest.span(NodeId::Symbol(root)) == Span::new(0, self.current.offset())
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn gss(&self) -> &Gss {
        &self.gss
    }
}

impl Link {
    /// Hands a completed `result` to the caller side of this link: the
    /// caller's prefix grows by `result` and resumes at `label`.
    pub fn schedule<T: Tracer>(self, state: &mut State, result: SymbolId, label: Label, tracer: &mut T) {
        let cons = state.append(label, self.prefix, result);
        state.schedule_now(label, self.caller, cons, tracer);
    }
}
