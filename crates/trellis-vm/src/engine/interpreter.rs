//! Grammar side of the engine.
//!
//! The scheduler knows nothing about grammars. Whatever drives it implements
//! [`Interpreter`]: it seeds the first generation and runs one descriptor at a
//! time, calling back into [`State`] for stack and forest operations.

use trellis_compiler::{Instruction, Program};
use trellis_core::{Label, NonterminalId};

use super::gss::{Gss, StackId};
use super::sppf::{IntermediateId, NodeId, Unary};
use super::state::State;
use super::trace::Tracer;

pub trait Interpreter {
    /// Nonterminal the parse is rooted at.
    fn start(&self) -> NonterminalId;

    /// Schedules the initial descriptors. Runs once, right after the first
    /// generation opens.
    fn begin<T: Tracer>(&self, state: &mut State, tracer: &mut T);

    /// Runs the code at `label` for a descriptor.
    fn execute<T: Tracer>(
        &self,
        state: &mut State,
        label: Label,
        caller: StackId,
        prefix: IntermediateId,
        tracer: &mut T,
    );
}

impl Interpreter for Program {
    fn start(&self) -> NonterminalId {
        Program::start(self)
    }

    fn begin<T: Tracer>(&self, state: &mut State, tracer: &mut T) {
        let empty = state.empty();
        let origin = state.index();
        let frame = state.push(Program::ACCEPT, Gss::INITIAL, origin, empty, tracer);
        for &entry in self.alternatives(Program::start(self)) {
            state.schedule_now(entry, frame, empty, tracer);
        }
    }

    fn execute<T: Tracer>(
        &self,
        state: &mut State,
        label: Label,
        caller: StackId,
        prefix: IntermediateId,
        tracer: &mut T,
    ) {
        let next = Label::new(label.as_u32() + 1);
        let origin = state.index();
        match &self.slot(label).instruction {
            Instruction::Accept => {
                tracer.trace_accept(state.forest().span(NodeId::Intermediate(prefix)));
            }
            Instruction::Terminal(matcher) => {
                let matched = state.current().ch().is_some_and(|ch| matcher.matches(ch));
                tracer.trace_terminal(label, state.current(), matched);
                if !matched {
                    return;
                }
                let Some(terminal) = state.create_terminal_derivation() else {
                    return;
                };
                // A frame of its own per terminal keeps the shift dedup exact.
                let frame = state.push(next, caller, origin, prefix, tracer);
                state.schedule_later(frame, terminal, tracer);
            }
            Instruction::Call(callee) => {
                let frame = state.push(next, caller, origin, prefix, tracer);
                for &entry in self.alternatives(*callee) {
                    let empty = state.empty();
                    state.schedule_now(entry, frame, empty, tracer);
                }
            }
            Instruction::Return(nonterminal) => {
                let first = state.forest().intermediate_first(prefix);
                let derivation =
                    state.create_nonterminal_derivation(*nonterminal, first, Unary { child: prefix });
                state.pop(caller, derivation, tracer);
            }
        }
    }
}
