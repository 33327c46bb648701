//! Engine driver: token feeding, draining, fuel.

use trellis_compiler::Program;

use super::error::RuntimeError;
use super::gss::Gss;
use super::interpreter::Interpreter;
use super::sppf::{Forest, SymbolId};
use super::state::{State, WorkItem};
use super::trace::{NoopTracer, Tracer};

/// Runtime limits for a parse.
#[derive(Clone, Copy, Debug)]
pub struct FuelLimits {
    /// Maximum work items executed over the whole parse (default: 10,000,000).
    pub(crate) exec_fuel: u32,
}

impl Default for FuelLimits {
    fn default() -> Self {
        Self {
            exec_fuel: 10_000_000,
        }
    }
}

impl FuelLimits {
    /// Create new fuel limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = fuel;
        self
    }

    pub fn get_exec_fuel(&self) -> u32 {
        self.exec_fuel
    }
}

/// Builder for engine instances.
pub struct EngineBuilder<'p, I: Interpreter = Program> {
    program: &'p I,
    limits: FuelLimits,
}

impl<'p, I: Interpreter> EngineBuilder<'p, I> {
    pub fn new(program: &'p I) -> Self {
        Self {
            program,
            limits: FuelLimits::default(),
        }
    }

    /// Set the fuel limits.
    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.limits = self.limits.exec_fuel(fuel);
        self
    }

    pub fn build(self) -> Engine<'p, I> {
        Engine {
            program: self.program,
            state: State::new(self.program.start()),
            fuel: self.limits.get_exec_fuel(),
            limits: self.limits,
        }
    }
}

/// A single parse in progress.
///
/// Feed code points one at a time with [`feed`](Self::feed), then `None` for
/// end of input; or hand over a whole string with [`parse`](Self::parse).
/// The `_with` variants take a tracer; the plain ones use `NoopTracer`, which
/// compiles away.
pub struct Engine<'p, I: Interpreter = Program> {
    program: &'p I,
    state: State,
    limits: FuelLimits,
    fuel: u32,
}

impl<'p, I: Interpreter> Engine<'p, I> {
    pub fn builder(program: &'p I) -> EngineBuilder<'p, I> {
        EngineBuilder::new(program)
    }

    pub fn new(program: &'p I) -> Self {
        Self::builder(program).build()
    }

    /// Opens the next generation without running it. Fails with
    /// [`RuntimeError::UndrainedWork`] unless the current one was drained.
    pub fn advance(&mut self, symbol: Option<char>) -> Result<(), RuntimeError> {
        self.advance_with(symbol, &mut NoopTracer)
    }

    pub fn advance_with<T: Tracer>(
        &mut self,
        symbol: Option<char>,
        tracer: &mut T,
    ) -> Result<(), RuntimeError> {
        let seeding = self.state.root().is_none();
        self.state.advance(symbol, tracer)?;
        if seeding {
            self.program.begin(&mut self.state, tracer);
        }
        Ok(())
    }

    /// Runs the current generation to a fixed point.
    pub fn drain(&mut self) -> Result<(), RuntimeError> {
        self.drain_with(&mut NoopTracer)
    }

    pub fn drain_with<T: Tracer>(&mut self, tracer: &mut T) -> Result<(), RuntimeError> {
        // Fuel is checked before dequeuing, so exhaustion leaves the queue intact.
        while self.state.pending().next().is_some() {
            if self.fuel == 0 {
                return Err(RuntimeError::ExecFuelExhausted(self.limits.exec_fuel));
            }
            let Some(item) = self.state.next_work() else {
                break;
            };
            self.fuel -= 1;

            match item {
                WorkItem::Continue {
                    label,
                    caller,
                    prefix,
                } => {
                    tracer.trace_descriptor(label, caller, prefix);
                    self.program
                        .execute(&mut self.state, label, caller, prefix, tracer);
                }
                WorkItem::Shift { caller, derivation } => {
                    tracer.trace_shift(caller, self.state.forest().symbol_first(derivation));
                    self.state.pop(caller, derivation, tracer);
                }
            }
        }
        Ok(())
    }

    /// Advances by one code point (`None` for end of input) and drains.
    pub fn feed(&mut self, symbol: Option<char>) -> Result<(), RuntimeError> {
        self.feed_with(symbol, &mut NoopTracer)
    }

    pub fn feed_with<T: Tracer>(
        &mut self,
        symbol: Option<char>,
        tracer: &mut T,
    ) -> Result<(), RuntimeError> {
        self.advance_with(symbol, tracer)?;
        self.drain_with(tracer)
    }

    /// Feeds all of `input` plus end of input. Returns whether it was accepted.
    pub fn parse(&mut self, input: &str) -> Result<bool, RuntimeError> {
        self.parse_with(input, &mut NoopTracer)
    }

    pub fn parse_with<T: Tracer>(&mut self, input: &str, tracer: &mut T) -> Result<bool, RuntimeError> {
        for ch in input.chars() {
            self.feed_with(Some(ch), tracer)?;
        }
        self.feed_with(None, tracer)?;
        Ok(self.accepted())
    }

    /// End of input was fed and the start symbol derives all of it.
    pub fn accepted(&self) -> bool {
        self.state.is_accepted()
    }

    /// Derivation of the start symbol over everything fed so far.
    pub fn root(&self) -> Option<SymbolId> {
        self.state.root()
    }

    pub fn forest(&self) -> &Forest {
        self.state.forest()
    }

    pub fn gss(&self) -> &Gss {
        self.state.gss()
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn program(&self) -> &'p I {
        self.program
    }

    /// Work items left before fuel runs out.
    pub fn remaining_fuel(&self) -> u32 {
        self.fuel
    }
}
