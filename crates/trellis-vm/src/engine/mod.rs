//! Parsing engine.
//!
//! One generation per input code point. [`State`] owns the forest, the stack
//! and the scheduler; an [`Interpreter`] supplies the grammar; [`Engine`]
//! feeds input and meters work.

mod cache;
mod error;
mod exec;
mod gss;
mod interpreter;
mod sppf;
mod state;
mod trace;

#[cfg(test)]
mod sppf_tests;
#[cfg(test)]
mod trace_tests;

pub use error::{AmbiguityError, RuntimeError};
pub use exec::{Engine, EngineBuilder, FuelLimits};
pub use gss::{Gss, Link, Stack, StackId};
pub use interpreter::Interpreter;
pub use sppf::{
    Binary, Forest, Intermediate, IntermediateId, NodeId, Span, SymbolDerivation, SymbolId, Unary,
};
pub use state::{State, WorkItem};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
