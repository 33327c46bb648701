//! GLL parsing engine.
//!
//! Drives a compiled [`Program`](trellis_compiler::Program) over a stream of
//! code points, building a graph-structured stack and a shared packed parse
//! forest. Every derivation of the input, including ambiguous and
//! left-recursive ones, ends up packed in the forest.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod dump;
pub mod engine;

pub use dump::{ForestPrinter, GssPrinter};
pub use engine::{
    AmbiguityError, Binary, Engine, EngineBuilder, Forest, FuelLimits, Gss, Intermediate,
    IntermediateId, Interpreter, Link, NodeId, NoopTracer, PrintTracer, RuntimeError, Span, Stack,
    StackId, State, SymbolDerivation, SymbolId, Tracer, Unary, Verbosity, WorkItem,
};
