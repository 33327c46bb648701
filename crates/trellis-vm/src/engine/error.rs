//! Errors surfaced by the engine.

use super::sppf::IntermediateId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Execution fuel exhausted (too many work items).
    #[error("runtime execution limit exceeded ({0} work items)")]
    ExecFuelExhausted(u32),

    /// Input was fed after end-of-input had been signalled.
    #[error("input advanced past end of input")]
    AdvancePastEnd,

    /// Input was fed before the current generation was drained.
    #[error("input advanced with {0} undrained work items")]
    UndrainedWork(usize),
}

/// A prefix with several packed derivations was read as if it had one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{node} has {count} packed derivations, expected exactly one")]
pub struct AmbiguityError {
    pub node: IntermediateId,
    pub count: usize,
}
