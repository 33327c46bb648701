#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the Trellis crates.
//!
//! - **Ids**: opaque handles for call-site labels and nonterminals
//! - **Positions**: immutable markers of a location in the input
//! - **Interner**: rule-name deduplication
//! - **Grammar**: the `grammar.json` interchange model

pub mod colors;
pub mod grammar;
pub mod interner;
pub mod position;

#[cfg(test)]
mod interner_tests;

pub use colors::Colors;
pub use interner::{Interner, Symbol};
pub use position::Position;

// ============================================================================
// Common Types
// ============================================================================

/// Call-site label: a point inside a production's right-hand side.
///
/// Produced by the grammar compiler. The engine only hashes and compares it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Label(u32);

impl Label {
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// Nonterminal identifier, stable for the lifetime of a compiled program.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NonterminalId(u32);

impl NonterminalId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NonterminalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "N{}", self.0)
    }
}
