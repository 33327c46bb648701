//! Trellis compiler: grammar lowering for the GLL engine.
//!
//! - `lower` - flattens `grammar.json` rules into BNF alternatives
//! - `program` - slot layout: one call-site label per dotted item
//! - `pattern` - single code point matchers backed by dense DFAs
//! - `dump` - human-readable program listing

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod dump;
mod error;
mod lower;
pub mod pattern;
pub mod program;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod lower_tests;
#[cfg(test)]
mod pattern_tests;

pub use error::LowerError;
pub use pattern::Pattern;
pub use program::{Instruction, Matcher, Program, Slot};

/// Result type for lowering.
pub type Result<T> = std::result::Result<T, LowerError>;
