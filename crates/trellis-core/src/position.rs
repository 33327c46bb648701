//! Input positions.
//!
//! A position is created once per token step by whoever drives the engine and
//! never changes afterwards. Positions double as span boundaries: a node
//! spanning `[first, last)` covers the symbols whose offsets lie in
//! `first.offset()..last.offset()`.

use std::fmt;

/// A point in the input sequence.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Position {
    /// Before all input. Shares offset 0 with the first symbol.
    BeforeInput,
    /// At the symbol `ch` occupying linear index `index`.
    Symbol { ch: char, index: u32 },
    /// After all input; `index` equals the input length.
    AfterInput { index: u32 },
}

impl Position {
    /// Position of the symbol `ch` at `index`.
    #[inline]
    pub fn symbol(ch: char, index: u32) -> Self {
        Self::Symbol { ch, index }
    }

    /// End-of-input sentinel for an input of `len` symbols.
    #[inline]
    pub fn after_input(len: u32) -> Self {
        Self::AfterInput { index: len }
    }

    /// Linear offset used as a span boundary.
    #[inline]
    pub fn offset(self) -> u32 {
        match self {
            Self::BeforeInput => 0,
            Self::Symbol { index, .. } | Self::AfterInput { index } => index,
        }
    }

    /// The code point at this position, if any.
    #[inline]
    pub fn ch(self) -> Option<char> {
        match self {
            Self::Symbol { ch, .. } => Some(ch),
            Self::BeforeInput | Self::AfterInput { .. } => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeforeInput => write!(f, "^"),
            Self::Symbol { ch, index } => write!(f, "{index}:{ch:?}"),
            Self::AfterInput { index } => write!(f, "{index}:$"),
        }
    }
}
