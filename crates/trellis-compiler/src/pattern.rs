//! `PATTERN` terminals.
//!
//! The engine consumes one code point per token, so a pattern is a predicate
//! over a single `char`: it matches when the regex matches that code point's
//! UTF-8 encoding in full. Patterns are compiled once into anchored dense DFAs.

use std::fmt;

use regex_automata::dfa::{Automaton, StartKind, dense};
use regex_automata::{Anchored, Input};

/// Compiled single code point pattern.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    case_insensitive: bool,
    dfa: dense::DFA<Vec<u32>>,
}

impl Pattern {
    /// Compiles `source` with tree-sitter style `flags` (only `i` is known).
    ///
    /// Errors carry the regex-automata message; the caller attaches context.
    pub fn new(source: &str, flags: Option<&str>) -> Result<Self, PatternError> {
        let mut case_insensitive = false;
        for flag in flags.unwrap_or_default().chars() {
            match flag {
                'i' => case_insensitive = true,
                _ => return Err(PatternError::Flags),
            }
        }

        let group = if case_insensitive { "(?i:" } else { "(?:" };
        let full = format!("{group}{source})\\z");
        let dfa = dense::DFA::builder()
            .configure(
                dense::DFA::config()
                    .start_kind(StartKind::Anchored)
                    .minimize(true),
            )
            .build(&full)
            .map_err(|e| PatternError::Syntax(e.to_string()))?;

        Ok(Self {
            source: source.to_owned(),
            case_insensitive,
            dfa,
        })
    }

    pub fn matches(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        let text = ch.encode_utf8(&mut buf);
        let input = Input::new(text.as_bytes()).anchored(Anchored::Yes);
        matches!(self.dfa.try_search_fwd(&input), Ok(Some(_)))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({self})")
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.source)?;
        if self.case_insensitive {
            write!(f, "i")?;
        }
        Ok(())
    }
}

/// Reason a pattern failed to compile, before rule context is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    Flags,
    Syntax(String),
}
