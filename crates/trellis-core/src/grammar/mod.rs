//! Context-free grammars in tree-sitter's `grammar.json` interchange format.
//!
//! Only the shape of the language matters here: fields, aliases, precedence
//! and token annotations are accepted and unwrapped to their content.

mod json;
mod types;

#[cfg(test)]
mod json_tests;

pub use json::GrammarError;
pub use types::{Grammar, Rule};
