pub mod dump;
pub mod grammar_loader;
pub mod gss;
pub mod parse;
pub mod run_common;
pub mod trace;

#[cfg(test)]
mod grammar_loader_tests;
