//! Escape sequences for program listings, traces and forest dumps.
//!
//! Each field names the role it paints in those views:
//! `blue` for nonterminals and stack frames, `green` for terminals and
//! accepted verdicts, `red` for ambiguity and rejection, `dim` for spans,
//! item dots and ids.

/// Escape sequences spliced into printer output; all empty when disabled.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub red: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        red: "\x1b[31m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Plain text, used for snapshots and piped output.
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        red: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
