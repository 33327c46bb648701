/// Errors that reject a grammar before any input is parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LowerError {
    #[error("grammar `{0}` has no rules")]
    Empty(String),

    #[error("start rule `{0}` is not defined")]
    UnknownStart(String),

    #[error("rule `{rule}` references undefined rule `{name}`")]
    UndefinedRule { rule: String, name: String },

    /// Empty literals are rejected; `BLANK` spells the empty string.
    #[error("rule `{rule}` contains an empty string literal")]
    EmptyString { rule: String },

    #[error("rule `{rule}` has invalid pattern /{pattern}/: {message}")]
    Pattern {
        rule: String,
        pattern: String,
        message: String,
    },

    #[error("rule `{rule}` uses unsupported pattern flags `{flags}`")]
    UnsupportedFlags { rule: String, flags: String },
}
