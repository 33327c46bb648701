//! JSON decoding for grammar.json files.
//!
//! Tree-sitter tags every rule object with a `type` field.

use indexmap::IndexMap;
use serde::Deserialize;

use super::types::{Grammar, Rule};

/// Error decoding a grammar file.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("invalid grammar JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Grammar {
    /// Parse grammar from JSON string.
    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        let raw: RawGrammar = serde_json::from_str(json)?;
        Ok(raw.into())
    }
}

/// Tables tree-sitter emits besides `name`, `rules` and `start` (extras,
/// conflicts, precedences, ...) describe its LR tables and lexer; they are
/// skipped.
#[derive(Debug, Deserialize)]
struct RawGrammar {
    name: String,
    #[serde(default)]
    start: Option<String>,
    rules: IndexMap<String, RawRule>,
}

impl From<RawGrammar> for Grammar {
    fn from(raw: RawGrammar) -> Self {
        Self {
            name: raw.name,
            start: raw.start,
            rules: raw.rules.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
#[allow(clippy::upper_case_acronyms, non_camel_case_types)]
enum RawRule {
    BLANK,
    STRING {
        value: String,
    },
    PATTERN {
        value: String,
        #[serde(default)]
        flags: Option<String>,
    },
    SYMBOL {
        name: String,
    },
    SEQ {
        members: Vec<RawRule>,
    },
    CHOICE {
        members: Vec<RawRule>,
    },
    REPEAT {
        content: Box<RawRule>,
    },
    REPEAT1 {
        content: Box<RawRule>,
    },
    FIELD {
        content: Box<RawRule>,
    },
    ALIAS {
        content: Box<RawRule>,
    },
    TOKEN {
        content: Box<RawRule>,
    },
    IMMEDIATE_TOKEN {
        content: Box<RawRule>,
    },
    PREC {
        content: Box<RawRule>,
    },
    PREC_LEFT {
        content: Box<RawRule>,
    },
    PREC_RIGHT {
        content: Box<RawRule>,
    },
    PREC_DYNAMIC {
        content: Box<RawRule>,
    },
    RESERVED {
        content: Box<RawRule>,
    },
}

impl From<RawRule> for Rule {
    fn from(raw: RawRule) -> Self {
        match raw {
            RawRule::BLANK => Rule::Blank,
            RawRule::STRING { value } => Rule::String(value),
            RawRule::PATTERN { value, flags } => Rule::Pattern { value, flags },
            RawRule::SYMBOL { name } => Rule::Symbol(name),
            RawRule::SEQ { members } => Rule::Seq(members.into_iter().map(Into::into).collect()),
            RawRule::CHOICE { members } => {
                Rule::Choice(members.into_iter().map(Into::into).collect())
            }
            RawRule::REPEAT { content } => Rule::Repeat(Box::new((*content).into())),
            RawRule::REPEAT1 { content } => Rule::Repeat1(Box::new((*content).into())),
            // Annotations without effect on the language.
            RawRule::FIELD { content }
            | RawRule::ALIAS { content }
            | RawRule::TOKEN { content }
            | RawRule::IMMEDIATE_TOKEN { content }
            | RawRule::PREC { content }
            | RawRule::PREC_LEFT { content }
            | RawRule::PREC_RIGHT { content }
            | RawRule::PREC_DYNAMIC { content }
            | RawRule::RESERVED { content } => (*content).into(),
        }
    }
}
