//! Grammar type definitions.

use indexmap::IndexMap;

/// A named set of rules plus an optional explicit start rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    pub name: String,
    /// Start rule. When absent, the first rule is the start rule.
    pub start: Option<String>,
    /// Production rules in definition order.
    pub rules: IndexMap<String, Rule>,
}

/// Rule expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Matches the empty string.
    Blank,
    /// Literal; one terminal per code point.
    String(String),
    /// Regex matching a single code point.
    Pattern {
        value: String,
        flags: Option<String>,
    },
    /// Reference to another rule.
    Symbol(String),
    Seq(Vec<Rule>),
    /// Unordered alternation; every member is explored.
    Choice(Vec<Rule>),
    /// Zero or more.
    Repeat(Box<Rule>),
    /// One or more.
    Repeat1(Box<Rule>),
}

impl Grammar {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: None,
            rules: IndexMap::new(),
        }
    }

    /// Adds (or replaces) a rule, keeping its first definition slot.
    pub fn rule(mut self, name: impl Into<String>, rule: Rule) -> Self {
        self.rules.insert(name.into(), rule);
        self
    }

    pub fn with_start(mut self, name: impl Into<String>) -> Self {
        self.start = Some(name.into());
        self
    }

    /// Name of the start rule: the explicit one, else the first defined.
    pub fn start_rule(&self) -> Option<&str> {
        self.start
            .as_deref()
            .or_else(|| self.rules.keys().next().map(String::as_str))
    }
}

impl Rule {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn pattern(value: impl Into<String>) -> Self {
        Self::Pattern {
            value: value.into(),
            flags: None,
        }
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    pub fn seq(members: impl IntoIterator<Item = Rule>) -> Self {
        Self::Seq(members.into_iter().collect())
    }

    pub fn choice(members: impl IntoIterator<Item = Rule>) -> Self {
        Self::Choice(members.into_iter().collect())
    }

    pub fn repeat(content: Rule) -> Self {
        Self::Repeat(Box::new(content))
    }

    pub fn repeat1(content: Rule) -> Self {
        Self::Repeat1(Box::new(content))
    }

    /// `choice(content, blank)`, tree-sitter's `optional`.
    pub fn optional(content: Rule) -> Self {
        Self::Choice(vec![content, Self::Blank])
    }
}
