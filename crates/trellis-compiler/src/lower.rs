//! Rule lowering.
//!
//! Flattens each rule into alternatives over terminals and nonterminals:
//!
//! - a top-level `CHOICE` contributes one alternative per member
//! - `STRING` expands to one terminal per code point
//! - `REPEAT x` on rule `R` becomes `R ::= x R | ε`, `REPEAT1 x` becomes
//!   `R ::= x R | x`
//! - a nested `CHOICE`/`REPEAT`/`REPEAT1` is hoisted into an auxiliary
//!   nonterminal named `rule~n`, lowered by the same rules

use std::collections::HashMap;

use trellis_core::grammar::{Grammar, Rule};
use trellis_core::{Interner, NonterminalId, Symbol};

use crate::pattern::{Pattern, PatternError};
use crate::program::{Atom, Matcher};
use crate::{LowerError, Result};

pub(crate) struct Lowered {
    pub names: Interner,
    pub symbols: Vec<Symbol>,
    /// Alternatives per nonterminal, indexed by id.
    pub productions: Vec<Vec<Vec<Atom>>>,
    pub start: NonterminalId,
    pub rule_count: u32,
}

pub(crate) struct Lowering<'g> {
    grammar: &'g Grammar,
    names: Interner,
    symbols: Vec<Symbol>,
    productions: Vec<Vec<Vec<Atom>>>,
    start: NonterminalId,
    patterns: HashMap<(&'g str, Option<&'g str>), Pattern>,
    /// Rule being lowered.
    rule: &'g str,
    aux_count: u32,
}

impl<'g> Lowering<'g> {
    pub fn new(grammar: &'g Grammar) -> Result<Self> {
        let Some(start_name) = grammar.start_rule() else {
            return Err(LowerError::Empty(grammar.name.clone()));
        };
        let start = grammar
            .rules
            .get_index_of(start_name)
            .ok_or_else(|| LowerError::UnknownStart(start_name.to_owned()))?;

        let mut names = Interner::new();
        let symbols: Vec<Symbol> = grammar.rules.keys().map(|name| names.intern(name)).collect();

        Ok(Self {
            grammar,
            names,
            productions: vec![Vec::new(); symbols.len()],
            symbols,
            start: NonterminalId::new(start as u32),
            patterns: HashMap::new(),
            rule: "",
            aux_count: 0,
        })
    }

    pub fn run(mut self) -> Result<Lowered> {
        let grammar = self.grammar;
        for (index, (name, rule)) in grammar.rules.iter().enumerate() {
            self.rule = name.as_str();
            self.aux_count = 0;
            let owner = NonterminalId::new(index as u32);
            self.productions[index] = self.alternatives(rule, owner)?;
        }

        Ok(Lowered {
            names: self.names,
            symbols: self.symbols,
            productions: self.productions,
            start: self.start,
            rule_count: grammar.rules.len() as u32,
        })
    }

    fn alternatives(&mut self, rule: &'g Rule, owner: NonterminalId) -> Result<Vec<Vec<Atom>>> {
        match rule {
            Rule::Choice(members) => members.iter().map(|m| self.sequence(m)).collect(),
            Rule::Repeat(content) => {
                let mut more = self.sequence(content)?;
                more.push(Atom::Nonterminal(owner));
                Ok(vec![more, Vec::new()])
            }
            Rule::Repeat1(content) => {
                let once = self.sequence(content)?;
                let mut more = once.clone();
                more.push(Atom::Nonterminal(owner));
                Ok(vec![more, once])
            }
            _ => Ok(vec![self.sequence(rule)?]),
        }
    }

    fn sequence(&mut self, rule: &'g Rule) -> Result<Vec<Atom>> {
        let mut out = Vec::new();
        self.append(rule, &mut out)?;
        Ok(out)
    }

    fn append(&mut self, rule: &'g Rule, out: &mut Vec<Atom>) -> Result<()> {
        match rule {
            Rule::Blank => {}
            Rule::String(value) => {
                if value.is_empty() {
                    return Err(LowerError::EmptyString {
                        rule: self.rule.to_owned(),
                    });
                }
                out.extend(value.chars().map(|ch| Atom::Terminal(Matcher::Char(ch))));
            }
            Rule::Pattern { value, flags } => {
                let pattern = self.pattern(value, flags.as_deref())?;
                out.push(Atom::Terminal(Matcher::Pattern(pattern)));
            }
            Rule::Symbol(name) => {
                let index = self.grammar.rules.get_index_of(name.as_str()).ok_or_else(|| {
                    LowerError::UndefinedRule {
                        rule: self.rule.to_owned(),
                        name: name.clone(),
                    }
                })?;
                out.push(Atom::Nonterminal(NonterminalId::new(index as u32)));
            }
            Rule::Seq(members) => {
                for member in members {
                    self.append(member, out)?;
                }
            }
            Rule::Choice(_) | Rule::Repeat(_) | Rule::Repeat1(_) => {
                let aux = self.auxiliary(rule)?;
                out.push(Atom::Nonterminal(aux));
            }
        }
        Ok(())
    }

    fn auxiliary(&mut self, rule: &'g Rule) -> Result<NonterminalId> {
        let id = NonterminalId::new(self.productions.len() as u32);
        let name = self.fresh_name();
        let sym = self.names.intern(&name);
        self.symbols.push(sym);
        self.productions.push(Vec::new());

        let alternatives = self.alternatives(rule, id)?;
        self.productions[id.as_usize()] = alternatives;
        Ok(id)
    }

    fn fresh_name(&mut self) -> String {
        loop {
            self.aux_count += 1;
            let name = format!("{}~{}", self.rule, self.aux_count);
            if self.names.get(&name).is_none() {
                return name;
            }
        }
    }

    fn pattern(&mut self, value: &'g str, flags: Option<&'g str>) -> Result<Pattern> {
        if let Some(pattern) = self.patterns.get(&(value, flags)) {
            return Ok(pattern.clone());
        }

        let pattern = Pattern::new(value, flags).map_err(|e| match e {
            PatternError::Flags => LowerError::UnsupportedFlags {
                rule: self.rule.to_owned(),
                flags: flags.unwrap_or_default().to_owned(),
            },
            PatternError::Syntax(message) => LowerError::Pattern {
                rule: self.rule.to_owned(),
                pattern: value.to_owned(),
                message,
            },
        })?;
        self.patterns.insert((value, flags), pattern.clone());
        Ok(pattern)
    }
}
