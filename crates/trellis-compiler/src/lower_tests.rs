use indoc::indoc;
use trellis_core::grammar::{Grammar, Rule};
use trellis_core::{Label, NonterminalId};

use crate::{Instruction, LowerError, Matcher, Program};

fn parens() -> Grammar {
    Grammar::new("parens").rule(
        "S",
        Rule::choice([
            Rule::seq([Rule::string("("), Rule::symbol("S"), Rule::string(")")]),
            Rule::Blank,
        ]),
    )
}

fn chars(program: &Program, labels: std::ops::Range<u32>) -> Vec<char> {
    labels
        .map(|l| match &program.slot(Label::new(l)).instruction {
            Instruction::Terminal(Matcher::Char(ch)) => *ch,
            other => panic!("expected char terminal at L{l}, got {other:?}"),
        })
        .collect()
}

#[test]
fn accept_slot_comes_first() {
    let program = Program::compile(&parens()).unwrap();

    let accept = program.slot(Program::ACCEPT);
    assert!(matches!(accept.instruction, Instruction::Accept));
    assert_eq!(accept.nonterminal, None);
}

#[test]
fn alternatives_are_laid_out_contiguously() {
    let program = Program::compile(&parens()).unwrap();
    let s = program.start();

    assert_eq!(program.nonterminal_count(), 1);
    assert_eq!(program.nonterminal_name(s), "S");
    assert_eq!(program.alternatives(s), [Label::new(1), Label::new(5)]);
    assert_eq!(program.slot_count(), 6);

    assert!(matches!(program.slot(Label::new(2)).instruction, Instruction::Call(n) if n == s));
    assert!(matches!(program.slot(Label::new(4)).instruction, Instruction::Return(n) if n == s));
    assert!(matches!(program.slot(Label::new(5)).instruction, Instruction::Return(n) if n == s));
    assert_eq!(program.slot(Label::new(3)).dot, 2);
    assert_eq!(program.slot(Label::new(5)).dot, 0);
}

#[test]
fn alternative_of_excludes_return() {
    let program = Program::compile(&parens()).unwrap();

    assert_eq!(program.alternative_of(Label::new(3)).len(), 3);
    assert_eq!(program.alternative_of(Label::new(4)).len(), 3);
    assert!(program.alternative_of(Label::new(5)).is_empty());
    assert!(program.alternative_of(Program::ACCEPT).is_empty());
}

#[test]
fn string_expands_per_code_point() {
    let grammar = Grammar::new("kw").rule("kw", Rule::string("let→"));
    let program = Program::compile(&grammar).unwrap();

    assert_eq!(chars(&program, 1..5), ['l', 'e', 't', '→']);
    assert!(matches!(program.slot(Label::new(5)).instruction, Instruction::Return(_)));
}

#[test]
fn nested_choice_becomes_auxiliary() {
    let grammar = Grammar::new("g").rule(
        "S",
        Rule::seq([
            Rule::string("a"),
            Rule::choice([Rule::string("b"), Rule::string("c")]),
        ]),
    );
    let program = Program::compile(&grammar).unwrap();

    let aux = NonterminalId::new(1);
    assert_eq!(program.nonterminal_count(), 2);
    assert_eq!(program.nonterminal_name(aux), "S~1");
    assert!(program.is_auxiliary(aux));
    assert!(!program.is_auxiliary(program.start()));
    assert_eq!(program.nonterminal("S~1"), None);
    assert_eq!(program.nonterminal("S"), Some(program.start()));
    assert_eq!(program.alternatives(aux).len(), 2);
    assert!(matches!(program.slot(Label::new(2)).instruction, Instruction::Call(n) if n == aux));
}

#[test]
fn top_level_repeat_recurses_on_rule() {
    let grammar = Grammar::new("g").rule("R", Rule::repeat(Rule::string("x")));
    let program = Program::compile(&grammar).unwrap();
    let r = program.start();

    assert_eq!(program.nonterminal_count(), 1);
    assert_eq!(program.alternatives(r), [Label::new(1), Label::new(4)]);
    assert!(matches!(program.slot(Label::new(2)).instruction, Instruction::Call(n) if n == r));
    assert!(matches!(program.slot(Label::new(4)).instruction, Instruction::Return(_)));
}

#[test]
fn repeat1_keeps_a_single_copy_alternative() {
    let grammar = Grammar::new("g").rule("R", Rule::repeat1(Rule::string("x")));
    let program = Program::compile(&grammar).unwrap();
    let r = program.start();

    // R ::= 'x' R | 'x'
    assert_eq!(program.alternatives(r), [Label::new(1), Label::new(4)]);
    assert_eq!(chars(&program, 4..5), ['x']);
    assert!(matches!(program.slot(Label::new(5)).instruction, Instruction::Return(_)));
}

#[test]
fn nested_auxiliaries_are_numbered_per_rule() {
    let grammar = Grammar::new("g")
        .rule(
            "A",
            Rule::seq([
                Rule::repeat(Rule::optional(Rule::string("a"))),
                Rule::repeat1(Rule::string("b")),
            ]),
        )
        .rule("B", Rule::seq([Rule::optional(Rule::symbol("A"))]));
    let program = Program::compile(&grammar).unwrap();

    let names: Vec<_> = program
        .nonterminals()
        .map(|n| program.nonterminal_name(n))
        .collect();
    assert_eq!(names, ["A", "B", "A~1", "A~2", "A~3", "B~1"]);
}

#[test]
fn explicit_start_rule() {
    let json = indoc! {r#"
        {
          "name": "g",
          "start": "B",
          "rules": {
            "A": { "type": "STRING", "value": "a" },
            "B": { "type": "SYMBOL", "name": "A" }
          }
        }
    "#};
    let program = Program::compile(&Grammar::from_json(json).unwrap()).unwrap();

    assert_eq!(program.nonterminal_name(program.start()), "B");
}

#[test]
fn identical_patterns_share_one_compilation() {
    let grammar = Grammar::new("g").rule(
        "D",
        Rule::seq([Rule::pattern("[0-9]"), Rule::pattern("[0-9]")]),
    );
    let program = Program::compile(&grammar).unwrap();

    for label in [1, 2] {
        let Instruction::Terminal(matcher) = &program.slot(Label::new(label)).instruction else {
            panic!("expected terminal");
        };
        assert!(matcher.matches('3'));
        assert!(!matcher.matches('x'));
    }
}

#[test]
fn rejects_empty_grammar() {
    let err = Program::compile(&Grammar::new("nothing")).unwrap_err();
    assert_eq!(err, LowerError::Empty("nothing".into()));
    assert_eq!(err.to_string(), "grammar `nothing` has no rules");
}

#[test]
fn rejects_unknown_start() {
    let grammar = parens().with_start("T");
    let err = Program::compile(&grammar).unwrap_err();
    assert_eq!(err, LowerError::UnknownStart("T".into()));
}

#[test]
fn rejects_undefined_reference() {
    let grammar = Grammar::new("g").rule("S", Rule::seq([Rule::symbol("missing")]));
    let err = Program::compile(&grammar).unwrap_err();
    assert_eq!(err.to_string(), "rule `S` references undefined rule `missing`");
}

#[test]
fn rejects_empty_literal() {
    let grammar = Grammar::new("g").rule("S", Rule::choice([Rule::string(""), Rule::Blank]));
    let err = Program::compile(&grammar).unwrap_err();
    assert_eq!(err, LowerError::EmptyString { rule: "S".into() });
}

#[test]
fn rejects_bad_patterns() {
    let grammar = Grammar::new("g").rule("S", Rule::pattern("(unclosed"));
    let err = Program::compile(&grammar).unwrap_err();
    assert!(matches!(err, LowerError::Pattern { ref rule, ref pattern, .. } if rule == "S" && pattern == "(unclosed"));

    let grammar = Grammar::new("g").rule(
        "S",
        Rule::Pattern {
            value: "a".into(),
            flags: Some("g".into()),
        },
    );
    let err = Program::compile(&grammar).unwrap_err();
    assert_eq!(err.to_string(), "rule `S` uses unsupported pattern flags `g`");
}
