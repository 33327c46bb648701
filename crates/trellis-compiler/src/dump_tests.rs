use trellis_core::grammar::{Grammar, Rule};
use trellis_core::{Colors, Label};

use crate::Program;

#[test]
fn dump_parens() {
    let grammar = Grammar::new("parens").rule(
        "S",
        Rule::choice([
            Rule::seq([Rule::string("("), Rule::symbol("S"), Rule::string(")")]),
            Rule::Blank,
        ]),
    );
    let program = Program::compile(&grammar).unwrap();

    insta::assert_snapshot!(program.dump(Colors::OFF), @r"
    start S
      L0  accept

    S
      L1  S ::= · '(' S ')'
      L2  S ::= '(' · S ')'
      L3  S ::= '(' S · ')'
      L4  S ::= '(' S ')' ·
      L5  S ::= ·
    ");
}

#[test]
fn dump_auxiliary_and_pattern() {
    let grammar = Grammar::new("list")
        .rule(
            "list",
            Rule::seq([
                Rule::symbol("item"),
                Rule::repeat(Rule::seq([Rule::string(","), Rule::symbol("item")])),
            ]),
        )
        .rule("item", Rule::pattern("[0-9]"));
    let program = Program::compile(&grammar).unwrap();

    insta::assert_snapshot!(program.dump(Colors::OFF), @r"
    start list
      L0   accept

    list
      L1   list ::= · item list~1
      L2   list ::= item · list~1
      L3   list ::= item list~1 ·

    item
      L4   item ::= · /[0-9]/
      L5   item ::= /[0-9]/ ·

    list~1
      L6   list~1 ::= · ',' item list~1
      L7   list~1 ::= ',' · item list~1
      L8   list~1 ::= ',' item · list~1
      L9   list~1 ::= ',' item list~1 ·
      L10  list~1 ::= ·
    ");
}

#[test]
fn item_colors() {
    let grammar = Grammar::new("g").rule("S", Rule::seq([Rule::symbol("S"), Rule::string("a")]));
    let program = Program::compile(&grammar).unwrap();

    assert_eq!(program.item(Label::new(2), Colors::OFF), "S ::= S · 'a'");
    assert_eq!(
        program.item(Label::new(2), Colors::ON),
        "\x1b[34mS\x1b[0m ::= \x1b[34mS\x1b[0m \x1b[2m·\x1b[0m \x1b[32m'a'\x1b[0m"
    );
    assert_eq!(program.item(Program::ACCEPT, Colors::ON), "accept");
}

#[test]
fn rhs_of_alternative() {
    let grammar = Grammar::new("g").rule(
        "S",
        Rule::choice([Rule::seq([Rule::string("a"), Rule::symbol("S")]), Rule::Blank]),
    );
    let program = Program::compile(&grammar).unwrap();

    assert_eq!(program.rhs(Label::new(1), Colors::OFF), "'a' S");
    assert_eq!(program.rhs(Label::new(3), Colors::OFF), "'a' S");
    assert_eq!(program.rhs(Label::new(4), Colors::OFF), "ε");
}
