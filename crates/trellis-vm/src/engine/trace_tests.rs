use trellis_compiler::Program;
use trellis_core::Colors;
use trellis_core::grammar::{Grammar, Rule};

use super::exec::Engine;
use super::trace::{PrintTracer, Verbosity};

fn single() -> Program {
    Program::compile(&Grammar::new("g").rule("S", Rule::string("a"))).unwrap()
}

fn trace(program: &Program, input: &str, verbosity: Verbosity) -> String {
    let mut tracer = PrintTracer::new(program, verbosity, Colors::OFF);
    Engine::new(program).parse_with(input, &mut tracer).unwrap();
    tracer.output()
}

#[test]
fn default_shows_generations_and_results() {
    let program = single();

    insta::assert_snapshot!(trace(&program, "a", Verbosity::Default), @r"
    0:'a'

    1:$
      shift g2 0:'a'
      pop g1 S [0,1)
      accept [0,1)
    ");
}

#[test]
fn verbose_shows_descriptors() {
    let program = single();

    insta::assert_snapshot!(trace(&program, "a", Verbosity::Verbose), @r"
    0:'a'
        push g1 L0@0 <- g0
      L1  S ::= · 'a'  g1 i0
        match 'a'
        push g2 L2@0 <- g1

    1:$
      shift g2 0:'a'
      pop g2 [0,1)
      L2  S ::= 'a' ·  g1 i1
      pop g1 S [0,1)
      L0  accept  g0 i2
      accept [0,1)
    ");
}

#[test]
fn ambiguity_pops_once() {
    let program = Program::compile(
        &Grammar::new("ambiguous")
            .rule(
                "S",
                Rule::choice([
                    Rule::seq([Rule::symbol("A"), Rule::string("a")]),
                    Rule::seq([Rule::string("a"), Rule::symbol("B")]),
                ]),
            )
            .rule("A", Rule::string("a"))
            .rule("B", Rule::string("a")),
    )
    .unwrap();

    insta::assert_snapshot!(trace(&program, "aa", Verbosity::Default), @r"
    0:'a'

    1:'a'
      shift g3 0:'a'
      shift g4 0:'a'
      pop g2 A [0,1)

    2:$
      shift g6 1:'a'
      shift g7 1:'a'
      pop g5 B [1,2)
      pop g1 S [0,2)
      accept [0,2)
    ");

    let very = trace(&program, "aa", Verbosity::VeryVerbose);
    assert!(very.contains("  pop g1 S [0,2) (again)"));
}

#[test]
fn very_verbose_shows_dedup() {
    let program = Program::compile(&Grammar::new("left").rule(
        "S",
        Rule::choice([
            Rule::seq([Rule::symbol("S"), Rule::string("a")]),
            Rule::string("a"),
        ]),
    ))
    .unwrap();

    let verbose = trace(&program, "aa", Verbosity::Verbose);
    let very = trace(&program, "aa", Verbosity::VeryVerbose);

    assert!(!verbose.contains("skip"));
    assert!(very.contains("    skip L1 g2"));
    assert!(very.contains("    skip L4 g2"));
    assert!(very.contains("    push g2 L2@0 <- g2"));
}

#[test]
fn colored_output() {
    let program = single();
    let mut tracer = PrintTracer::new(&program, Verbosity::Default, Colors::ON);
    Engine::new(&program).parse_with("a", &mut tracer).unwrap();

    assert_eq!(tracer.lines()[0], "\x1b[34m0:'a'\x1b[0m");
    assert_eq!(tracer.lines().len(), 6);
}
