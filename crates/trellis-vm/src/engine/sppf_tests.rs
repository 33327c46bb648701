use trellis_core::{Label, NonterminalId, Position};

use super::error::AmbiguityError;
use super::sppf::{Binary, Forest, NodeId, Span, Unary};

const A: Position = Position::Symbol { ch: 'a', index: 0 };
const B: Position = Position::Symbol { ch: 'b', index: 1 };
const END: Position = Position::AfterInput { index: 2 };

#[test]
fn spans_follow_boundaries() {
    let mut forest = Forest::new();
    let terminal = forest.add_terminal(B);
    let empty = forest.add_empty(A);
    let nonterminal = forest.add_nonterminal(NonterminalId::new(0), A, END);
    let cons = forest.add_cons(Label::new(2), A, B);

    assert_eq!(forest.span(NodeId::Symbol(terminal)), Span::new(1, 2));
    assert_eq!(forest.span(NodeId::Intermediate(empty)), Span::new(0, 0));
    assert_eq!(forest.span(NodeId::Symbol(nonterminal)), Span::new(0, 2));
    assert_eq!(forest.span(NodeId::Intermediate(cons)), Span::new(0, 1));
    assert_eq!(forest.symbol_first(terminal), B);
    assert_eq!(forest.intermediate_first(cons), A);
    assert!(forest.span(NodeId::Intermediate(empty)).is_empty());
    assert_eq!(Span::new(1, 3).to_string(), "[1,3)");
}

#[test]
fn packing_ignores_duplicates() {
    let mut forest = Forest::new();
    let a = forest.add_terminal(A);
    let empty = forest.add_empty(A);
    let cons = forest.add_cons(Label::new(2), A, B);
    let nonterminal = forest.add_nonterminal(NonterminalId::new(0), A, B);
    let binary = Binary {
        label: Label::new(2),
        split: A,
        lhs: empty,
        rhs: a,
    };

    assert!(forest.add_binary(cons, binary));
    assert!(!forest.add_binary(cons, binary));
    assert!(forest.add_unary(nonterminal, Unary { child: cons }));
    assert!(!forest.add_unary(nonterminal, Unary { child: cons }));

    assert_eq!(forest.child_count(cons), 1);
    assert_eq!(forest.alternative_count(nonterminal), 1);
    assert!(!forest.is_ambiguous(NodeId::Symbol(nonterminal)));
    assert_eq!(forest.alternative_count(a), 0);
}

#[test]
fn subderivations_read_prefix_left_to_right() {
    let mut forest = Forest::new();
    let a = forest.add_terminal(A);
    let b = forest.add_terminal(B);
    let empty = forest.add_empty(A);
    let first = forest.add_cons(Label::new(2), A, B);
    forest.add_binary(
        first,
        Binary {
            label: Label::new(2),
            split: A,
            lhs: empty,
            rhs: a,
        },
    );
    let second = forest.add_cons(Label::new(3), A, END);
    forest.add_binary(
        second,
        Binary {
            label: Label::new(3),
            split: B,
            lhs: first,
            rhs: b,
        },
    );

    assert_eq!(forest.subderivations(second), Ok(vec![a, b]));
    assert_eq!(forest.subderivations(empty), Ok(vec![]));
}

#[test]
fn subderivations_reject_packed_prefix() {
    let mut forest = Forest::new();
    let x = forest.add_nonterminal(NonterminalId::new(1), A, B);
    let y = forest.add_nonterminal(NonterminalId::new(1), B, END);
    let empty = forest.add_empty(A);
    let cons = forest.add_cons(Label::new(4), A, END);
    forest.add_binary(
        cons,
        Binary {
            label: Label::new(4),
            split: A,
            lhs: empty,
            rhs: x,
        },
    );
    forest.add_binary(
        cons,
        Binary {
            label: Label::new(4),
            split: B,
            lhs: empty,
            rhs: y,
        },
    );

    assert!(forest.is_ambiguous(NodeId::Intermediate(cons)));
    let err = forest.subderivations(cons).unwrap_err();
    assert_eq!(err, AmbiguityError { node: cons, count: 2 });
    assert_eq!(
        err.to_string(),
        "i1 has 2 packed derivations, expected exactly one"
    );
}
