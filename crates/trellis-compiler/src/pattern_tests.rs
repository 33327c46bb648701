use crate::pattern::{Pattern, PatternError};

#[test]
fn class_matches_single_code_point() {
    let digit = Pattern::new("[0-9]", None).unwrap();

    assert!(digit.matches('0'));
    assert!(digit.matches('7'));
    assert!(!digit.matches('a'));
    assert!(!digit.matches(' '));
}

#[test]
fn match_must_cover_the_code_point() {
    let pair = Pattern::new("ab", None).unwrap();
    assert!(!pair.matches('a'));

    let empty = Pattern::new("", None).unwrap();
    assert!(!empty.matches('a'));

    let digits = Pattern::new(r"\d+", None).unwrap();
    assert!(digits.matches('4'));
}

#[test]
fn multibyte_code_points() {
    let any = Pattern::new(".", None).unwrap();
    assert!(any.matches('é'));
    assert!(any.matches('λ'));
    assert!(!any.matches('\n'));

    let greek = Pattern::new("[α-ω]", None).unwrap();
    assert!(greek.matches('λ'));
    assert!(!greek.matches('l'));
}

#[test]
fn case_insensitive_flag() {
    let lower = Pattern::new("[a-z]", Some("i")).unwrap();

    assert!(lower.is_case_insensitive());
    assert!(lower.matches('q'));
    assert!(lower.matches('Q'));
    assert!(!lower.matches('1'));
}

#[test]
fn unknown_flag_rejected() {
    let err = Pattern::new("[a-z]", Some("iu")).unwrap_err();
    assert_eq!(err, PatternError::Flags);
}

#[test]
fn syntax_error_rejected() {
    let err = Pattern::new("[a-", None).unwrap_err();
    assert!(matches!(err, PatternError::Syntax(_)));
}

#[test]
fn display_shows_source_and_flags() {
    assert_eq!(Pattern::new("[a-z]", Some("i")).unwrap().to_string(), "/[a-z]/i");
    assert_eq!(Pattern::new(r"\s", None).unwrap().to_string(), r"/\s/");
    assert_eq!(Pattern::new(r"\s", None).unwrap().source(), r"\s");
}
