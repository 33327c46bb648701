use indoc::indoc;

use super::*;

#[test]
fn parse_minimal_grammar() {
    let json = indoc! {r#"
        {
          "name": "test",
          "rules": {
            "source_file": { "type": "SYMBOL", "name": "expression" },
            "expression": { "type": "STRING", "value": "x" }
          }
        }
    "#};

    let grammar = Grammar::from_json(json).unwrap();
    assert_eq!(grammar.name, "test");
    assert_eq!(grammar.rules.len(), 2);
    assert_eq!(grammar.rules["expression"], Rule::string("x"));
    assert_eq!(grammar.start_rule(), Some("source_file"));
}

#[test]
fn parse_seq_and_choice() {
    let json = indoc! {r#"
        {
          "name": "test",
          "rules": {
            "root": {
              "type": "SEQ",
              "members": [
                { "type": "STRING", "value": "a" },
                { "type": "CHOICE", "members": [
                  { "type": "STRING", "value": "b" },
                  { "type": "BLANK" }
                ]}
              ]
            }
          }
        }
    "#};

    let grammar = Grammar::from_json(json).unwrap();
    assert_eq!(
        grammar.rules["root"],
        Rule::seq([Rule::string("a"), Rule::optional(Rule::string("b"))])
    );
}

#[test]
fn parse_repeats_and_pattern() {
    let json = indoc! {r#"
        {
          "name": "digits",
          "rules": {
            "number": {
              "type": "REPEAT1",
              "content": { "type": "PATTERN", "value": "[0-9]" }
            },
            "spaces": {
              "type": "REPEAT",
              "content": { "type": "PATTERN", "value": "[a-z]", "flags": "i" }
            }
          }
        }
    "#};

    let grammar = Grammar::from_json(json).unwrap();
    assert_eq!(grammar.rules["number"], Rule::repeat1(Rule::pattern("[0-9]")));
    assert_eq!(
        grammar.rules["spaces"],
        Rule::repeat(Rule::Pattern {
            value: "[a-z]".into(),
            flags: Some("i".into()),
        })
    );
}

#[test]
fn annotations_unwrap_to_content() {
    let json = indoc! {r#"
        {
          "name": "test",
          "rules": {
            "call": {
              "type": "PREC_LEFT",
              "value": 2,
              "content": {
                "type": "FIELD",
                "name": "callee",
                "content": {
                  "type": "ALIAS",
                  "value": "id",
                  "named": true,
                  "content": {
                    "type": "TOKEN",
                    "content": { "type": "SYMBOL", "name": "name" }
                  }
                }
              }
            },
            "name": {
              "type": "PREC",
              "value": "primary",
              "content": { "type": "STRING", "value": "n" }
            }
          }
        }
    "#};

    let grammar = Grammar::from_json(json).unwrap();
    assert_eq!(grammar.rules["call"], Rule::symbol("name"));
    assert_eq!(grammar.rules["name"], Rule::string("n"));
}

#[test]
fn explicit_start_and_extra_tables() {
    let json = indoc! {r#"
        {
          "name": "test",
          "start": "program",
          "rules": {
            "statement": { "type": "STRING", "value": ";" },
            "program": { "type": "REPEAT", "content": { "type": "SYMBOL", "name": "statement" } }
          },
          "extras": [{ "type": "PATTERN", "value": "\\s" }],
          "conflicts": [],
          "word": null
        }
    "#};

    let grammar = Grammar::from_json(json).unwrap();
    assert_eq!(grammar.start_rule(), Some("program"));
}

#[test]
fn preserves_rule_order() {
    let json = indoc! {r#"
        {
          "name": "test",
          "rules": {
            "program": { "type": "SYMBOL", "name": "statement" },
            "statement": { "type": "SYMBOL", "name": "expression" },
            "expression": { "type": "STRING", "value": "x" }
          }
        }
    "#};

    let grammar = Grammar::from_json(json).unwrap();
    let names: Vec<_> = grammar.rules.keys().map(String::as_str).collect();
    assert_eq!(names, ["program", "statement", "expression"]);
}

#[test]
fn unknown_rule_type_is_rejected() {
    let json = r#"{ "name": "t", "rules": { "a": { "type": "LOOKAHEAD" } } }"#;

    let err = Grammar::from_json(json).unwrap_err();
    assert!(matches!(err, GrammarError::Json(_)));
    assert!(err.to_string().starts_with("invalid grammar JSON: "));
}

#[test]
fn missing_rules_is_rejected() {
    let err = Grammar::from_json(r#"{ "name": "t" }"#).unwrap_err();
    assert!(err.to_string().contains("rules"));
}
