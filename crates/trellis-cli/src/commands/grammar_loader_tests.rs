use std::path::Path;

use indoc::indoc;

use super::grammar_loader::{LoadError, compile_json, load_program};

#[test]
fn compiles_grammar_json() {
    let json = indoc! {r#"
        {
          "name": "parens",
          "rules": {
            "S": {
              "type": "CHOICE",
              "members": [
                {
                  "type": "SEQ",
                  "members": [
                    { "type": "STRING", "value": "(" },
                    { "type": "SYMBOL", "name": "S" },
                    { "type": "STRING", "value": ")" }
                  ]
                },
                { "type": "BLANK" }
              ]
            }
          }
        }
    "#};

    let program = compile_json(json).unwrap();

    assert_eq!(program.nonterminal_name(program.start()), "S");
    assert_eq!(program.alternatives(program.start()).len(), 2);
}

#[test]
fn reports_invalid_json() {
    let err = compile_json("{").unwrap_err();

    assert!(matches!(err, LoadError::Grammar(_)));
    assert!(err.to_string().starts_with("invalid grammar JSON: "));
}

#[test]
fn reports_lowering_errors() {
    let json = indoc! {r#"
        {
          "name": "broken",
          "rules": {
            "S": { "type": "SYMBOL", "name": "T" }
          }
        }
    "#};

    let err = compile_json(json).unwrap_err();

    assert!(matches!(err, LoadError::Lower(_)));
    assert_eq!(
        err.to_string(),
        "rule `S` references undefined rule `T`"
    );
}

#[test]
fn reports_missing_file() {
    let err = load_program(Path::new("does/not/exist.json")).unwrap_err();

    assert!(matches!(err, LoadError::Read { .. }));
    assert!(err.to_string().starts_with("failed to read 'does/not/exist.json': "));
}
