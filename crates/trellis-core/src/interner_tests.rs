use crate::Interner;

#[test]
fn intern_deduplicates() {
    let mut interner = Interner::new();

    let expr = interner.intern("expr");
    let again = interner.intern("expr");
    let term = interner.intern("term");

    assert_eq!(expr, again);
    assert_ne!(expr, term);
    assert_eq!(interner.len(), 2);
}

#[test]
fn symbols_follow_first_seen_order() {
    let mut interner = Interner::new();

    let z = interner.intern("z");
    let a = interner.intern("a");

    assert!(z < a);
    assert_eq!(z.as_u32(), 0);
    assert_eq!(a.as_u32(), 1);
}

#[test]
fn get_does_not_insert() {
    let mut interner = Interner::new();
    let s = interner.intern("S");

    assert_eq!(interner.get("S"), Some(s));
    assert_eq!(interner.get("T"), None);
    assert_eq!(interner.len(), 1);
}

#[test]
fn resolve_returns_name() {
    let mut interner = Interner::new();
    let sym = interner.intern("statement");

    assert_eq!(interner.resolve(sym), "statement");
}

#[test]
fn starts_empty() {
    let mut interner = Interner::new();
    assert!(interner.is_empty());

    interner.intern("S");
    assert!(!interner.is_empty());
}
