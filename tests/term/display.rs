//! Integration tests for term printing

use clausal_term::{Term, TermFactory, TermWriter, Unbound, atom_needs_quotes};

#[test]
fn prints_nested_terms() {
    let mut f = TermFactory::default();
    let x = f.variable("X");
    let mary = f.atom("mary");
    let list = f.list_with_tail([Term::Integer(1), Term::Integer(2)], x);
    let t = f.structure("likes", [mary, list]);
    assert_eq!(t.to_string(), "likes(mary, [1, 2|X])");
}

#[test]
fn prints_special_compounds() {
    let f = TermFactory::default();
    let map = f.map([(Term::atom("k"), Term::atom("v"))]);
    assert_eq!(map.to_string(), "{k-v}");
    assert_eq!(Term::object_ref("door").to_string(), "@(door)");
    assert_eq!(Term::EmptyList.to_string(), "[]");
    assert_eq!(Term::Nil.to_string(), "nil");
}

#[test]
fn quotes_when_needed() {
    assert!(atom_needs_quotes("Hello"));
    assert!(atom_needs_quotes("two words"));
    assert!(!atom_needs_quotes("hello"));
    assert!(!atom_needs_quotes("[]"));
    assert_eq!(Term::atom("Hello").to_string(), "'Hello'");
}

#[test]
fn writer_without_bindings_matches_display() {
    let t = Term::structure("f", [Term::Integer(-3), Term::Double(0.5)]);
    assert_eq!(TermWriter::new(&t, &Unbound).to_string(), t.to_string());
}

#[test]
fn large_and_non_finite_floats_keep_a_decimal_point() {
    let t = Term::structure(
        "reading",
        [Term::Double(1e20), Term::Float(3e38), Term::Double(f64::NEG_INFINITY)],
    );
    assert_eq!(t.to_string(), "reading(1.0e20, 3.0e38, -1.0Inf)");
}
