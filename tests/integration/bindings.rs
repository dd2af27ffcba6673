//! Integration tests for term operations that read through a trail

use std::cmp::Ordering;

use clausal::term::{Term, TermFactory, TermWriter, compare_in};
use clausal::unify::{Trail, unify};

#[test]
fn printing_follows_bindings() {
    let mut f = TermFactory::default();
    let (x, t) = (f.variable("X"), f.variable("T"));
    let list = f.list_with_tail([x.clone()], t.clone());
    let mut trail = Trail::new();

    assert_eq!(TermWriter::new(&list, &trail).to_string(), "[X|T]");
    assert!(unify(&x, &Term::atom("a"), &mut trail));
    assert!(unify(&t, &Term::proper_list([Term::atom("b")]), &mut trail));
    assert_eq!(TermWriter::new(&list, &trail).to_string(), "[a, b]");
}

#[test]
fn standard_order_sees_bound_values() {
    let mut f = TermFactory::default();
    let x = f.variable("X");
    let mut trail = Trail::new();

    // an unbound variable sorts before every number
    assert_eq!(compare_in(&x, &Term::Integer(0), &trail), Ordering::Less);
    assert!(unify(&x, &Term::Integer(5), &mut trail));
    assert_eq!(compare_in(&x, &Term::Integer(0), &trail), Ordering::Greater);
    assert_eq!(compare_in(&x, &Term::Integer(5), &trail), Ordering::Equal);
}

#[test]
fn groundness_follows_bindings() {
    let mut f = TermFactory::default();
    let x = f.variable("X");
    let t = f.structure("f", [x.clone()]);
    let mut trail = Trail::new();

    assert!(!t.is_ground(&trail));
    assert!(unify(&x, &Term::atom("a"), &mut trail));
    assert!(t.is_ground(&trail));
    assert_eq!(t.resolve(&trail), Term::structure("f", [Term::atom("a")]));
}
