//! Integration tests for the binding trail
//!
//! Tests marks, nested rewinds, and commit.

use clausal_term::{BindingStore, FactoryConfig, Term, TermFactory};
use clausal_unify::{Trail, unify};

#[test]
fn nested_marks_rewind_independently() {
    let mut f = TermFactory::default();
    let (x, y, z) = (f.variable("X"), f.variable("Y"), f.variable("Z"));
    let mut trail = Trail::new();

    let outer = trail.mark();
    assert!(unify(&x, &Term::atom("a"), &mut trail));
    let inner = trail.mark();
    assert!(unify(&y, &Term::atom("b"), &mut trail));
    assert!(unify(&z, &Term::atom("c"), &mut trail));
    assert_eq!(trail.len(), 3);

    assert_eq!(trail.rewind(inner), 2);
    assert_eq!(x.resolve(&trail), Term::atom("a"));
    assert_eq!(y.resolve(&trail), y);

    assert_eq!(trail.rewind(outer), 1);
    assert!(trail.is_empty());
    assert_eq!(x.resolve(&trail), x);
}

#[test]
fn rewinding_to_a_later_mark_is_a_no_op() {
    let mut f = TermFactory::default();
    let x = f.variable("X");
    let mut trail = Trail::new();

    let mark = trail.mark();
    assert_eq!(trail.rewind(mark), 0);
    assert!(unify(&x, &Term::Integer(1), &mut trail));
    let later = trail.mark();
    assert_eq!(trail.rewind(later), 0);
    assert_eq!(trail.len(), 1);
}

#[test]
fn entries_since_lists_new_bindings() {
    let mut f = TermFactory::default();
    let (x, y) = (f.variable("X"), f.variable("Y"));
    let point = f.structure("point", [x, y]);
    let mut trail = Trail::new();

    let mark = trail.mark();
    let target = Term::structure("point", [Term::Integer(3), Term::Integer(4)]);
    assert!(unify(&point, &target, &mut trail));

    let names: Vec<_> = trail
        .entries_since(mark)
        .iter()
        .map(|e| e.var().name().unwrap_or_default().to_owned())
        .collect();
    assert_eq!(names, vec!["X", "Y"]);
    assert_eq!(trail.entries_since(mark)[1].term(), &Term::Integer(4));
}

#[test]
fn commit_keeps_bindings_but_forgets_history() {
    let mut f = TermFactory::default();
    let x = f.variable("X");
    let mut trail = Trail::new();

    assert!(unify(&x, &Term::atom("kept"), &mut trail));
    trail.commit();
    assert!(trail.is_empty());

    let Term::Variable(var) = &x else {
        panic!("expected a variable");
    };
    assert_eq!(trail.lookup(var.id()), Some(&Term::atom("kept")));
}

#[test]
fn clear_unbinds_everything() {
    let mut f = TermFactory::default();
    let (x, y) = (f.variable("X"), f.variable("Y"));
    let mut trail = Trail::new();

    assert!(unify(&x, &y, &mut trail));
    assert!(unify(&y, &Term::Integer(9), &mut trail));
    trail.clear();
    assert_eq!(x.resolve(&trail), x);
    assert_eq!(y.resolve(&trail), y);
}

#[test]
fn variables_with_high_slot_offsets_bind_and_rewind() {
    let mut f = TermFactory::new(FactoryConfig::new().with_first_variable(u32::MAX - 2));
    let (x, y) = (f.variable("X"), f.variable("Y"));
    let mut trail = Trail::new();

    let mark = trail.mark();
    assert!(unify(&x, &y, &mut trail));
    assert!(unify(&y, &Term::Integer(7), &mut trail));
    assert_eq!(x.resolve(&trail), Term::Integer(7));

    assert_eq!(trail.rewind(mark), 2);
    assert_eq!(x.resolve(&trail), x);
    assert_eq!(y.resolve(&trail), y);
}
