//! Integration tests for unification
//!
//! Tests the binding direction, shape mismatches, and the special compounds.

use clausal_term::{Term, TermFactory};
use clausal_unify::{Trail, Unifier, UnifyConfig, unify};

// =============================================================================
// Bindings
// =============================================================================

#[test]
fn bindings_flow_through_shared_variables() {
    let mut f = TermFactory::default();
    let x = f.variable("X");
    let left = f.structure("pair", [x.clone(), x.clone()]);
    let right = f.structure("pair", [Term::atom("a"), Term::atom("a")]);
    let mismatch = f.structure("pair", [Term::atom("a"), Term::atom("b")]);

    let mut trail = Trail::new();
    assert!(unify(&left, &right, &mut trail));
    assert_eq!(trail.len(), 1);

    trail.clear();
    assert!(!unify(&left, &mismatch, &mut trail));
}

#[test]
fn variables_alias_then_bind_together() {
    let mut f = TermFactory::default();
    let (x, y) = (f.variable("X"), f.variable("Y"));
    let mut trail = Trail::new();

    let mark = trail.mark();
    assert!(unify(&x, &y, &mut trail));
    assert!(unify(&y, &Term::Integer(7), &mut trail));
    assert_eq!(x.resolve(&trail), Term::Integer(7));
    assert_eq!(y.resolve(&trail), Term::Integer(7));

    trail.rewind(mark);
    assert_eq!(x.resolve(&trail), x);
    assert_eq!(y.resolve(&trail), y);
}

#[test]
fn already_bound_variables_compare_their_values() {
    let mut f = TermFactory::default();
    let x = f.variable("X");
    let mut trail = Trail::new();

    assert!(unify(&x, &Term::atom("a"), &mut trail));
    assert!(unify(&x, &Term::atom("a"), &mut trail));
    assert!(!unify(&x, &Term::atom("b"), &mut trail));
    assert_eq!(trail.len(), 1);
}

// =============================================================================
// Shapes
// =============================================================================

#[test]
fn atomic_mismatches_fail() {
    let mut trail = Trail::new();
    let cases = [
        (Term::atom("a"), Term::atom("b")),
        (Term::Integer(1), Term::Integer(2)),
        (Term::Integer(1), Term::Long(1)),
        (Term::Float(1.0), Term::Double(1.0)),
        (Term::atom("[]"), Term::EmptyList),
        (Term::Nil, Term::atom("nil")),
    ];
    for (a, b) in cases {
        assert!(!unify(&a, &b, &mut trail), "{a:?} = {b:?}");
    }
}

#[test]
fn compound_shapes_must_agree() {
    let mut trail = Trail::new();
    let f1 = Term::structure("f", [Term::atom("a")]);
    let g1 = Term::structure("g", [Term::atom("a")]);
    let f2 = Term::structure("f", [Term::atom("a"), Term::atom("b")]);
    assert!(!unify(&f1, &g1, &mut trail));
    assert!(!unify(&f1, &f2, &mut trail));
    assert!(!unify(&f1, &Term::atom("f"), &mut trail));
}

#[test]
fn list_destructures_into_head_and_tail() {
    let mut f = TermFactory::default();
    let (h, t) = (f.variable("H"), f.variable("T"));
    let pattern = f.list_with_tail([h.clone()], t.clone());
    let list = f.list([Term::Integer(1), Term::Integer(2), Term::Integer(3)]);

    let mut trail = Trail::new();
    assert!(unify(&pattern, &list, &mut trail));
    assert_eq!(h.resolve(&trail), Term::Integer(1));
    assert_eq!(
        t.resolve(&trail),
        Term::proper_list([Term::Integer(2), Term::Integer(3)])
    );
}

#[test]
fn list_and_dot_structure_unify() {
    let list = Term::proper_list([Term::atom("a")]);
    let dot = Term::structure(".", [Term::atom("a"), Term::EmptyList]);
    let mut trail = Trail::new();
    assert!(unify(&list, &dot, &mut trail));
    assert!(unify(&dot, &list, &mut trail));
}

#[test]
fn map_entries_unify_pairwise() {
    let mut f = TermFactory::default();
    let v = f.variable("V");
    let pattern = f.map([(Term::atom("name"), v.clone())]);
    let map = f.map([(Term::atom("name"), Term::atom("bob"))]);

    let mut trail = Trail::new();
    assert!(unify(&pattern, &map, &mut trail));
    assert_eq!(v.resolve(&trail), Term::atom("bob"));
}

#[test]
fn nil_slots_unify_with_anything() {
    let left = Term::structure("f", [Term::Nil, Term::atom("a")]);
    let right = Term::structure("f", [Term::Integer(5), Term::atom("a")]);
    let mut trail = Trail::new();
    assert!(unify(&left, &right, &mut trail));
    assert!(trail.is_empty());
}

#[test]
fn deep_conjunctions_unify_compare_and_drop() {
    let mut f = TermFactory::default();
    let x = f.variable("X");
    let last = f.structure("last", [x.clone()]);
    let done = f.structure("last", [Term::atom("done")]);
    let goals: Vec<Term> = (0..1_000)
        .map(|i| Term::structure("step", [Term::Integer(i)]))
        .chain([last])
        .collect();
    let open = f.conjunction(goals.clone());
    let mut ground_goals = goals;
    ground_goals.pop();
    ground_goals.push(done);
    let ground = f.conjunction(ground_goals);

    let mut trail = Trail::new();
    assert!(unify(&open, &ground, &mut trail));
    assert_eq!(x.resolve(&trail), Term::atom("done"));
    assert_eq!(open.resolve(&trail), ground);
    assert_eq!(clausal_term::compare(&ground, &ground.clone()), std::cmp::Ordering::Equal);
    assert!(ground.to_string().contains("last(done)"));

    trail.clear();
    drop(open);
    drop(ground);
}

// =============================================================================
// Occurs check
// =============================================================================

#[test]
fn occurs_check_is_opt_in() {
    let mut f = TermFactory::default();
    let x = f.variable("X");
    let fx = f.structure("f", [x.clone()]);

    let mut trail = Trail::new();
    assert!(Unifier::default().unify(&x, &fx, &mut trail));
    trail.clear();

    let checked = Unifier::new(UnifyConfig::new().with_occurs_check(true));
    assert!(!checked.unify(&x, &fx, &mut trail));
    assert!(trail.is_empty());
    assert!(Unifier::new(UnifyConfig::iso()).config().occurs_check);
}
