//! Integration tests for programs
//!
//! Tests family ordering, retrieval snapshots, retraction, and lookup by
//! unification.

use clausal_program::{Clause, ClauseFamily, Program, indicator};
use clausal_term::{Term, TermFactory};
use clausal_unify::Trail;

fn fact(functor: &str, args: &[&str]) -> Clause {
    Clause::fact(Term::structure(functor, args.iter().map(|a| Term::atom(*a))))
}

fn family_program() -> Program {
    let mut program = Program::new();
    program
        .add_all([
            fact("parent", &["tom", "bob"]),
            fact("parent", &["bob", "ann"]),
            fact("male", &["tom"]),
            fact("parent", &["bob", "pat"]),
            fact("female", &["ann"]),
        ])
        .unwrap();
    program
}

// =============================================================================
// Storage
// =============================================================================

#[test]
fn assert_front_and_back() {
    let (c1, c2, c3) = (
        fact("p", &["one"]),
        fact("p", &["two"]),
        fact("p", &["three"]),
    );
    let mut program = Program::new();
    program.add(c1.clone()).unwrap();
    program.add(c2.clone()).unwrap();
    program.push(c3.clone()).unwrap();

    let clauses: Vec<_> = program.get("p", 1).iter().cloned().collect();
    assert_eq!(clauses, vec![c3, c1, c2]);
}

#[test]
fn families_keep_first_insertion_order() {
    let program = family_program();
    let indicators: Vec<_> = program.indicators().collect();
    assert_eq!(indicators, vec!["parent/2", "male/1", "female/1"]);
    assert_eq!(program.len(), 5);
    assert_eq!(program.family_count(), 3);

    let all: Vec<_> = program.clauses().cloned().collect();
    assert_eq!(all[2], fact("parent", &["bob", "pat"]));
}

#[test]
fn parent_facts_then_abolish() {
    let (pam, tom) = (fact("parent", &["pam", "bob"]), fact("parent", &["tom", "bob"]));
    let mut program = Program::new();
    program.add(pam.clone()).unwrap();
    program.add(tom.clone()).unwrap();

    let family: Vec<_> = program.get("parent", 2).iter().cloned().collect();
    assert_eq!(family, vec![pam, tom]);

    program.remove_all("parent", 2);
    assert!(program.get("parent", 2).is_empty());
    assert_eq!(program.get("parent", 2).indicator(), "parent/2");
}

#[test]
fn remove_whole_family() {
    let mut program = family_program();
    let removed = program.remove_all("parent", 2).unwrap();
    assert_eq!(removed.len(), 3);
    assert!(!program.contains("parent", 2));
    assert!(program.get("parent", 2).is_empty());
    assert_eq!(program.indicators().collect::<Vec<_>>(), vec!["male/1", "female/1"]);
    assert!(program.remove_all("parent", 2).is_none());
}

#[test]
fn get_returns_a_snapshot() {
    let mut program = family_program();
    let snapshot = program.get("parent", 2);
    program.add(fact("parent", &["ann", "joe"])).unwrap();

    assert_eq!(snapshot.len(), 3);
    assert_eq!(program.get("parent", 2).len(), 4);
    assert_eq!(program.family(&indicator("parent", 2)).map(ClauseFamily::len), Some(4));
}

#[test]
fn retain_families_with_kept_clauses() {
    let mut program = family_program();
    let mut keep = ClauseFamily::new("male/1");
    keep.add(fact("male", &["tom"])).unwrap();

    assert_eq!(program.retain_all(&keep), 2);
    assert_eq!(program.indicators().collect::<Vec<_>>(), vec!["male/1"]);
}

#[test]
fn directives_are_kept_apart() {
    let mut program = Program::new();
    let init = Clause::directive(Term::structure("initialization", [Term::atom("main")]));
    program.add(init.clone()).unwrap();
    program.add(fact("main", &[])).unwrap();

    assert_eq!(program.directives().count(), 1);
    assert!(!program.is_empty());
    assert!(program.retract(&init));
    assert_eq!(program.directives().count(), 0);
}

#[test]
fn non_callable_heads_are_refused() {
    let mut program = Program::new();
    assert!(program.add(Clause::fact(Term::Integer(1))).is_err());
    assert!(program.is_empty());
}

// =============================================================================
// Retraction and lookup
// =============================================================================

#[test]
fn retract_exact_clause() {
    let mut program = family_program();
    assert!(program.retract(&fact("male", &["tom"])));
    assert!(!program.contains("male", 1));
    assert!(!program.retract(&fact("male", &["tom"])));
}

#[test]
fn retract_first_matching_clause() {
    let mut program = family_program();
    let mut f = TermFactory::default();
    let child = f.variable("Child");
    let pattern = Clause::fact(f.structure("parent", [Term::atom("bob"), child.clone()]));

    let mut trail = Trail::new();
    let removed = program.retract_matching(&pattern, &mut trail);
    assert_eq!(removed, Some(fact("parent", &["bob", "ann"])));
    assert!(trail.is_empty());
    assert_eq!(child.resolve(&trail), child);
    assert_eq!(program.get("parent", 2).len(), 2);
}

#[test]
fn matching_heads_in_order() {
    let program = family_program();
    let mut f = TermFactory::default();
    let x = f.variable("X");
    let query = f.structure("parent", [Term::atom("bob"), x]);

    let mut trail = Trail::new();
    let hits = program.matching(&query, &mut trail);
    assert_eq!(
        hits,
        vec![fact("parent", &["bob", "ann"]), fact("parent", &["bob", "pat"])]
    );
    assert!(trail.is_empty());
    assert!(program.matching(&Term::atom("unknown"), &mut trail).is_empty());
}

#[test]
fn clear_empties_the_program() {
    let mut program = family_program();
    program.clear();
    assert!(program.is_empty());
    assert_eq!(program.indicators().count(), 0);
}
