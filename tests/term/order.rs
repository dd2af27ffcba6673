//! Integration tests for standard order
//!
//! Tests ranking across kinds, sorting, and the argument-less compound case.

use std::cmp::Ordering;

use clausal_term::{KindRank, Term, TermFactory, TermKind, TermMap, compare};

// =============================================================================
// Ranks
// =============================================================================

#[test]
fn every_kind_has_a_rank() {
    let ranks: Vec<_> = TermKind::ALL.iter().map(|k| k.rank()).collect();
    assert_eq!(ranks.iter().filter(|r| **r == KindRank::Number).count(), 4);
    assert_eq!(ranks.iter().filter(|r| **r == KindRank::Compound).count(), 6);
    assert!(KindRank::Variable < KindRank::Number);
    assert!(KindRank::Atom < KindRank::Compound);
}

#[test]
fn sort_mixed_terms() {
    let mut f = TermFactory::default();
    let x = f.variable("X");
    let mut terms = vec![
        f.structure("foo", [Term::atom("a"), Term::atom("b")]),
        f.list([Term::Integer(1)]),
        f.atom("zeta"),
        Term::Nil,
        Term::Long(3),
        Term::Float(2.5),
        Term::Integer(3),
        x.clone(),
        f.atom("alpha"),
    ];
    terms.sort();

    assert_eq!(
        terms,
        vec![
            x,
            Term::Float(2.5),
            Term::Integer(3),
            Term::Long(3),
            Term::Nil,
            Term::atom("alpha"),
            Term::atom("zeta"),
            Term::proper_list([Term::Integer(1)]),
            Term::structure("foo", [Term::atom("a"), Term::atom("b")]),
        ]
    );
}

#[test]
fn compounds_compare_argument_by_argument() {
    let left = Term::structure("edge", [Term::atom("a"), Term::atom("b")]);
    let right = Term::structure("edge", [Term::atom("a"), Term::atom("c")]);
    assert_eq!(compare(&left, &right), Ordering::Less);
    assert_eq!(compare(&right, &left), Ordering::Greater);

    // arity wins over functor name
    let short = Term::structure("zzz", [Term::atom("a")]);
    assert_eq!(compare(&short, &left), Ordering::Less);
}

#[test]
fn lists_compare_element_wise() {
    let a = Term::proper_list([Term::Integer(1), Term::Integer(2)]);
    let b = Term::proper_list([Term::Integer(1), Term::Integer(3)]);
    let prefix = Term::proper_list([Term::Integer(1)]);
    assert_eq!(compare(&a, &b), Ordering::Less);
    assert_eq!(compare(&prefix, &a), Ordering::Less);
}

#[test]
fn large_integers_sort_exactly_among_doubles() {
    let big = 1_i64 << 53;
    let mut terms = vec![
        Term::Double(9_007_199_254_740_996.0),
        Term::Integer(big + 3),
        Term::Double(9_007_199_254_740_992.0),
        Term::Long(i64::MAX),
        Term::Double(9_223_372_036_854_775_808.0),
    ];
    terms.sort();
    assert_eq!(
        terms,
        vec![
            Term::Double(9_007_199_254_740_992.0),
            Term::Integer(big + 3),
            Term::Double(9_007_199_254_740_996.0),
            Term::Long(i64::MAX),
            Term::Double(9_223_372_036_854_775_808.0),
        ]
    );
}

// =============================================================================
// Argument-less compounds
// =============================================================================

#[test]
fn argumentless_compound_comparison_is_not_antisymmetric() {
    let empty_map = Term::Map(TermMap::new());
    let empty_list = Term::EmptyList;

    assert_eq!(compare(&empty_map, &empty_list), Ordering::Greater);
    assert_eq!(compare(&empty_list, &empty_map), Ordering::Greater);
    assert_eq!(compare(&empty_list, &Term::EmptyList), Ordering::Equal);
}

#[test]
fn empty_list_sorts_before_lists() {
    let list = Term::proper_list([Term::atom("a")]);
    assert_eq!(compare(&Term::EmptyList, &list), Ordering::Less);
    assert_eq!(compare(&list, &Term::EmptyList), Ordering::Greater);
}
