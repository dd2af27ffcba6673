//! Standard order of terms.
//!
//! `Var < Number < Atom < Compound`. Numbers compare by value, then by
//! kind (`Float < Double < Integer < Long`). Atoms and compounds share one
//! shape comparison: arity, then functor, then arguments left to right.
//! Nil sorts before every atom.
//!
//! Within the compound rank the right-hand side is checked first: when it
//! has no arguments, the left side is greater unless both are `[]` (or the
//! two terms are equal). Two distinct argument-less compounds therefore
//! both compare greater than each other.

use std::cmp::Ordering;

use crate::bindings::{BindingStore, Unbound};
use crate::kind::KindRank;
use crate::term::Term;

/// Compares two terms in standard order, without bindings.
#[must_use]
pub fn compare(a: &Term, b: &Term) -> Ordering {
    compare_in(a, b, &Unbound)
}

/// Compares two terms in standard order, dereferencing through `store`.
#[must_use]
pub fn compare_in<S: BindingStore + ?Sized>(a: &Term, b: &Term, store: &S) -> Ordering {
    let mut left = a.clone();
    let mut right = b.clone();
    loop {
        match step(left.dereference(store), right.dereference(store), store) {
            Step::Done(ordering) => return ordering,
            Step::Next(l, r) => {
                left = l;
                right = r;
            }
        }
    }
}

enum Step {
    Done(Ordering),
    Next(Term, Term),
}

fn step<S: BindingStore + ?Sized>(a: &Term, b: &Term, store: &S) -> Step {
    let (rank_a, rank_b) = (a.kind().rank(), b.kind().rank());
    if rank_a != rank_b {
        return Step::Done(rank_a.cmp(&rank_b));
    }

    match rank_a {
        KindRank::Variable => Step::Done(match (a, b) {
            (Term::Variable(x), Term::Variable(y)) => x.id().cmp(&y.id()),
            _ => Ordering::Equal,
        }),
        KindRank::Number => Step::Done(compare_numbers(a, b)),
        KindRank::Atom => Step::Done(match (a, b) {
            (Term::Nil, Term::Nil) => Ordering::Equal,
            (Term::Nil, _) => Ordering::Less,
            (_, Term::Nil) => Ordering::Greater,
            _ => compare_header(a, b),
        }),
        KindRank::Compound => compare_compound(a, b, store),
    }
}

fn as_f64(term: &Term) -> Option<f64> {
    match term {
        Term::Float(n) => Some(f64::from(*n)),
        Term::Double(n) => Some(*n),
        _ => None,
    }
}

/// 2^63, the first float above every `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Exact comparison of an integer with a float.
///
/// NaN sorts where `total_cmp` puts it: above `+inf` when its sign bit is
/// clear, below `-inf` otherwise.
#[allow(clippy::cast_possible_truncation)]
fn compare_integer_float(i: i64, f: f64) -> Ordering {
    if f.is_nan() {
        return if f.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if f >= I64_BOUND {
        return Ordering::Less;
    }
    if f < -I64_BOUND {
        return Ordering::Greater;
    }
    let floor = f.floor();
    // In range, so the cast is exact.
    let whole = floor as i64;
    i.cmp(&whole).then_with(|| {
        if f > floor {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    })
}

fn compare_numbers(a: &Term, b: &Term) -> Ordering {
    let by_value = match (a, b) {
        (Term::Integer(x) | Term::Long(x), Term::Integer(y) | Term::Long(y)) => x.cmp(y),
        (Term::Float(x), Term::Float(y)) => x.total_cmp(y),
        (Term::Integer(x) | Term::Long(x), _) => match as_f64(b) {
            Some(y) => compare_integer_float(*x, y),
            None => Ordering::Equal,
        },
        (_, Term::Integer(y) | Term::Long(y)) => match as_f64(a) {
            Some(x) => compare_integer_float(*y, x).reverse(),
            None => Ordering::Equal,
        },
        _ => match (as_f64(a), as_f64(b)) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => Ordering::Equal,
        },
    };
    by_value.then_with(|| a.kind().cmp(&b.kind()))
}

/// Arity, then functor.
fn compare_header(a: &Term, b: &Term) -> Ordering {
    let arity_a = a.arity().unwrap_or(0);
    let arity_b = b.arity().unwrap_or(0);
    arity_a
        .cmp(&arity_b)
        .then_with(|| a.functor().unwrap_or_default().cmp(b.functor().unwrap_or_default()))
}

fn compare_compound<S: BindingStore + ?Sized>(a: &Term, b: &Term, store: &S) -> Step {
    if !b.is_compound() {
        let equal = (a.is_empty_list() && b.is_empty_list()) || a == b;
        return Step::Done(if equal {
            Ordering::Equal
        } else {
            Ordering::Greater
        });
    }

    let header = compare_header(a, b);
    if header != Ordering::Equal {
        return Step::Done(header);
    }

    let (Ok(args_a), Ok(args_b)) = (a.arguments(), b.arguments()) else {
        return Step::Done(a.kind().cmp(&b.kind()));
    };
    let Some((last_a, init_a)) = args_a.split_last() else {
        return Step::Done(a.kind().cmp(&b.kind()));
    };
    let Some((last_b, init_b)) = args_b.split_last() else {
        return Step::Done(a.kind().cmp(&b.kind()));
    };

    for (x, y) in init_a.iter().zip(init_b) {
        let ordering = compare_in(x, y, store);
        if ordering != Ordering::Equal {
            return Step::Done(ordering);
        }
    }

    if a.kind() == b.kind() {
        // Iterate on the last argument so long lists do not recurse.
        Step::Next(last_a.clone(), last_b.clone())
    } else {
        Step::Done(compare_in(last_a, last_b, store).then_with(|| a.kind().cmp(&b.kind())))
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Standard order without bindings; see [`compare`].
///
/// This is not a total order. Two distinct argument-less compounds (an
/// empty map and `[]`, say) each compare greater than the
/// other, so sorting or keying a `BTreeSet` with such terms gives an
/// unspecified arrangement. Every other pair of terms is ordered
/// consistently.
impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}
