//! Unification over a binding trail.
//!
//! Each pair is handled in order:
//!
//! 1. Identical terms succeed with no trail entry.
//! 2. If the left side dereferences to a free variable, it is bound to the
//!    dereferenced right side.
//! 3. Otherwise, if the right side dereferences to a free variable, it is
//!    bound to the left side.
//! 4. Two non-variables with equal functor and arity unify their arguments
//!    pairwise in index order. A `nil` argument slot on either side is
//!    skipped. Atomic terms unify only when structurally equal.
//! 5. Anything else fails.
//!
//! The unifier never rewinds. Bindings made before a failure stay on the
//! trail until the caller rewinds to a mark it took beforehand.

use clausal_term::{Term, Variable};

use crate::observer::{NoopObserver, UnifyObserver};
use crate::substitution::Substitution;
use crate::trail::Trail;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for a [`Unifier`].
#[derive(Clone, Debug, Default)]
pub struct UnifyConfig {
    /// Refuse to bind a variable to a term containing it.
    pub occurs_check: bool,
}

impl UnifyConfig {
    /// Creates the default configuration (no occurs check).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset with the occurs check enabled.
    #[must_use]
    pub fn iso() -> Self {
        Self::new().with_occurs_check(true)
    }

    /// Builder method to enable/disable the occurs check.
    #[must_use]
    pub fn with_occurs_check(mut self, enabled: bool) -> Self {
        self.occurs_check = enabled;
        self
    }
}

// =============================================================================
// Unifier
// =============================================================================

/// Unifies terms, recording bindings on a [`Trail`].
#[derive(Clone, Debug, Default)]
pub struct Unifier {
    config: UnifyConfig,
}

impl Unifier {
    /// Creates a unifier with the given configuration.
    #[must_use]
    pub fn new(config: UnifyConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &UnifyConfig {
        &self.config
    }

    /// Unifies `a` and `b`, pushing any bindings onto `trail`.
    pub fn unify(&self, a: &Term, b: &Term, trail: &mut Trail) -> bool {
        self.unify_observed(a, b, trail, &mut NoopObserver)
    }

    /// Unifies `a` and `b`, reporting every step to `observer`.
    pub fn unify_observed<O: UnifyObserver + ?Sized>(
        &self,
        a: &Term,
        b: &Term,
        trail: &mut Trail,
        observer: &mut O,
    ) -> bool {
        observer.on_start(a, b);
        let success = self.run(a, b, trail, observer);
        observer.on_end(success);
        success
    }

    fn run<O: UnifyObserver + ?Sized>(
        &self,
        a: &Term,
        b: &Term,
        trail: &mut Trail,
        observer: &mut O,
    ) -> bool {
        let mut pending = vec![(a.clone(), b.clone())];

        while let Some((a, b)) = pending.pop() {
            if a.is_identical(&b) {
                continue;
            }

            let a = a.dereference(&*trail).clone();
            let b = b.dereference(&*trail).clone();

            match (&a, &b) {
                (Term::Variable(x), Term::Variable(y)) if x.id() == y.id() => {}
                (Term::Variable(var), other) | (other, Term::Variable(var)) => {
                    if !self.bind(var, other, trail, observer) {
                        observer.on_fail(&a, &b);
                        return false;
                    }
                }
                _ => {
                    if !Self::push_arguments(&a, &b, &mut pending) {
                        observer.on_fail(&a, &b);
                        return false;
                    }
                }
            }
        }

        true
    }

    fn bind<O: UnifyObserver + ?Sized>(
        &self,
        var: &Variable,
        term: &Term,
        trail: &mut Trail,
        observer: &mut O,
    ) -> bool {
        if self.config.occurs_check && term.occurs(var.id(), &*trail) {
            return false;
        }
        trail.push(var, term.clone());
        observer.on_bind(var, term);
        true
    }

    /// Queues argument pairs of two non-variables, or returns false if
    /// their shapes differ.
    fn push_arguments(a: &Term, b: &Term, pending: &mut Vec<(Term, Term)>) -> bool {
        if !a.is_compound() || !b.is_compound() {
            return a == b;
        }

        let (Ok(fa), Ok(fb)) = (a.functor(), b.functor()) else {
            return false;
        };
        let (Ok(args_a), Ok(args_b)) = (a.arguments(), b.arguments()) else {
            return false;
        };
        if fa != fb || args_a.len() != args_b.len() {
            return false;
        }

        // Reverse so the first argument is popped first.
        for (x, y) in args_a.iter().zip(args_b.iter()).rev() {
            if x.is_nil() || y.is_nil() {
                continue;
            }
            pending.push((x.clone(), y.clone()));
        }
        true
    }

    /// Unifies `a` and `b` and drains the new bindings into a substitution.
    ///
    /// On success every named variable bound during the call is reported
    /// with its resolved value and the trail is rewound to where it was. On
    /// failure the result is empty and the trail is left as the failed
    /// attempt left it.
    pub fn match_terms(&self, a: &Term, b: &Term, trail: &mut Trail) -> Substitution {
        let mark = trail.mark();
        if !self.unify(a, b, trail) {
            return Substitution::new();
        }

        let mut subst = Substitution::new();
        for entry in trail.entries_since(mark) {
            let var = entry.var();
            if var.is_anonymous() {
                continue;
            }
            if let Some(name) = var.name() {
                let value = Term::Variable(var.clone()).resolve(&*trail);
                subst.set(name, value);
            }
        }
        trail.rewind(mark);
        subst
    }
}

/// Unifies two terms with the default configuration.
pub fn unify(a: &Term, b: &Term, trail: &mut Trail) -> bool {
    Unifier::default().unify(a, b, trail)
}

/// Matches two terms with the default configuration.
pub fn match_terms(a: &Term, b: &Term, trail: &mut Trail) -> Substitution {
    Unifier::default().match_terms(a, b, trail)
}
