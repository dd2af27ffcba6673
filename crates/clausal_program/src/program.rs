//! Clause storage keyed by predicate indicator.
//!
//! A [`Program`] only stores and retrieves clauses. It performs no
//! resolution; [`Program::matching`] is the one place it calls the unifier,
//! probing each candidate head and rewinding after every probe.

use std::sync::Arc;

use clausal_term::{Result, Term};
use clausal_unify::{Trail, unify};

use crate::clause::Clause;
use crate::family::ClauseFamily;

/// Formats a predicate indicator.
#[must_use]
pub fn indicator(functor: &str, arity: usize) -> String {
    format!("{functor}/{arity}")
}

/// Clause families in first-insertion order, plus directives.
#[derive(Clone, Debug, Default)]
pub struct Program {
    order: im::Vector<Arc<str>>,
    families: im::HashMap<Arc<str>, ClauseFamily>,
    directives: im::Vector<Clause>,
}

impl Program {
    /// Creates an empty program.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn family_mut(&mut self, key: &str) -> &mut ClauseFamily {
        let key: Arc<str> = key.into();
        if !self.families.contains_key(&*key) {
            self.order.push_back(Arc::clone(&key));
        }
        self.families
            .entry(Arc::clone(&key))
            .or_insert_with(|| ClauseFamily::new(key))
    }

    /// Appends a clause to its family (`assertz`), creating the family if needed.
    ///
    /// Directives are appended to the directive list.
    ///
    /// # Errors
    ///
    /// Returns `NotCallable` if the head names no predicate.
    pub fn add(&mut self, clause: Clause) -> Result<()> {
        if clause.is_directive() {
            self.directives.push_back(clause);
            return Ok(());
        }
        let key = clause.indicator()?;
        self.family_mut(&key).add(clause)
    }

    /// Prepends a clause to its family (`asserta`), creating the family if needed.
    ///
    /// # Errors
    ///
    /// Returns `NotCallable` if the head names no predicate.
    pub fn push(&mut self, clause: Clause) -> Result<()> {
        if clause.is_directive() {
            self.directives.push_front(clause);
            return Ok(());
        }
        let key = clause.indicator()?;
        self.family_mut(&key).push(clause)
    }

    /// Adds clauses in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`add`](Self::add).
    pub fn add_all(&mut self, clauses: impl IntoIterator<Item = Clause>) -> Result<()> {
        clauses.into_iter().try_for_each(|clause| self.add(clause))
    }

    fn remove_family(&mut self, key: &str) -> Option<ClauseFamily> {
        let family = self.families.remove(key)?;
        self.order.retain(|k| &**k != key);
        Some(family)
    }

    /// Deletes the whole family for `functor/arity` (`abolish`).
    pub fn remove_all(&mut self, functor: &str, arity: usize) -> Option<ClauseFamily> {
        self.remove_family(&indicator(functor, arity))
    }

    /// Deletes every family that has no clause in `keep`.
    ///
    /// Returns the number of families removed.
    pub fn retain_all(&mut self, keep: &ClauseFamily) -> usize {
        let doomed: Vec<Arc<str>> = self
            .order
            .iter()
            .filter(|key| {
                self.families
                    .get(&***key)
                    .is_none_or(|family| !family.iter().any(|c| keep.contains(c)))
            })
            .cloned()
            .collect();
        for key in &doomed {
            self.remove_family(key);
        }
        doomed.len()
    }

    /// Returns the family for `functor/arity`, empty if there is none.
    ///
    /// The result is a snapshot; later changes to the program do not affect it.
    #[must_use]
    pub fn get(&self, functor: &str, arity: usize) -> ClauseFamily {
        let key = indicator(functor, arity);
        self.families
            .get(key.as_str())
            .cloned()
            .unwrap_or_else(|| ClauseFamily::new(key))
    }

    /// Returns the family stored under an indicator string.
    #[must_use]
    pub fn family(&self, indicator: &str) -> Option<&ClauseFamily> {
        self.families.get(indicator)
    }

    /// Returns true if a family exists for `functor/arity`.
    #[must_use]
    pub fn contains(&self, functor: &str, arity: usize) -> bool {
        self.families.contains_key(indicator(functor, arity).as_str())
    }

    /// Iterates indicators in first-insertion order.
    pub fn indicators(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|key| &**key)
    }

    /// Iterates families in first-insertion order.
    pub fn families(&self) -> impl Iterator<Item = &ClauseFamily> {
        self.order
            .iter()
            .filter_map(|key| self.families.get(&**key))
    }

    /// Iterates every clause, family by family.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.families().flat_map(ClauseFamily::iter)
    }

    /// Iterates directives in order.
    pub fn directives(&self) -> impl Iterator<Item = &Clause> {
        self.directives.iter()
    }

    /// Returns the number of clauses, excluding directives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.families.values().map(ClauseFamily::len).sum()
    }

    /// Returns the number of families.
    #[must_use]
    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    /// Returns true if there are no clauses and no directives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.families.is_empty() && self.directives.is_empty()
    }

    /// Removes the first structurally equal clause (`retract`).
    ///
    /// An emptied family is removed.
    pub fn retract(&mut self, clause: &Clause) -> bool {
        if clause.is_directive() {
            return match self.directives.iter().position(|c| c == clause) {
                Some(index) => {
                    self.directives.remove(index);
                    true
                }
                None => false,
            };
        }
        let Ok(key) = clause.indicator() else {
            return false;
        };
        let Some(family) = self.families.get_mut(key.as_str()) else {
            return false;
        };
        let removed = family.remove(clause);
        if family.is_empty() {
            self.remove_family(&key);
        }
        removed
    }

    /// Removes and returns the first clause that unifies with `pattern`.
    ///
    /// The trail is rewound after every probe. An emptied family is removed.
    pub fn retract_matching(&mut self, pattern: &Clause, trail: &mut Trail) -> Option<Clause> {
        let key = pattern.indicator().ok()?;
        let family = self.families.get_mut(key.as_str())?;
        let index = family.iter().position(|candidate| {
            let mark = trail.mark();
            let hit = pattern.unify(candidate, trail);
            trail.rewind(mark);
            hit
        })?;
        let removed = family.remove_at(index);
        if family.is_empty() {
            self.remove_family(&key);
        }
        removed
    }

    /// Returns the clauses whose head unifies with `head`, in order.
    ///
    /// The trail is rewound after every probe.
    #[must_use]
    pub fn matching(&self, head: &Term, trail: &mut Trail) -> Vec<Clause> {
        let Ok(key) = head.indicator() else {
            return Vec::new();
        };
        let Some(family) = self.families.get(key.as_str()) else {
            return Vec::new();
        };
        family
            .iter()
            .filter(|clause| {
                let Some(candidate) = clause.head() else {
                    return false;
                };
                let mark = trail.mark();
                let hit = unify(head, candidate, trail);
                trail.rewind(mark);
                hit
            })
            .cloned()
            .collect()
    }

    /// Removes every clause and directive.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
