//! Ordered clauses sharing one predicate indicator.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use clausal_term::{Error, Result};

use crate::clause::Clause;

/// Every clause for one `functor/arity`, in assertion order.
///
/// Backed by a persistent vector: cloning is O(1), and a clone taken
/// before an `add` or `push` does not see the new clause.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClauseFamily {
    indicator: Arc<str>,
    clauses: im::Vector<Clause>,
}

impl ClauseFamily {
    /// Creates an empty family.
    #[must_use]
    pub fn new(indicator: impl Into<Arc<str>>) -> Self {
        Self {
            indicator: indicator.into(),
            clauses: im::Vector::new(),
        }
    }

    /// Returns the indicator all clauses share.
    #[must_use]
    pub fn indicator(&self) -> &str {
        &self.indicator
    }

    /// Returns the number of clauses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Returns true if there are no clauses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Gets the clause at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Clause> {
        self.clauses.get(index)
    }

    /// Iterates clauses in order.
    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// Returns true if a structurally equal clause is present.
    #[must_use]
    pub fn contains(&self, clause: &Clause) -> bool {
        self.clauses.iter().any(|c| c == clause)
    }

    fn check(&self, clause: &Clause) -> Result<()> {
        let actual = clause.indicator()?;
        if actual == *self.indicator {
            Ok(())
        } else {
            Err(Error::indicator_mismatch(&*self.indicator, actual))
        }
    }

    /// Appends a clause (`assertz`).
    ///
    /// # Errors
    ///
    /// Returns `IndicatorMismatch` if the head names another predicate,
    /// or `NotCallable` if it names none.
    pub fn add(&mut self, clause: Clause) -> Result<()> {
        self.check(&clause)?;
        self.clauses.push_back(clause);
        Ok(())
    }

    /// Prepends a clause (`asserta`).
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub fn push(&mut self, clause: Clause) -> Result<()> {
        self.check(&clause)?;
        self.clauses.push_front(clause);
        Ok(())
    }

    /// Removes and returns the clause at `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<Clause> {
        (index < self.clauses.len()).then(|| self.clauses.remove(index))
    }

    /// Removes the first structurally equal clause.
    pub fn remove(&mut self, clause: &Clause) -> bool {
        match self.clauses.iter().position(|c| c == clause) {
            Some(index) => {
                self.clauses.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a ClauseFamily {
    type Item = &'a Clause;
    type IntoIter = im::vector::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}
