//! Binding trail.
//!
//! The trail owns every variable's binding slot plus an undo log. Each
//! push records the slot's previous value, so rewinding to a [`Mark`]
//! restores exactly the state the mark was taken in.

use clausal_term::{BindingId, BindingStore, Term, Variable};

use crate::observer::UnifyObserver;

/// A position in the trail, captured before a tentative unification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mark(usize);

impl Mark {
    /// Returns the number of trail entries that existed when the mark was taken.
    #[must_use]
    pub const fn position(self) -> usize {
        self.0
    }
}

/// One recorded binding.
#[derive(Clone, Debug)]
pub struct TrailEntry {
    var: Variable,
    term: Term,
    previous: Option<Term>,
}

impl TrailEntry {
    /// The variable that was bound.
    #[must_use]
    pub fn var(&self) -> &Variable {
        &self.var
    }

    /// The term it was bound to.
    #[must_use]
    pub fn term(&self) -> &Term {
        &self.term
    }
}

/// Binding slots and the undo stack over them.
///
/// Slots are keyed by [`BindingId`], so variables from factories with
/// far-apart `first_variable` offsets cost nothing extra. The trail is not
/// thread-safe; each resolution attempt should own one.
#[derive(Clone, Debug, Default)]
pub struct Trail {
    slots: im::HashMap<BindingId, Term>,
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Creates an empty trail.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the current position.
    #[must_use]
    pub fn mark(&self) -> Mark {
        Mark(self.entries.len())
    }

    /// Binds `var` to `term` and records the binding for undo.
    ///
    /// Binding a variable to itself is ignored.
    pub fn push(&mut self, var: &Variable, term: Term) {
        if matches!(&term, Term::Variable(other) if other.id() == var.id()) {
            return;
        }
        let previous = self.slots.insert(var.id(), term.clone());
        self.entries.push(TrailEntry {
            var: var.clone(),
            term,
            previous,
        });
    }

    /// Undoes every binding pushed after `mark`, returning how many were undone.
    ///
    /// A mark taken before a [`commit`](Self::commit) may point past the end;
    /// rewinding to it undoes nothing.
    pub fn rewind(&mut self, mark: Mark) -> usize {
        let mut undone = 0;
        while self.entries.len() > mark.0 {
            let Some(entry) = self.entries.pop() else {
                break;
            };
            match entry.previous {
                Some(previous) => self.slots.insert(entry.var.id(), previous),
                None => self.slots.remove(&entry.var.id()),
            };
            undone += 1;
        }
        undone
    }

    /// Rewinds and reports the undo to an observer.
    pub fn rewind_observed<O: UnifyObserver + ?Sized>(&mut self, mark: Mark, observer: &mut O) -> usize {
        let undone = self.rewind(mark);
        observer.on_rewind(mark, undone);
        undone
    }

    /// Returns the term a slot is directly bound to.
    #[must_use]
    pub fn bound(&self, id: BindingId) -> Option<&Term> {
        self.slots.get(&id)
    }

    /// Returns true if the slot is bound.
    #[must_use]
    pub fn is_bound(&self, id: BindingId) -> bool {
        self.bound(id).is_some()
    }

    /// Returns the number of undo entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries pushed after `mark`, oldest first.
    #[must_use]
    pub fn entries_since(&self, mark: Mark) -> &[TrailEntry] {
        self.entries.get(mark.0..).unwrap_or(&[])
    }

    /// Drops the undo log, keeping the current bindings.
    pub fn commit(&mut self) {
        self.entries.clear();
    }

    /// Undoes every recorded binding.
    pub fn clear(&mut self) {
        self.rewind(Mark(0));
    }
}

impl BindingStore for Trail {
    fn lookup(&self, id: BindingId) -> Option<&Term> {
        self.bound(id)
    }
}
