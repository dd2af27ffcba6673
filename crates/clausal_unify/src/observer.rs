//! Hooks for watching unification as it runs.

use clausal_term::{Term, Variable};

use crate::trail::Mark;

/// Receives unification events. Every hook defaults to a no-op.
pub trait UnifyObserver {
    /// A top-level unification of `a` and `b` begins.
    fn on_start(&mut self, _a: &Term, _b: &Term) {}

    /// `var` was bound to `term`.
    fn on_bind(&mut self, _var: &Variable, _term: &Term) {}

    /// The dereferenced pair `a`, `b` could not be unified.
    fn on_fail(&mut self, _a: &Term, _b: &Term) {}

    /// The top-level unification finished.
    fn on_end(&mut self, _success: bool) {}

    /// The trail was rewound to `mark`, undoing `undone` bindings.
    fn on_rewind(&mut self, _mark: Mark, _undone: usize) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl UnifyObserver for NoopObserver {}

impl<O: UnifyObserver + ?Sized> UnifyObserver for &mut O {
    fn on_start(&mut self, a: &Term, b: &Term) {
        (**self).on_start(a, b);
    }

    fn on_bind(&mut self, var: &Variable, term: &Term) {
        (**self).on_bind(var, term);
    }

    fn on_fail(&mut self, a: &Term, b: &Term) {
        (**self).on_fail(a, b);
    }

    fn on_end(&mut self, success: bool) {
        (**self).on_end(success);
    }

    fn on_rewind(&mut self, mark: Mark, undone: usize) {
        (**self).on_rewind(mark, undone);
    }
}
