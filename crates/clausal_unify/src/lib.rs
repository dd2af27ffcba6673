//! Binding trail and unification for Clausal terms.
//!
//! This crate provides:
//! - [`Trail`] - Binding slots with mark/rewind undo
//! - [`Unifier`] - Iterative unification with an optional occurs check
//! - [`Substitution`] - Named bindings produced by [`match_terms`]
//! - [`UnifyObserver`] - Hooks for tracing unification

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod observer;
pub mod substitution;
pub mod trail;
pub mod unifier;

pub use observer::{NoopObserver, UnifyObserver};
pub use substitution::Substitution;
pub use trail::{Mark, Trail, TrailEntry};
pub use unifier::{Unifier, UnifyConfig, match_terms, unify};

pub use clausal_term::{Error, Result};
