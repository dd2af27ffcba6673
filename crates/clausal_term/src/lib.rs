//! Terms, standard order, and term construction for Clausal.
//!
//! This crate provides:
//! - [`Term`] - The Prolog term, with lists, maps, entries, and object references
//! - [`TermKind`] - Kind descriptors and their standard-order rank
//! - [`Variable`] and [`BindingStore`] - Variable slots and the seam bindings live behind
//! - [`compare`] - The standard order of terms
//! - [`TermFactory`] - Atom interning and fresh variable allocation
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod atoms;
pub mod bindings;
pub mod collections;
pub mod display;
pub mod error;
pub mod factory;
pub mod kind;
pub mod order;
pub mod term;

pub use atoms::AtomTable;
pub use bindings::{BindingId, BindingStore, Unbound, Variable};
pub use collections::TermMap;
pub use display::{TermWriter, atom_needs_quotes, quote_atom};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use factory::{FactoryConfig, TermFactory};
pub use kind::{KindRank, TermKind};
pub use order::{compare, compare_in};
pub use term::{
    CONJUNCTION_FUNCTOR, EMPTY_LIST_NAME, ENTRY_FUNCTOR, LIST_FUNCTOR, ListTerm, MAP_FUNCTOR,
    OBJECT_FUNCTOR, Term,
};
