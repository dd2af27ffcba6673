//! Clauses and programs for Clausal.
//!
//! This crate provides:
//! - [`Clause`] - Facts, rules, and directives, with lazy body decomposition
//! - [`ClauseFamily`] - Clauses sharing one `functor/arity`, in order
//! - [`Program`] - Families keyed by indicator, with assert/retract/abolish

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clause;
pub mod family;
pub mod program;

pub use clause::{BodyGoals, Clause};
pub use family::ClauseFamily;
pub use program::{Program, indicator};

pub use clausal_term::{Error, Result};
