//! Clausal - Prolog terms, unification, and clause storage
//!
//! This crate re-exports all layers of the Clausal system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: clausal_debug    - Unification tracing
//! Layer 2: clausal_program  - Clauses, clause families, programs
//! Layer 1: clausal_unify    - Binding trail, unifier, matching
//! Layer 0: clausal_term     - Terms, standard order, factory, errors
//! ```

pub use clausal_debug as debug;
pub use clausal_program as program;
pub use clausal_term as term;
pub use clausal_unify as unify;
