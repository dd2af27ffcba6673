//! Integration tests for Layer 1: Unify
//!
//! Tests for the binding trail, unification, and one-way matching.

mod trail;
mod unification;
