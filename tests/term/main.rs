//! Integration tests for Layer 0: Term
//!
//! Tests for term construction, introspection, standard order, and printing.

mod display;
mod order;
