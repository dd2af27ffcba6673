//! Integration tests for Layer 2: Program
//!
//! Tests for clauses, clause families, and program storage.

mod programs;
