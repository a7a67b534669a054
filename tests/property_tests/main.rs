//! Property-based tests for formula invariants
//!
//! These tests use property-based testing to verify that the formula
//! invariants hold across the whole validated input space.

mod formula_invariants;
mod generators;
