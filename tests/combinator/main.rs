//! Integration tests for the grimoire_combinator crate.
//!
//! Tests for the parsing primitives and combinators:
//! - The failure contract (no consumption on failure)
//! - Sequencing, alternation, repetition
//! - Skipping and range capture over prose

mod contract_tests;
mod prose_tests;
