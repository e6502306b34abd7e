//! Workspace-level integration tests.
//!
//! Tests that cross crate boundaries:
//! - The versioned parse cache driving the domain grammars
//! - Persistence round-trips of cached results
//! - Visitors over full game-model trees

mod visitor_tests;
