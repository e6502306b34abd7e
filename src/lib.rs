//! Grimoire - Statblock-prose parsing engine
//!
//! This crate re-exports all layers of the Grimoire system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: grimoire_models     — Game models, statblock grammars, visitors
//! Layer 1: grimoire_dice       — Dice expression model, grammar, rolling
//!          grimoire_combinator — Cursor, parser type, combinators
//! Layer 0: grimoire_foundation — Located values, versioned parse cache
//! ```

pub use grimoire_combinator as combinator;
pub use grimoire_dice as dice;
pub use grimoire_foundation as foundation;
pub use grimoire_models as models;
