//! Error types for model conversions.
//!
//! Uses `thiserror` for ergonomic error definition. Note that grammar
//! failure is not represented here: a grammar that recognizes nothing
//! returns `None`, which callers treat as "no structured data available".

use thiserror::Error;

/// Errors from fallible conversions on model vocabulary types.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A string did not name one of the six abilities.
    #[error("unknown ability: {0}")]
    UnknownAbility(String),

    /// A string did not name a damage type.
    #[error("unknown damage type: {0}")]
    UnknownDamageType(String),

    /// A string did not name a compendium item type.
    #[error("unknown compendium item type: {0}")]
    UnknownItemType(String),

    /// A string was not a `type:realm:identifier` compendium key.
    #[error("invalid compendium item key: {0}")]
    InvalidItemKey(String),
}
