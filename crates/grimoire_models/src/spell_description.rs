//! Parsed spell descriptions.

use serde::{Deserialize, Serialize};

use grimoire_foundation::{Located, Parseable};

use crate::annotation::TextAnnotation;

/// Structure extracted from a spell's description: the dice expressions
/// found in the text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedSpellDescription {
    /// Annotations over the description, scoped to its character offsets.
    pub annotations: Vec<Located<TextAnnotation>>,
}

/// A spell description with its cached parse.
pub type ParseableSpellDescription = Parseable<String, ParsedSpellDescription>;
