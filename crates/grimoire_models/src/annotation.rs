//! Annotations over recognized spans of statblock prose.
//!
//! Grammars attach annotations to the character ranges they recognized so the
//! original text can be rendered with interactive spans (a tappable dice
//! roll, a link to a compendium item). Unannotated text is just text.

use serde::{Deserialize, Serialize};

use grimoire_dice::DiceExpression;

use crate::compendium::{CompendiumItemReference, CompendiumItemType};

/// A recognized construct inside a span of prose.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextAnnotation {
    /// The span is a rollable dice expression.
    DiceExpression(DiceExpression),
    /// The span is believed to refer to a compendium item.
    CompendiumItemReference(CompendiumItemReferenceTextAnnotation),
}

/// A piece of text that is believed to refer to a compendium item.
///
/// Starts out unresolved; a lookup pass may later attach the key of the item
/// the text turned out to denote.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompendiumItemReferenceTextAnnotation {
    /// The referring text, e.g. a spell name.
    pub text: String,
    /// The expected item type, when the context implies one.
    pub item_type: Option<CompendiumItemType>,
    /// The reference this text resolved to, once looked up.
    pub resolved_to: Option<CompendiumItemReference>,
}

impl CompendiumItemReferenceTextAnnotation {
    /// Creates an unresolved annotation.
    #[must_use]
    pub const fn new(text: String, item_type: Option<CompendiumItemType>) -> Self {
        Self {
            text,
            item_type,
            resolved_to: None,
        }
    }
}
