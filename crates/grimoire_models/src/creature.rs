//! Creature statblocks and their text fields.

use serde::{Deserialize, Serialize};

use grimoire_dice::DiceExpression;
use grimoire_foundation::Parseable;

use crate::creature_action::ParsedCreatureAction;
use crate::creature_feature::ParsedCreatureFeature;

/// A named passive trait of a creature, e.g. "Pack Tactics".
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureFeature {
    /// The feature's name, possibly carrying a limited-use suffix.
    pub name: String,
    /// The feature's prose description.
    pub description: String,
}

impl CreatureFeature {
    /// Creates a feature.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A named action a creature can take, e.g. "Scimitar".
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureAction {
    /// The action's name, possibly carrying a limited-use suffix.
    pub name: String,
    /// The action's prose description.
    pub description: String,
}

impl CreatureAction {
    /// Creates an action.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A creature feature with its cached parse.
pub type ParseableCreatureFeature = Parseable<CreatureFeature, ParsedCreatureFeature>;

/// A creature action with its cached parse.
pub type ParseableCreatureAction = Parseable<CreatureAction, ParsedCreatureAction>;

/// The combat-relevant attributes of a creature.
///
/// Shared between monsters and characters. Text fields are wrapped in
/// [`Parseable`] so structure extracted from the prose travels with it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatBlock {
    /// The creature's name.
    pub name: String,
    /// The creature's type, e.g. "Beast".
    pub creature_type: Option<String>,
    /// Armor class.
    pub armor_class: Option<i32>,
    /// Average hit points.
    pub hit_points: Option<i32>,
    /// The hit point roll.
    pub hit_point_dice: Option<DiceExpression>,
    /// Passive features and traits.
    pub features: Vec<ParseableCreatureFeature>,
    /// Actions.
    pub actions: Vec<ParseableCreatureAction>,
    /// Reactions.
    pub reactions: Vec<ParseableCreatureAction>,
    /// Legendary actions, for creatures that have them.
    pub legendary: Option<Legendary>,
}

impl StatBlock {
    /// Creates a statblock with the given name and no other attributes.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            creature_type: None,
            armor_class: None,
            hit_points: None,
            hit_point_dice: None,
            features: Vec::new(),
            actions: Vec::new(),
            reactions: Vec::new(),
            legendary: None,
        }
    }

    /// Wraps features into parseables and adds them.
    #[must_use]
    pub fn with_features(mut self, features: impl IntoIterator<Item = CreatureFeature>) -> Self {
        self.features
            .extend(features.into_iter().map(Parseable::new));
        self
    }

    /// Wraps actions into parseables and adds them.
    #[must_use]
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = CreatureAction>) -> Self {
        self.actions.extend(actions.into_iter().map(Parseable::new));
        self
    }

    /// Wraps reactions into parseables and adds them.
    #[must_use]
    pub fn with_reactions(mut self, reactions: impl IntoIterator<Item = CreatureAction>) -> Self {
        self.reactions
            .extend(reactions.into_iter().map(Parseable::new));
        self
    }
}

/// A creature's legendary actions block.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Legendary {
    /// The block's introductory prose, when present.
    pub description: Option<String>,
    /// The legendary actions.
    pub actions: Vec<ParseableCreatureAction>,
}
