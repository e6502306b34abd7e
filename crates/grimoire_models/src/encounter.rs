//! Encounters and combatants.

use serde::{Deserialize, Serialize};

use crate::compendium::{Character, CompendiumItemReference, Monster};
use crate::creature::StatBlock;

/// A prepared set of combatants.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Encounter {
    /// The encounter's name.
    pub name: String,
    /// The combatants.
    pub combatants: Vec<Combatant>,
}

/// One participant in an encounter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combatant {
    /// Where the combatant's statblock comes from.
    pub definition: CombatantDefinition,
}

/// The source of a combatant's statblock.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatantDefinition {
    /// A one-off combatant defined inside the encounter.
    AdHoc {
        /// The combatant's statblock.
        stats: StatBlock,
        /// The compendium item this combatant was derived from, if any.
        original: Option<CompendiumItemReference>,
    },
    /// A combatant backed by a compendium item.
    Compendium(CompendiumCombatant),
}

/// A compendium item that can fight.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompendiumCombatant {
    /// A monster.
    Monster(Monster),
    /// A player character.
    Character(Character),
}

impl CompendiumCombatant {
    /// The combatant's statblock.
    #[must_use]
    pub const fn stats(&self) -> &StatBlock {
        match self {
            Self::Monster(monster) => &monster.stats,
            Self::Character(character) => &character.stats,
        }
    }
}

/// An encounter in progress.
///
/// `base` is the encounter as prepared; `current` is its in-combat state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunningEncounter {
    /// The encounter as prepared.
    pub base: Encounter,
    /// The encounter's current state.
    pub current: Encounter,
}
