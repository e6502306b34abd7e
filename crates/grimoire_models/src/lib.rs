//! Game models and statblock grammars.
//!
//! This crate provides:
//! - The compendium model tree (entries, monsters, characters, spells,
//!   encounters, statblocks)
//! - Domain grammars that extract structure from statblock prose (weapon
//!   attacks, limited-use rules, spellcasting blocks)
//! - [`DomainParsers`] - The versioned parser registry backing the parse cache
//! - Visitors that walk the model tree to parse lazily or migrate references
//!
//! Grammar failure is never an error here. Statblock prose is irregular
//! DM-authored English; when a grammar recognizes nothing, the raw text stays
//! authoritative and the entity simply carries no structured data.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ability;
pub mod annotation;
pub mod compendium;
pub mod creature;
pub mod creature_action;
pub mod creature_feature;
pub mod damage;
pub mod encounter;
pub mod error;
pub mod limited_use;
pub mod parsers;
pub mod spell_description;
pub mod visitor;

pub use ability::{Ability, Modifier};
pub use annotation::{CompendiumItemReferenceTextAnnotation, TextAnnotation};
pub use compendium::{
    Character, CompendiumEntry, CompendiumEntryDocument, CompendiumEntryOrigin,
    CompendiumImportJob, CompendiumItem, CompendiumItemGroup, CompendiumItemKey,
    CompendiumItemReference, CompendiumItemType, CompendiumRealm, CompendiumRealmId,
    CompendiumSourceDocument, CompendiumSourceDocumentId, Monster, Spell,
};
pub use creature::{
    CreatureAction, CreatureFeature, Legendary, ParseableCreatureAction,
    ParseableCreatureFeature, StatBlock,
};
pub use creature_action::{
    ActionEffect, AttackRange, AttackType, CreatureActionModel, CreatureActionParser, Damage,
    ParsedCreatureAction, SaveEffect, SaveableDamage, WeaponAttack,
};
pub use creature_feature::{
    CreatureFeatureParser, LimitedUseSpellGroup, ParsedCreatureFeature, Spellcasting,
};
pub use damage::DamageType;
pub use encounter::{
    Combatant, CombatantDefinition, CompendiumCombatant, Encounter, RunningEncounter,
};
pub use error::Error;
pub use limited_use::{LimitedUse, Recharge};
pub use parsers::{
    CreatureActionDomainParser, CreatureFeatureDomainParser, DomainParsers,
    SpellDescriptionDomainParser,
};
pub use spell_description::{ParseableSpellDescription, ParsedSpellDescription};
pub use visitor::{
    DocumentMoveVisitor, GameModelsVisitor, ParseableGameModelsVisitor, walk_character,
    walk_combatant, walk_encounter, walk_entry, walk_group, walk_import_job,
    walk_item_reference, walk_monster, walk_running_encounter, walk_spell, walk_stat_block,
};
