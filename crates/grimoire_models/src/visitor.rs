//! Visitors over the game-model tree.
//!
//! This module provides two pieces:
//! - [`GameModelsVisitor`] - Per-node hooks returning whether they changed
//!   anything. Default implementations do nothing.
//! - Free `walk_*` functions that drive recursion in a fixed order, calling
//!   the hook for a node before descending into its children and combining
//!   the changed flags.
//!
//! Every visitor must be idempotent: walking a value a second time without
//! other mutations in between must report no change. Both concrete visitors
//! here are tested for that property.

use std::collections::BTreeSet;

use crate::compendium::{
    Character, CompendiumEntry, CompendiumEntryOrigin, CompendiumImportJob, CompendiumItem,
    CompendiumItemGroup, CompendiumItemKey, CompendiumItemReference, CompendiumRealmId,
    CompendiumSourceDocument, CompendiumSourceDocumentId, Monster, Spell,
};
use crate::creature::StatBlock;
use crate::encounter::{
    Combatant, CombatantDefinition, CompendiumCombatant, Encounter, RunningEncounter,
};
use crate::parsers::DomainParsers;

/// Per-node visit hooks over the game-model tree.
///
/// Each hook mutates the node in place and returns whether it changed
/// anything. Implement only the hooks you care about; traversal belongs to
/// the `walk_*` functions, not the visitor.
#[allow(unused_variables)]
pub trait GameModelsVisitor {
    /// Visits an encounter.
    fn visit_encounter(&mut self, encounter: &mut Encounter) -> bool {
        false
    }

    /// Visits a running encounter.
    fn visit_running_encounter(&mut self, running: &mut RunningEncounter) -> bool {
        false
    }

    /// Visits a compendium entry.
    fn visit_entry(&mut self, entry: &mut CompendiumEntry) -> bool {
        false
    }

    /// Visits an import job.
    fn visit_import_job(&mut self, job: &mut CompendiumImportJob) -> bool {
        false
    }

    /// Visits a combatant.
    fn visit_combatant(&mut self, combatant: &mut Combatant) -> bool {
        false
    }

    /// Visits a monster.
    fn visit_monster(&mut self, monster: &mut Monster) -> bool {
        false
    }

    /// Visits a character.
    fn visit_character(&mut self, character: &mut Character) -> bool {
        false
    }

    /// Visits a spell.
    fn visit_spell(&mut self, spell: &mut Spell) -> bool {
        false
    }

    /// Visits an item group.
    fn visit_group(&mut self, group: &mut CompendiumItemGroup) -> bool {
        false
    }

    /// Visits a statblock.
    fn visit_stat_block(&mut self, stat_block: &mut StatBlock) -> bool {
        false
    }

    /// Visits a reference to a compendium item.
    fn visit_item_reference(&mut self, reference: &mut CompendiumItemReference) -> bool {
        false
    }
}

/// Walks an encounter: the encounter itself, then each combatant.
pub fn walk_encounter<V: GameModelsVisitor + ?Sized>(
    visitor: &mut V,
    encounter: &mut Encounter,
) -> bool {
    let mut changed = visitor.visit_encounter(encounter);
    for combatant in &mut encounter.combatants {
        changed |= walk_combatant(visitor, combatant);
    }
    changed
}

/// Walks a running encounter: itself, then its base and current encounters.
pub fn walk_running_encounter<V: GameModelsVisitor + ?Sized>(
    visitor: &mut V,
    running: &mut RunningEncounter,
) -> bool {
    let mut changed = visitor.visit_running_encounter(running);
    changed |= walk_encounter(visitor, &mut running.base);
    changed |= walk_encounter(visitor, &mut running.current);
    changed
}

/// Walks a combatant: itself, then its statblock or compendium item.
pub fn walk_combatant<V: GameModelsVisitor + ?Sized>(
    visitor: &mut V,
    combatant: &mut Combatant,
) -> bool {
    let mut changed = visitor.visit_combatant(combatant);
    match &mut combatant.definition {
        CombatantDefinition::AdHoc { stats, original } => {
            changed |= walk_stat_block(visitor, stats);
            if let Some(original) = original {
                changed |= walk_item_reference(visitor, original);
            }
        }
        CombatantDefinition::Compendium(item) => match item {
            CompendiumCombatant::Monster(monster) => changed |= walk_monster(visitor, monster),
            CompendiumCombatant::Character(character) => {
                changed |= walk_character(visitor, character);
            }
        },
    }
    changed
}

/// Walks a compendium entry: itself, its item, and its origin reference.
pub fn walk_entry<V: GameModelsVisitor + ?Sized>(
    visitor: &mut V,
    entry: &mut CompendiumEntry,
) -> bool {
    let mut changed = visitor.visit_entry(entry);
    changed |= match &mut entry.item {
        CompendiumItem::Monster(monster) => walk_monster(visitor, monster),
        CompendiumItem::Character(character) => walk_character(visitor, character),
        CompendiumItem::Spell(spell) => walk_spell(visitor, spell),
        CompendiumItem::Group(group) => walk_group(visitor, group),
    };
    if let CompendiumEntryOrigin::Created(Some(reference)) = &mut entry.origin {
        changed |= walk_item_reference(visitor, reference);
    }
    changed
}

/// Walks a monster: itself, then its statblock.
pub fn walk_monster<V: GameModelsVisitor + ?Sized>(visitor: &mut V, monster: &mut Monster) -> bool {
    let changed = visitor.visit_monster(monster);
    walk_stat_block(visitor, &mut monster.stats) || changed
}

/// Walks a character: itself, then its statblock.
pub fn walk_character<V: GameModelsVisitor + ?Sized>(
    visitor: &mut V,
    character: &mut Character,
) -> bool {
    let changed = visitor.visit_character(character);
    walk_stat_block(visitor, &mut character.stats) || changed
}

/// Walks a spell.
pub fn walk_spell<V: GameModelsVisitor + ?Sized>(visitor: &mut V, spell: &mut Spell) -> bool {
    visitor.visit_spell(spell)
}

/// Walks an item group: itself, then each member reference.
pub fn walk_group<V: GameModelsVisitor + ?Sized>(
    visitor: &mut V,
    group: &mut CompendiumItemGroup,
) -> bool {
    let mut changed = visitor.visit_group(group);
    for member in &mut group.members {
        changed |= walk_item_reference(visitor, member);
    }
    changed
}

/// Walks a statblock: itself, then the resolved spell references inside its
/// parsed spellcasting features.
pub fn walk_stat_block<V: GameModelsVisitor + ?Sized>(
    visitor: &mut V,
    stat_block: &mut StatBlock,
) -> bool {
    let mut changed = visitor.visit_stat_block(stat_block);
    for feature in &mut stat_block.features {
        let Some(parsed) = feature.value_mut() else {
            continue;
        };
        let Some(spellcasting) = &mut parsed.spellcasting else {
            continue;
        };
        let spells = spellcasting
            .spells_by_level
            .values_mut()
            .flatten()
            .chain(
                spellcasting
                    .limited_use_spells
                    .iter_mut()
                    .flat_map(|group| group.spells.iter_mut()),
            );
        for spell in spells {
            if let Some(reference) = &mut spell.value.resolved_to {
                changed |= walk_item_reference(visitor, reference);
            }
        }
    }
    changed
}

/// Walks an item reference.
pub fn walk_item_reference<V: GameModelsVisitor + ?Sized>(
    visitor: &mut V,
    reference: &mut CompendiumItemReference,
) -> bool {
    visitor.visit_item_reference(reference)
}

/// Walks an import job.
pub fn walk_import_job<V: GameModelsVisitor + ?Sized>(
    visitor: &mut V,
    job: &mut CompendiumImportJob,
) -> bool {
    visitor.visit_import_job(job)
}

/// Parses every unparsed text field reachable from the visited node.
///
/// Running it again right away reports no change, because the parse cache
/// recognizes its own parser name and version.
#[derive(Clone, Debug, Default)]
pub struct ParseableGameModelsVisitor {
    parsers: DomainParsers,
}

impl ParseableGameModelsVisitor {
    /// Creates the visitor with the given parser registry.
    #[must_use]
    pub fn new(parsers: DomainParsers) -> Self {
        Self { parsers }
    }
}

impl GameModelsVisitor for ParseableGameModelsVisitor {
    fn visit_stat_block(&mut self, stat_block: &mut StatBlock) -> bool {
        let mut changed = false;
        for feature in &mut stat_block.features {
            changed |= feature.parse_if_needed(&self.parsers.creature_feature);
        }
        for action in &mut stat_block.actions {
            changed |= action.parse_if_needed(&self.parsers.creature_action);
        }
        for reaction in &mut stat_block.reactions {
            changed |= reaction.parse_if_needed(&self.parsers.creature_action);
        }
        if let Some(legendary) = &mut stat_block.legendary {
            for action in &mut legendary.actions {
                changed |= action.parse_if_needed(&self.parsers.creature_action);
            }
        }
        changed
    }

    fn visit_spell(&mut self, spell: &mut Spell) -> bool {
        spell
            .description
            .parse_if_needed(&self.parsers.spell_description)
    }
}

/// Rewrites references after a compendium source document was renamed or
/// moved to another realm.
///
/// Entries belonging to the document take its new name and id; when the
/// document changed realms, the keys of the moved items and every reference
/// to them are rewritten to the new realm.
#[derive(Clone, Debug)]
pub struct DocumentMoveVisitor {
    updated_document: CompendiumSourceDocument,
    original_realm_id: CompendiumRealmId,
    original_document_id: CompendiumSourceDocumentId,
    moving: Option<BTreeSet<CompendiumItemKey>>,
}

impl DocumentMoveVisitor {
    /// Creates the visitor.
    ///
    /// # Panics
    /// Panics when the document moved between realms and `moving` is `None`;
    /// the set of moved keys is what identifies the references to rewrite.
    #[must_use]
    pub fn new(
        updated_document: CompendiumSourceDocument,
        original_realm_id: CompendiumRealmId,
        original_document_id: CompendiumSourceDocumentId,
        moving: Option<BTreeSet<CompendiumItemKey>>,
    ) -> Self {
        assert!(
            updated_document.realm_id == original_realm_id || moving.is_some(),
            "moving must be provided when a document changes realms"
        );
        Self {
            updated_document,
            original_realm_id,
            original_document_id,
            moving,
        }
    }

    fn document_id_did_change(&self) -> bool {
        self.updated_document.id != self.original_document_id
    }

    fn did_move_between_realms(&self) -> bool {
        self.updated_document.realm_id != self.original_realm_id
    }

    fn is_moving(&self, key: &CompendiumItemKey) -> bool {
        self.moving.as_ref().is_some_and(|moving| moving.contains(key))
    }
}

impl GameModelsVisitor for DocumentMoveVisitor {
    fn visit_entry(&mut self, entry: &mut CompendiumEntry) -> bool {
        if entry.document.id != self.original_document_id {
            return false;
        }

        // Entry belongs in the document: take its new name and id. When the
        // document moved between realms the item moves with it; updating the
        // key here is what re-files the entry in storage.
        let mut changed = update(
            &mut entry.document.display_name,
            self.updated_document.display_name.clone(),
        );
        changed |= update(&mut entry.document.id, self.updated_document.id.clone());
        if self.did_move_between_realms() {
            let realm = self.updated_document.realm_id.clone();
            changed |= update(&mut entry.item.key_mut().realm, realm);
        }
        changed
    }

    fn visit_import_job(&mut self, job: &mut CompendiumImportJob) -> bool {
        if job.document_id == self.original_document_id && self.document_id_did_change() {
            job.document_id = self.updated_document.id.clone();
            return true;
        }
        false
    }

    fn visit_combatant(&mut self, combatant: &mut Combatant) -> bool {
        if !self.did_move_between_realms() {
            return false;
        }
        let CombatantDefinition::Compendium(item) = &mut combatant.definition else {
            return false;
        };
        let key = match item {
            CompendiumCombatant::Monster(monster) => &mut monster.key,
            CompendiumCombatant::Character(character) => &mut character.key,
        };
        if self.is_moving(key) {
            let moved = key.in_realm(self.updated_document.realm_id.clone());
            update(key, moved)
        } else {
            false
        }
    }

    fn visit_item_reference(&mut self, reference: &mut CompendiumItemReference) -> bool {
        if self.did_move_between_realms() && self.is_moving(&reference.item_key) {
            let moved = reference
                .item_key
                .in_realm(self.updated_document.realm_id.clone());
            return update(&mut reference.item_key, moved);
        }
        false
    }
}

/// Assigns `value` to `target`, reporting whether that changed it.
fn update<T: PartialEq>(target: &mut T, value: T) -> bool {
    if *target == value {
        false
    } else {
        *target = value;
        true
    }
}
