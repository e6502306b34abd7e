//! Visitors over full game-model trees.
//!
//! Every visitor must be idempotent: a second walk over an already-visited
//! tree reports no change.

use grimoire_foundation::Parseable;
use grimoire_models::{
    Ability, CompendiumEntry, CompendiumEntryDocument, CompendiumEntryOrigin, CompendiumItem,
    CompendiumItemKey, CompendiumItemReference, CompendiumItemType, CompendiumRealmId,
    CompendiumSourceDocument, CompendiumSourceDocumentId, CreatureAction, CreatureActionModel,
    CreatureFeature, DocumentMoveVisitor, Legendary, Monster, ParseableGameModelsVisitor,
    ParseableSpellDescription, Spell, StatBlock, walk_entry, walk_spell, walk_stat_block,
};

fn acolyte_stat_block() -> StatBlock {
    let mut stat_block = StatBlock::named("Acolyte")
        .with_features([CreatureFeature::new(
            "Spellcasting",
            "The acolyte is a 1st-level spellcaster. Its spellcasting ability \
             is Wisdom (spell save DC 12, +4 to hit with spell attacks). The \
             acolyte has following cleric spells prepared:\n\n\
             Cantrips (at will): light, sacred flame, thaumaturgy\n\
             1st level (3 slots): bless, cure wounds, sanctuary",
        )])
        .with_actions([CreatureAction::new(
            "Scimitar",
            "Melee Weapon Attack: +4 to hit, reach 5 ft., one target. \
             Hit: 5 (1d6 + 2) slashing damage.",
        )])
        .with_reactions([CreatureAction::new(
            "Parry",
            "The acolyte adds 2 to its AC against one melee attack.",
        )]);
    stat_block.creature_type = Some("Humanoid".to_string());
    stat_block.legendary = Some(Legendary {
        description: None,
        actions: vec![Parseable::new(CreatureAction::new("", ""))],
    });
    stat_block
}

fn acid_splash() -> Spell {
    Spell {
        key: CompendiumItemKey::new(
            CompendiumItemType::Spell,
            CompendiumRealmId::new("core"),
            "acid splash",
        ),
        name: "Acid Splash".to_string(),
        level: None,
        casting_time: Some("1 action".to_string()),
        range: Some("60 feet".to_string()),
        duration: Some("Instantaneous".to_string()),
        school: Some("C".to_string()),
        concentration: false,
        ritual: false,
        description: ParseableSpellDescription::new(
            "You hurl a bubble of acid. A target must succeed on a Dexterity \
             saving throw or take 1d6 acid damage."
                .to_string(),
        ),
        higher_level_description: Some(
            "This spell's damage increases by 1d6 when you reach 5th level."
                .to_string(),
        ),
        classes: vec!["Sorcerer".to_string(), "Wizard".to_string()],
    }
}

#[test]
fn visit_spell_parses_and_settles() {
    let mut visitor = ParseableGameModelsVisitor::default();
    let mut spell = acid_splash();

    let changed = walk_spell(&mut visitor, &mut spell);
    assert!(changed);

    let parsed = spell.description.value().unwrap();
    assert_eq!(parsed.annotations.len(), 1);
    assert_eq!(
        parsed.annotations[0].text_in(spell.description.input()),
        "1d6"
    );

    // visiting again yields no change and returns false
    assert!(!walk_spell(&mut visitor, &mut spell));
}

#[test]
fn visit_stat_block_parses_every_text_field() {
    let mut visitor = ParseableGameModelsVisitor::default();
    let mut stat_block = acolyte_stat_block();

    let changed = walk_stat_block(&mut visitor, &mut stat_block);
    assert!(changed);

    let spellcasting = stat_block.features[0]
        .value()
        .unwrap()
        .spellcasting
        .as_ref()
        .unwrap();
    assert_eq!(spellcasting.ability, Some(Ability::Wisdom));

    let action = stat_block.actions[0].value().unwrap();
    assert!(matches!(
        action.action,
        Some(CreatureActionModel::WeaponAttack(_))
    ));

    // reactions without recognizable structure cache an empty-but-present result
    assert!(stat_block.reactions[0].result().is_some());

    // the empty legendary action parses to nothing, and stays parsed
    assert!(stat_block.legendary.as_ref().unwrap().actions[0]
        .result()
        .is_some());

    // visiting again yields no change and returns false
    assert!(!walk_stat_block(&mut visitor, &mut stat_block));
}

#[test]
fn entry_walk_reaches_nested_statblocks() {
    let mut visitor = ParseableGameModelsVisitor::default();
    let mut entry = CompendiumEntry {
        item: CompendiumItem::Monster(Monster {
            key: CompendiumItemKey::new(
                CompendiumItemType::Monster,
                CompendiumRealmId::new("core"),
                "acolyte",
            ),
            stats: acolyte_stat_block(),
        }),
        origin: CompendiumEntryOrigin::Imported(Some("open5e".to_string())),
        document: CompendiumEntryDocument {
            id: CompendiumSourceDocumentId::new("srd"),
            display_name: "SRD".to_string(),
        },
    };

    assert!(walk_entry(&mut visitor, &mut entry));

    let CompendiumItem::Monster(monster) = &entry.item else {
        panic!("expected a monster");
    };
    assert!(monster.stats.features[0].value().is_some());

    assert!(!walk_entry(&mut visitor, &mut entry));
}

#[test]
fn parse_then_move_then_parse_stays_settled() {
    // a full lifecycle: parse the tree, move its document, re-run both
    // visitors; every pass after the first of each kind is a no-op
    let mut parse_visitor = ParseableGameModelsVisitor::default();
    let acolyte_key = CompendiumItemKey::new(
        CompendiumItemType::Monster,
        CompendiumRealmId::new("core"),
        "acolyte",
    );
    let mut entry = CompendiumEntry {
        item: CompendiumItem::Monster(Monster {
            key: acolyte_key.clone(),
            stats: acolyte_stat_block(),
        }),
        origin: CompendiumEntryOrigin::Created(Some(CompendiumItemReference {
            title: "Acolyte".to_string(),
            item_key: acolyte_key.clone(),
        })),
        document: CompendiumEntryDocument {
            id: CompendiumSourceDocumentId::new("srd"),
            display_name: "SRD".to_string(),
        },
    };

    assert!(walk_entry(&mut parse_visitor, &mut entry));

    let mut move_visitor = DocumentMoveVisitor::new(
        CompendiumSourceDocument {
            id: CompendiumSourceDocumentId::new("homebrew-doc"),
            display_name: "My Homebrew".to_string(),
            realm_id: CompendiumRealmId::new("homebrew"),
        },
        CompendiumRealmId::new("core"),
        CompendiumSourceDocumentId::new("srd"),
        Some([acolyte_key].into_iter().collect()),
    );

    assert!(walk_entry(&mut move_visitor, &mut entry));
    assert_eq!(entry.item.key().to_string(), "monster:homebrew:acolyte");
    let CompendiumEntryOrigin::Created(Some(reference)) = &entry.origin else {
        panic!("expected a created origin");
    };
    assert_eq!(reference.item_key.to_string(), "monster:homebrew:acolyte");

    assert!(!walk_entry(&mut move_visitor, &mut entry));
    assert!(!walk_entry(&mut parse_visitor, &mut entry));
}
