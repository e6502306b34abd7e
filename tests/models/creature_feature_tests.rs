//! Limited-use and spellcasting grammar tests.

use grimoire_foundation::DomainParser;
use grimoire_models::{
    Ability, CreatureFeature, CreatureFeatureDomainParser, CreatureFeatureParser, LimitedUse,
    Modifier, Recharge,
};

fn limited_use_in(name: &str) -> Option<LimitedUse> {
    CreatureFeatureParser::limited_use_in_name()
        .run(&name.to_lowercase())
        .map(|located| located.value)
}

#[test]
fn per_day_amount() {
    assert_eq!(
        limited_use_in("3/day"),
        Some(LimitedUse {
            amount: 3,
            recharge: Some(Recharge::Day),
        })
    );
}

#[test]
fn per_day_inside_a_name() {
    assert_eq!(
        limited_use_in("Parry (2/Day)"),
        Some(LimitedUse {
            amount: 2,
            recharge: Some(Recharge::Day),
        })
    );
}

#[test]
fn recharge_range() {
    assert_eq!(
        limited_use_in("Recharge 5-6"),
        Some(LimitedUse {
            amount: 1,
            recharge: Some(Recharge::TurnStart([5, 6].into_iter().collect())),
        })
    );
}

#[test]
fn recharge_single_value() {
    assert_eq!(
        limited_use_in("Recharge 6"),
        Some(LimitedUse {
            amount: 1,
            recharge: Some(Recharge::TurnStart([6].into_iter().collect())),
        })
    );
}

#[test]
fn recharges_after_rest() {
    assert_eq!(
        limited_use_in("Recharges after a Short or Long Rest"),
        Some(LimitedUse {
            amount: 1,
            recharge: Some(Recharge::Rest {
                short: true,
                long: true,
            }),
        })
    );
    assert_eq!(
        limited_use_in("Recharges after a Long Rest"),
        Some(LimitedUse {
            amount: 1,
            recharge: Some(Recharge::Rest {
                short: false,
                long: true,
            }),
        })
    );
}

#[test]
fn descriptions_do_not_get_limited_use() {
    // the recognizer runs over names only; the domain parser never feeds it
    // a description
    let parser = CreatureFeatureDomainParser::new();
    let feature = CreatureFeature::new(
        "Pack Tactics",
        "This ability recharges after a long rest.",
    );
    let parsed = parser.parse(&feature).unwrap();
    assert_eq!(parsed.limited_use, None);
}

const ACOLYTE_SPELLCASTING: &str =
    "The acolyte is a 1st-level spellcaster. Its spellcasting ability is \
     Wisdom (spell save DC 12, +4 to hit with spell attacks). The acolyte \
     has following cleric spells prepared:\n\n\
     Cantrips (at will): light, sacred flame, thaumaturgy\n\
     1st level (3 slots): bless, cure wounds, sanctuary";

#[test]
fn acolyte_spellcasting_block() {
    let parser = CreatureFeatureDomainParser::new();
    let feature = CreatureFeature::new("Spellcasting", ACOLYTE_SPELLCASTING);
    let parsed = parser.parse(&feature).unwrap();
    let spellcasting = parsed.spellcasting.unwrap();

    assert!(!spellcasting.innate);
    assert_eq!(spellcasting.spellcaster_level, Some(1));
    assert_eq!(spellcasting.ability, Some(Ability::Wisdom));
    assert_eq!(spellcasting.spell_save_dc, Some(12));
    assert_eq!(spellcasting.spell_attack_hit, Some(Modifier(4)));
    assert_eq!(spellcasting.slots_by_level.get(&1), Some(&3));
    assert_eq!(spellcasting.spells_by_level[&0].len(), 3);
    assert_eq!(spellcasting.spells_by_level[&1].len(), 3);
}

#[test]
fn spellcasting_requires_the_name_to_say_so() {
    let parser = CreatureFeatureDomainParser::new();
    let feature = CreatureFeature::new("Divine Gift", ACOLYTE_SPELLCASTING);
    let parsed = parser.parse(&feature).unwrap();
    assert_eq!(parsed.spellcasting, None);
}

#[test]
fn innate_spellcasting_grouped_by_use() {
    let parser = CreatureFeatureDomainParser::new();
    let feature = CreatureFeature::new(
        "Innate Spellcasting",
        "The djinni's innate spellcasting ability is Charisma (spell save \
         DC 17, +9 to hit with spell attacks). It can innately cast the \
         following spells, requiring no material components:\n\n\
         At will: detect magic, thunderwave\n\
         3/day each: create food and water, wind walk",
    );
    let parsed = parser.parse(&feature).unwrap();
    let spellcasting = parsed.spellcasting.unwrap();

    assert!(spellcasting.innate);

    let at_will: Vec<&str> = spellcasting
        .limited_use_spells
        .iter()
        .filter(|group| group.limited_use.is_none())
        .flat_map(|group| group.spells.iter().map(|spell| spell.value.text.as_str()))
        .collect();
    assert_eq!(at_will, vec!["detect magic", "thunderwave"]);

    let three_per_day: Vec<&str> = spellcasting
        .limited_use_spells
        .iter()
        .filter(|group| {
            group
                .limited_use
                .as_ref()
                .is_some_and(|lu| lu.amount == 3 && lu.recharge == Some(Recharge::Day))
        })
        .flat_map(|group| group.spells.iter().map(|spell| spell.value.text.as_str()))
        .collect();
    assert_eq!(three_per_day, vec!["create food and water", "wind walk"]);
}

#[test]
fn feature_dice_are_annotated() {
    let parser = CreatureFeatureDomainParser::new();
    let feature = CreatureFeature::new(
        "Nimble Escape",
        "When the goblin is hit, roll 1d6; on a 4 or higher it takes \
         2 (1d4) less damage.",
    );
    let parsed = parser.parse(&feature).unwrap();

    let dice: Vec<String> = parsed
        .other_description_annotations
        .iter()
        .map(|annotation| match &annotation.value {
            grimoire_models::TextAnnotation::DiceExpression(expr) => expr.to_string(),
            other => panic!("unexpected annotation {other:?}"),
        })
        .collect();
    assert_eq!(dice, vec!["1d6".to_string(), "1d4".to_string()]);
}
