//! Annotation placement over the original prose.

use grimoire_dice::DiceExpression;
use grimoire_foundation::DomainParser;
use grimoire_models::{
    CreatureAction, CreatureActionDomainParser, CreatureFeature, CreatureFeatureDomainParser,
    TextAnnotation,
};

#[test]
fn action_description_dice_ranges_cover_the_source() {
    let parser = CreatureActionDomainParser::new();
    let description = "Melee Weapon Attack: +4 to hit, reach 5 ft., one target. \
                       Hit: 5 (1d6 + 2) slashing damage.";
    let action = CreatureAction::new("Scimitar", description);
    let parsed = parser.parse(&action).unwrap();

    let texts: Vec<String> = parsed
        .description_annotations()
        .iter()
        .map(|annotation| annotation.text_in(description))
        .collect();
    assert_eq!(texts, vec!["+4".to_string(), "1d6 + 2".to_string()]);
}

#[test]
fn recharge_name_annotation_is_a_rollable_d6() {
    let parser = CreatureActionDomainParser::new();
    let name = "Fire Breath (Recharge 5-6)";
    let action = CreatureAction::new(name, "The dragon exhales fire.");
    let parsed = parser.parse(&action).unwrap();

    let annotations = parsed.name_annotations();
    assert_eq!(annotations.len(), 1);
    assert_eq!(
        annotations[0].value,
        TextAnnotation::DiceExpression(DiceExpression::dice(1, 6))
    );
    // the annotation covers the recharge phrase inside the lowercased name
    assert_eq!(annotations[0].text_in(&name.to_lowercase()), "recharge 5-6");
}

#[test]
fn per_day_limited_use_does_not_annotate_the_name() {
    let parser = CreatureActionDomainParser::new();
    let action = CreatureAction::new("Teleport (3/Day)", "The sorcerer vanishes.");
    let parsed = parser.parse(&action).unwrap();

    assert!(parsed.limited_use.is_some());
    // nothing to roll: only recharge rolls make the name interactive
    assert!(parsed.name_annotations().is_empty());
}

#[test]
fn spell_references_annotate_the_description() {
    let parser = CreatureFeatureDomainParser::new();
    let description = "The acolyte is a 1st-level spellcaster. Its spellcasting \
                       ability is Wisdom (spell save DC 12).\n\
                       Cantrips (at will): light, sacred flame";
    let feature = CreatureFeature::new("Spellcasting", description);
    let parsed = parser.parse(&feature).unwrap();

    let lowercased = description.to_lowercase();
    let references: Vec<String> = parsed
        .description_annotations()
        .iter()
        .filter_map(|annotation| match &annotation.value {
            TextAnnotation::CompendiumItemReference(_) => Some(annotation.text_in(&lowercased)),
            TextAnnotation::DiceExpression(_) => None,
        })
        .collect();
    assert_eq!(
        references,
        vec!["light".to_string(), "sacred flame".to_string()]
    );
}
