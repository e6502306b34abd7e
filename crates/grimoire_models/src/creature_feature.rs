//! The creature feature grammars and their parsed model.
//!
//! Two idioms live in feature text:
//!
//! - Limited-use suffixes in the NAME: `Fire Breath (Recharge 5-6)`,
//!   `Leadership (Recharges after a Short or Long Rest)`, `Teleport (3/Day)`.
//! - Spellcasting blocks in the DESCRIPTION, recognized only when the name
//!   says so. The block's fragments (caster level, ability, save DC, spell
//!   lists) are collected wherever they occur, in any order, and merged;
//!   unrecognized text is skipped.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use grimoire_combinator::{
    Parser, any, char, character, either, either4, either6, horizontal_whitespace, int,
    one_or_more, string, word, zip, zip3, zip5,
};
use grimoire_foundation::Located;

use crate::ability::{Ability, Modifier};
use crate::annotation::{CompendiumItemReferenceTextAnnotation, TextAnnotation};
use crate::compendium::CompendiumItemType;
use crate::creature_action::recharge_name_annotations;
use crate::limited_use::{LimitedUse, Recharge};

/// Structure extracted from a creature feature's name and description.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedCreatureFeature {
    /// Limited-use rule parsed from the NAME; range scoped to the name.
    pub limited_use: Option<Located<LimitedUse>>,
    /// Spellcasting details, when the feature is a spellcasting block.
    pub spellcasting: Option<Spellcasting>,
    /// Remaining annotations over the description, scoped to its offsets.
    pub other_description_annotations: Vec<Located<TextAnnotation>>,
}

impl ParsedCreatureFeature {
    /// Annotations over the feature's name.
    #[must_use]
    pub fn name_annotations(&self) -> Vec<Located<TextAnnotation>> {
        recharge_name_annotations(self.limited_use.as_ref())
    }

    /// Annotations over the feature's description, including spell
    /// references from the spellcasting block.
    #[must_use]
    pub fn description_annotations(&self) -> Vec<Located<TextAnnotation>> {
        let mut annotations = self.other_description_annotations.clone();

        if let Some(spellcasting) = &self.spellcasting {
            for spells in spellcasting.spells_by_level.values() {
                annotations.extend(spells.iter().map(|spell| {
                    spell
                        .clone()
                        .map(TextAnnotation::CompendiumItemReference)
                }));
            }
            for group in &spellcasting.limited_use_spells {
                annotations.extend(group.spells.iter().map(|spell| {
                    spell
                        .clone()
                        .map(TextAnnotation::CompendiumItemReference)
                }));
            }
        }

        annotations
    }
}

/// Parsed spellcasting details, merged from fragments found anywhere in the
/// description.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spellcasting {
    /// Whether the casting is innate (taken from the feature's name).
    pub innate: bool,
    /// Spellcaster level.
    pub spellcaster_level: Option<i32>,
    /// The spellcasting ability.
    pub ability: Option<Ability>,
    /// The spell save DC.
    pub spell_save_dc: Option<i32>,
    /// The spell attack modifier.
    pub spell_attack_hit: Option<Modifier>,
    /// Spell slots per level.
    pub slots_by_level: BTreeMap<i32, i32>,
    /// Known spells per level; level 0 holds cantrips.
    pub spells_by_level: BTreeMap<i32, Vec<Located<CompendiumItemReferenceTextAnnotation>>>,
    /// Spells usable a limited number of times, grouped by their limit.
    pub limited_use_spells: Vec<LimitedUseSpellGroup>,
}

/// Spells sharing one limited-use rule; `None` means "at will".
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LimitedUseSpellGroup {
    /// The spells in the group.
    pub spells: Vec<Located<CompendiumItemReferenceTextAnnotation>>,
    /// How often the spells can be cast; `None` means at will.
    pub limited_use: Option<LimitedUse>,
}

/// One recognized fragment of a spellcasting block.
enum SpellcastingFragment {
    CasterLevel(i32),
    Ability(Ability),
    SaveDc(i32),
    AttackHit(Modifier),
    SpellsByLevel {
        level: i32,
        slots: Option<i32>,
        spells: Vec<Located<String>>,
    },
    SpellsByUse {
        limited_use: Option<LimitedUse>,
        spells: Vec<Located<String>>,
    },
}

/// The grammars for creature feature names and descriptions.
pub struct CreatureFeatureParser;

impl CreatureFeatureParser {
    /// The limited-use idioms recognized inside a feature or action NAME.
    ///
    /// Matches `3/day`, `recharge 5-6` (or a single threshold), and the
    /// rest-recharge phrasings, anywhere in the name. The name must be
    /// lowercased by the caller.
    #[must_use]
    pub fn limited_use_in_name() -> Parser<Located<LimitedUse>> {
        either4(
            zip(int(), string("/day")).with_range().map(|located| {
                let amount = located.value.0;
                Located::new(
                    LimitedUse {
                        amount,
                        recharge: Some(Recharge::Day),
                    },
                    located.range,
                )
            }),
            zip3(
                string("recharge "),
                zip(int(), string("-")).optional(),
                int(),
            )
            .with_range()
            .map(|located| {
                let (_, lower, upper) = located.value;
                let lower = lower.map_or(upper, |(low, _)| low);
                Located::new(
                    LimitedUse {
                        amount: 1,
                        recharge: Some(Recharge::TurnStart(
                            [lower, upper].into_iter().collect(),
                        )),
                    },
                    located.range,
                )
            }),
            string("recharges after a short or long rest")
                .with_range()
                .map(|located| {
                    Located::new(
                        LimitedUse {
                            amount: 1,
                            recharge: Some(Recharge::Rest {
                                short: true,
                                long: true,
                            }),
                        },
                        located.range,
                    )
                }),
            string("recharges after a long rest")
                .with_range()
                .map(|located| {
                    Located::new(
                        LimitedUse {
                            amount: 1,
                            recharge: Some(Recharge::Rest {
                                short: false,
                                long: true,
                            }),
                        },
                        located.range,
                    )
                }),
        )
        .skipping_any_before()
    }

    /// The spellcasting block grammar.
    ///
    /// Scans the whole description (lowercased by the caller) and merges
    /// every recognized fragment, whatever their order.
    #[must_use]
    pub fn spellcasting() -> Parser<Spellcasting> {
        any(
            either6(
                Self::caster_level(),
                Self::casting_ability(),
                Self::save_dc(),
                Self::attack_hit(),
                Self::spells_by_level(),
                Self::spells_by_use(),
            )
            .skipping_any_before(),
        )
        .map(|fragments| {
            let mut result = Spellcasting::default();
            for fragment in fragments {
                match fragment {
                    SpellcastingFragment::CasterLevel(level) => {
                        result.spellcaster_level = Some(level);
                    }
                    SpellcastingFragment::Ability(ability) => result.ability = Some(ability),
                    SpellcastingFragment::SaveDc(dc) => result.spell_save_dc = Some(dc),
                    SpellcastingFragment::AttackHit(modifier) => {
                        result.spell_attack_hit = Some(modifier);
                    }
                    SpellcastingFragment::SpellsByLevel {
                        level,
                        slots,
                        spells,
                    } => {
                        if let Some(slots) = slots {
                            result.slots_by_level.insert(level, slots);
                        }
                        result.spells_by_level.insert(
                            level,
                            spells.into_iter().map(spell_annotation).collect(),
                        );
                    }
                    SpellcastingFragment::SpellsByUse {
                        limited_use,
                        spells,
                    } => {
                        for spell in spells {
                            result.limited_use_spells.push(LimitedUseSpellGroup {
                                spells: vec![spell_annotation(spell)],
                                limited_use: limited_use.clone(),
                            });
                        }
                    }
                }
            }
            result
        })
    }

    /// `1st-level spellcaster`.
    fn caster_level() -> Parser<SpellcastingFragment> {
        zip3(
            int(),
            any(character(char::is_alphabetic)),
            string("-level spellcaster"),
        )
        .map(|(level, _, _)| SpellcastingFragment::CasterLevel(level))
    }

    /// `its spellcasting ability is wisdom`.
    fn casting_ability() -> Parser<SpellcastingFragment> {
        zip(string("spellcasting ability is "), word())
            .and_then(|(_, w)| w.parse::<Ability>().ok())
            .map(SpellcastingFragment::Ability)
    }

    /// `spell save dc 12`.
    fn save_dc() -> Parser<SpellcastingFragment> {
        zip(string("spell save dc "), int()).map(|(_, dc)| SpellcastingFragment::SaveDc(dc))
    }

    /// `+4 to hit with spell attacks`.
    fn attack_hit() -> Parser<SpellcastingFragment> {
        let modifier = zip(
            either(char('+').map(|_| 1), char('-').map(|_| -1)),
            int(),
        )
        .map(|(sign, value)| Modifier(sign * value));

        zip(modifier, string(" to hit with spell attacks"))
            .map(|(modifier, _)| SpellcastingFragment::AttackHit(modifier))
    }

    /// A multi-word spell name, located within the description.
    fn spell_name() -> Parser<Located<String>> {
        one_or_more(
            zip(word(), horizontal_whitespace().optional()).map(|(word, _)| word),
        )
        .map(|words| words.join(" "))
        .with_range()
    }

    /// A comma-separated list of spell names.
    fn spell_list() -> Parser<Vec<Located<String>>> {
        any(
            zip(
                Self::spell_name(),
                string(",").trimming(horizontal_whitespace()).optional(),
            )
            .map(|(name, _)| name),
        )
    }

    /// `cantrips (at will): light, sacred flame` or
    /// `1st level (3 slots): bless, cure wounds`.
    fn spells_by_level() -> Parser<SpellcastingFragment> {
        zip5(
            either(
                string("cantrips").map(|_| 0),
                zip3(int(), word(), string(" level")).map(|(level, _, _)| level),
            ),
            string(" ("),
            either(
                string("at will").map(|_| None),
                zip3(int(), string(" slot"), word().optional()).map(|(slots, _, _)| Some(slots)),
            ),
            string("): "),
            Self::spell_list(),
        )
        .map(|(level, _, slots, _, spells)| SpellcastingFragment::SpellsByLevel {
            level,
            slots,
            spells,
        })
    }

    /// `at will: detect magic` or `3/day each: dispel magic, fly`.
    fn spells_by_use() -> Parser<SpellcastingFragment> {
        zip3(
            either(
                string("at will").map(|_| None),
                zip(int(), string("/day each")).map(|(amount, _)| {
                    Some(LimitedUse {
                        amount,
                        recharge: Some(Recharge::Day),
                    })
                }),
            ),
            string(": "),
            Self::spell_list(),
        )
        .map(|(limited_use, _, spells)| SpellcastingFragment::SpellsByUse {
            limited_use,
            spells,
        })
    }
}

/// A located spell name as an unresolved compendium reference.
fn spell_annotation(
    name: Located<String>,
) -> Located<CompendiumItemReferenceTextAnnotation> {
    name.map(|text| {
        CompendiumItemReferenceTextAnnotation::new(text, Some(CompendiumItemType::Spell))
    })
}
