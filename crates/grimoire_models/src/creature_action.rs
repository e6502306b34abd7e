//! The creature action grammar and its parsed model.
//!
//! Recognizes the conventional weapon attack stat line:
//!
//! ```text
//! Melee Weapon Attack: +4 to hit, reach 5 ft., one target.
//! Hit: 5 (1d6 + 2) slashing damage.
//! ```
//!
//! followed by any number of damage clauses, plain or save-gated. The
//! grammar anchors on idioms anywhere in the sentence rather than parsing it
//! formally; text it does not recognize is skipped.

use serde::{Deserialize, Serialize};

use grimoire_combinator::{
    Parser, any, char, either, horizontal_whitespace, int, skip_until, string, word, zip, zip3,
    zip4, zip5, zip7,
};
use grimoire_dice::{DiceExpression, DiceExpressionParser};
use grimoire_foundation::Located;

use crate::ability::{Ability, Modifier};
use crate::annotation::TextAnnotation;
use crate::damage::DamageType;
use crate::limited_use::{LimitedUse, Recharge};

/// Structure extracted from a creature action's name and description.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedCreatureAction {
    /// Limited-use rule parsed from the NAME; range scoped to the name.
    pub limited_use: Option<Located<LimitedUse>>,
    /// The recognized action, when the description matched a known shape.
    pub action: Option<CreatureActionModel>,
    /// Remaining annotations over the description, scoped to its offsets.
    pub other_description_annotations: Vec<Located<TextAnnotation>>,
}

impl ParsedCreatureAction {
    /// Builds a parse result, or `None` when nothing was recognized.
    #[must_use]
    pub fn from_parts(
        limited_use: Option<Located<LimitedUse>>,
        action: Option<CreatureActionModel>,
        other_description_annotations: Vec<Located<TextAnnotation>>,
    ) -> Option<Self> {
        if limited_use.is_none() && action.is_none() && other_description_annotations.is_empty() {
            return None;
        }
        Some(Self {
            limited_use,
            action,
            other_description_annotations,
        })
    }

    /// Annotations over the action's name.
    ///
    /// A recharge-roll limited use gets a `1d6` annotation so the roll can
    /// be made from the name itself.
    #[must_use]
    pub fn name_annotations(&self) -> Vec<Located<TextAnnotation>> {
        recharge_name_annotations(self.limited_use.as_ref())
    }

    /// Annotations over the action's description.
    #[must_use]
    pub fn description_annotations(&self) -> &[Located<TextAnnotation>] {
        &self.other_description_annotations
    }
}

/// A `1d6` annotation over the name for recharge-roll limited uses.
pub(crate) fn recharge_name_annotations(
    limited_use: Option<&Located<LimitedUse>>,
) -> Vec<Located<TextAnnotation>> {
    limited_use
        .filter(|located| matches!(located.value.recharge, Some(Recharge::TurnStart(_))))
        .map(|located| {
            vec![located.clone().map(|_| {
                TextAnnotation::DiceExpression(DiceExpression::dice(1, 6))
            })]
        })
        .unwrap_or_default()
}

/// The recognized shapes of a creature action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureActionModel {
    /// A weapon attack stat line.
    WeaponAttack(WeaponAttack),
}

/// A parsed weapon attack stat line.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeaponAttack {
    /// Melee or ranged.
    pub attack_type: AttackType,
    /// Reach or range.
    pub range: AttackRange,
    /// The to-hit modifier.
    pub hit_modifier: Modifier,
    /// Damage on a hit.
    pub effects: Vec<ActionEffect>,
}

/// Whether an attack is melee or ranged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackType {
    /// A melee attack.
    Melee,
    /// A ranged attack.
    Ranged,
}

/// The distance an attack covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackRange {
    /// Melee reach in feet.
    Reach(i32),
    /// Normal and optional long range in feet.
    Range(i32, Option<i32>),
}

/// One damage effect of an attack.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionEffect {
    /// Unconditional damage.
    Damage(Damage),
    /// Damage gated behind a saving throw.
    SaveableDamage(SaveableDamage),
}

/// A damage clause: `5 (1d6 + 2) slashing damage`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Damage {
    /// The static (average) damage.
    pub static_damage: i32,
    /// The dice roll, when the clause spells one out.
    pub damage_expression: Option<DiceExpression>,
    /// The damage type.
    pub damage_type: DamageType,
}

/// A save-gated damage clause.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SaveableDamage {
    /// The ability the save is made with.
    pub ability: Ability,
    /// The save DC.
    pub dc: i32,
    /// The damage on a failed save.
    pub damage: Damage,
    /// What a successful save does to the damage.
    pub save_effect: SaveEffect,
}

/// The effect of a successful save on damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaveEffect {
    /// No damage on a success.
    None,
    /// Half damage on a success.
    Half,
}

/// The grammar for creature action descriptions.
pub struct CreatureActionParser;

impl CreatureActionParser {
    /// Parses an action description into a recognized shape.
    ///
    /// The input is lowercased before matching; statblock capitalization is
    /// not significant.
    #[must_use]
    pub fn parse(description: &str) -> Option<CreatureActionModel> {
        Self::weapon_attack()
            .run(&description.to_lowercase())
            .map(CreatureActionModel::WeaponAttack)
    }

    /// The weapon attack stat line.
    fn weapon_attack() -> Parser<WeaponAttack> {
        zip5(
            either(
                string("melee").map(|_| AttackType::Melee),
                string("ranged").map(|_| AttackType::Ranged),
            ),
            string("weapon attack").skipping_any_before(),
            Self::hit_modifier(),
            Self::attack_range(),
            Self::effects(),
        )
        .map(|(attack_type, _, hit_modifier, range, effects)| WeaponAttack {
            attack_type,
            range,
            hit_modifier,
            effects,
        })
    }

    /// `+4 to hit` with its sign.
    fn hit_modifier() -> Parser<Modifier> {
        zip3(
            either(char('+').map(|_| 1), char('-').map(|_| -1)),
            int(),
            string("to hit").skipping_any_before(),
        )
        .skipping_any_before()
        .map(|(sign, value, _)| Modifier(sign * value))
    }

    /// `reach 5 ft.` or `range 30/120 ft.`.
    fn attack_range() -> Parser<AttackRange> {
        either(
            zip3(
                string("reach"),
                int().skipping_any_before(),
                string(" ft").skipping_any_before(),
            )
            .skipping_any_before()
            .map(|(_, reach, _)| AttackRange::Reach(reach)),
            zip4(
                string("range"),
                int().skipping_any_before(),
                zip(char('/'), int()).optional(),
                string(" ft").skipping_any_before(),
            )
            .skipping_any_before()
            .map(|(_, normal, long, _)| AttackRange::Range(normal, long.map(|(_, n)| n))),
        )
    }

    /// Zero or more damage effects, anywhere in the rest of the text.
    fn effects() -> Parser<Vec<ActionEffect>> {
        any(Self::action_effect())
    }

    /// One damage effect. The save-gated clause shares a prefix with the
    /// plain clause and is strictly more specific, so it must come first.
    fn action_effect() -> Parser<ActionEffect> {
        either(
            Self::saveable_damage().map(ActionEffect::SaveableDamage),
            Self::damage().map(ActionEffect::Damage),
        )
        .skipping_any_before()
    }

    /// `5 (1d6 + 2) slashing damage`; the parenthesized roll is optional.
    fn damage() -> Parser<Damage> {
        zip4(
            int(),
            zip3(
                char('(').skipping_any_before(),
                DiceExpressionParser::expression(),
                char(')'),
            )
            .optional(),
            word()
                .and_then(|w| w.parse::<DamageType>().ok())
                .skipping_any_before(),
            string("damage").skipping_any_before(),
        )
        .map(|(static_damage, expression, damage_type, _)| Damage {
            static_damage,
            damage_expression: expression.map(|(_, dice, _)| dice),
            damage_type,
        })
    }

    /// `DC 13 constitution saving throw ... damage ... on a failed save`,
    /// optionally `or half as much damage on a successful one`.
    fn saveable_damage() -> Parser<SaveableDamage> {
        zip7(
            string("dc "),
            int(),
            word()
                .and_then(|w| w.parse::<Ability>().ok())
                .skipping_any_before(),
            zip(horizontal_whitespace(), string("saving throw")).map(|(_, s)| s),
            Self::damage().skipping_any_before(),
            string("on a failed save").skipping_any_before(),
            skip_until(char('.')).map(|(sentence, _)| {
                string("half as much damage")
                    .skipping_any_before()
                    .run(&sentence)
                    .is_some()
            }),
        )
        .map(|(_, dc, ability, _, damage, _, half)| SaveableDamage {
            ability,
            dc,
            damage,
            save_effect: if half { SaveEffect::Half } else { SaveEffect::None },
        })
    }
}
