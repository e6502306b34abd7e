//! Rolling dice expressions.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::die::Die;
use crate::expression::{DiceExpression, Operator};

/// A rolled instance of a [`DiceExpression`], keeping each die's value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RolledDiceExpression {
    /// Rolled dice of one size. Values are negative when the term was
    /// subtracted.
    Dice {
        /// The die that was rolled.
        die: Die,
        /// The individual rolled values.
        values: Vec<i32>,
    },
    /// A constant modifier.
    Number(i32),
    /// Two rolled sub-expressions joined by an operator.
    Compound(
        Box<RolledDiceExpression>,
        Operator,
        Box<RolledDiceExpression>,
    ),
}

impl RolledDiceExpression {
    /// The evaluated total of this roll.
    #[must_use]
    pub fn total(&self) -> i32 {
        match self {
            Self::Dice { values, .. } => values.iter().sum(),
            Self::Number(n) => *n,
            Self::Compound(lhs, op, rhs) => op.apply(lhs.total(), rhs.total()),
        }
    }

    /// The number of dice rolled.
    #[must_use]
    pub fn dice_count(&self) -> usize {
        match self {
            Self::Dice { values, .. } => values.len(),
            Self::Number(_) => 0,
            Self::Compound(lhs, _, rhs) => lhs.dice_count() + rhs.dice_count(),
        }
    }
}

impl DiceExpression {
    /// Rolls this expression with the given random number generator.
    pub fn roll(&self, rng: &mut impl Rng) -> RolledDiceExpression {
        match self {
            Self::Dice { count, die } => {
                let sign = if *count < 0 { -1 } else { 1 };
                let values = (0..count.unsigned_abs())
                    .map(|_| sign * rng.gen_range(1..=die.sides.max(1)))
                    .collect();
                RolledDiceExpression::Dice { die: *die, values }
            }
            Self::Number(n) => RolledDiceExpression::Number(*n),
            Self::Compound(lhs, op, rhs) => RolledDiceExpression::Compound(
                Box::new(lhs.roll(rng)),
                *op,
                Box::new(rhs.roll(rng)),
            ),
        }
    }
}
