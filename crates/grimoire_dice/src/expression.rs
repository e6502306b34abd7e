//! The recursive dice expression model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::die::Die;
use crate::parser::DiceExpressionParser;

/// A dice expression: a dice term, a plain number, or a compound of two
/// sub-expressions joined by an operator.
///
/// The evaluated total is the sum over sub-expressions; rendering produces
/// the canonical `1d6 + 2` form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiceExpression {
    /// A number of dice of the same size, e.g. `2d8`.
    Dice {
        /// How many dice to roll.
        count: i32,
        /// The die to roll.
        die: Die,
    },
    /// A constant modifier.
    Number(i32),
    /// Two sub-expressions joined by `+` or `-`.
    Compound(Box<DiceExpression>, Operator, Box<DiceExpression>),
}

impl DiceExpression {
    /// Creates a dice term.
    #[must_use]
    pub const fn dice(count: i32, sides: i32) -> Self {
        Self::Dice {
            count,
            die: Die::new(sides),
        }
    }

    /// Creates a compound of two expressions.
    #[must_use]
    pub fn compound(lhs: Self, op: Operator, rhs: Self) -> Self {
        Self::Compound(Box::new(lhs), op, Box::new(rhs))
    }

    /// The lowest total this expression can evaluate to.
    #[must_use]
    pub fn minimum(&self) -> i32 {
        match self {
            Self::Dice { count, .. } => *count,
            Self::Number(n) => *n,
            Self::Compound(lhs, op, rhs) => match op {
                Operator::Add => lhs.minimum() + rhs.minimum(),
                Operator::Subtract => lhs.minimum() - rhs.maximum(),
            },
        }
    }

    /// The highest total this expression can evaluate to.
    #[must_use]
    pub fn maximum(&self) -> i32 {
        match self {
            Self::Dice { count, die } => count * die.sides,
            Self::Number(n) => *n,
            Self::Compound(lhs, op, rhs) => match op {
                Operator::Add => lhs.maximum() + rhs.maximum(),
                Operator::Subtract => lhs.maximum() - rhs.minimum(),
            },
        }
    }

    /// The total number of dice in this expression.
    ///
    /// Zero means the expression is just arithmetic on constants; such
    /// matches are not worth flagging as dice in prose.
    #[must_use]
    pub fn dice_count(&self) -> i32 {
        match self {
            Self::Dice { count, .. } => *count,
            Self::Number(_) => 0,
            Self::Compound(lhs, _, rhs) => lhs.dice_count() + rhs.dice_count(),
        }
    }

    /// This expression with every term negated.
    #[must_use]
    pub fn opposite(&self) -> Self {
        match self {
            Self::Dice { count, die } => Self::Dice {
                count: -count,
                die: *die,
            },
            Self::Number(n) => Self::Number(-n),
            Self::Compound(lhs, op, rhs) => {
                Self::compound(lhs.opposite(), *op, rhs.opposite())
            }
        }
    }

    /// Rewrites the expression so that dice counts are non-negative and
    /// zero-count dice and literal zeros are removed.
    ///
    /// Returns `None` when nothing remains.
    #[must_use]
    pub fn normalized(&self) -> Option<Self> {
        match self {
            Self::Compound(lhs, op, rhs) if rhs.ordinal().is_some_and(|n| n < 0) => Some(
                Self::compound(lhs.as_ref().clone(), op.opposite(), rhs.opposite()),
            ),
            Self::Compound(lhs, op, rhs) => match (lhs.normalized(), rhs.normalized()) {
                (Some(lhs), Some(rhs)) => Some(Self::compound(lhs, *op, rhs)),
                (None, Some(rhs)) => Some(if op.is_subtract() { rhs.opposite() } else { rhs }),
                (Some(lhs), None) => Some(lhs),
                (None, None) => None,
            },
            Self::Dice { count: 0, .. } | Self::Number(0) => None,
            _ => Some(self.clone()),
        }
    }

    /// The scalar magnitude of a non-compound expression: the dice count of
    /// a dice term or the value of a number.
    fn ordinal(&self) -> Option<i32> {
        match self {
            Self::Dice { count, .. } => Some(*count),
            Self::Number(n) => Some(*n),
            Self::Compound(..) => None,
        }
    }
}

impl fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dice { count, die } => write!(f, "{count}{die}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Compound(lhs, op, rhs) => write!(f, "{lhs} {op} {rhs}"),
        }
    }
}

/// Error returned when a string is not a dice expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("not a valid dice expression")]
pub struct ParseDiceExpressionError;

impl FromStr for DiceExpression {
    type Err = ParseDiceExpressionError;

    /// Parses a complete dice expression; trailing input is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DiceExpressionParser::complete_expression()
            .run(s)
            .ok_or(ParseDiceExpressionError)
    }
}

/// The operator joining two sub-expressions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition.
    Add,
    /// Subtraction.
    Subtract,
}

impl Operator {
    /// Returns true for subtraction.
    #[must_use]
    pub const fn is_subtract(self) -> bool {
        matches!(self, Self::Subtract)
    }

    /// The inverse operator.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Add => Self::Subtract,
            Self::Subtract => Self::Add,
        }
    }

    /// Applies the operator to two totals.
    #[must_use]
    pub const fn apply(self, lhs: i32, rhs: i32) -> i32 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "+",
            Self::Subtract => "-",
        })
    }
}
