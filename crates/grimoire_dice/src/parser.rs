//! The dice expression grammar.
//!
//! Recognizes `NdM` terms, plain numbers, and `+`/`-` compounds with optional
//! whitespace around the operators: `1d6`, `2d8 + 3`, `1d6 + 1d4 - 2`. A
//! bare signed modifier (`+5`) parses as `1d20 + 5`, the to-hit roll idiom.

use grimoire_combinator::{Parser, any, char, either, end, int, zip, zip3};
use grimoire_foundation::Located;

use crate::die::Die;
use crate::expression::{DiceExpression, Operator};

/// The grammar for dice expressions.
pub struct DiceExpressionParser;

impl DiceExpressionParser {
    /// A dice expression: a term followed by zero or more `(op, term)`
    /// pairs, folded left-associatively, or a bare signed modifier.
    #[must_use]
    pub fn expression() -> Parser<DiceExpression> {
        let compound = zip(
            Self::term(),
            any(zip(Self::operator(), Self::term())),
        )
        .map(|(first, rest)| {
            rest.into_iter().fold(first, |lhs, (op, rhs)| {
                DiceExpression::compound(lhs, op, rhs)
            })
        });

        either(compound, Self::modifier())
    }

    /// A dice expression that consumes its entire input.
    #[must_use]
    pub fn complete_expression() -> Parser<DiceExpression> {
        zip(Self::expression(), end()).map(|(expr, ())| expr)
    }

    /// Every dice expression occurrence in the text with at least one die.
    ///
    /// Plain-number matches (`dice_count() == 0`) are filtered out here so
    /// that ordinary numbers in prose are never flagged as dice.
    #[must_use]
    pub fn matches_in(text: &str) -> Vec<Located<DiceExpression>> {
        Self::expression()
            .and_then(|expr| (expr.dice_count() > 0).then_some(expr))
            .matches_in(text)
    }

    /// A dice term (`2d8`) or a plain number.
    fn term() -> Parser<DiceExpression> {
        either(Self::dice(), Self::number())
    }

    fn dice() -> Parser<DiceExpression> {
        zip3(int(), char('d'), int()).map(|(count, _, sides)| DiceExpression::Dice {
            count,
            die: Die::new(sides),
        })
    }

    fn number() -> Parser<DiceExpression> {
        int().map(DiceExpression::Number)
    }

    /// A bare `+N`/`-N` modifier, interpreted as a d20 roll.
    fn modifier() -> Parser<DiceExpression> {
        zip(Self::sign(), Self::number()).map(|(op, n)| {
            DiceExpression::compound(
                DiceExpression::Dice {
                    count: 1,
                    die: Die::D20,
                },
                op,
                n,
            )
        })
    }

    fn sign() -> Parser<Operator> {
        either(
            char('+').map(|_| Operator::Add),
            char('-').map(|_| Operator::Subtract),
        )
    }

    /// An operator with optional surrounding spaces.
    fn operator() -> Parser<Operator> {
        zip3(any(char(' ')), Self::sign(), any(char(' '))).map(|(_, op, _)| op)
    }
}
