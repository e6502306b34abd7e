//! Rolling dice expressions.

use grimoire_dice::{DiceExpression, RolledDiceExpression};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn rolls_stay_within_expression_bounds() {
    let expr: DiceExpression = "2d6 + 1d4 - 2".parse().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..200 {
        let rolled = expr.roll(&mut rng);
        let total = rolled.total();
        assert!(total >= expr.minimum(), "{total} below {}", expr.minimum());
        assert!(total <= expr.maximum(), "{total} above {}", expr.maximum());
    }
}

#[test]
fn roll_shape_mirrors_the_expression() {
    let expr: DiceExpression = "2d6 + 3".parse().unwrap();
    let rolled = expr.roll(&mut ChaCha8Rng::seed_from_u64(7));

    let RolledDiceExpression::Compound(dice, _, modifier) = &rolled else {
        panic!("expected a compound roll");
    };
    assert_eq!(dice.dice_count(), 2);
    assert_eq!(modifier.total(), 3);
    assert_eq!(rolled.total(), dice.total() + 3);
}

#[test]
fn seeded_rolls_are_reproducible() {
    let expr: DiceExpression = "8d6".parse().unwrap();
    let first = expr.roll(&mut ChaCha8Rng::seed_from_u64(99));
    let second = expr.roll(&mut ChaCha8Rng::seed_from_u64(99));
    assert_eq!(first, second);
}
