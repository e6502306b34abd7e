//! The combinator failure contract.
//!
//! A parser that fails must leave the cursor exactly where it was. `zip`
//! rewinds wholly, `either` relies on that rewind, and repetition stops
//! without consuming on its final failed attempt.

use grimoire_combinator::{
    Cursor, any, char, either, either3, int, one_or_more, skip_until, string, word, zip, zip3,
};
use proptest::prelude::*;

fn cursor_after_failure<A: 'static>(parser: &grimoire_combinator::Parser<A>, input: &str) -> usize {
    let chars: Vec<char> = input.chars().collect();
    let mut cursor = Cursor::new(&chars);
    assert!(parser.parse(&mut cursor).is_none(), "parser unexpectedly matched {input:?}");
    cursor.pos()
}

#[test]
fn zip_failure_consumes_nothing() {
    let parser = zip3(string("dc "), int(), string(" wisdom"));
    // first two steps match, the third does not
    assert_eq!(cursor_after_failure(&parser, "dc 13 dexterity"), 0);
}

#[test]
fn either_tries_alternatives_from_the_same_position() {
    let parser = either3(
        zip(string("reach "), int()).map(|(_, n)| n),
        zip(string("range "), int()).map(|(_, n)| n),
        int(),
    );
    assert_eq!(parser.run("reach 5 ft."), Some(5));
    assert_eq!(parser.run("range 30/120 ft."), Some(30));
    assert_eq!(parser.run("15 ft."), Some(15));
    assert_eq!(parser.run("ft."), None);
}

#[test]
fn one_or_more_failure_consumes_nothing() {
    let parser = one_or_more(char('x'));
    assert_eq!(cursor_after_failure(&parser, "yyy"), 0);
}

#[test]
fn skip_until_failure_consumes_nothing() {
    let parser = skip_until(string("saving throw"));
    assert_eq!(cursor_after_failure(&parser, "no such phrase anywhere"), 0);
}

#[test]
fn and_then_rejection_consumes_nothing() {
    let parser = word().and_then(|w| (w.len() > 10).then_some(w));
    assert_eq!(cursor_after_failure(&parser, "short words only"), 0);
}

#[test]
fn repetition_collects_until_first_failure() {
    let parser = any(zip(int(), char(',').optional()).map(|(n, _)| n));
    assert_eq!(parser.run("1,2,3 and more"), Some(vec![1, 2, 3]));
}

proptest! {
    /// For any input, a failing parser leaves the cursor untouched.
    #[test]
    fn failure_never_consumes(input in ".{0,80}") {
        let parsers: Vec<grimoire_combinator::Parser<String>> = vec![
            string("melee weapon attack"),
            zip3(int(), char('d'), int()).map(|(n, _, s)| format!("{n}d{s}")),
            one_or_more(char('!')).map(|v| v.into_iter().collect()),
            skip_until(string("damage")).map(|(skipped, _)| skipped),
            word().and_then(|w| w.parse::<i32>().ok()).map(|n| n.to_string()),
        ];
        for parser in parsers {
            let chars: Vec<char> = input.chars().collect();
            let mut cursor = Cursor::new(&chars);
            if parser.parse(&mut cursor).is_none() {
                prop_assert_eq!(cursor.pos(), 0);
            }
        }
    }

    /// `either` behaves exactly like "first success wins".
    #[test]
    fn either_equals_manual_alternation(input in ".{0,80}") {
        let a = zip(int(), string("d")).map(|(n, _)| n);
        let b = int();
        let expected = a.run(&input).or_else(|| b.run(&input));
        prop_assert_eq!(either(a, b).run(&input), expected);
    }
}
