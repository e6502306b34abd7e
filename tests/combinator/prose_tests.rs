//! Matching idioms anywhere in unstructured prose.
//!
//! Statblock grammars anchor on phrases in the middle of sentences; these
//! tests exercise skipping, range capture, and repeated scanning the way the
//! domain grammars use them.

use grimoire_combinator::{any, int, skip_until, string, whitespace, word, zip, zip3};

#[test]
fn skipping_any_before_anchors_mid_sentence() {
    let parser = zip3(
        string("dc "),
        int(),
        word().skipping_any_before(),
    )
    .skipping_any_before();

    let result = parser.run("The target must succeed on a dc 13 constitution saving throw.");
    let (_, dc, ability) = result.unwrap();
    assert_eq!(dc, 13);
    assert_eq!(ability, "constitution");
}

#[test]
fn skip_until_keeps_the_skipped_text() {
    let parser = skip_until(string("to hit"));
    let (skipped, _) = parser.run("+4 to hit, reach 5 ft.").unwrap();
    assert_eq!(skipped, "+4 ");
}

#[test]
fn matches_in_scans_the_whole_string() {
    let parser = zip(int(), zip(string(" ft"), string(".").optional())).map(|(n, _)| n);
    let matches = parser.matches_in("reach 5 ft., range 20/60 ft., radius 15 ft.");
    let distances: Vec<i32> = matches.iter().map(|m| m.value).collect();
    assert_eq!(distances, vec![5, 60, 15]);
}

#[test]
fn matches_in_ranges_index_characters_not_bytes() {
    // the em dash is multi-byte; ranges must still count characters
    let text = "the target — at most 3 of them — takes damage";
    let matches = int().matches_in(text);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].value, 3);
    assert_eq!(matches[0].text_in(text), "3");
}

#[test]
fn with_range_is_scoped_to_the_match() {
    let located = zip(int(), string("d6"))
        .with_range()
        .skipping_any_before()
        .run("deals 2d6 damage")
        .unwrap();
    assert_eq!(located.range, 6..9);
    assert_eq!(located.text_in("deals 2d6 damage"), "2d6");
}

#[test]
fn words_and_whitespace_tokenize_prose() {
    let parser = any(zip(word(), whitespace().optional()).map(|(w, _)| w));
    assert_eq!(
        parser.run("cure wounds at dawn"),
        Some(vec![
            "cure".to_string(),
            "wounds".to_string(),
            "at".to_string(),
            "dawn".to_string(),
        ])
    );
}
