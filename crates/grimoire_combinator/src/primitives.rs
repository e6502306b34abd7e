//! Lexical primitives.
//!
//! The leaf parsers everything else is built from: single characters,
//! literals, integers, words, and whitespace runs. Each one consumes a
//! maximal run on success and nothing at all on failure.

use crate::cursor::Cursor;
use crate::parser::Parser;

/// Consumes one character satisfying the predicate.
pub fn character(predicate: impl Fn(char) -> bool + 'static) -> Parser<char> {
    Parser::new(move |cursor| cursor.scan_char(&predicate))
}

/// Consumes exactly the given character.
#[must_use]
pub fn char(c: char) -> Parser<char> {
    character(move |next| next == c)
}

/// Consumes the given literal prefix.
#[must_use]
pub fn string(literal: &str) -> Parser<String> {
    let literal = literal.to_string();
    Parser::new(move |cursor| cursor.scan_str(&literal).then(|| literal.clone()))
}

/// Consumes a maximal run of ASCII digits and yields the integer value.
///
/// Fails without consuming when no digit is present or the run does not fit
/// an `i32`. Signs are handled by callers that need them.
#[must_use]
pub fn int() -> Parser<i32> {
    Parser::new(|cursor| {
        let start = cursor.pos();
        let mut digits = String::new();
        while let Some(c) = cursor.scan_char(|c| c.is_ascii_digit()) {
            digits.push(c);
        }
        if digits.is_empty() {
            return None;
        }
        match digits.parse() {
            Ok(n) => Some(n),
            Err(_) => {
                cursor.set_pos(start);
                None
            }
        }
    })
}

/// Consumes a maximal non-empty run of letters, digits, or apostrophes.
///
/// Apostrophe variants cover spell names like "hunter's mark" as they appear
/// in imported statblock text.
#[must_use]
pub fn word() -> Parser<String> {
    Parser::new(|cursor| {
        let mut word = String::new();
        while let Some(c) =
            cursor.scan_char(|c| c.is_alphanumeric() || matches!(c, '\'' | '＇' | '’'))
        {
            word.push(c);
        }
        if word.is_empty() { None } else { Some(word) }
    })
}

/// Consumes a non-empty run of spaces and tabs.
#[must_use]
pub fn horizontal_whitespace() -> Parser<String> {
    whitespace_run(|c| matches!(c, ' ' | '\t'))
}

/// Consumes a non-empty run of carriage returns and newlines.
#[must_use]
pub fn vertical_whitespace() -> Parser<String> {
    whitespace_run(|c| matches!(c, '\r' | '\n'))
}

/// Consumes a non-empty run of horizontal or vertical whitespace.
#[must_use]
pub fn whitespace() -> Parser<String> {
    whitespace_run(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

fn whitespace_run(predicate: fn(char) -> bool) -> Parser<String> {
    Parser::new(move |cursor: &mut Cursor<'_>| {
        let mut run = String::new();
        while let Some(c) = cursor.scan_char(predicate) {
            run.push(c);
        }
        if run.is_empty() { None } else { Some(run) }
    })
}
