//! The parser type and its combinators.
//!
//! A [`Parser`] wraps a function from cursor to optional result. `None` means
//! "no match" and the cursor is left where it was; combinators that attempt
//! several steps snapshot the position up front and rewind on failure, so a
//! failed sequence never leaks partial consumption.

use std::rc::Rc;

use grimoire_foundation::Located;

use crate::cursor::Cursor;

/// A composable parsing function over a [`Cursor`].
///
/// Parsers are stateless values; cloning is cheap and composition produces
/// new parsers without mutating the originals.
pub struct Parser<A> {
    run: Rc<dyn Fn(&mut Cursor<'_>) -> Option<A>>,
}

impl<A> Clone for Parser<A> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<A: 'static> Parser<A> {
    /// Wraps a parse function.
    ///
    /// The function must uphold the failure contract: when it returns `None`
    /// the cursor is left exactly where it was.
    pub fn new(run: impl Fn(&mut Cursor<'_>) -> Option<A> + 'static) -> Self {
        Self { run: Rc::new(run) }
    }

    /// Runs this parser at the cursor's current position.
    pub fn parse(&self, cursor: &mut Cursor<'_>) -> Option<A> {
        (self.run)(cursor)
    }

    /// Runs this parser against the start of a string.
    #[must_use]
    pub fn run(&self, input: &str) -> Option<A> {
        let chars: Vec<char> = input.chars().collect();
        let mut cursor = Cursor::new(&chars);
        self.parse(&mut cursor)
    }

    /// Collects every located occurrence of this parser in the input.
    ///
    /// Scans left to right, skipping unrecognized characters between matches.
    #[must_use]
    pub fn matches_in(&self, input: &str) -> Vec<Located<A>> {
        any(self.clone().with_range().skipping_any_before())
            .run(input)
            .unwrap_or_default()
    }

    /// Transforms the parsed value.
    pub fn map<B: 'static>(self, f: impl Fn(A) -> B + 'static) -> Parser<B> {
        Parser::new(move |cursor| self.parse(cursor).map(&f))
    }

    /// Transforms the parsed value with a fallible function.
    ///
    /// When the function rejects the value, the parse fails and the cursor
    /// rewinds to where it was before this parser ran.
    pub fn and_then<B: 'static>(self, f: impl Fn(A) -> Option<B> + 'static) -> Parser<B> {
        Parser::new(move |cursor| {
            let start = cursor.pos();
            match self.parse(cursor).and_then(&f) {
                Some(b) => Some(b),
                None => {
                    cursor.set_pos(start);
                    None
                }
            }
        })
    }

    /// Tries this parser, then `other` if this one fails.
    ///
    /// Order matters for overlapping prefixes: put the more specific
    /// alternative first.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Parser::new(move |cursor| self.parse(cursor).or_else(|| other.parse(cursor)))
    }

    /// Runs this parser, then `other`, yielding both results.
    ///
    /// Rewinds to the starting position when either step fails.
    pub fn followed_by<B: 'static>(self, other: Parser<B>) -> Parser<(A, B)> {
        Parser::new(move |cursor| {
            let start = cursor.pos();
            let a = self.parse(cursor)?;
            match other.parse(cursor) {
                Some(b) => Some((a, b)),
                None => {
                    cursor.set_pos(start);
                    None
                }
            }
        })
    }

    /// Succeeds with `None` instead of failing, never consuming on the
    /// `None` path.
    #[must_use]
    pub fn optional(self) -> Parser<Option<A>> {
        Parser::new(move |cursor| Some(self.parse(cursor)))
    }

    /// Captures the character range consumed by this parser.
    #[must_use]
    pub fn with_range(self) -> Parser<Located<A>> {
        Parser::new(move |cursor| {
            let start = cursor.pos();
            let value = self.parse(cursor)?;
            Some(Located::new(value, start..cursor.pos()))
        })
    }

    /// Allows this parser to match anywhere in the remaining input by
    /// skipping characters until it succeeds.
    ///
    /// Statblock prose is unstructured; most grammars anchor on an idiom
    /// somewhere in a sentence rather than at the start.
    #[must_use]
    pub fn skipping_any_before(self) -> Self {
        skip_until(self).map(|(_, value)| value)
    }

    /// Parses `p?, self, p?`, discarding the results of `p`.
    #[must_use]
    pub fn trimming<B: 'static>(self, p: Parser<B>) -> Self {
        zip3(p.clone().optional(), self, p.optional()).map(|(_, value, _)| value)
    }
}

/// Repeats a parser zero or more times, collecting the results.
///
/// Stops as soon as the parser fails or succeeds without consuming, so a
/// nullable parser cannot loop forever.
pub fn any<A: 'static>(p: Parser<A>) -> Parser<Vec<A>> {
    Parser::new(move |cursor| {
        let mut results = Vec::new();
        loop {
            let before = cursor.pos();
            let Some(value) = p.parse(cursor) else {
                break;
            };
            results.push(value);
            if cursor.pos() == before {
                break;
            }
        }
        Some(results)
    })
}

/// Repeats a parser one or more times.
pub fn one_or_more<A: 'static>(p: Parser<A>) -> Parser<Vec<A>> {
    any(p).and_then(|results| if results.is_empty() { None } else { Some(results) })
}

/// Skips input until the given parser succeeds.
///
/// Succeeds with the skipped text and the parser's value, consuming both. If
/// the parser never succeeds the skip fails and the cursor rewinds.
pub fn skip_until<A: 'static>(p: Parser<A>) -> Parser<(String, A)> {
    Parser::new(move |cursor| {
        let start = cursor.pos();
        let mut attempt = start;
        loop {
            cursor.set_pos(attempt);
            if let Some(value) = p.parse(cursor) {
                let skipped = cursor.text(start..attempt);
                return Some((skipped, value));
            }
            if cursor.is_at_end() {
                break;
            }
            attempt += 1;
        }
        cursor.set_pos(start);
        None
    })
}

/// Succeeds only at the end of input.
#[must_use]
pub fn end() -> Parser<()> {
    Parser::new(|cursor| cursor.is_at_end().then_some(()))
}

/// Consumes and returns all remaining input.
#[must_use]
pub fn remainder() -> Parser<String> {
    Parser::new(|cursor| {
        let text = cursor.remaining_text();
        cursor.set_pos(cursor.len());
        Some(text)
    })
}

/// Sequences two parsers; see [`Parser::followed_by`].
pub fn zip<A: 'static, B: 'static>(a: Parser<A>, b: Parser<B>) -> Parser<(A, B)> {
    a.followed_by(b)
}

/// Sequences three parsers, rewinding wholly on failure.
pub fn zip3<A: 'static, B: 'static, C: 'static>(
    a: Parser<A>,
    b: Parser<B>,
    c: Parser<C>,
) -> Parser<(A, B, C)> {
    zip(a, zip(b, c)).map(|(a, (b, c))| (a, b, c))
}

/// Sequences four parsers, rewinding wholly on failure.
pub fn zip4<A: 'static, B: 'static, C: 'static, D: 'static>(
    a: Parser<A>,
    b: Parser<B>,
    c: Parser<C>,
    d: Parser<D>,
) -> Parser<(A, B, C, D)> {
    zip(a, zip3(b, c, d)).map(|(a, (b, c, d))| (a, b, c, d))
}

/// Sequences five parsers, rewinding wholly on failure.
pub fn zip5<A: 'static, B: 'static, C: 'static, D: 'static, E: 'static>(
    a: Parser<A>,
    b: Parser<B>,
    c: Parser<C>,
    d: Parser<D>,
    e: Parser<E>,
) -> Parser<(A, B, C, D, E)> {
    zip(a, zip4(b, c, d, e)).map(|(a, (b, c, d, e))| (a, b, c, d, e))
}

/// Sequences six parsers, rewinding wholly on failure.
pub fn zip6<A: 'static, B: 'static, C: 'static, D: 'static, E: 'static, F: 'static>(
    a: Parser<A>,
    b: Parser<B>,
    c: Parser<C>,
    d: Parser<D>,
    e: Parser<E>,
    f: Parser<F>,
) -> Parser<(A, B, C, D, E, F)> {
    zip(a, zip5(b, c, d, e, f)).map(|(a, (b, c, d, e, f))| (a, b, c, d, e, f))
}

/// Sequences seven parsers, rewinding wholly on failure.
pub fn zip7<A: 'static, B: 'static, C: 'static, D: 'static, E: 'static, F: 'static, G: 'static>(
    a: Parser<A>,
    b: Parser<B>,
    c: Parser<C>,
    d: Parser<D>,
    e: Parser<E>,
    f: Parser<F>,
    g: Parser<G>,
) -> Parser<(A, B, C, D, E, F, G)> {
    zip(a, zip6(b, c, d, e, f, g)).map(|(a, (b, c, d, e, f, g))| (a, b, c, d, e, f, g))
}

/// Tries alternatives in order, returning the first success.
pub fn either<A: 'static>(a: Parser<A>, b: Parser<A>) -> Parser<A> {
    a.or(b)
}

/// Tries three alternatives in order.
pub fn either3<A: 'static>(a: Parser<A>, b: Parser<A>, c: Parser<A>) -> Parser<A> {
    a.or(b).or(c)
}

/// Tries four alternatives in order.
pub fn either4<A: 'static>(a: Parser<A>, b: Parser<A>, c: Parser<A>, d: Parser<A>) -> Parser<A> {
    a.or(b).or(c).or(d)
}

/// Tries five alternatives in order.
pub fn either5<A: 'static>(
    a: Parser<A>,
    b: Parser<A>,
    c: Parser<A>,
    d: Parser<A>,
    e: Parser<A>,
) -> Parser<A> {
    a.or(b).or(c).or(d).or(e)
}

/// Tries six alternatives in order.
pub fn either6<A: 'static>(
    a: Parser<A>,
    b: Parser<A>,
    c: Parser<A>,
    d: Parser<A>,
    e: Parser<A>,
    f: Parser<A>,
) -> Parser<A> {
    a.or(b).or(c).or(d).or(e).or(f)
}
