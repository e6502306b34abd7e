//! Versioned parse cache.
//!
//! Domain grammars are cheap but not free, and their results are persisted
//! alongside the raw text they were computed from. `Parseable` couples a raw
//! input with the cached result of running a grammar over it, tagged with the
//! grammar's version so that a grammar change triggers a re-parse the next
//! time the value is accessed instead of serving stale structure.

use serde::{Deserialize, Serialize};

/// A named, versioned grammar that turns raw input into a structured result.
///
/// Failure to recognize anything is not an error: `parse` returns `None` and
/// the raw input remains the authoritative representation.
///
/// Versions are carried by parser *instances* rather than global constants so
/// tests can construct a parser with a custom version without process-wide
/// state. Bump the version whenever a change to the grammar could alter
/// previously cached results.
pub trait DomainParser {
    /// The raw input type, e.g. a name/description pair.
    type Input;
    /// The structured result type.
    type Output;

    /// A stable name identifying this parser in cached results.
    fn name(&self) -> &str;

    /// The version of this parser's recognition rules.
    fn version(&self) -> &str;

    /// Runs the grammar. `None` means nothing was recognized.
    fn parse(&self, input: &Self::Input) -> Option<Self::Output>;
}

/// The cached outcome of running a [`DomainParser`].
///
/// `value` is `None` when the grammar recognized nothing; that outcome is
/// cached too, so unparseable text is not re-parsed on every access.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParserResult<O> {
    /// The structured result, if the grammar recognized anything.
    pub value: Option<O>,
    /// Name of the parser that produced this result.
    pub parser_name: String,
    /// Version of the parser that produced this result.
    pub version: String,
}

/// Raw input coupled with a lazily computed, versioned parse result.
///
/// The input is authoritative; the result is a cache. Mutating the input
/// invalidates the cache, and a version mismatch on access triggers a
/// re-parse. Access is single-writer: the owning entity serializes mutation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parseable<I, O> {
    input: I,
    result: Option<ParserResult<O>>,
}

impl<I, O> Parseable<I, O> {
    /// Wraps a raw input with an empty cache.
    #[must_use]
    pub const fn new(input: I) -> Self {
        Self {
            input,
            result: None,
        }
    }

    /// Wraps a raw input with a previously persisted result.
    #[must_use]
    pub const fn with_result(input: I, result: ParserResult<O>) -> Self {
        Self {
            input,
            result: Some(result),
        }
    }

    /// The raw input.
    pub const fn input(&self) -> &I {
        &self.input
    }

    /// The cached result, if any parse has run.
    pub const fn result(&self) -> Option<&ParserResult<O>> {
        self.result.as_ref()
    }

    /// The structured value, if a parse has run and recognized anything.
    pub fn value(&self) -> Option<&O> {
        self.result.as_ref().and_then(|r| r.value.as_ref())
    }

    /// Mutable access to the structured value.
    ///
    /// For in-place updates that refine the cached result (e.g. resolving a
    /// reference it contains) without invalidating the cache.
    pub fn value_mut(&mut self) -> Option<&mut O> {
        self.result.as_mut().and_then(|r| r.value.as_mut())
    }

    /// Drops the cached result, forcing a re-parse on next access.
    pub fn invalidate(&mut self) {
        self.result = None;
    }

    /// Runs the parser unless a result from the same parser name and version
    /// is already cached.
    ///
    /// Returns whether parsing ran. Calling this twice in a row with the same
    /// parser is a no-op the second time.
    pub fn parse_if_needed<P>(&mut self, parser: &P) -> bool
    where
        P: DomainParser<Input = I, Output = O>,
    {
        if let Some(result) = &self.result {
            if result.version == parser.version() && result.parser_name == parser.name() {
                return false;
            }
        }

        self.result = Some(ParserResult {
            value: parser.parse(&self.input),
            parser_name: parser.name().to_string(),
            version: parser.version().to_string(),
        });

        true
    }
}

impl<I: PartialEq, O> Parseable<I, O> {
    /// Replaces the input, invalidating the cache if the input changed.
    pub fn set_input(&mut self, input: I) {
        if self.input != input {
            self.result = None;
        }
        self.input = input;
    }
}

impl<I, O> From<I> for Parseable<I, O> {
    fn from(input: I) -> Self {
        Self::new(input)
    }
}
