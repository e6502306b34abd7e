//! Source range tracking for parsed values.
//!
//! `Located` pairs a parsed value with the position it was recognized at in
//! the original prose, so the text can later be rendered with the recognized
//! construct highlighted in place.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A parsed value plus the half-open character range it was parsed from.
///
/// Ranges are character offsets into the source string, not byte offsets.
/// A `Located` produced by a parser always lies within the bounds of the
/// string that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Located<T> {
    /// The parsed value.
    pub value: T,
    /// Character offsets (half-open) into the source string.
    pub range: Range<usize>,
}

impl<T> Located<T> {
    /// Creates a located value.
    #[must_use]
    pub const fn new(value: T, range: Range<usize>) -> Self {
        Self { value, range }
    }

    /// Maps the value while keeping the range.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Located<U> {
        Located {
            value: f(self.value),
            range: self.range,
        }
    }

    /// Borrows the value while keeping the range.
    #[must_use]
    pub fn as_ref(&self) -> Located<&T> {
        Located {
            value: &self.value,
            range: self.range.clone(),
        }
    }

    /// Returns the text this value covers in the given source string.
    ///
    /// The range is in characters, so this walks the string rather than
    /// slicing bytes.
    #[must_use]
    pub fn text_in(&self, source: &str) -> String {
        source
            .chars()
            .skip(self.range.start)
            .take(self.range.len())
            .collect()
    }
}
