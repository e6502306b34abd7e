//! A single die.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A die with a fixed number of sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    /// Number of sides.
    pub sides: i32,
}

impl Die {
    /// A four-sided die.
    pub const D4: Self = Self::new(4);
    /// A six-sided die.
    pub const D6: Self = Self::new(6);
    /// An eight-sided die.
    pub const D8: Self = Self::new(8);
    /// A ten-sided die.
    pub const D10: Self = Self::new(10);
    /// A twelve-sided die.
    pub const D12: Self = Self::new(12);
    /// A twenty-sided die.
    pub const D20: Self = Self::new(20);
    /// A percentile die.
    pub const D100: Self = Self::new(100);

    /// Creates a die with the given number of sides.
    #[must_use]
    pub const fn new(sides: i32) -> Self {
        Self { sides }
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides)
    }
}
