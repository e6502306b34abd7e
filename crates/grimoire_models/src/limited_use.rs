//! Limited-use and recharge rules.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// How many times an ability may be used, and how it comes back.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LimitedUse {
    /// Number of uses before the ability is spent.
    pub amount: i32,
    /// How spent uses recharge; `None` means they never do.
    pub recharge: Option<Recharge>,
}

/// When a spent limited-use ability recharges.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recharge {
    /// After a short and/or long rest.
    Rest {
        /// Recharges after a short rest.
        short: bool,
        /// Recharges after a long rest.
        long: bool,
    },
    /// At the start of each day.
    Day,
    /// At the start of the creature's turn, on a d6 roll within the set.
    TurnStart(BTreeSet<i32>),
}

impl LimitedUse {
    /// Human-readable summary, in compendium display style.
    #[must_use]
    pub fn display_string(&self) -> String {
        let amount = if self.amount == 1 {
            "1 time".to_string()
        } else {
            format!("{} times", self.amount)
        };

        match &self.recharge {
            None | Some(Recharge::Rest {
                short: false,
                long: false,
            }) => amount,
            Some(Recharge::Rest { short, long }) => {
                let rest = match (short, long) {
                    (true, true) => "Short or Long Rest",
                    (true, false) => "Short Rest",
                    _ => "Long Rest",
                };
                if self.amount == 1 {
                    format!("Recharges after a {rest}")
                } else {
                    format!("{amount} per {rest}")
                }
            }
            Some(Recharge::Day) => format!("{}/Day", self.amount),
            Some(Recharge::TurnStart(rolls)) => {
                let numbers = rolls
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("-");
                if self.amount == 1 {
                    format!("Recharge {numbers}")
                } else {
                    format!("{amount}, Recharge {numbers}")
                }
            }
        }
    }
}

impl fmt::Display for LimitedUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}
