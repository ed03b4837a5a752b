//! Zerocoin coin denominations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::serialization::SerializationError;

/// A fixed discrete coin size in the zerocoin scheme.
///
/// Minted coins always have one of these face values, so an attacker cannot
/// be distinguished by an unusual amount. The set is closed and ordered;
/// every accumulator checkpoint carries exactly one value per denomination.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Denomination {
    /// One coin.
    One = 1,
    /// Five coins.
    Five = 5,
    /// Ten coins.
    Ten = 10,
    /// Fifty coins.
    Fifty = 50,
    /// One hundred coins.
    OneHundred = 100,
    /// Five hundred coins.
    FiveHundred = 500,
    /// One thousand coins.
    OneThousand = 1000,
    /// Five thousand coins.
    FiveThousand = 5000,
}

impl Denomination {
    /// The number of denominations.
    pub const COUNT: usize = 8;

    /// Returns an iterator over [`Denomination`] variants, smallest first.
    pub fn iter() -> impl Iterator<Item = Self> {
        use Denomination::*;
        [
            One,
            Five,
            Ten,
            Fifty,
            OneHundred,
            FiveHundred,
            OneThousand,
            FiveThousand,
        ]
        .into_iter()
    }

    /// The face value of this denomination, in whole coins.
    pub fn coins(&self) -> u32 {
        *self as u32
    }

    /// Returns the denomination with the face value `coins`, if there is one.
    pub fn from_coins(coins: u32) -> Option<Self> {
        Self::iter().find(|denomination| denomination.coins() == coins)
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coins())
    }
}

impl std::str::FromStr for Denomination {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .ok()
            .and_then(Denomination::from_coins)
            .ok_or(SerializationError::Parse("unknown coin denomination"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denominations_are_ordered_and_closed() {
        sable_test::init();

        let all: Vec<Denomination> = Denomination::iter().collect();
        assert_eq!(all.len(), Denomination::COUNT);

        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(all, sorted, "iter() yields denominations smallest first");

        for denomination in all {
            assert_eq!(Denomination::from_coins(denomination.coins()), Some(denomination));
            assert_eq!(denomination.to_string().parse::<Denomination>().unwrap(), denomination);
        }
    }

    #[test]
    fn unknown_denominations_are_rejected() {
        sable_test::init();

        assert_eq!(Denomination::from_coins(0), None);
        assert_eq!(Denomination::from_coins(25), None);
        "25".parse::<Denomination>().unwrap_err();
        "one".parse::<Denomination>().unwrap_err();
    }
}
