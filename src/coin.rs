//! Coin denominations and the per-denomination tally.
//!
//! The station only knows three coins, so the tally is a fixed set of
//! counters rather than a general map.

use crate::error::StationError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A coin accepted by the pay station.
///
/// # Examples
///
/// ```
/// use pay_station::Coin;
///
/// let coin = Coin::try_from(25u32).unwrap();
/// assert_eq!(coin, Coin::Quarter);
/// assert!(Coin::try_from(17u32).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Coin {
    /// 5 cents.
    Nickel,
    /// 10 cents.
    Dime,
    /// 25 cents.
    Quarter,
}

impl Coin {
    /// Every accepted denomination, in ascending value.
    pub const ALL: [Coin; 3] = [Coin::Nickel, Coin::Dime, Coin::Quarter];

    /// Face value in cents.
    pub const fn cents(self) -> u32 {
        match self {
            Coin::Nickel => 5,
            Coin::Dime => 10,
            Coin::Quarter => 25,
        }
    }
}

impl TryFrom<u32> for Coin {
    type Error = StationError;

    fn try_from(value: u32) -> std::result::Result<Self, Self::Error> {
        match value {
            5 => Ok(Coin::Nickel),
            10 => Ok(Coin::Dime),
            25 => Ok(Coin::Quarter),
            _ => Err(StationError::IllegalCoin { value }),
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}c", self.cents())
    }
}

/// Number of coins of each denomination inserted since the last reset.
///
/// There is always exactly one count per [`Coin`]; a fresh tally has all
/// counts at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CoinTally {
    nickels: u32,
    dimes: u32,
    quarters: u32,
}

impl CoinTally {
    /// A tally with every count at zero.
    pub const EMPTY: Self = CoinTally {
        nickels: 0,
        dimes: 0,
        quarters: 0,
    };

    /// Returns how many coins of the given denomination were counted.
    pub fn count(&self, coin: Coin) -> u32 {
        match coin {
            Coin::Nickel => self.nickels,
            Coin::Dime => self.dimes,
            Coin::Quarter => self.quarters,
        }
    }

    /// Counts one more coin of the given denomination.
    pub fn record(&mut self, coin: Coin) {
        let slot = match coin {
            Coin::Nickel => &mut self.nickels,
            Coin::Dime => &mut self.dimes,
            Coin::Quarter => &mut self.quarters,
        };
        *slot += 1;
    }

    /// Sets every count back to zero.
    pub fn clear(&mut self) {
        *self = Self::EMPTY;
    }

    /// Returns `true` if no coins are counted.
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Iterates `(coin, count)` pairs in ascending denomination order.
    pub fn iter(&self) -> impl Iterator<Item = (Coin, u32)> + '_ {
        Coin::ALL.into_iter().map(move |coin| (coin, self.count(coin)))
    }

    /// Value of all counted coins in cents.
    pub fn total_cents(&self) -> u32 {
        self.iter().map(|(coin, n)| coin.cents() * n).sum()
    }

    /// The tally as a `denomination in cents -> count` map.
    ///
    /// All three denominations are present, including those with a zero count.
    pub fn to_map(&self) -> BTreeMap<u32, u32> {
        self.iter().map(|(coin, n)| (coin.cents(), n)).collect()
    }
}
