//! Parking receipts.

use serde::Serialize;
use std::fmt;

/// Proof of purchase for a block of parking time.
///
/// Receipts are created by [`PayStation::buy`](crate::PayStation::buy) and
/// never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Receipt {
    value: u32,
}

impl Receipt {
    /// Creates a receipt for the given number of minutes.
    pub fn new(minutes: u32) -> Self {
        Receipt { value: minutes }
    }

    /// Minutes of parking purchased.
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} minutes", self.value)
    }
}
