//! The pay station state machine.
//!
//! Maintains the invariant: `time_bought == inserted_so_far / 5 * 2` at all times.

use crate::coin::{Coin, CoinTally};
use crate::error::Result;
use crate::receipt::Receipt;
use log::debug;

/// Cents buying one unit of parking time.
pub const CENTS_PER_UNIT: u32 = 5;

/// Minutes of parking in one unit.
pub const MINUTES_PER_UNIT: u32 = 2;

/// Converts an amount of cents to whole minutes of parking.
pub fn minutes_for(cents: u32) -> u32 {
    cents / CENTS_PER_UNIT * MINUTES_PER_UNIT
}

/// A parking pay station.
///
/// Keeps two independent accumulators:
///
/// - the cash inserted so far (and the parking time it buys), cleared by
///   [`buy`](Self::buy) and [`empty`](Self::empty)
/// - the coin tally, cleared only by [`cancel`](Self::cancel) and
///   [`init_map`](Self::init_map)
///
/// # Reset Quirks
///
/// `buy` does not clear the coin tally, and `cancel` does not clear the cash
/// accumulator or the display.
#[derive(Debug, Clone, Default)]
pub struct PayStation {
    /// Cents inserted since the last buy or empty.
    inserted_so_far: u32,

    /// Minutes currently shown on the display.
    time_bought: u32,

    /// Coins inserted since the last cancel.
    coins: CoinTally,
}

impl PayStation {
    /// Creates a station with nothing inserted and a zeroed tally.
    pub fn new() -> Self {
        PayStation {
            inserted_so_far: 0,
            time_bought: 0,
            coins: CoinTally::EMPTY,
        }
    }

    /// Inserts a coin given by its value in cents.
    ///
    /// Only 5, 10 and 25 are accepted. Any other value fails with
    /// [`StationError::IllegalCoin`](crate::StationError::IllegalCoin) and
    /// leaves the station untouched.
    pub fn add_payment(&mut self, coin_value: u32) -> Result<()> {
        let coin = Coin::try_from(coin_value)?;
        self.add_coin(coin);
        Ok(())
    }

    /// Inserts an already validated coin.
    pub fn add_coin(&mut self, coin: Coin) {
        self.coins.record(coin);
        self.inserted_so_far += coin.cents();
        self.time_bought = minutes_for(self.inserted_so_far);

        debug!(
            "Inserted {}, total {} cents, display {} min",
            coin, self.inserted_so_far, self.time_bought
        );
    }

    /// Minutes of parking bought with the current payment.
    pub fn read_display(&self) -> u32 {
        self.time_bought
    }

    /// Completes the purchase and starts a new payment cycle.
    ///
    /// The coin tally is left as it is.
    pub fn buy(&mut self) -> Receipt {
        let receipt = Receipt::new(self.time_bought);
        self.reset();
        debug!("Issued receipt for {}", receipt);
        receipt
    }

    /// Zeroes the coin tally and returns it.
    ///
    /// The inserted amount and the display are not affected.
    pub fn cancel(&mut self) -> CoinTally {
        self.coins.clear();
        debug!("Cancelled, coin tally cleared");
        self.coins
    }

    /// Collects the cash inserted so far and returns it in cents.
    ///
    /// Clears the inserted amount and the display; the coin tally is not
    /// touched.
    pub fn empty(&mut self) -> u32 {
        let total = self.inserted_so_far;
        self.reset();
        debug!("Emptied {} cents", total);
        total
    }

    /// Sets the count of every denomination to zero.
    ///
    /// A new station already starts with a zeroed tally, so this is only
    /// needed to discard counts on an existing station.
    pub fn init_map(&mut self) {
        self.coins.clear();
    }

    /// Current coin tally.
    pub fn coins(&self) -> &CoinTally {
        &self.coins
    }

    /// Cents inserted since the last buy or empty.
    pub fn inserted_so_far(&self) -> u32 {
        self.inserted_so_far
    }

    fn reset(&mut self) {
        self.inserted_so_far = 0;
        self.time_bought = 0;
    }

    /// Verifies the invariant: `time_bought == inserted_so_far / 5 * 2`.
    #[cfg(debug_assertions)]
    pub fn check_invariant(&self) -> bool {
        self.time_bought == minutes_for(self.inserted_so_far)
    }
}
