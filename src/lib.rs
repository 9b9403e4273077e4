//! # Pay Station
//!
//! A parking pay station that accepts coins, converts payment into parking
//! time, issues receipts, and supports cancellation and cash collection.
//!
//! ## Design Principles
//!
//! - **Integer arithmetic**: amounts are whole cents, every 5 cents buys 2 minutes
//! - **Strict invariants**: `display == inserted / 5 * 2` always maintained
//! - **Fixed denominations**: the coin tally has exactly one counter per coin
//! - **Atomic rejection**: an illegal coin never changes station state
//!
//! ## Example
//!
//! ```
//! use pay_station::PayStation;
//!
//! let mut station = PayStation::new();
//! station.add_payment(10).unwrap();
//! station.add_payment(25).unwrap();
//! assert_eq!(station.read_display(), 14);
//!
//! let receipt = station.buy();
//! assert_eq!(receipt.value(), 14);
//! assert_eq!(station.read_display(), 0);
//! ```

pub mod coin;
pub mod console;
pub mod error;
pub mod event;
pub mod receipt;
pub mod station;

pub use coin::{Coin, CoinTally};
pub use console::{Outcome, StationConsole};
pub use error::{Result, StationError};
pub use event::{EventRecord, StationEvent};
pub use receipt::Receipt;
pub use station::PayStation;
