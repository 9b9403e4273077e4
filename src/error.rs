//! Error types for the pay station.

use thiserror::Error;

/// Result type alias for pay station operations
pub type Result<T> = std::result::Result<T, StationError>;

/// Errors that can occur while operating the pay station.
#[derive(Error, Debug)]
pub enum StationError {
    /// Coin value is not one of the accepted denominations (5, 10, 25)
    #[error("Invalid coin: {value}")]
    IllegalCoin { value: u32 },

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: pay-station <events.csv>")]
    MissingArgument,
}
