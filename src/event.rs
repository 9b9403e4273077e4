//! Event models for CSV scripts driving the station.

use serde::Deserialize;

/// Raw event record as read from CSV.
///
/// The coin column is only used by `insert` rows.
#[derive(Debug, Deserialize)]
pub struct EventRecord {
    /// Event type: insert, display, buy, cancel, empty
    pub action: String,

    /// Coin value in cents (present for insert, absent otherwise)
    pub coin: Option<String>,
}

impl EventRecord {
    /// Parses the raw CSV record into a typed event.
    ///
    /// Returns `None` for unknown actions and for inserts without an integer
    /// coin value. Whether the coin is legal is left to the station.
    pub fn parse(&self) -> Option<StationEvent> {
        let action = self.action.trim().to_lowercase();

        match action.as_str() {
            "insert" => self.parse_coin().map(StationEvent::Insert),
            "display" => Some(StationEvent::Display),
            "buy" => Some(StationEvent::Buy),
            "cancel" => Some(StationEvent::Cancel),
            "empty" => Some(StationEvent::Empty),
            _ => None,
        }
    }

    fn parse_coin(&self) -> Option<u32> {
        let coin = self.coin.as_ref()?.trim();
        if coin.is_empty() {
            return None;
        }
        coin.parse().ok()
    }
}

/// An operation to perform on the pay station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationEvent {
    /// Insert a coin of the given value in cents.
    Insert(u32),

    /// Read the display.
    Display,

    /// Buy parking time and take the receipt.
    Buy,

    /// Cancel and clear the coin tally.
    Cancel,

    /// Collect the cash.
    Empty,
}

impl StationEvent {
    /// Lowercase action name as used in scripts and output.
    pub fn name(&self) -> &'static str {
        match self {
            StationEvent::Insert(_) => "insert",
            StationEvent::Display => "display",
            StationEvent::Buy => "buy",
            StationEvent::Cancel => "cancel",
            StationEvent::Empty => "empty",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(action: &str, coin: Option<&str>) -> EventRecord {
        EventRecord {
            action: action.to_string(),
            coin: coin.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_insert() {
        assert_eq!(
            record("insert", Some("25")).parse(),
            Some(StationEvent::Insert(25))
        );
    }

    #[test]
    fn test_parse_keeps_illegal_coin_value() {
        assert_eq!(
            record("insert", Some("17")).parse(),
            Some(StationEvent::Insert(17))
        );
    }

    #[test]
    fn test_parse_actions_without_coin() {
        assert_eq!(record("display", None).parse(), Some(StationEvent::Display));
        assert_eq!(record("buy", Some("")).parse(), Some(StationEvent::Buy));
        assert_eq!(record("cancel", None).parse(), Some(StationEvent::Cancel));
        assert_eq!(record("empty", None).parse(), Some(StationEvent::Empty));
    }

    #[test]
    fn test_parse_handles_whitespace_and_case() {
        assert_eq!(
            record("  Insert ", Some(" 10 ")).parse(),
            Some(StationEvent::Insert(10))
        );
        assert_eq!(record("BUY", None).parse(), Some(StationEvent::Buy));
    }

    #[test]
    fn test_parse_rejects_insert_without_coin() {
        assert!(record("insert", None).parse().is_none());
        assert!(record("insert", Some("  ")).parse().is_none());
    }

    #[test]
    fn test_parse_rejects_non_integer_coin() {
        assert!(record("insert", Some("0.25")).parse().is_none());
        assert!(record("insert", Some("-5")).parse().is_none());
        assert!(record("insert", Some("quarter")).parse().is_none());
    }

    #[test]
    fn test_parse_rejects_unknown_action() {
        assert!(record("refund", Some("5")).parse().is_none());
    }

    #[test]
    fn test_event_names() {
        assert_eq!(StationEvent::Insert(5).name(), "insert");
        assert_eq!(StationEvent::Empty.name(), "empty");
    }
}
