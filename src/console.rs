//! Scripted console for the pay station.
//!
//! Replays a CSV stream of station events against a single [`PayStation`] and
//! records what the station showed after each one.

use crate::coin::Coin;
use crate::error::Result;
use crate::event::{EventRecord, StationEvent};
use crate::station::PayStation;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::{debug, warn};
use serde::Serialize;
use std::io::{Read, Write};

/// Observable result of one applied event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// CSV row the event came from (header is row 1).
    pub step: usize,

    /// Event action name.
    pub action: &'static str,

    /// Display reading after the event.
    pub display: u32,

    /// Receipt minutes, only for `buy`.
    pub receipt: Option<u32>,

    /// Cents collected, only for `empty`.
    pub collected: Option<u32>,

    /// Tally after the event.
    pub nickels: u32,
    pub dimes: u32,
    pub quarters: u32,
}

/// Drives a pay station from a script of events.
///
/// Events are applied in the order they are read. Rows that cannot be parsed,
/// and coins the station rejects, are logged at warn level and skipped.
pub struct StationConsole {
    station: PayStation,
    outcomes: Vec<Outcome>,
}

impl StationConsole {
    /// Creates a console around a fresh station.
    pub fn new() -> Self {
        StationConsole {
            station: PayStation::new(),
            outcomes: Vec::new(),
        }
    }

    /// Processes events from a CSV reader in streaming fashion.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<EventRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => match record.parse() {
                    Some(event) => {
                        if let Err(e) = self.apply(event, row_num) {
                            warn!("Row {}: {}", row_num, e);
                        }
                    }
                    None => warn!("Row {}: Failed to parse event record", row_num),
                },
                Err(e) => warn!("Row {}: CSV parse error: {}", row_num, e),
            }
        }

        Ok(())
    }

    /// Applies one event to the station and records the outcome.
    pub fn apply(&mut self, event: StationEvent, step: usize) -> Result<()> {
        let mut receipt = None;
        let mut collected = None;

        match event {
            StationEvent::Insert(value) => self.station.add_payment(value)?,
            StationEvent::Display => {}
            StationEvent::Buy => receipt = Some(self.station.buy().value()),
            StationEvent::Cancel => {
                self.station.cancel();
            }
            StationEvent::Empty => collected = Some(self.station.empty()),
        }

        let coins = self.station.coins();
        let outcome = Outcome {
            step,
            action: event.name(),
            display: self.station.read_display(),
            receipt,
            collected,
            nickels: coins.count(Coin::Nickel),
            dimes: coins.count(Coin::Dime),
            quarters: coins.count(Coin::Quarter),
        };
        debug!("Row {}: {:?}", step, outcome);
        self.outcomes.push(outcome);

        Ok(())
    }

    /// Outcomes recorded so far, in processing order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// The station being driven.
    pub fn station(&self) -> &PayStation {
        &self.station
    }

    /// Writes the outcome log to CSV.
    ///
    /// The header is always written, even when no event was applied.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

        csv_writer.write_record([
            "step",
            "action",
            "display",
            "receipt",
            "collected",
            "nickels",
            "dimes",
            "quarters",
        ])?;

        for outcome in &self.outcomes {
            csv_writer.serialize(outcome)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl Default for StationConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn process_csv_str(csv: &str) -> StationConsole {
        let mut console = StationConsole::new();
        console.process_csv(Cursor::new(csv)).unwrap();
        console
    }

    fn output_of(console: &StationConsole) -> String {
        let mut output = Vec::new();
        console.write_output(&mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_inserts_and_buy() {
        let csv = r#"action,coin
insert,5
insert,10
insert,25
buy,"#;

        let console = process_csv_str(csv);
        let outcomes = console.outcomes();
        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes[2].display, 16);

        let buy = &outcomes[3];
        assert_eq!(buy.step, 5);
        assert_eq!(buy.action, "buy");
        assert_eq!(buy.receipt, Some(16));
        assert_eq!(buy.display, 0);
        assert_eq!((buy.nickels, buy.dimes, buy.quarters), (1, 1, 1));
    }

    #[test]
    fn test_illegal_coin_is_skipped() {
        let csv = r#"action,coin
insert,17
insert,25"#;

        let console = process_csv_str(csv);
        assert_eq!(console.outcomes().len(), 1);
        assert_eq!(console.outcomes()[0].step, 3);
        assert_eq!(console.station().read_display(), 10);
    }

    #[test]
    fn test_unparsable_rows_are_skipped() {
        let csv = r#"action,coin
refund,5
insert,
insert,abc
insert,10"#;

        let console = process_csv_str(csv);
        assert_eq!(console.outcomes().len(), 1);
        assert_eq!(console.station().inserted_so_far(), 10);
    }

    #[test]
    fn test_cancel_then_empty() {
        let csv = r#"action,coin
insert,5
cancel,
empty,"#;

        let console = process_csv_str(csv);
        let outcomes = console.outcomes();

        let cancel = &outcomes[1];
        assert_eq!(cancel.display, 2);
        assert_eq!((cancel.nickels, cancel.dimes, cancel.quarters), (0, 0, 0));

        let empty = &outcomes[2];
        assert_eq!(empty.collected, Some(5));
        assert_eq!(empty.display, 0);
    }

    #[test]
    fn test_whitespace_handling() {
        let csv = r#"action, coin
insert, 25
 display, "#;

        let console = process_csv_str(csv);
        assert_eq!(console.outcomes()[1].display, 10);
    }

    #[test]
    fn test_output_format() {
        let csv = r#"action,coin
insert,25
buy,
empty,"#;

        let output = output_of(&process_csv_str(csv));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "step,action,display,receipt,collected,nickels,dimes,quarters",
                "2,insert,10,,,0,0,1",
                "3,buy,0,10,,0,0,1",
                "4,empty,0,,0,0,0,1",
            ]
        );
    }

    #[test]
    fn test_output_header_without_events() {
        let output = output_of(&StationConsole::new());
        assert_eq!(
            output.trim_end(),
            "step,action,display,receipt,collected,nickels,dimes,quarters"
        );
    }
}
