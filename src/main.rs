//! Pay Station CLI
//!
//! Replays a CSV script of station events and outputs what the station
//! showed after each event.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- events.csv > outcomes.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use pay_station::{Result, StationConsole, StationError};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let input_path = env::args().nth(1).ok_or(StationError::MissingArgument)?;

    let file = File::open(&input_path)?;
    let reader = BufReader::new(file);

    let mut console = StationConsole::new();
    console.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    console.write_output(handle)?;

    Ok(())
}
