//! Roster loading from tabular files.

mod csv_roster;

pub use csv_roster::{CsvRosterSource, parse_roster};
