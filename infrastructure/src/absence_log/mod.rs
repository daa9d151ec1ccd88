//! Absence log persistence: one CSV file per day.

mod csv_daily_log;

pub use csv_daily_log::{CsvAbsenceLog, FILE_PREFIX, FILE_SUFFIX};
