//! CSV roster source
//!
//! Reads `group,last name,first name,birth date` rows. The first row is a
//! header and is skipped unread; every other row must have at least four
//! fields. Values are taken verbatim (no trimming, no format checks), so a
//! malformed value simply never matches a report.

use absence_application::ports::roster_source::{LoadError, RosterSource};
use absence_domain::{Child, Roster};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Roster source backed by a CSV file
pub struct CsvRosterSource {
    path: PathBuf,
}

impl CsvRosterSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterSource for CsvRosterSource {
    fn load(&self) -> Result<Roster, LoadError> {
        let origin = self.describe();
        let file = File::open(&self.path).map_err(|source| LoadError::Io {
            origin: origin.clone(),
            source,
        })?;
        parse_roster(file, &origin)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse roster rows from any reader.
///
/// The `csv` reader drops empty lines on its own, so blank rows are found
/// by comparing each record's starting line with the line after the
/// previous record. Blank lines at the very end of the input are
/// tolerated.
pub fn parse_roster<R: Read>(input: R, origin: &str) -> Result<Roster, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut next_line = 1;
    let mut header_seen = false;
    let mut children = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| load_error(e, origin))?;
        let line = record.position().map_or(next_line, |p| p.line());
        if line > next_line {
            return Err(LoadError::TooFewFields {
                origin: origin.to_string(),
                line: next_line,
                found: 0,
            });
        }
        // Quoted fields may span lines
        let embedded: u64 = record
            .iter()
            .map(|field| field.matches('\n').count() as u64)
            .sum();
        next_line = line + embedded + 1;

        if !header_seen {
            header_seen = true;
            continue;
        }
        if record.len() < 4 {
            return Err(LoadError::TooFewFields {
                origin: origin.to_string(),
                line,
                found: record.len(),
            });
        }
        children.push(Child::new(&record[0], &record[1], &record[2], &record[3]));
    }

    if !header_seen {
        return Err(LoadError::Empty {
            origin: origin.to_string(),
        });
    }
    Ok(Roster::new(children))
}

fn load_error(error: csv::Error, origin: &str) -> LoadError {
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(source) => LoadError::Io {
            origin: origin.to_string(),
            source,
        },
        _ => LoadError::Malformed {
            origin: origin.to_string(),
            message,
        },
    }
}
