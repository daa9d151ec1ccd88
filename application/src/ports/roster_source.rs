//! Roster source port
//!
//! Defines how the roster is obtained at startup. The production adapter
//! reads a CSV file; tests and other transports can hand over a roster
//! directly with [`StaticRosterSource`].

use absence_domain::Roster;
use thiserror::Error;

/// Errors that can occur while loading the roster.
///
/// All of them are fatal at startup: a partial roster is never used.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not read roster {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed roster {origin}: {message}")]
    Malformed { origin: String, message: String },

    #[error("Roster {origin} is empty (a header row is required)")]
    Empty { origin: String },

    #[error("Roster {origin}, line {line}: expected at least 4 fields, found {found}")]
    TooFewFields {
        origin: String,
        line: u64,
        found: usize,
    },
}

/// Source of the children roster
pub trait RosterSource: Send + Sync {
    /// Load every roster row.
    fn load(&self) -> Result<Roster, LoadError>;

    /// Human-readable origin, for logs and error messages
    fn describe(&self) -> String;
}

/// In-memory roster source
pub struct StaticRosterSource {
    roster: Roster,
}

impl StaticRosterSource {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }
}

impl RosterSource for StaticRosterSource {
    fn load(&self) -> Result<Roster, LoadError> {
        Ok(self.roster.clone())
    }

    fn describe(&self) -> String {
        "in-memory roster".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use absence_domain::Child;

    #[test]
    fn test_static_source_returns_its_roster() {
        let roster = Roster::new(vec![Child::new("1", "Lee", "Min", "01.02.19")]);
        let source = StaticRosterSource::new(roster.clone());
        assert_eq!(source.load().unwrap(), roster);
    }

    #[test]
    fn test_too_few_fields_display() {
        let error = LoadError::TooFewFields {
            origin: "children.csv".to_string(),
            line: 3,
            found: 2,
        };
        assert_eq!(
            error.to_string(),
            "Roster children.csv, line 3: expected at least 4 fields, found 2"
        );
    }
}
