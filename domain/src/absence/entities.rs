//! Absence report entities

use crate::roster::entities::Child;
use serde::{Deserialize, Serialize};

/// Header row of every daily absence file
pub const LOG_HEADER: [&str; 4] = ["Group", "Last name", "First name", "Birth date"];

/// Fields of a report, in the order the conversation asks for them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Group,
    LastName,
    FirstName,
    BirthDate,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Group => "group",
            Field::LastName => "last_name",
            Field::FirstName => "first_name",
            Field::BirthDate => "birth_date",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The report being filled in by one conversation
///
/// Fields are set in [`Field`] order. A field is only kept once the
/// fields before it have matched the roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateRecord {
    pub group: Option<String>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub birth_date: Option<String>,
}

impl CandidateRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Forget everything entered so far.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Group => self.group.as_deref(),
            Field::LastName => self.last_name.as_deref(),
            Field::FirstName => self.first_name.as_deref(),
            Field::BirthDate => self.birth_date.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            Field::Group => self.group = value,
            Field::LastName => self.last_name = value,
            Field::FirstName => self.first_name = value,
            Field::BirthDate => self.birth_date = value,
        }
    }

    /// The candidate as a roster child, once every field is set.
    pub fn to_child(&self) -> Option<Child> {
        Some(Child::new(
            self.group.clone()?,
            self.last_name.clone()?,
            self.first_name.clone()?,
            self.birth_date.clone()?,
        ))
    }

    pub fn to_entry(&self) -> Option<AbsenceLogEntry> {
        self.to_child().map(AbsenceLogEntry::from)
    }
}

/// One row of a daily absence file (Value Object)
///
/// The log date is implicit: it is the day the entry is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceLogEntry {
    pub group: String,
    pub last_name: String,
    pub first_name: String,
    pub birth_date: String,
}

impl AbsenceLogEntry {
    /// Row values in header order
    pub fn as_row(&self) -> [&str; 4] {
        [
            &self.group,
            &self.last_name,
            &self.first_name,
            &self.birth_date,
        ]
    }
}

impl From<Child> for AbsenceLogEntry {
    fn from(child: Child) -> Self {
        Self {
            group: child.group,
            last_name: child.last_name,
            first_name: child.first_name,
            birth_date: child.birth_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_starts_empty() {
        let candidate = CandidateRecord::new();
        assert!(candidate.is_empty());
        assert!(candidate.to_entry().is_none());
    }

    #[test]
    fn test_candidate_set_and_reset() {
        let mut candidate = CandidateRecord::new();
        candidate.set(Field::Group, "1");
        candidate.set(Field::LastName, "Lee");
        assert_eq!(candidate.get(Field::LastName), Some("Lee"));
        assert!(candidate.to_entry().is_none());

        candidate.reset();
        assert!(candidate.is_empty());
    }

    #[test]
    fn test_complete_candidate_becomes_entry() {
        let mut candidate = CandidateRecord::new();
        candidate.set(Field::Group, "1");
        candidate.set(Field::LastName, "Lee");
        candidate.set(Field::FirstName, "Min");
        candidate.set(Field::BirthDate, "01.02.19");

        let entry = candidate.to_entry().unwrap();
        assert_eq!(entry.as_row(), ["1", "Lee", "Min", "01.02.19"]);
    }

    #[test]
    fn test_header_order_matches_row_order() {
        assert_eq!(LOG_HEADER, ["Group", "Last name", "First name", "Birth date"]);
    }
}
