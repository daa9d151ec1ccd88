//! Roster domain entities

use serde::{Deserialize, Serialize};

/// A child known to the kindergarten (Entity)
///
/// Identity is the full `(group, last_name, first_name, birth_date)` tuple;
/// no single field is unique on its own. The birth date keeps the external
/// `dd.mm.yy` form and is compared as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Child {
    pub group: String,
    pub last_name: String,
    pub first_name: String,
    pub birth_date: String,
}

impl Child {
    pub fn new(
        group: impl Into<String>,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            last_name: last_name.into(),
            first_name: first_name.into(),
            birth_date: birth_date.into(),
        }
    }
}

/// The set of known children, loaded once at startup
///
/// Read-only after construction so it can be shared across sessions
/// behind an `Arc` without locking. Duplicate names across groups are
/// allowed; the conversation narrows them down field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    children: Vec<Child>,
}

impl Roster {
    pub fn new(children: Vec<Child>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Distinct group identifiers in roster order
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for child in &self.children {
            if !groups.contains(&child.group.as_str()) {
                groups.push(&child.group);
            }
        }
        groups
    }
}

impl FromIterator<Child> for Roster {
    fn from_iter<I: IntoIterator<Item = Child>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_keeps_order_and_duplicates() {
        let roster: Roster = vec![
            Child::new("1", "Lee", "Min", "01.02.19"),
            Child::new("2", "Lee", "Min", "01.02.19"),
            Child::new("1", "Lee", "Min", "01.02.19"),
        ]
        .into_iter()
        .collect();

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.children()[1].group, "2");
    }

    #[test]
    fn test_roster_groups_are_distinct() {
        let roster = Roster::new(vec![
            Child::new("2", "Park", "Ji", "03.04.20"),
            Child::new("1", "Lee", "Min", "01.02.19"),
            Child::new("2", "Kim", "Ha", "05.06.19"),
        ]);
        assert_eq!(roster.groups(), vec!["2", "1"]);
    }

    #[test]
    fn test_empty_roster() {
        let roster = Roster::default();
        assert!(roster.is_empty());
        assert!(roster.groups().is_empty());
    }
}
