//! Group choices offered by the conversation

use serde::{Deserialize, Serialize};

/// One entry of the group-choice menu (Value Object)
///
/// The caregiver taps the `label`; the report stores the `id`,
/// which is what the roster's group column contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupOption {
    pub label: String,
    pub id: String,
}

impl GroupOption {
    pub fn new(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
        }
    }
}

/// The closed set of groups a caregiver can pick from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupOptions {
    options: Vec<GroupOption>,
}

impl GroupOptions {
    pub fn new(options: Vec<GroupOption>) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &[GroupOption] {
        &self.options
    }

    pub fn labels(&self) -> Vec<String> {
        self.options.iter().map(|o| o.label.clone()).collect()
    }

    /// Resolve a tapped label to its group id. Exact match only.
    pub fn resolve(&self, label: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.label == label)
            .map(|o| o.id.as_str())
    }
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self::new(vec![
            GroupOption::new("Group 1", "1"),
            GroupOption::new("Group 2", "2"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_groups() {
        let groups = GroupOptions::default();
        assert_eq!(groups.labels(), vec!["Group 1", "Group 2"]);
        assert_eq!(groups.resolve("Group 1"), Some("1"));
        assert_eq!(groups.resolve("Group 2"), Some("2"));
    }

    #[test]
    fn test_resolve_is_exact() {
        let groups = GroupOptions::default();
        assert_eq!(groups.resolve("group 1"), None);
        assert_eq!(groups.resolve("Group 3"), None);
        assert_eq!(groups.resolve("1"), None);
    }
}
